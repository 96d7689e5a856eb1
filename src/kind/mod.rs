//! Element kinds
//!
//! A stack binds the kind of the first item pushed onto it and rejects any
//! later item that does not conform to that kind. Items fall in one of two
//! buckets: primitive-like items, identified by a category tag, and
//! object-like items, identified by their concrete `Class`.
//!
//! An object conforms to a bound class if its own class is that class or
//! one of its subclasses. A primitive conforms only to the same tag.

mod class;
mod value;

pub use self::class::Class;
pub use self::value::{Value, Object};

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::{Result, StackError};

pub const STRING: &str = "string";
pub const INTEGER: &str = "integer";
pub const FLOAT: &str = "float";
pub const BOOLEAN: &str = "boolean";

/// The kind bound to a stack by its first item.
#[derive(Clone)]
pub enum ElementKind {
  Primitive(&'static str),
  Object(Arc<Class>),
}

impl ElementKind {
  /// The name reported by a `TypeMismatch`.
  pub fn get_name(&self) -> &str {
    match *self {
      ElementKind::Primitive(tag) => tag,
      ElementKind::Object(ref class) => class.get_name(),
    }
  }

  /// Checks that `elem` may join a stack bound to this kind.
  pub fn admit<T>(&self, elem: &T) -> Result<()>
  where T: Kinded + ?Sized {
    if elem.conforms_to(self) {
      Ok(())
    } else {
      Err(StackError::TypeMismatch {
        expected: self.get_name().to_string(),
      })
    }
  }
}

impl PartialEq for ElementKind {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (ElementKind::Primitive(a), ElementKind::Primitive(b)) => a == b,
      (ElementKind::Object(a), ElementKind::Object(b)) => Arc::ptr_eq(a, b),
      _ => false,
    }
  }
}

impl fmt::Debug for ElementKind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      ElementKind::Primitive(tag) => write!(f, "Primitive({})", tag),
      ElementKind::Object(ref class) => write!(f, "Object({:?})", class),
    }
  }
}

/// Types whose values can be stored on a stack.
pub trait Kinded {
  /// Returns the kind of this value.
  fn kind(&self) -> ElementKind;

  /// Tests if this value may be pushed onto a stack bound to `bound`.
  fn conforms_to(&self, bound: &ElementKind) -> bool {
    match (self.kind(), bound) {
      (ElementKind::Primitive(tag), ElementKind::Primitive(bound_tag)) => {
        tag == *bound_tag
      }
      (ElementKind::Object(class), ElementKind::Object(bound_class)) => {
        class.is_subclass_of(bound_class)
      }
      _ => false,
    }
  }
}

macro_rules! primitive_kind {
  ($tag:expr; $($t:ty),*) => {
    $(
      impl Kinded for $t {
        fn kind(&self) -> ElementKind {
          ElementKind::Primitive($tag)
        }
      }
    )*
  };
}

primitive_kind!(STRING; str, String, char);
primitive_kind!(INTEGER; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
primitive_kind!(FLOAT; f32, f64);
primitive_kind!(BOOLEAN; bool);

macro_rules! delegated_kind {
  ($($p:ident),*) => {
    $(
      impl<T> Kinded for $p<T>
      where T: Kinded + ?Sized {
        fn kind(&self) -> ElementKind {
          (**self).kind()
        }

        fn conforms_to(&self, bound: &ElementKind) -> bool {
          (**self).conforms_to(bound)
        }
      }
    )*
  };
}

delegated_kind!(Box, Rc, Arc);

impl<'a, T> Kinded for &'a T
where T: Kinded + ?Sized {
  fn kind(&self) -> ElementKind {
    (**self).kind()
  }

  fn conforms_to(&self, bound: &ElementKind) -> bool {
    (**self).conforms_to(bound)
  }
}
