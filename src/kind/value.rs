use std::collections::BTreeMap;
use std::sync::Arc;

use super::*;

/// An instance of a `Class`, carrying named fields.
#[derive(Debug)]
#[derive(Clone)]
pub struct Object {
  class: Arc<Class>,
  fields: BTreeMap<String, Value>,
}

impl Object {
  pub fn new(class: &Arc<Class>) -> Self {
    Self {
      class: class.clone(),
      fields: BTreeMap::new(),
    }
  }

  /// Sets a field, returning the updated object.
  pub fn with_field<V>(mut self, name: &str, value: V) -> Self
  where V: Into<Value> {
    self.fields.insert(name.to_string(), value.into());
    self
  }

  pub fn get_class(&self) -> &Arc<Class> {
    &self.class
  }

  pub fn get_field(&self, name: &str) -> Option<&Value> {
    self.fields.get(name)
  }
}

impl PartialEq for Object {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.class, &other.class) && self.fields == other.fields
  }
}

impl Kinded for Object {
  fn kind(&self) -> ElementKind {
    ElementKind::Object(self.class.clone())
  }
}

/// A dynamically-typed item.
///
/// A stack of `Value`s binds its kind from whichever variant is pushed
/// first, so mismatches are caught at run time rather than by the compiler.
#[derive(Debug)]
#[derive(Clone)]
#[derive(PartialEq)]
pub enum Value {
  Str(String),
  Int(i64),
  Float(f64),
  Bool(bool),
  Object(Object),
}

impl Kinded for Value {
  fn kind(&self) -> ElementKind {
    match *self {
      Value::Str(_) => ElementKind::Primitive(STRING),
      Value::Int(_) => ElementKind::Primitive(INTEGER),
      Value::Float(_) => ElementKind::Primitive(FLOAT),
      Value::Bool(_) => ElementKind::Primitive(BOOLEAN),
      Value::Object(ref o) => o.kind(),
    }
  }
}

impl<'a> From<&'a str> for Value {
  fn from(s: &'a str) -> Self {
    Value::Str(s.to_string())
  }
}

impl From<String> for Value {
  fn from(s: String) -> Self {
    Value::Str(s)
  }
}

impl From<i64> for Value {
  fn from(i: i64) -> Self {
    Value::Int(i)
  }
}

impl From<i32> for Value {
  fn from(i: i32) -> Self {
    Value::Int(i as i64)
  }
}

impl From<f64> for Value {
  fn from(x: f64) -> Self {
    Value::Float(x)
  }
}

impl From<bool> for Value {
  fn from(b: bool) -> Self {
    Value::Bool(b)
  }
}

impl From<Object> for Value {
  fn from(o: Object) -> Self {
    Value::Object(o)
  }
}
