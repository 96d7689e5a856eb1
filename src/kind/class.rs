use std::fmt;
use std::ptr;
use std::sync::Arc;

/// A named runtime class with at most one parent.
///
/// Classes are compared by identity: two classes created separately are
/// distinct even when they share a name.
pub struct Class {
  name: String,
  parent: Option<Arc<Class>>,
}

impl Class {
  /// Creates a class with no parent.
  pub fn root(name: &str) -> Arc<Self> {
    Arc::new(Self {
      name: name.to_string(),
      parent: None,
    })
  }

  /// Creates a class deriving from `parent`.
  pub fn extends(name: &str, parent: &Arc<Class>) -> Arc<Self> {
    Arc::new(Self {
      name: name.to_string(),
      parent: Some(parent.clone()),
    })
  }

  pub fn get_name(&self) -> &str {
    &self.name
  }

  pub fn get_parent(&self) -> Option<&Arc<Class>> {
    self.parent.as_ref()
  }

  /// Tests if `self` is `other` or derives from it, directly or not.
  pub fn is_subclass_of(&self, other: &Class) -> bool {
    let mut current = Some(self);

    while let Some(class) = current {
      if ptr::eq(class, other) {
        return true;
      }
      current = class.parent.as_deref();
    }

    false
  }
}

impl fmt::Debug for Class {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.parent {
      None => write!(f, "{}", self.name),
      Some(ref p) => write!(f, "{} extends {:?}", self.name, p),
    }
  }
}


#[cfg(test)]
mod class_tests {
  use super::*;

  #[test]
  fn subclass_relation() {
    let animal = Class::root("Animal");
    let dog = Class::extends("Dog", &animal);
    let puppy = Class::extends("Puppy", &dog);
    let rock = Class::root("Rock");

    assert!(animal.is_subclass_of(&animal));
    assert!(dog.is_subclass_of(&animal));
    assert!(puppy.is_subclass_of(&animal));
    assert!(!animal.is_subclass_of(&dog));
    assert!(!rock.is_subclass_of(&animal));
    assert!(!dog.is_subclass_of(&rock));
  }

  #[test]
  fn identity_not_name() {
    let a = Class::root("class@anonymous");
    let b = Class::root("class@anonymous");

    assert!(!a.is_subclass_of(&b));
    assert_eq!(a.get_name(), b.get_name());
  }

  #[test]
  fn debug_shows_chain() {
    let animal = Class::root("Animal");
    let dog = Class::extends("Dog", &animal);

    assert_eq!(format!("{:?}", dog), "Dog extends Animal");
    assert!(dog.get_parent().is_some());
    assert!(animal.get_parent().is_none());
  }
}
