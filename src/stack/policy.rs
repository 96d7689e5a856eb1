use crate::error::{Result, StackError};

/// Decides how many items a stack may hold and what popping an empty
/// stack means.
pub trait CapacityPolicy {
  /// Checks that one more item may be pushed onto a stack of `size` items.
  fn check_push(&self, size: usize) -> Result<()>;

  /// Called when popping an empty stack. `Ok` means the pop yields nothing.
  fn check_empty_pop(&self) -> Result<()>;

  /// Returns the capacity ceiling, if there is one.
  fn get_max_size(&self) -> Option<usize>;
}

/// No capacity ceiling. Popping an empty stack yields nothing.
#[derive(Debug)]
#[derive(Copy)]
#[derive(Clone)]
#[derive(Default)]
#[derive(PartialEq)]
#[derive(Eq)]
pub struct Unbounded;

impl CapacityPolicy for Unbounded {
  fn check_push(&self, _size: usize) -> Result<()> {
    Ok(())
  }

  fn check_empty_pop(&self) -> Result<()> {
    Ok(())
  }

  fn get_max_size(&self) -> Option<usize> {
    None
  }
}

/// A fixed, positive capacity ceiling. Popping an empty stack is an error.
#[derive(Debug)]
#[derive(Copy)]
#[derive(Clone)]
#[derive(PartialEq)]
#[derive(Eq)]
pub struct Bounded {
  max_size: usize,
}

impl Bounded {
  pub fn new(max_size: usize) -> Result<Self> {
    if max_size == 0 {
      return Err(StackError::ZeroCapacity);
    }

    Ok(Self {
      max_size: max_size,
    })
  }

  pub fn max_size(&self) -> usize {
    self.max_size
  }
}

impl CapacityPolicy for Bounded {
  fn check_push(&self, size: usize) -> Result<()> {
    if size >= self.max_size {
      Err(StackError::CapacityExceeded { max_size: self.max_size })
    } else {
      Ok(())
    }
  }

  fn check_empty_pop(&self) -> Result<()> {
    Err(StackError::Depleted)
  }

  fn get_max_size(&self) -> Option<usize> {
    Some(self.max_size)
  }
}


#[cfg(test)]
mod policy_tests {
  use super::*;

  #[test]
  fn unbounded_admits_everything() {
    let p = Unbounded;

    assert_eq!(p.check_push(0), Ok(()));
    assert_eq!(p.check_push(usize::max_value()), Ok(()));
    assert_eq!(p.check_empty_pop(), Ok(()));
    assert_eq!(p.get_max_size(), None);
  }

  #[test]
  fn bounded_ceiling() {
    let p = Bounded::new(2).unwrap();

    assert_eq!(p.check_push(0), Ok(()));
    assert_eq!(p.check_push(1), Ok(()));
    assert_eq!(
      p.check_push(2),
      Err(StackError::CapacityExceeded { max_size: 2 }));
    assert_eq!(p.check_empty_pop(), Err(StackError::Depleted));
    assert_eq!(p.get_max_size(), Some(2));
  }

  #[test]
  fn bounded_rejects_zero() {
    assert_eq!(Bounded::new(0), Err(StackError::ZeroCapacity));
  }
}
