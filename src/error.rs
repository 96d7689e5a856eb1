use thiserror::Error;

/// Errors raised by stack operations.
///
/// A failed operation never mutates the stack it was called on.
#[derive(Debug)]
#[derive(Clone)]
#[derive(PartialEq)]
#[derive(Eq)]
#[derive(Error)]
pub enum StackError {
  /// The item's kind differs from the kind bound by the first push.
  #[error("Item is not an instance of \"{expected}\"")]
  TypeMismatch { expected: String },

  /// A bounded stack is already holding `max_size` items.
  #[error("Stack has reached max size")]
  CapacityExceeded { max_size: usize },

  /// Pop on an empty bounded stack.
  #[error("Stack is empty")]
  Depleted,

  #[error("Stack capacity must be positive")]
  ZeroCapacity,
}

pub type Result<T> = ::std::result::Result<T, StackError>;
