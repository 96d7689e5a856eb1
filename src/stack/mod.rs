//! Stack implementations
//!
//! This module provides a single sequential stack, `HomogeneousStack`,
//! parameterized by a `CapacityPolicy`. Two policies are provided, giving
//! the two stacks most callers want:
//!
//! - `UnboundedStack<T>` never fills up, and popping it when empty simply
//!   yields nothing.
//! - `BoundedStack<T>` holds at most `max_size` items, and popping it when
//!   empty is a `Depleted` error.
//!
//! Both stacks bind the kind of the first item pushed onto them and reject
//! items of any other kind (see the `kind` module).

mod policy;
mod homogeneous;

pub use self::policy::{CapacityPolicy, Unbounded, Bounded};
pub use self::homogeneous::{HomogeneousStack, UnboundedStack, BoundedStack};

use crate::error::Result;
use crate::kind::{ElementKind, Kinded};

/// The `Stack<T>` abstract data type.
pub trait Stack<T> {
  /// Pushes an element onto the stack.
  fn push(&mut self, elem: T) -> Result<()>;

  /// Pops the top element from the stack. What popping an empty stack
  /// returns depends on the stack.
  fn pop(&mut self) -> Result<Option<T>>;

  /// Returns the top element, if there is one.
  fn peek(&self) -> Option<&T>;

  /// Predicate that tests if the stack is empty.
  fn is_empty(&self) -> bool;

  /// Returns the number of elements in the stack.
  fn size(&self) -> usize;

  /// Returns the kind bound by the first element pushed, if any.
  fn element_kind(&self) -> Option<&ElementKind>;
}
