use std::fmt::Debug;

use crate::error::Result;

/// Describes the ID of an `Action` as its operation number.
pub type ActionID = usize;

/// An operation performed on a `Stack<T>`, together with what it returned.
#[derive(Debug)]
#[derive(Clone)]
#[derive(PartialEq)]
pub enum StackOp<T>
where T: Clone + Debug {
  Push(T, Result<()>),
  Pop(Result<Option<T>>),
  Peek(Option<T>),
}

/// A recorded `StackOp`.
#[derive(Debug)]
#[derive(Clone)]
pub struct Action<T>
where T: Clone + Debug {
  id: ActionID,
  op: StackOp<T>,
}

impl<T> Action<T>
where T: Clone + Debug {
  pub fn new(id: ActionID, op: StackOp<T>) -> Self {
    Self {
      id: id,
      op: op,
    }
  }

  pub fn get_op(&self) -> &StackOp<T> {
    &self.op
  }

  pub fn get_id(&self) -> ActionID {
    self.id
  }
}

impl<T> PartialEq for Action<T>
where T: Clone + Debug {
  fn eq(&self, other: &Self) -> bool {
    self.get_id() == other.get_id()
  }
}
