use std::fmt::Debug;

use crate::error::Result;
use crate::stack::Stack;
use super::*;

/// Wraps a `Stack<T>` and records every operation performed through it.
pub struct Recorder<S, T>
where T: Clone + Debug {
  stack: S,
  log: Vec<Action<T>>,
}

impl<S, T> Recorder<S, T>
where S: Stack<T>, T: Clone + Debug {
  pub fn new(stack: S) -> Self {
    Self {
      stack: stack,
      log: Vec::new(),
    }
  }

  pub fn push(&mut self, elem: T) -> Result<()> {
    let r = self.stack.push(elem.clone());
    self.record(StackOp::Push(elem, r.clone()));
    r
  }

  pub fn pop(&mut self) -> Result<Option<T>> {
    let r = self.stack.pop();
    self.record(StackOp::Pop(r.clone()));
    r
  }

  pub fn peek(&mut self) -> Option<T> {
    let r = self.stack.peek().cloned();
    self.record(StackOp::Peek(r.clone()));
    r
  }

  pub fn get_stack(&self) -> &S {
    &self.stack
  }

  pub fn get_log(&self) -> &[Action<T>] {
    &self.log
  }

  pub fn into_log(self) -> Vec<Action<T>> {
    self.log
  }

  fn record(&mut self, op: StackOp<T>) {
    let id = self.log.len();
    self.log.push(Action::new(id, op));
  }
}
