//! Recorded stack histories
//!
//! This module provides facilities to record the operations performed on a
//! stack and to check them afterwards, used for testing the correctness of
//! a `Stack<T>` implementation against a reference model.
//!
//! A `Recorder` wraps a stack and logs every operation as an `Action`. A
//! `History` replays such a log in operation order against a plain vector
//! governed by the same `CapacityPolicy`, and reports the first action
//! whose recorded result differs from what the model predicts.

mod action;
mod recorder;

pub use self::action::{Action, ActionID, StackOp};
pub use self::recorder::Recorder;

use std::fmt::Debug;

use thiserror::Error;

use crate::error::Result;
use crate::kind::{ElementKind, Kinded};
use crate::stack::CapacityPolicy;

/// The first action of a log that the model does not agree with.
#[derive(Debug)]
#[derive(Clone)]
#[derive(PartialEq)]
#[derive(Eq)]
#[derive(Error)]
#[error("action {id} is inconsistent: expected {expected}, recorded {recorded}")]
pub struct Inconsistency {
  pub id: ActionID,
  pub expected: String,
  pub recorded: String,
}

/// A sequential model of a stack, built up by replaying actions.
#[derive(Clone)]
pub struct History<T, P>
where T: Clone + Debug {
  current: Vec<T>,
  kind: Option<ElementKind>,
  policy: P,
  path: Vec<Action<T>>,
}

impl<T, P> History<T, P>
where T: Kinded + Clone + PartialEq + Debug, P: CapacityPolicy {
  /// Creates a new, empty history for stacks governed by `policy`.
  pub fn new(policy: P) -> Self {
    Self {
      current: Vec::new(),
      kind: None,
      policy: policy,
      path: Vec::new(),
    }
  }

  /// Replays the given log in operation order.
  pub fn check(&mut self, mut log: Vec<Action<T>>) -> ::std::result::Result<(), Inconsistency> {
    log.sort_by_key(|a| a.get_id());

    for a in log {
      self.push(a)?;
    }

    Ok(())
  }

  /// Appends the given action to the history if the model agrees with its
  /// recorded result.
  pub fn push(&mut self, a: Action<T>) -> ::std::result::Result<(), Inconsistency> {
    let expected = self.expect(a.get_op());

    if expected != *a.get_op() {
      return Err(Inconsistency {
        id: a.get_id(),
        expected: format!("{:?}", expected),
        recorded: format!("{:?}", a.get_op()),
      });
    }

    match *a.get_op() {
      StackOp::Push(ref v, Ok(())) => {
        if self.kind.is_none() {
          self.kind = Some(v.kind());
        }
        self.current.push(v.clone());
      }
      StackOp::Pop(Ok(Some(_))) => {
        self.current.pop();
      }
      _ => {}
    }

    self.path.push(a);
    Ok(())
  }

  /// Determines if the given action can be appended to the history.
  pub fn is_consistent_with(&self, a: &Action<T>) -> bool {
    self.expect(a.get_op()) == *a.get_op()
  }

  /// Returns the number of actions in the history.
  pub fn count(&self) -> usize {
    self.path.len()
  }

  /// Returns the items the model currently holds, bottom first.
  pub fn get_items(&self) -> &[T] {
    &self.current
  }

  pub fn get_history(&self) -> Vec<Action<T>> {
    self.path.clone()
  }

  /// Computes the op the model would have recorded in place of `op`.
  fn expect(&self, op: &StackOp<T>) -> StackOp<T> {
    match *op {
      StackOp::Push(ref v, _) => {
        StackOp::Push(v.clone(), self.expect_push(v))
      }
      StackOp::Pop(_) => {
        let r = match self.current.last() {
          Some(top) => Ok(Some(top.clone())),
          None => self.policy.check_empty_pop().map(|_| None),
        };
        StackOp::Pop(r)
      }
      StackOp::Peek(_) => StackOp::Peek(self.current.last().cloned()),
    }
  }

  fn expect_push(&self, v: &T) -> Result<()> {
    self.policy.check_push(self.current.len())?;

    match self.kind {
      Some(ref kind) => kind.admit(v),
      None => v.kind().admit(v),
    }
  }
}
