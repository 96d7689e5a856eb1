//! Homogeneous LIFO stacks.
//!
//! A stack binds the kind of the first item pushed onto it and accepts
//! only items of that kind afterwards. `UnboundedStack<T>` grows without
//! limit and treats popping an empty stack as an ordinary outcome, while
//! `BoundedStack<T>` holds at most a fixed number of items and treats it
//! as an error.

extern crate thiserror;

pub mod error;
pub mod kind;
pub mod stack;
pub mod history;

pub use error::{Result, StackError};
pub use kind::{Class, ElementKind, Kinded, Object, Value};
pub use stack::{BoundedStack, Stack, UnboundedStack};
