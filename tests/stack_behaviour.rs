extern crate homostack;

use homostack::history::{History, Recorder};
use homostack::stack::{Bounded, Unbounded};
use homostack::*;


///////////////////////////////////////////////////////////////////////////////
//// Shared behaviour
///////////////////////////////////////////////////////////////////////////////

fn empty_stacks() -> Vec<Box<dyn Stack<Value>>> {
  let unbounded: UnboundedStack<Value> = UnboundedStack::new();
  let bounded: BoundedStack<Value> = BoundedStack::with_max_size(5).unwrap();

  let mut stacks: Vec<Box<dyn Stack<Value>>> = Vec::new();
  stacks.push(Box::new(unbounded));
  stacks.push(Box::new(bounded));
  stacks
}

#[test]
fn has_initial_size_of_zero() {
  for stack in empty_stacks() {
    assert_eq!(stack.size(), 0);
    assert!(stack.is_empty());
  }
}

#[test]
fn rejects_item_not_matching_data_type_of_first_item() {
  for mut stack in empty_stacks() {
    stack.push(Value::from("1")).unwrap();

    let e = stack.push(Value::from(2i64)).unwrap_err();
    assert_eq!(e.to_string(), "Item is not an instance of \"string\"");
  }
}

#[test]
fn rejects_item_not_matching_class_of_first_item() {
  let std_class = Class::root("stdClass");
  let anonymous = Class::root("class@anonymous");

  for mut stack in empty_stacks() {
    stack.push(Object::new(&std_class).into()).unwrap();

    let e = stack.push(Object::new(&anonymous).into()).unwrap_err();
    assert_eq!(e.to_string(), "Item is not an instance of \"stdClass\"");
  }
}

#[test]
fn accepts_subclass_of_first_item_but_not_superclass() {
  let base = Class::root("Base");
  let derived = Class::extends("Derived", &base);

  for mut stack in empty_stacks() {
    stack.push(Object::new(&base).into()).unwrap();
    assert_eq!(stack.push(Object::new(&derived).into()), Ok(()));
  }

  for mut stack in empty_stacks() {
    stack.push(Object::new(&derived).into()).unwrap();
    assert_eq!(
      stack.push(Object::new(&base).into()),
      Err(StackError::TypeMismatch { expected: "Derived".to_string() }));
  }
}

#[test]
fn item_is_pushed_on_top_if_matches_data_type() {
  let point = Class::root("Point");
  let item = Value::from(Object::new(&point).with_field("x", 1i64));

  for mut stack in empty_stacks() {
    stack.push(item.clone()).unwrap();
    assert_eq!(stack.peek(), Some(&item));
  }
}

#[test]
fn pushing_and_popping_changes_size() {
  let class = Class::root("stdClass");

  for mut stack in empty_stacks() {
    stack.push(Object::new(&class).into()).unwrap();
    stack.push(Object::new(&class).into()).unwrap();
    assert_eq!(stack.size(), 2);

    stack.pop().unwrap();
    assert_eq!(stack.size(), 1);
  }
}

#[test]
fn popping_item_removes_last_item_pushed() {
  let class = Class::root("stdClass");
  let first = Value::from(Object::new(&class).with_field("n", 1i64));
  let second = Value::from(Object::new(&class).with_field("n", 2i64));

  for mut stack in empty_stacks() {
    stack.push(first.clone()).unwrap();
    stack.push(second.clone()).unwrap();

    assert_eq!(stack.pop(), Ok(Some(second.clone())));
    assert_eq!(stack.peek(), Some(&first));
  }
}

#[test]
fn peeking_empty_stack_returns_nothing() {
  for stack in empty_stacks() {
    assert_eq!(stack.peek(), None);
  }
}


///////////////////////////////////////////////////////////////////////////////
//// UnboundedStack
///////////////////////////////////////////////////////////////////////////////

#[test]
fn unbounded_items_passed_during_initialisation_are_pushed() {
  let mut stack = UnboundedStack::from_items(vec!['d', 'o', 'g']).unwrap();

  assert_eq!(stack.pop(), Ok(Some('g')));
  assert_eq!(stack.pop(), Ok(Some('o')));
  assert_eq!(stack.pop(), Ok(Some('d')));
}

#[test]
fn unbounded_pop_from_empty_returns_nothing() {
  let mut stack: UnboundedStack<String> = UnboundedStack::new();

  assert_eq!(stack.pop(), Ok(None));
}


///////////////////////////////////////////////////////////////////////////////
//// BoundedStack
///////////////////////////////////////////////////////////////////////////////

#[test]
fn bounded_max_size_is_set() {
  let stack: BoundedStack<i32> = BoundedStack::with_max_size(5).unwrap();

  assert_eq!(stack.get_max_size(), 5);
}

#[test]
fn bounded_rejects_push_to_full_stack() {
  let class = Class::root("class@anonymous");
  let mut stack = BoundedStack::with_max_size(1).unwrap();
  stack.push(Object::new(&class)).unwrap();

  let e = stack.push(Object::new(&class)).unwrap_err();
  assert_eq!(e, StackError::CapacityExceeded { max_size: 1 });
  assert_eq!(e.to_string(), "Stack has reached max size");
  assert_eq!(stack.size(), 1);
}

#[test]
fn bounded_pop_from_empty_is_depleted() {
  let mut stack: BoundedStack<Object> = BoundedStack::with_max_size(1).unwrap();

  let e = stack.pop().unwrap_err();
  assert_eq!(e, StackError::Depleted);
  assert_eq!(e.to_string(), "Stack is empty");
}

#[test]
fn bounded_items_passed_during_initialisation_are_pushed() {
  let mut stack = BoundedStack::from_items(5, vec!["d", "o", "g"]).unwrap();

  assert_eq!(stack.pop(), Ok(Some("g")));
  assert_eq!(stack.pop(), Ok(Some("o")));
  assert_eq!(stack.pop(), Ok(Some("d")));
}


///////////////////////////////////////////////////////////////////////////////
//// Recorded histories
///////////////////////////////////////////////////////////////////////////////

#[test]
fn recorded_unbounded_history_is_consistent() {
  let mut r = Recorder::new(UnboundedStack::new());

  r.push(Value::from("a")).unwrap();
  r.push(Value::from("b")).unwrap();
  assert!(r.push(Value::from(false)).is_err());
  r.peek();
  r.pop().unwrap();
  r.pop().unwrap();
  r.pop().unwrap();

  assert_eq!(r.get_log().len(), 7);
  assert_eq!(History::new(Unbounded).check(r.into_log()), Ok(()));
}

#[test]
fn recorded_bounded_history_is_consistent() {
  let policy = Bounded::new(2).unwrap();
  let mut r = Recorder::new(BoundedStack::with_max_size(2).unwrap());

  assert!(r.pop().is_err());
  r.push(1u64).unwrap();
  r.push(2u64).unwrap();
  assert!(r.push(3u64).is_err());
  assert_eq!(r.peek(), Some(2));

  assert_eq!(History::new(policy).check(r.into_log()), Ok(()));
}

#[test]
fn history_with_wrong_policy_is_inconsistent() {
  let mut r = Recorder::new(UnboundedStack::new());
  r.pop().unwrap();

  let e = History::<i32, _>::new(Bounded::new(1).unwrap())
    .check(r.into_log())
    .unwrap_err();
  assert_eq!(e.id, 0);
}
