use super::*;

/// A `Vec`-backed `Stack<T>` whose items all share the kind of the first
/// item ever pushed, with a `CapacityPolicy` deciding its ceiling.
///
/// The kind is bound by the first successful push and is kept for the life
/// of the stack, even after it has been emptied.
#[derive(Debug)]
#[derive(Clone)]
pub struct HomogeneousStack<T, P> {
  elems: Vec<T>,
  kind: Option<ElementKind>,
  policy: P,
}

/// A stack with no capacity ceiling.
pub type UnboundedStack<T> = HomogeneousStack<T, Unbounded>;

/// A stack holding at most a fixed number of items.
pub type BoundedStack<T> = HomogeneousStack<T, Bounded>;

impl<T, P> HomogeneousStack<T, P>
where T: Kinded, P: CapacityPolicy {
  /// Creates a new, empty stack governed by `policy`.
  pub fn with_policy(policy: P) -> Self {
    Self {
      elems: Vec::new(),
      kind: None,
      policy: policy,
    }
  }

  /// Creates a stack governed by `policy` and pushes `items` in order, so
  /// the first item ends up at the bottom.
  pub fn with_policy_from<I>(policy: P, items: I) -> Result<Self>
  where I: IntoIterator<Item = T> {
    let mut stack = Self::with_policy(policy);

    for item in items {
      stack.push(item)?;
    }

    Ok(stack)
  }

  pub fn get_policy(&self) -> &P {
    &self.policy
  }
}

impl<T> HomogeneousStack<T, Unbounded>
where T: Kinded {
  /// Creates a new, empty `UnboundedStack<T>`.
  pub fn new() -> Self {
    Self::with_policy(Unbounded)
  }

  /// Creates an `UnboundedStack<T>` holding `items`, the last one on top.
  pub fn from_items<I>(items: I) -> Result<Self>
  where I: IntoIterator<Item = T> {
    Self::with_policy_from(Unbounded, items)
  }
}

impl<T> Default for HomogeneousStack<T, Unbounded>
where T: Kinded {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> HomogeneousStack<T, Bounded>
where T: Kinded {
  /// Creates a new, empty `BoundedStack<T>` holding at most `max_size`
  /// items.
  pub fn with_max_size(max_size: usize) -> Result<Self> {
    Ok(Self::with_policy(Bounded::new(max_size)?))
  }

  /// Creates a `BoundedStack<T>` holding `items`, the last one on top.
  /// Fails if there are more than `max_size` of them.
  pub fn from_items<I>(max_size: usize, items: I) -> Result<Self>
  where I: IntoIterator<Item = T> {
    Self::with_policy_from(Bounded::new(max_size)?, items)
  }

  pub fn get_max_size(&self) -> usize {
    self.policy.max_size()
  }
}

impl<T, P> Stack<T> for HomogeneousStack<T, P>
where T: Kinded, P: CapacityPolicy {
  fn push(&mut self, elem: T) -> Result<()> {
    self.policy.check_push(self.elems.len())?;

    match self.kind {
      Some(ref kind) => kind.admit(&elem)?,
      None => {
        let kind = elem.kind();
        kind.admit(&elem)?;
        self.kind = Some(kind);
      }
    }

    self.elems.push(elem);
    Ok(())
  }

  fn pop(&mut self) -> Result<Option<T>> {
    match self.elems.pop() {
      Some(elem) => Ok(Some(elem)),
      None => {
        self.policy.check_empty_pop()?;
        Ok(None)
      }
    }
  }

  fn peek(&self) -> Option<&T> {
    self.elems.last()
  }

  fn is_empty(&self) -> bool {
    self.elems.is_empty()
  }

  fn size(&self) -> usize {
    self.elems.len()
  }

  fn element_kind(&self) -> Option<&ElementKind> {
    self.kind.as_ref()
  }
}
