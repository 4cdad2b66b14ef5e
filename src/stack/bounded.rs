use super::traits::{DeepClone, Stack};
use crate::error::StackError;

/// Fixed-capacity stack backed by a boxed slice of slots
///
/// The capacity is set at construction and never grows. Slots above the
/// top are always `None`, so popped values are not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack able to hold `capacity` items
    pub fn new(capacity: usize) -> Self {
        let slots: Vec<Option<T>> = (0..capacity).map(|_| None).collect();
        Self {
            slots: slots.into_boxed_slice(),
            len: 0,
        }
    }

    /// Create a stack from a signed capacity, rejecting negative values
    pub fn try_new(capacity: i64) -> Result<Self, StackError> {
        let capacity =
            usize::try_from(capacity).map_err(|_| StackError::InvalidCapacity(capacity))?;
        Ok(Self::new(capacity))
    }

    /// Maximum number of items, fixed at construction
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true when a further [`BoundedStack::push`] would overflow
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Place `item` on top. Fails with [`StackError::Overflow`] when full,
    /// leaving the stack untouched.
    pub fn push(&mut self, item: T) -> Result<(), StackError> {
        if self.is_full() {
            log::debug!("push rejected, stack full at {}", self.capacity());
            return Err(StackError::Overflow {
                capacity: self.capacity(),
            });
        }
        self.slots[self.len] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Place `item` on top, dropping the oldest item if the stack is full
    ///
    /// Returns the evicted bottom item. A zero-capacity stack hands `item`
    /// straight back.
    pub fn push_evicting(&mut self, item: T) -> Option<T> {
        if self.slots.is_empty() {
            return Some(item);
        }
        if !self.is_full() {
            self.slots[self.len] = Some(item);
            self.len += 1;
            return None;
        }

        let oldest = self.slots[0].take();
        self.slots.rotate_left(1);
        let top = self.slots.len() - 1;
        self.slots[top] = Some(item);
        oldest
    }

    /// Remove and return the top item, clearing its slot
    pub fn pop(&mut self) -> Result<T, StackError> {
        let top = self.len.checked_sub(1).ok_or(StackError::Underflow)?;
        let item = self.slots[top].take().ok_or(StackError::Underflow)?;
        self.len = top;
        Ok(item)
    }

    /// Borrow the top item without removing it
    pub fn peek(&self) -> Result<&T, StackError> {
        self.len
            .checked_sub(1)
            .and_then(|top| self.slots[top].as_ref())
            .ok_or(StackError::Underflow)
    }

    /// Drop every item, keeping the capacity
    pub fn clear(&mut self) {
        self.slots[..self.len].iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    /// Iterate from the most recently pushed item down to the oldest
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[..self.len].iter().rev(),
        }
    }
}

impl<T: DeepClone> BoundedStack<T> {
    /// Copy the stack element by element through [`DeepClone`]
    ///
    /// Returns `None` if any element refuses to copy. Capacity, order and top
    /// position are preserved.
    pub fn try_clone(&self) -> Option<Self> {
        let mut slots = Vec::with_capacity(self.capacity());
        for (index, slot) in self.slots.iter().enumerate() {
            let copy = match slot {
                Some(item) => {
                    let Some(copy) = item.deep_clone() else {
                        log::warn!("element in slot {} cannot be copied, clone aborted", index);
                        return None;
                    };
                    Some(copy)
                }
                None => None,
            };
            slots.push(copy);
        }

        Some(Self {
            slots: slots.into_boxed_slice(),
            len: self.len,
        })
    }
}

impl<T: DeepClone> DeepClone for BoundedStack<T> {
    fn deep_clone(&self) -> Option<Self> {
        self.try_clone()
    }
}

impl<T> Stack<T> for BoundedStack<T> {
    fn push(&mut self, item: T) -> Result<(), StackError> {
        BoundedStack::push(self, item)
    }

    fn pop(&mut self) -> Result<T, StackError> {
        BoundedStack::pop(self)
    }

    fn peek(&self) -> Result<&T, StackError> {
        BoundedStack::peek(self)
    }

    fn len(&self) -> usize {
        BoundedStack::len(self)
    }
}

/// Borrowing iterator over a [`BoundedStack`], top to bottom
pub struct Iter<'a, T> {
    inner: std::iter::Rev<std::slice::Iter<'a, Option<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a BoundedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that pops items top to bottom
pub struct IntoIter<T> {
    stack: BoundedStack<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for BoundedStack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { stack: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Genre, Song};

    /// Copies only even numbers
    #[derive(Debug, Clone, PartialEq)]
    struct Picky(u32);

    impl DeepClone for Picky {
        fn deep_clone(&self) -> Option<Self> {
            (self.0 % 2 == 0).then(|| Picky(self.0))
        }
    }

    #[test]
    fn test_negative_capacity_rejected() {
        assert_eq!(
            BoundedStack::<u32>::try_new(-1).unwrap_err(),
            StackError::InvalidCapacity(-1)
        );
        assert_eq!(BoundedStack::<u32>::try_new(0).unwrap().capacity(), 0);
    }

    #[test]
    fn test_push_pop_reverse_order() {
        let mut stack = BoundedStack::new(3);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();
        assert_eq!(stack.len(), 3);

        assert_eq!(stack.pop().unwrap(), 3);
        assert_eq!(stack.pop().unwrap(), 2);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop().unwrap(), 1);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_overflow_leaves_stack_unchanged() {
        let mut stack = BoundedStack::new(2);
        stack.push("a").unwrap();
        stack.push("b").unwrap();

        assert_eq!(
            stack.push("c").unwrap_err(),
            StackError::Overflow { capacity: 2 }
        );
        assert_eq!(stack.len(), 2);
        assert_eq!(*stack.peek().unwrap(), "b");
    }

    #[test]
    fn test_zero_capacity_always_overflows() {
        let mut stack = BoundedStack::new(0);
        assert!(stack.is_full());
        assert!(stack.push(1u8).is_err());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_underflow() {
        let mut stack: BoundedStack<u32> = BoundedStack::new(4);
        assert_eq!(stack.pop().unwrap_err(), StackError::Underflow);
        assert_eq!(stack.peek().unwrap_err(), StackError::Underflow);

        stack.push(7).unwrap();
        stack.pop().unwrap();
        assert_eq!(stack.pop().unwrap_err(), StackError::Underflow);
    }

    #[test]
    fn test_pop_clears_slot() {
        let mut stack = BoundedStack::new(2);
        stack.push(String::from("x")).unwrap();
        stack.pop().unwrap();
        assert!(stack.slots.iter().all(Option::is_none));
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = BoundedStack::new(2);
        stack.push(10).unwrap();
        assert_eq!(*stack.peek().unwrap(), 10);
        assert_eq!(*stack.peek().unwrap(), 10);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_iter_top_to_bottom() {
        let mut stack = BoundedStack::new(5);
        for i in 1..=4 {
            stack.push(i).unwrap();
        }
        let items: Vec<_> = stack.iter().copied().collect();
        assert_eq!(items, vec![4, 3, 2, 1]);
        assert_eq!(stack.iter().len(), 4);

        let owned: Vec<_> = stack.into_iter().collect();
        assert_eq!(owned, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_push_evicting_drops_oldest() {
        let mut stack = BoundedStack::new(3);
        for i in 1..=3 {
            assert_eq!(stack.push_evicting(i), None);
        }
        assert_eq!(stack.push_evicting(4), Some(1));
        assert_eq!(stack.push_evicting(5), Some(2));

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![5, 4, 3]);
        assert_eq!(stack.pop().unwrap(), 5);
        assert_eq!(stack.push_evicting(6), None);
    }

    #[test]
    fn test_push_evicting_zero_capacity() {
        let mut stack = BoundedStack::new(0);
        assert_eq!(stack.push_evicting("a"), Some("a"));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut stack = BoundedStack::new(3);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), 3);
        stack.push(3).unwrap();
        assert_eq!(*stack.peek().unwrap(), 3);
    }

    #[test]
    fn test_try_clone_is_independent() {
        let mut stack = BoundedStack::new(4);
        stack.push(Song::new("Red", "X", Genre::Pop, 200)).unwrap();
        stack.push(Song::new("Blue", "Y", Genre::Rock, 90)).unwrap();

        let mut copy = stack.try_clone().expect("songs always copy");
        assert_eq!(copy, stack);
        assert_eq!(copy.capacity(), 4);

        copy.pop().unwrap();
        let mut top = copy.pop().unwrap();
        top.set_duration(1);

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.iter().last().unwrap().duration(), 200);
    }

    #[test]
    fn test_try_clone_fails_on_refusing_element() {
        let mut stack = BoundedStack::new(3);
        stack.push(Picky(2)).unwrap();
        stack.push(Picky(4)).unwrap();
        assert!(stack.try_clone().is_some());

        stack.push(Picky(5)).unwrap();
        assert!(stack.try_clone().is_none());
    }

    #[test]
    fn test_nested_stack_clone() {
        let mut inner = BoundedStack::new(1);
        inner.push(1u32).unwrap();
        let mut outer = BoundedStack::new(1);
        outer.push(inner).unwrap();

        let copy = outer.deep_clone().unwrap();
        assert_eq!(*copy.peek().unwrap().peek().unwrap(), 1);
    }

    #[test]
    fn test_stack_trait_object() {
        fn fill(stack: &mut dyn Stack<u32>, n: u32) -> usize {
            (0..n).take_while(|i| stack.push(*i).is_ok()).count()
        }

        let mut stack = BoundedStack::new(3);
        assert_eq!(fill(&mut stack, 10), 3);
        assert_eq!(Stack::len(&stack), 3);
        assert!(!Stack::is_empty(&stack));
    }
}
