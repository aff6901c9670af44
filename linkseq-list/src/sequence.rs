use std::fmt;

use crate::{
    error::{Error, Result},
    handle::{next_sequence_id, NodeHandle},
    iter::{Handles, Iter},
    slots::{Node, Slots},
};

/// A singly linked list with front and back access.
///
/// Besides the usual list operations the sequence supports swapping two
/// nodes by relinking them (see [`LinkedSequence::swap_nodes`]); the stored
/// values never move.
pub struct LinkedSequence<T> {
    pub(crate) id: usize,
    pub(crate) slots: Slots<T>,
    pub(crate) head: Option<usize>,
    pub(crate) tail: Option<usize>,
    pub(crate) len: usize,
}

impl<T> LinkedSequence<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        LinkedSequence {
            id: next_sequence_id(),
            slots: Slots::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        LinkedSequence {
            id: next_sequence_id(),
            slots: Slots::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The value at the front, without removing it.
    pub fn first(&self) -> Option<&T> {
        self.head
            .and_then(|index| self.slots.get(index))
            .map(|node| &node.value)
    }

    /// The value at the back, without removing it.
    pub fn last(&self) -> Option<&T> {
        self.tail
            .and_then(|index| self.slots.get(index))
            .map(|node| &node.value)
    }

    /// Add a value to the front. The new node becomes the tail too if the
    /// sequence was empty.
    pub fn add_first(&mut self, value: T) -> NodeHandle {
        let (index, generation) = self.slots.insert(Node {
            value,
            next: self.head,
        });
        self.head = Some(index);
        if self.len == 0 {
            self.tail = Some(index);
        }
        self.len += 1;
        NodeHandle::new(self.id, index, generation)
    }

    /// Add a value to the back.
    pub fn add_last(&mut self, value: T) -> NodeHandle {
        let (index, generation) = self.slots.insert(Node { value, next: None });
        match self.tail {
            Some(tail) => self.slots.set_next(tail, Some(index)),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
        NodeHandle::new(self.id, index, generation)
    }

    /// Remove the value at the front and return it.
    ///
    /// Handles to the removed node no longer resolve afterwards.
    pub fn remove_first(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.slots.remove(head)?;
        self.head = node.next;
        self.len -= 1;
        if self.len == 0 {
            self.tail = None;
        }
        Some(node.value)
    }

    /// Drop all values. Every handle issued so far becomes stale.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterate over the values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, self.head, self.len)
    }

    /// Iterate over handles to the nodes from head to tail.
    pub fn handles(&self) -> Handles<'_, T> {
        Handles::new(self.id, &self.slots, self.head, self.len)
    }

    pub fn head_handle(&self) -> Option<NodeHandle> {
        self.head.and_then(|index| self.handle_for(index))
    }

    pub fn tail_handle(&self) -> Option<NodeHandle> {
        self.tail.and_then(|index| self.handle_for(index))
    }

    /// The handle of the node following the given one, if any.
    pub fn next_handle(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let index = self.resolve(handle).ok()?;
        let next = self.slots.next(index)?;
        self.handle_for(next)
    }

    /// The handle of the node at a zero-based position. This walks the
    /// sequence from the head.
    pub fn handle_at(&self, position: usize) -> Option<NodeHandle> {
        self.handles().nth(position)
    }

    /// The handle of the first node holding a value equal to `value`.
    pub fn find(&self, value: &T) -> Option<NodeHandle>
    where
        T: PartialEq,
    {
        self.handles()
            .find(|handle| self.get(*handle).is_some_and(|v| v == value))
    }

    pub fn contains_handle(&self, handle: NodeHandle) -> bool {
        self.resolve(handle).is_ok()
    }

    /// The value stored in a node.
    pub fn get(&self, handle: NodeHandle) -> Option<&T> {
        let index = self.resolve(handle).ok()?;
        self.slots.get(index).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut T> {
        let index = self.resolve(handle).ok()?;
        self.slots.get_mut(index).map(|node| &mut node.value)
    }

    /// Turn a handle into a slot index, checking that it was issued by this
    /// sequence and that its node is still present.
    pub(crate) fn resolve(&self, handle: NodeHandle) -> Result<usize> {
        if handle.sequence != self.id {
            return Err(Error::ForeignHandle(handle));
        }
        if !self.slots.is_live(handle.index, handle.generation) {
            return Err(Error::StaleHandle(handle));
        }
        Ok(handle.index)
    }

    fn handle_for(&self, index: usize) -> Option<NodeHandle> {
        self.slots
            .generation(index)
            .map(|generation| NodeHandle::new(self.id, index, generation))
    }
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

// A fresh chain of nodes under a new identity: handles into the original
// never resolve in the copy.
impl<T: Clone> Clone for LinkedSequence<T> {
    fn clone(&self) -> Self {
        let mut copy = LinkedSequence::with_capacity(self.len);
        for value in self.iter() {
            copy.add_last(value.clone());
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T: fmt::Display> fmt::Display for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
impl<T> LinkedSequence<T> {
    /// Walk the chain and check head, tail and length agree.
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.len == 0, self.head.is_none());
        assert_eq!(self.len == 0, self.tail.is_none());
        let mut steps = 0;
        let mut cursor = self.head;
        let mut last = None;
        while let Some(index) = cursor {
            steps += 1;
            assert!(steps <= self.len, "chain is longer than len (cycle?)");
            last = Some(index);
            cursor = self.slots.next(index);
        }
        assert_eq!(steps, self.len);
        assert_eq!(last, self.tail);
        if let Some(tail) = self.tail {
            assert_eq!(self.slots.next(tail), None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: &[i32]) -> LinkedSequence<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_empty() {
        let mut s: LinkedSequence<i32> = LinkedSequence::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.first(), None);
        assert_eq!(s.last(), None);
        assert_eq!(s.remove_first(), None);
        assert_eq!(s.head_handle(), None);
        assert_eq!(s.to_string(), "()");
        s.assert_invariants();
    }

    #[test]
    fn test_add_first_then_remove_first() {
        let mut s = LinkedSequence::new();
        s.add_first(7);
        assert_eq!(s.first(), Some(&7));
        assert_eq!(s.last(), Some(&7));
        assert_eq!(s.remove_first(), Some(7));
        assert!(s.is_empty());
        assert_eq!(s.last(), None);
        s.assert_invariants();
    }

    #[test]
    fn test_add_first_keeps_tail() {
        let mut s = LinkedSequence::new();
        s.add_first(2);
        s.add_first(1);
        assert_eq!(s.first(), Some(&1));
        assert_eq!(s.last(), Some(&2));
        s.assert_invariants();
    }

    #[test]
    fn test_len_after_add_last_and_remove_first() {
        let mut s = LinkedSequence::new();
        for i in 0..5 {
            s.add_last(i);
        }
        assert_eq!(s.len(), 5);
        assert_eq!(s.remove_first(), Some(0));
        assert_eq!(s.len(), 4);
        assert_eq!(s.first(), Some(&1));
        assert_eq!(s.last(), Some(&4));
        s.assert_invariants();
    }

    #[test]
    fn test_removed_handle_is_stale() {
        let mut s = LinkedSequence::new();
        let a = s.add_last(1);
        s.add_last(2);
        s.remove_first();
        assert_eq!(s.get(a), None);
        assert_eq!(s.resolve(a), Err(Error::StaleHandle(a)));
        // the slot gets reused, the old handle still doesn't resolve
        let c = s.add_last(3);
        assert_eq!(c.index, a.index);
        assert_eq!(s.get(a), None);
        assert_eq!(s.get(c), Some(&3));
    }

    #[test]
    fn test_foreign_handle() {
        let mut a = LinkedSequence::new();
        let mut b = LinkedSequence::new();
        let handle = a.add_last(1);
        b.add_last(1);
        assert_eq!(b.get(handle), None);
        assert_eq!(b.resolve(handle), Err(Error::ForeignHandle(handle)));
    }

    #[test]
    fn test_navigation() {
        let s = sequence(&[10, 20, 30]);
        let head = s.head_handle().unwrap();
        let second = s.next_handle(head).unwrap();
        assert_eq!(s.get(second), Some(&20));
        assert_eq!(s.handle_at(1), Some(second));
        assert_eq!(s.handle_at(3), None);
        assert_eq!(s.find(&30), s.tail_handle());
        assert_eq!(s.find(&40), None);
        assert_eq!(s.next_handle(s.tail_handle().unwrap()), None);
    }

    #[test]
    fn test_get_mut() {
        let mut s = sequence(&[1, 2, 3]);
        let handle = s.handle_at(1).unwrap();
        *s.get_mut(handle).unwrap() = 20;
        assert_eq!(s.to_string(), "(1, 20, 3)");
    }

    #[test]
    fn test_clear() {
        let mut s = sequence(&[1, 2, 3]);
        let handle = s.head_handle().unwrap();
        s.clear();
        assert!(s.is_empty());
        assert!(!s.contains_handle(handle));
        s.assert_invariants();
        s.add_last(4);
        assert_eq!(s.to_string(), "(4)");
        s.assert_invariants();
    }

    #[test]
    fn test_equality() {
        assert_eq!(sequence(&[1, 2, 3]), sequence(&[1, 2, 3]));
        assert_ne!(sequence(&[1, 2, 3]), sequence(&[1, 2]));
        assert_ne!(sequence(&[1, 2, 3]), sequence(&[1, 3, 2]));
        assert_eq!(sequence(&[]), LinkedSequence::new());
    }

    #[test]
    fn test_clone_is_deep() {
        let original = sequence(&[1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(original, copy);
        assert_ne!(original.id, copy.id);

        let handle = copy.head_handle().unwrap();
        *copy.get_mut(handle).unwrap() = 100;
        copy.add_last(4);
        assert_eq!(original.to_string(), "(1, 2, 3)");
        assert_eq!(copy.to_string(), "(100, 2, 3, 4)");
    }

    #[test]
    fn test_original_handles_do_not_resolve_in_copy() {
        let original = sequence(&[1, 2]);
        let copy = original.clone();
        let handle = original.head_handle().unwrap();
        assert!(!copy.contains_handle(handle));
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", sequence(&[1, 2])), "[1, 2]");
    }
}
