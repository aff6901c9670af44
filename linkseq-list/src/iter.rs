use crate::{handle::NodeHandle, sequence::LinkedSequence, slots::Slots};

/// An iterator over the values of a sequence, head to tail.
pub struct Iter<'a, T> {
    slots: &'a Slots<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a Slots<T>, head: Option<usize>, len: usize) -> Self {
        Iter {
            slots,
            cursor: head,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.slots.get(self.cursor?)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// An iterator over handles to the nodes of a sequence, head to tail.
pub struct Handles<'a, T> {
    sequence: usize,
    slots: &'a Slots<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Handles<'a, T> {
    pub(crate) fn new(
        sequence: usize,
        slots: &'a Slots<T>,
        head: Option<usize>,
        len: usize,
    ) -> Self {
        Handles {
            sequence,
            slots,
            cursor: head,
            remaining: len,
        }
    }
}

impl<T> Iterator for Handles<'_, T> {
    type Item = NodeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let generation = self.slots.generation(index)?;
        self.cursor = self.slots.next(index);
        self.remaining -= 1;
        Some(NodeHandle::new(self.sequence, index, generation))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Handles<'_, T> {}

/// An owning iterator that takes values off the front of a sequence.
pub struct IntoIter<T> {
    sequence: LinkedSequence<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.sequence.remove_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.sequence.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { sequence: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = LinkedSequence::new();
        sequence.extend(iter);
        sequence
    }
}

impl<T> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}
