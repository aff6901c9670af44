use crate::{
    error::{Error, Result},
    handle::NodeHandle,
    sequence::LinkedSequence,
};

/// Where the link pointing at a node lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Predecessor {
    Head,
    Node(usize),
}

impl<T> LinkedSequence<T> {
    /// Swap the positions of two nodes by relinking them.
    ///
    /// The values stay in their nodes; after the swap `first` sits where
    /// `second` was and vice versa. Handles that don't resolve in this
    /// sequence make this a no-op, as does swapping a node with itself.
    pub fn swap_nodes(&mut self, first: NodeHandle, second: NodeHandle) {
        if let Err(e) = self.try_swap_nodes(first, second) {
            tracing::debug!(error = %e, "swap ignored");
        }
    }

    /// Swap the positions of two nodes by relinking them, reporting handles
    /// that cannot be used.
    ///
    /// Either both handles are valid and the swap happens completely, or an
    /// error is returned and the sequence is left untouched.
    pub fn try_swap_nodes(&mut self, first: NodeHandle, second: NodeHandle) -> Result<()> {
        if first == second || self.is_empty() {
            return Ok(());
        }
        let node1 = self.resolve(first)?;
        let node2 = self.resolve(second)?;

        let (prev1, prev2) = self.predecessors(node1, node2);
        let prev1 = prev1.ok_or(Error::NotLinked(first))?;
        let prev2 = prev2.ok_or(Error::NotLinked(second))?;

        let next1 = self.slots.next(node1);
        let next2 = self.slots.next(node2);

        // neighbours need their own cases: exchanging predecessors and
        // successors blindly would link a node to itself
        if next1 == Some(node2) {
            self.relink(prev1, node2);
            self.slots.set_next(node1, next2);
            self.slots.set_next(node2, Some(node1));
        } else if next2 == Some(node1) {
            self.relink(prev2, node1);
            self.slots.set_next(node2, next1);
            self.slots.set_next(node1, Some(node2));
        } else {
            self.relink(prev1, node2);
            self.relink(prev2, node1);
            self.slots.set_next(node1, next2);
            self.slots.set_next(node2, next1);
        }

        if self.tail == Some(node1) {
            self.tail = Some(node2);
        } else if self.tail == Some(node2) {
            self.tail = Some(node1);
        }
        tracing::debug!(node1, node2, "swapped nodes");
        Ok(())
    }

    /// Find the predecessors of two nodes in one walk from the head.
    fn predecessors(
        &self,
        node1: usize,
        node2: usize,
    ) -> (Option<Predecessor>, Option<Predecessor>) {
        let mut prev1 = (self.head == Some(node1)).then_some(Predecessor::Head);
        let mut prev2 = (self.head == Some(node2)).then_some(Predecessor::Head);
        let mut cursor = self.head;
        let mut steps = 0;
        while let Some(index) = cursor {
            if (prev1.is_some() && prev2.is_some()) || steps == self.len {
                break;
            }
            let next = self.slots.next(index);
            if next == Some(node1) {
                prev1 = Some(Predecessor::Node(index));
            }
            if next == Some(node2) {
                prev2 = Some(Predecessor::Node(index));
            }
            cursor = next;
            steps += 1;
        }
        (prev1, prev2)
    }

    fn relink(&mut self, predecessor: Predecessor, target: usize) {
        match predecessor {
            Predecessor::Head => self.head = Some(target),
            Predecessor::Node(index) => self.slots.set_next(index, Some(target)),
        }
    }
}
