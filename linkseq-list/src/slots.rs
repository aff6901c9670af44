// Node storage for a sequence. Links between nodes are slot indices, so the
// storage owns every node and dropping it never recurses down the chain.
// Each slot carries a generation that is bumped whenever its node is
// released; handles remember the generation they were issued with.

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<usize>,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

#[derive(Debug)]
pub(crate) struct Slots<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
}

impl<T> Slots<T> {
    pub(crate) fn new() -> Self {
        Slots {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Slots {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Store a node, reusing a released slot if there is one. Returns the
    /// slot index and its current generation.
    pub(crate) fn insert(&mut self, node: Node<T>) -> (usize, u32) {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(node);
            tracing::trace!(index, generation = slot.generation, "reusing slot");
            (index, slot.generation)
        } else {
            let index = self.slots.len();
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            (index, 0)
        }
    }

    /// Take the node out of its slot. The slot's generation moves on, so
    /// handles to the old node stop resolving.
    pub(crate) fn remove(&mut self, index: usize) -> Option<Node<T>> {
        let slot = self.slots.get_mut(index)?;
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        Some(node)
    }

    pub(crate) fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index);
            }
        }
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&Node<T>> {
        self.slots.get(index)?.node.as_ref()
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(index)?.node.as_mut()
    }

    #[inline]
    pub(crate) fn next(&self, index: usize) -> Option<usize> {
        self.get(index).and_then(|node| node.next)
    }

    pub(crate) fn set_next(&mut self, index: usize, next: Option<usize>) {
        if let Some(node) = self.get_mut(index) {
            node.next = next;
        }
    }

    /// The generation of an occupied slot.
    pub(crate) fn generation(&self, index: usize) -> Option<u32> {
        let slot = self.slots.get(index)?;
        slot.node.as_ref().map(|_| slot.generation)
    }

    pub(crate) fn is_live(&self, index: usize, generation: u32) -> bool {
        self.generation(index) == Some(generation)
    }
}
