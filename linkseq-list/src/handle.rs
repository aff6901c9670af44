use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_SEQUENCE_ID: AtomicUsize = AtomicUsize::new(1);

/// Hand out a process-unique identity for a new sequence.
pub(crate) fn next_sequence_id() -> usize {
    NEXT_SEQUENCE_ID.fetch_add(1, Ordering::Relaxed)
}

/// A handle to a node in a [`LinkedSequence`](crate::LinkedSequence).
///
/// Handles are cheap to copy and can be kept around independently of the
/// sequence's lifetime. They cannot be dereferenced directly; pass them back
/// into the sequence that created them. Once the node they name is removed,
/// or when they are passed to a different sequence, they no longer resolve
/// and operations taking them return `None` or an [`Error`](crate::Error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub(crate) sequence: usize,
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl NodeHandle {
    pub(crate) fn new(sequence: usize, index: usize, generation: u32) -> Self {
        NodeHandle {
            sequence,
            index,
            generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_ids_are_unique() {
        let a = next_sequence_id();
        let b = next_sequence_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_handles_differ_by_generation() {
        let a = NodeHandle::new(1, 0, 0);
        let b = NodeHandle::new(1, 0, 1);
        assert_ne!(a, b);
        assert_eq!(a, NodeHandle::new(1, 0, 0));
    }
}
