use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::sequence::LinkedSequence;

// a sequence serializes as its values in traversal order; nodes and handles
// are not part of the serialized form
impl<T: Serialize> Serialize for LinkedSequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self.iter() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}
