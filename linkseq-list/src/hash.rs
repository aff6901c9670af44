use std::hash::{BuildHasher, Hash, Hasher};

use ahash::RandomState;

use crate::sequence::LinkedSequence;

// fixed seeds, so element hashes don't vary between sequences or runs
const SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

fn element_hasher() -> RandomState {
    RandomState::with_seeds(SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3])
}

impl<T: Hash> LinkedSequence<T> {
    /// A hash over the values in traversal order.
    ///
    /// Each value's hash is xored into the accumulator, which is then
    /// rotated left by 5 bits, so the position of a value matters. Equal
    /// sequences always produce the same result within a build.
    pub fn combined_hash(&self) -> u64 {
        let state = element_hasher();
        self.iter().fold(0u64, |h, value| {
            (h ^ BuildHasher::hash_one(&state, value)).rotate_left(5)
        })
    }
}

impl<T: Hash> Hash for LinkedSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        state.write_u64(self.combined_hash());
    }
}
