//! A singly linked sequence whose nodes can be swapped structurally.
//!
//! Nodes are addressed through [`NodeHandle`] values handed out by the
//! sequence. A handle only resolves in the sequence that issued it, and only
//! as long as its node has not been removed.
mod error;
mod handle;
mod hash;
mod iter;
mod sequence;
#[cfg(feature = "serde")]
mod serialization;
mod slots;
mod swap;

pub use error::{Error, Result};
pub use handle::NodeHandle;
pub use iter::{Handles, IntoIter, Iter};
pub use sequence::LinkedSequence;
