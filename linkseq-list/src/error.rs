use thiserror::Error;

use crate::NodeHandle;

/// Why a handle could not be used for a structural operation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("handle was issued by another sequence")]
    ForeignHandle(NodeHandle),
    #[error("handle refers to a node that has been removed")]
    StaleHandle(NodeHandle),
    #[error("node is not linked from the head of the sequence")]
    NotLinked(NodeHandle),
}

pub type Result<T> = std::result::Result<T, Error>;
