use thiserror::Error;

/// Fault raised when an access index falls outside `[0, length)`.
///
/// Only the host-embedding API surfaces this as a value; on the runtime
/// path the same fault is reported and the process aborts instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index out of bounds: the length is {length} but the index is {index}")]
pub struct BoundsError {
    /// The attempted access position.
    pub index: u64,
    /// The exclusive upper bound of the valid range.
    pub length: u64,
}
