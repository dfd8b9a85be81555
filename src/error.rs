use std::panic::Location;

use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, ArrayListError>;

/// Errors reported by list and cursor operations.
///
/// A failed operation never leaves the list structurally inconsistent; the
/// only operation with a partial outcome is [`crate::ArrayList::fill`].
#[derive(Debug, Error)]
pub enum ArrayListError {
    /// A required list handle is missing.
    #[error("null pointer")]
    NullPointer,
    /// A position argument lies outside the operation's legal window.
    #[error("index out of range: {index} (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// Insertion into a list whose length already equals its capacity.
    #[error("index out of range: list is full (capacity {capacity})")]
    Full { capacity: usize },
    /// An allocation failed.
    #[error("out of memory: could not allocate {bytes} byte(s)")]
    OutOfMemory { bytes: usize },
    /// A value's byte length differs from the list's element size.
    #[error("element size mismatch: expected {expected} byte(s), found {found}")]
    SizeMismatch { expected: usize, found: usize },
    #[error("element codec error: {0}")]
    Codec(#[from] bincode::Error),
}

impl ArrayListError {
    /// Both `IndexOutOfRange` and `Full` reject a position.
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. } | Self::Full { .. })
    }
}

/// Emits the diagnostic for a failed operation and hands the error back.
///
/// Callers outside the crate that detect a failure themselves (a missing
/// list handle, say) use this so every failure leaves the same trace.
#[track_caller]
pub fn report(operation: &'static str, err: ArrayListError) -> ArrayListError {
    let location = Location::caller();
    error!(operation, %location, "{err}");
    err
}
