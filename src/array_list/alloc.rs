// Fallible allocation for the slot table and element buffers, so that an
// exhausted allocator surfaces as `OutOfMemory` instead of aborting.

use std::mem::size_of;

use crate::error::{ArrayListError, Result};

pub(super) type Elem = Box<[u8]>;

/// Reserves a table with room for exactly `capacity` element buffers.
pub(super) fn alloc_slots(capacity: usize) -> Result<Vec<Elem>> {
    let mut slots: Vec<Elem> = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| ArrayListError::OutOfMemory {
            bytes: capacity.saturating_mul(size_of::<Elem>()),
        })?;
    Ok(slots)
}

/// Allocates a fresh element buffer holding a copy of `value`.
pub(super) fn alloc_elem(value: &[u8]) -> Result<Elem> {
    #[cfg(test)]
    if exhaust::should_fail() {
        return Err(ArrayListError::OutOfMemory { bytes: value.len() });
    }
    let mut buf: Vec<u8> = Vec::new();
    buf.try_reserve_exact(value.len())
        .map_err(|_| ArrayListError::OutOfMemory { bytes: value.len() })?;
    buf.extend_from_slice(value);
    Ok(buf.into_boxed_slice())
}
