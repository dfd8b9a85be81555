//! Bidirectional cursors over an [`ArrayList`].
//!
//! A cursor sits between elements: at position `p` its "next" element is the
//! one at `p` and its "prev" element the one at `p - 1`. Positions range over
//! `0..=len`. A cursor borrows its list, so the list cannot be reshaped
//! (insert, remove, sort, clear, fill) while any cursor is alive.

use super::ArrayList;
use crate::error::{report, ArrayListError, Result};

/// Read-only cursor. Several may be open on one list at a time.
pub struct Cursor<'a> {
    list: &'a ArrayList,
    position: usize,
}

/// Cursor that can also overwrite the elements around its position.
pub struct CursorMut<'a> {
    list: &'a mut ArrayList,
    position: usize,
}

#[track_caller]
fn check_position(operation: &'static str, list: &ArrayList, position: usize) -> Result<()> {
    if position <= list.len() {
        Ok(())
    } else {
        Err(report(
            operation,
            ArrayListError::IndexOutOfRange {
                index: position,
                len: list.len(),
            },
        ))
    }
}

/// Slot index of the "next" element.
#[track_caller]
fn next_slot(operation: &'static str, list: &ArrayList, position: usize) -> Result<usize> {
    if position < list.len() {
        Ok(position)
    } else {
        Err(report(
            operation,
            ArrayListError::IndexOutOfRange {
                index: position,
                len: list.len(),
            },
        ))
    }
}

/// Slot index of the "prev" element.
#[track_caller]
fn prev_slot(operation: &'static str, list: &ArrayList, position: usize) -> Result<usize> {
    match position.checked_sub(1) {
        Some(slot) if slot < list.len() => Ok(slot),
        _ => Err(report(
            operation,
            ArrayListError::IndexOutOfRange {
                index: position,
                len: list.len(),
            },
        )),
    }
}

impl<'a> Cursor<'a> {
    pub(super) fn new(list: &'a ArrayList, position: usize) -> Result<Self> {
        check_position("cursor create", list, position)?;
        Ok(Self::at(list, position))
    }

    pub(super) fn at(list: &'a ArrayList, position: usize) -> Self {
        Self { list, position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn elem_size(&self) -> usize {
        self.list.elem_size()
    }

    pub fn has_next(&self) -> bool {
        self.position < self.list.len()
    }

    /// Step forward over the next element. A no-op error at the end.
    pub fn move_next(&mut self) -> Result<()> {
        next_slot("cursor next", self.list, self.position)?;
        self.position += 1;
        Ok(())
    }

    pub fn get_next(&self) -> Result<&'a [u8]> {
        let slot = next_slot("cursor get next", self.list, self.position)?;
        Ok(&self.list.slots[slot][..])
    }

    pub fn has_prev(&self) -> bool {
        self.position > 0
    }

    /// Step back over the prev element. A no-op error at the start.
    pub fn move_prev(&mut self) -> Result<()> {
        prev_slot("cursor prev", self.list, self.position)?;
        self.position -= 1;
        Ok(())
    }

    pub fn get_prev(&self) -> Result<&'a [u8]> {
        let slot = prev_slot("cursor get prev", self.list, self.position)?;
        Ok(&self.list.slots[slot][..])
    }
}

impl<'a> CursorMut<'a> {
    pub(super) fn new(list: &'a mut ArrayList, position: usize) -> Result<Self> {
        check_position("cursor create", list, position)?;
        Ok(Self::at(list, position))
    }

    pub(super) fn at(list: &'a mut ArrayList, position: usize) -> Self {
        Self { list, position }
    }

    /// A read-only view at the same position.
    pub fn as_cursor(&self) -> Cursor<'_> {
        Cursor::at(self.list, self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn elem_size(&self) -> usize {
        self.list.elem_size()
    }

    pub fn has_next(&self) -> bool {
        self.as_cursor().has_next()
    }

    pub fn move_next(&mut self) -> Result<()> {
        next_slot("cursor next", self.list, self.position)?;
        self.position += 1;
        Ok(())
    }

    pub fn get_next(&self) -> Result<&[u8]> {
        self.as_cursor().get_next()
    }

    /// Overwrite the next element in place without moving.
    pub fn set_next(&mut self, value: &[u8]) -> Result<()> {
        let slot = next_slot("cursor set next", self.list, self.position)?;
        self.list.check_value("cursor set next", value)?;
        self.list.slots[slot].copy_from_slice(value);
        Ok(())
    }

    pub fn has_prev(&self) -> bool {
        self.as_cursor().has_prev()
    }

    pub fn move_prev(&mut self) -> Result<()> {
        prev_slot("cursor prev", self.list, self.position)?;
        self.position -= 1;
        Ok(())
    }

    pub fn get_prev(&self) -> Result<&[u8]> {
        self.as_cursor().get_prev()
    }

    /// Overwrite the prev element in place without moving.
    pub fn set_prev(&mut self, value: &[u8]) -> Result<()> {
        let slot = prev_slot("cursor set prev", self.list, self.position)?;
        self.list.check_value("cursor set prev", value)?;
        self.list.slots[slot].copy_from_slice(value);
        Ok(())
    }
}
