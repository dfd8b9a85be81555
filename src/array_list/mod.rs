mod alloc;
pub mod cursor;

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;

use tracing::debug;

use crate::config::ListConfig;
use crate::error::{report, ArrayListError, Result};

use self::alloc::{alloc_elem, alloc_slots, Elem};
pub use self::cursor::{Cursor, CursorMut};

/// A fixed-capacity list of fixed-size byte elements.
///
/// The slot table is reserved once at creation and never grows. Live
/// elements occupy positions `[0, len)`; each one is a separately owned
/// buffer of exactly `elem_size` bytes, so shifting on insert/remove moves
/// buffer handles rather than element bytes.
pub struct ArrayList {
    slots: Vec<Elem>,
    elem_size: usize,
    capacity: usize,
}

impl ArrayList {
    /// Create an empty list. A zero `capacity` or `elem_size` is replaced by
    /// its default (see [`ListConfig::resolved`]).
    pub fn new(capacity: usize, elem_size: usize) -> Result<Self> {
        Self::with_config(ListConfig::new(capacity, elem_size))
    }

    pub fn with_config(config: ListConfig) -> Result<Self> {
        let ListConfig {
            capacity,
            elem_size,
        } = config.resolved();
        let slots = alloc_slots(capacity).map_err(|err| report("create", err))?;
        debug!(capacity, elem_size, "created array list");
        Ok(Self {
            slots,
            elem_size,
            capacity,
        })
    }

    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Insert a copy of `value` at `pos`, shifting `[pos, len)` one slot to
    /// the right. Legal positions are `0..=len`.
    ///
    /// Fails without touching the list if the position is illegal, the list
    /// is full, or the element buffer cannot be allocated.
    pub fn insert(&mut self, pos: usize, value: &[u8]) -> Result<()> {
        self.check_value("insert", value)?;
        if pos > self.len() {
            return Err(report(
                "insert",
                ArrayListError::IndexOutOfRange {
                    index: pos,
                    len: self.len(),
                },
            ));
        }
        if self.is_full() {
            return Err(report(
                "insert",
                ArrayListError::Full {
                    capacity: self.capacity,
                },
            ));
        }
        let elem = alloc_elem(value).map_err(|err| report("insert", err))?;
        // The table was reserved up front, so this never reallocates.
        self.slots.insert(pos, elem);
        debug!(pos, len = self.len(), "inserted element");
        Ok(())
    }

    /// Remove and free the element at `pos`, shifting `(pos, len)` one slot
    /// to the left. Legal positions are `0..len`.
    pub fn remove(&mut self, pos: usize) -> Result<()> {
        self.check_live("remove", pos)?;
        drop(self.slots.remove(pos));
        debug!(pos, len = self.len(), "removed element");
        Ok(())
    }

    /// The bytes of the element at `pos`.
    pub fn get(&self, pos: usize) -> Result<&[u8]> {
        self.check_live("get", pos)?;
        Ok(&self.slots[pos][..])
    }

    /// Overwrite the element at `pos` in place.
    pub fn set(&mut self, pos: usize, value: &[u8]) -> Result<()> {
        self.check_value("set", value)?;
        self.check_live("set", pos)?;
        self.slots[pos].copy_from_slice(value);
        Ok(())
    }

    /// Free every element. Capacity and the slot table are kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        debug!(capacity = self.capacity, "cleared array list");
    }

    /// Overwrite every live element with `value`, then append copies of it
    /// until the list is full.
    ///
    /// Not atomic: if an allocation fails partway the error is returned and
    /// the elements appended so far stay in the list.
    pub fn fill(&mut self, value: &[u8]) -> Result<()> {
        self.check_value("fill", value)?;
        for elem in self.slots.iter_mut() {
            elem.copy_from_slice(value);
        }
        while !self.is_full() {
            let elem = alloc_elem(value).map_err(|err| report("fill", err))?;
            self.slots.push(elem);
        }
        debug!(len = self.len(), "filled array list");
        Ok(())
    }

    /// Position of the first element `e` with `cmp(value, e) == Equal`, or
    /// `None` if there is no such element.
    pub fn find<F>(&self, value: &[u8], mut cmp: F) -> Result<Option<usize>>
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        self.check_value("find", value)?;
        match self.try_find_by(|elem| Ok::<_, Infallible>(cmp(value, elem))) {
            Ok(pos) => Ok(pos),
            Err(never) => match never {},
        }
    }

    /// Position of the first element for which `cmp` yields `Equal`,
    /// scanning in index order. The first error from `cmp` stops the scan.
    pub fn try_find_by<F, E>(&self, mut cmp: F) -> std::result::Result<Option<usize>, E>
    where
        F: FnMut(&[u8]) -> std::result::Result<Ordering, E>,
    {
        for (pos, elem) in self.iter().enumerate() {
            if cmp(elem)? == Ordering::Equal {
                return Ok(Some(pos));
            }
        }
        Ok(None)
    }

    /// Sort ascending by `cmp`. Equal elements keep their relative order.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        match self.try_sort_by(|a, b| Ok::<_, Infallible>(cmp(a, b))) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Bubble sort with a fallible comparator. The first comparator error
    /// stops the sort; the list then holds some permutation of its elements.
    pub fn try_sort_by<F, E>(&mut self, mut cmp: F) -> std::result::Result<(), E>
    where
        F: FnMut(&[u8], &[u8]) -> std::result::Result<Ordering, E>,
    {
        let mut unsorted = self.len();
        while unsorted > 1 {
            let mut swapped = false;
            for j in 0..unsorted - 1 {
                if cmp(&self.slots[j][..], &self.slots[j + 1][..])? == Ordering::Greater {
                    self.slots.swap(j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
            unsorted -= 1;
        }
        Ok(())
    }

    /// Live elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.slots.iter().map(|elem| &elem[..])
    }

    pub fn cursor(&self, pos: usize) -> Result<Cursor<'_>> {
        Cursor::new(self, pos)
    }

    pub fn cursor_first(&self) -> Cursor<'_> {
        Cursor::at(self, 0)
    }

    pub fn cursor_last(&self) -> Cursor<'_> {
        Cursor::at(self, self.len())
    }

    pub fn cursor_mut(&mut self, pos: usize) -> Result<CursorMut<'_>> {
        CursorMut::new(self, pos)
    }

    pub fn cursor_first_mut(&mut self) -> CursorMut<'_> {
        CursorMut::at(self, 0)
    }

    pub fn cursor_last_mut(&mut self) -> CursorMut<'_> {
        let len = self.len();
        CursorMut::at(self, len)
    }

    #[track_caller]
    fn check_live(&self, operation: &'static str, pos: usize) -> Result<()> {
        if pos < self.len() {
            Ok(())
        } else {
            Err(report(
                operation,
                ArrayListError::IndexOutOfRange {
                    index: pos,
                    len: self.len(),
                },
            ))
        }
    }

    #[track_caller]
    fn check_value(&self, operation: &'static str, value: &[u8]) -> Result<()> {
        if value.len() == self.elem_size {
            Ok(())
        } else {
            Err(report(
                operation,
                ArrayListError::SizeMismatch {
                    expected: self.elem_size,
                    found: value.len(),
                },
            ))
        }
    }
}

impl fmt::Debug for ArrayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("elem_size", &self.elem_size)
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::native_int_order;

    fn int(x: i32) -> [u8; 4] {
        x.to_ne_bytes()
    }

    fn ints(list: &ArrayList) -> Vec<i32> {
        list.iter()
            .map(|elem| i32::from_ne_bytes(elem.try_into().unwrap()))
            .collect()
    }

    fn list_of(capacity: usize, values: &[i32]) -> ArrayList {
        let mut list = ArrayList::new(capacity, 4).unwrap();
        for (pos, value) in values.iter().enumerate() {
            list.insert(pos, &int(*value)).unwrap();
        }
        list
    }

    #[test]
    fn test_new_defaults() {
        let list = ArrayList::new(0, 0).unwrap();
        assert_eq!(list.capacity(), 1024);
        assert_eq!(list.elem_size(), std::mem::size_of::<i32>());
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert!(!list.is_full());
    }

    #[test]
    fn test_new_out_of_memory() {
        let err = ArrayList::new(usize::MAX / 4, 4).unwrap_err();
        assert!(matches!(err, ArrayListError::OutOfMemory { .. }));
    }

    #[test]
    fn test_insert_shifts_right() {
        let mut list = list_of(5, &[10, 20]);
        list.insert(1, &int(15)).unwrap();
        assert_eq!(ints(&list), vec![10, 15, 20]);
        list.insert(0, &int(5)).unwrap();
        list.insert(4, &int(25)).unwrap();
        assert_eq!(ints(&list), vec![5, 10, 15, 20, 25]);
        assert!(list.is_full());
    }

    #[test]
    fn test_insert_out_of_range() {
        let mut list = list_of(5, &[1, 2]);
        let err = list.insert(3, &int(9)).unwrap_err();
        assert!(matches!(
            err,
            ArrayListError::IndexOutOfRange { index: 3, len: 2 }
        ));
        assert_eq!(ints(&list), vec![1, 2]);
    }

    #[test]
    fn test_insert_full() {
        let mut list = list_of(2, &[1, 2]);
        let err = list.insert(1, &int(9)).unwrap_err();
        assert!(matches!(err, ArrayListError::Full { capacity: 2 }));
        assert!(err.is_index_error());
        assert_eq!(ints(&list), vec![1, 2]);
    }

    #[test]
    fn test_insert_size_mismatch() {
        let mut list = list_of(3, &[]);
        let err = list.insert(0, &[1, 2]).unwrap_err();
        assert!(matches!(
            err,
            ArrayListError::SizeMismatch {
                expected: 4,
                found: 2
            }
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut list = list_of(5, &[1, 2, 3, 4]);
        list.remove(1).unwrap();
        assert_eq!(ints(&list), vec![1, 3, 4]);
        list.remove(2).unwrap();
        assert_eq!(ints(&list), vec![1, 3]);
        list.remove(0).unwrap();
        assert_eq!(ints(&list), vec![3]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list = list_of(5, &[1, 2]);
        assert!(list.remove(2).unwrap_err().is_index_error());
        let mut empty = list_of(5, &[]);
        assert!(empty.remove(0).is_err());
        assert_eq!(ints(&list), vec![1, 2]);
    }

    #[test]
    fn test_get_set() {
        let mut list = list_of(3, &[4, 5]);
        assert_eq!(list.get(1).unwrap(), &int(5));
        list.set(1, &int(50)).unwrap();
        assert_eq!(list.get(1).unwrap(), &int(50));
        assert!(list.get(2).is_err());
        assert!(list.set(2, &int(1)).is_err());
        assert!(list.set(0, &[0; 8]).is_err());
        assert_eq!(ints(&list), vec![4, 50]);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut list = list_of(4, &[1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 4);
        list.insert(0, &int(7)).unwrap();
        assert_eq!(ints(&list), vec![7]);
    }

    #[test]
    fn test_fill() {
        let mut list = list_of(5, &[10, 20]);
        list.fill(&int(7)).unwrap();
        assert_eq!(ints(&list), vec![7, 7, 7, 7, 7]);
        assert!(list.is_full());
    }

    #[test]
    fn test_fill_empty_and_full() {
        let mut list = list_of(3, &[]);
        list.fill(&int(1)).unwrap();
        assert_eq!(ints(&list), vec![1, 1, 1]);
        list.fill(&int(2)).unwrap();
        assert_eq!(ints(&list), vec![2, 2, 2]);
        assert!(list.fill(&[0]).is_err());
    }

    #[test]
    fn test_find() {
        let list = list_of(5, &[3, 1, 3, 2]);
        assert_eq!(list.find(&int(3), native_int_order).unwrap(), Some(0));
        assert_eq!(list.find(&int(2), native_int_order).unwrap(), Some(3));
        assert_eq!(list.find(&int(9), native_int_order).unwrap(), None);
        assert!(list.find(&[0, 0], native_int_order).is_err());
    }

    #[test]
    fn test_find_empty() {
        let list = list_of(5, &[]);
        assert_eq!(list.find(&int(0), native_int_order).unwrap(), None);
    }

    #[test]
    fn test_try_find_by_stops_on_error() {
        let list = list_of(5, &[1, 2, 3]);
        let mut seen = 0;
        let result: std::result::Result<Option<usize>, &str> = list.try_find_by(|elem| {
            seen += 1;
            if elem == int(2) {
                Err("undecodable")
            } else {
                Ok(Ordering::Less)
            }
        });
        assert_eq!(result, Err("undecodable"));
        assert_eq!(seen, 2);

        let found: std::result::Result<Option<usize>, &str> =
            list.try_find_by(|elem| Ok(native_int_order(&int(3), elem)));
        assert_eq!(found, Ok(Some(2)));
    }

    #[test]
    fn test_fill_partial_out_of_memory() {
        let mut list = list_of(6, &[10, 20]);
        let guard = alloc::exhaust::after(2);
        let err = list.fill(&int(7)).unwrap_err();
        drop(guard);
        assert!(matches!(err, ArrayListError::OutOfMemory { bytes: 4 }));
        assert_eq!(list.len(), 4);
        assert!(!list.is_full());
        assert_eq!(ints(&list), vec![7, 7, 7, 7]);

        list.fill(&int(7)).unwrap();
        assert_eq!(ints(&list), vec![7; 6]);
    }

    #[test]
    fn test_insert_out_of_memory_no_mutation() {
        let mut list = list_of(4, &[1, 2, 3]);
        let guard = alloc::exhaust::after(0);
        let err = list.insert(1, &int(9)).unwrap_err();
        drop(guard);
        assert!(matches!(err, ArrayListError::OutOfMemory { .. }));
        assert_eq!(ints(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);

        list.insert(1, &int(9)).unwrap();
        assert_eq!(ints(&list), vec![1, 9, 2, 3]);
    }

    #[test]
    fn test_sort() {
        let mut list = list_of(6, &[5, -1, 3, 3, 0, 2]);
        list.sort_by(native_int_order);
        assert_eq!(ints(&list), vec![-1, 0, 2, 3, 3, 5]);
    }

    #[test]
    fn test_sort_is_stable() {
        // Compare on the first byte only; the second byte records the original order.
        let mut list = ArrayList::new(4, 2).unwrap();
        for (pos, elem) in [[2u8, 0], [1, 1], [2, 2], [1, 3]].iter().enumerate() {
            list.insert(pos, elem).unwrap();
        }
        list.sort_by(|a, b| a[0].cmp(&b[0]));
        let sorted: Vec<&[u8]> = list.iter().collect();
        let expected: Vec<&[u8]> = vec![&[1, 1], &[1, 3], &[2, 0], &[2, 2]];
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_try_sort_by_error() {
        let mut list = list_of(4, &[3, 2, 1]);
        let result: std::result::Result<(), &str> = list.try_sort_by(|_, _| Err("boom"));
        assert_eq!(result, Err("boom"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_debug() {
        let list = list_of(4, &[1]);
        assert_eq!(
            format!("{:?}", list),
            "ArrayList { elem_size: 4, capacity: 4, len: 1 }"
        );
    }
}
