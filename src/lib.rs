//! A fixed-capacity array list over fixed-size elements.
//!
//! [`ArrayList`] stores opaque elements of a caller-chosen byte size in a slot
//! table whose capacity is fixed at creation. [`Cursor`] and [`CursorMut`]
//! walk it in both directions. [`TypedArrayList`] layers `serde` values on
//! top through their fixed-int `bincode` encoding.

extern crate bincode;
extern crate comparator;
extern crate serde;
extern crate thiserror;
extern crate tracing;

pub mod array_list;
pub mod config;
pub mod error;
pub mod order;
pub mod typed;

pub use array_list::{ArrayList, Cursor, CursorMut};
pub use config::{ListConfig, DEFAULT_CAPACITY, DEFAULT_ELEM_SIZE};
pub use error::{report, ArrayListError, Result};
pub use order::{native_int_order, DefaultComparator, DEFAULT_CMP};
pub use typed::{TypedArrayList, TypedCursor, TypedCursorMut};
