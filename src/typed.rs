use std::marker::PhantomData;

use bincode::Options;
use comparator::Comparator;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::array_list::{ArrayList, Cursor, CursorMut};
use crate::config::ListConfig;
use crate::error::{report, ArrayListError, Result};

fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
}

/// Serialize `value` into exactly `elem_size` bytes, zero-padded.
fn encode<T: Serialize>(operation: &'static str, value: &T, elem_size: usize) -> Result<Vec<u8>> {
    let mut bytes = codec()
        .serialize(value)
        .map_err(|err| report(operation, err.into()))?;
    if bytes.len() > elem_size {
        return Err(report(
            operation,
            ArrayListError::SizeMismatch {
                expected: elem_size,
                found: bytes.len(),
            },
        ));
    }
    bytes.resize(elem_size, 0);
    Ok(bytes)
}

fn decode<T: DeserializeOwned>(operation: &'static str, bytes: &[u8]) -> Result<T> {
    codec()
        .deserialize(bytes)
        .map_err(|err| report(operation, err.into()))
}

/// An `ArrayList` of `T` values stored in their fixed-int `bincode` encoding.
///
/// Each value must encode to at most `elem_size` bytes. For plain data types
/// (integers, floats, tuples and structs of those) `size_of::<T>()` is
/// always enough.
pub struct TypedArrayList<T> {
    inner: ArrayList,
    _marker: PhantomData<T>,
}

impl<T> TypedArrayList<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a list sized for `T`. A zero capacity means the default.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(ListConfig::for_type::<T>(capacity))
    }

    pub fn with_config(config: ListConfig) -> Result<Self> {
        Ok(Self {
            inner: ArrayList::with_config(config)?,
            _marker: PhantomData,
        })
    }

    pub fn as_bytes(&self) -> &ArrayList {
        &self.inner
    }

    pub fn elem_size(&self) -> usize {
        self.inner.elem_size()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    pub fn insert(&mut self, pos: usize, value: &T) -> Result<()> {
        let bytes = encode("insert", value, self.elem_size())?;
        self.inner.insert(pos, &bytes)
    }

    pub fn remove(&mut self, pos: usize) -> Result<()> {
        self.inner.remove(pos)
    }

    pub fn get(&self, pos: usize) -> Result<T> {
        decode("get", self.inner.get(pos)?)
    }

    pub fn set(&mut self, pos: usize, value: &T) -> Result<()> {
        let bytes = encode("set", value, self.elem_size())?;
        self.inner.set(pos, &bytes)
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// See [`ArrayList::fill`] for the partial-failure behaviour.
    pub fn fill(&mut self, value: &T) -> Result<()> {
        let bytes = encode("fill", value, self.elem_size())?;
        self.inner.fill(&bytes)
    }

    /// Position of the first element equal to `value` under `cmp`.
    pub fn find<C: Comparator<T>>(&self, value: &T, cmp: &C) -> Result<Option<usize>> {
        self.inner.try_find_by::<_, ArrayListError>(|bytes| {
            let elem: T = decode("find", bytes)?;
            Ok(cmp.compare(value, &elem))
        })
    }

    /// Stable ascending sort under `cmp`.
    pub fn sort<C: Comparator<T>>(&mut self, cmp: &C) -> Result<()> {
        self.inner.try_sort_by::<_, ArrayListError>(|a, b| {
            let a: T = decode("sort", a)?;
            let b: T = decode("sort", b)?;
            Ok(cmp.compare(&a, &b))
        })
    }

    pub fn to_vec(&self) -> Result<Vec<T>> {
        self.inner
            .iter()
            .map(|bytes| decode("to_vec", bytes))
            .collect()
    }

    pub fn cursor(&self, pos: usize) -> Result<TypedCursor<'_, T>> {
        Ok(TypedCursor::wrap(self.inner.cursor(pos)?))
    }

    pub fn cursor_first(&self) -> TypedCursor<'_, T> {
        TypedCursor::wrap(self.inner.cursor_first())
    }

    pub fn cursor_last(&self) -> TypedCursor<'_, T> {
        TypedCursor::wrap(self.inner.cursor_last())
    }

    pub fn cursor_mut(&mut self, pos: usize) -> Result<TypedCursorMut<'_, T>> {
        Ok(TypedCursorMut::wrap(self.inner.cursor_mut(pos)?))
    }

    pub fn cursor_first_mut(&mut self) -> TypedCursorMut<'_, T> {
        TypedCursorMut::wrap(self.inner.cursor_first_mut())
    }

    pub fn cursor_last_mut(&mut self) -> TypedCursorMut<'_, T> {
        TypedCursorMut::wrap(self.inner.cursor_last_mut())
    }
}

pub struct TypedCursor<'a, T> {
    inner: Cursor<'a>,
    _marker: PhantomData<T>,
}

impl<'a, T: DeserializeOwned> TypedCursor<'a, T> {
    fn wrap(inner: Cursor<'a>) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }

    pub fn position(&self) -> usize {
        self.inner.position()
    }

    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    pub fn move_next(&mut self) -> Result<()> {
        self.inner.move_next()
    }

    pub fn get_next(&self) -> Result<T> {
        decode("cursor get next", self.inner.get_next()?)
    }

    pub fn has_prev(&self) -> bool {
        self.inner.has_prev()
    }

    pub fn move_prev(&mut self) -> Result<()> {
        self.inner.move_prev()
    }

    pub fn get_prev(&self) -> Result<T> {
        decode("cursor get prev", self.inner.get_prev()?)
    }
}

pub struct TypedCursorMut<'a, T> {
    inner: CursorMut<'a>,
    _marker: PhantomData<T>,
}

impl<'a, T: Serialize + DeserializeOwned> TypedCursorMut<'a, T> {
    fn wrap(inner: CursorMut<'a>) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }

    pub fn position(&self) -> usize {
        self.inner.position()
    }

    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    pub fn move_next(&mut self) -> Result<()> {
        self.inner.move_next()
    }

    pub fn get_next(&self) -> Result<T> {
        decode("cursor get next", self.inner.get_next()?)
    }

    pub fn set_next(&mut self, value: &T) -> Result<()> {
        let bytes = encode("cursor set next", value, self.inner.elem_size())?;
        self.inner.set_next(&bytes)
    }

    pub fn has_prev(&self) -> bool {
        self.inner.has_prev()
    }

    pub fn move_prev(&mut self) -> Result<()> {
        self.inner.move_prev()
    }

    pub fn get_prev(&self) -> Result<T> {
        decode("cursor get prev", self.inner.get_prev()?)
    }

    pub fn set_prev(&mut self, value: &T) -> Result<()> {
        let bytes = encode("cursor set prev", value, self.inner.elem_size())?;
        self.inner.set_prev(&bytes)
    }
}
