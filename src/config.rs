/// Capacity used when a list is created with capacity 0.
pub const DEFAULT_CAPACITY: usize = 1 << 10;

/// Element size used when a list is created with element size 0.
pub const DEFAULT_ELEM_SIZE: usize = std::mem::size_of::<i32>();

/// Creation parameters for an `ArrayList`. Zero means "use the default".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListConfig {
    pub capacity: usize,
    pub elem_size: usize,
}

impl ListConfig {
    pub fn new(capacity: usize, elem_size: usize) -> Self {
        Self {
            capacity,
            elem_size,
        }
    }

    /// Config sized for values of type `T`.
    pub fn for_type<T>(capacity: usize) -> Self {
        Self::new(capacity, std::mem::size_of::<T>())
    }

    /// Replaces zero fields with `DEFAULT_CAPACITY` / `DEFAULT_ELEM_SIZE`.
    pub fn resolved(self) -> Self {
        Self {
            capacity: if self.capacity > 0 {
                self.capacity
            } else {
                DEFAULT_CAPACITY
            },
            elem_size: if self.elem_size > 0 {
                self.elem_size
            } else {
                DEFAULT_ELEM_SIZE
            },
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_ELEM_SIZE)
    }
}
