use comparator::Comparator;
use std::cmp::Ordering;

pub const DEFAULT_CMP: DefaultComparator = DefaultComparator {};

/// Orders typed elements by their `Ord` impl. Used by the shell and by
/// callers of `TypedArrayList::find`/`sort` with no custom order.
pub struct DefaultComparator {}

impl<E: Ord> Comparator<E> for DefaultComparator {
    fn compare(&self, e1: &E, e2: &E) -> Ordering {
        e1.cmp(e2)
    }
}

/// Byte comparator for elements holding a native-endian `i32` in their
/// first four bytes, as written by `i32::to_ne_bytes`. Shorter elements
/// compare as raw bytes.
///
/// `TypedArrayList` stores fixint bincode, which is little-endian. This
/// order agrees with it only on little-endian targets; compare typed lists
/// through `TypedArrayList::find`/`sort` instead.
pub fn native_int_order(a: &[u8], b: &[u8]) -> Ordering {
    match (native_int(a), native_int(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

fn native_int(bytes: &[u8]) -> Option<i32> {
    let head: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
    Some(i32::from_ne_bytes(head))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_compare() {
        assert_eq!(DEFAULT_CMP.compare(&1, &2), Ordering::Less);
        assert_eq!(DEFAULT_CMP.compare(&"b", &"a"), Ordering::Greater);
        assert_eq!(DEFAULT_CMP.compare(&-3i64, &-3i64), Ordering::Equal);
        assert_eq!(DEFAULT_CMP.compare(&(1, "b"), &(1, "a")), Ordering::Greater);
    }

    #[test]
    fn test_native_int_order() {
        let minus_one = (-1i32).to_ne_bytes();
        let two = 2i32.to_ne_bytes();
        assert_eq!(native_int_order(&minus_one, &two), Ordering::Less);
        assert_eq!(native_int_order(&two, &minus_one), Ordering::Greater);
        assert_eq!(native_int_order(&two, &two), Ordering::Equal);
    }

    #[test]
    fn test_native_int_order_short_elements() {
        assert_eq!(native_int_order(&[1, 2], &[1, 3]), Ordering::Less);
    }
}
