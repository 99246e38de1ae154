//! Pure index arithmetic for list range reads.

/// Returns the elements of `items` between `start` and `stop` inclusive.
///
/// Negative indices count from the end of the list. Out-of-range indices are
/// clamped, and an empty slice is returned when the range is empty. This
/// matches Redis `LRANGE`.
///
/// # Examples
///
/// ```
/// use cachetrail_core::cache::list_range;
///
/// let items = vec![1, 2, 3, 4];
/// assert_eq!(list_range(&items, 0, -1), vec![1, 2, 3, 4]);
/// assert_eq!(list_range(&items, 1, 2), vec![2, 3]);
/// assert_eq!(list_range(&items, -2, 100), vec![3, 4]);
/// assert!(list_range(&items, 3, 1).is_empty());
/// ```
pub fn list_range<T: Clone>(items: &[T], start: isize, stop: isize) -> Vec<T> {
    let len = items.len() as isize;
    if len == 0 {
        return Vec::new();
    }

    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };

    if start > stop || start >= len {
        return Vec::new();
    }

    items[start as usize..=stop as usize].to_vec()
}
