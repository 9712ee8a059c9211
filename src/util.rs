//! Small sequence helpers
//!
//! Parallel iteration over several sequences is plain [`Iterator::zip`],
//! which stops as soon as any input is exhausted.

use std::ops::Range;

/// An ascending run of `size` positions starting at `start`
///
/// The returned range is `Clone`, so it can be restarted from the
/// beginning.
///
/// ```rust
/// use indexed_heaps::util::range;
///
/// let run = range(4, 10);
/// assert_eq!(run.clone().collect::<Vec<_>>(), vec![10, 11, 12, 13]);
/// assert_eq!(run.len(), 4);
/// ```
pub fn range(size: usize, start: usize) -> Range<usize> {
    start..start.saturating_add(size)
}

/// Applies `f` to every element and collects the results
///
/// The output is allocated once from the input's size hint.
pub fn fmap<I, F, U>(input: I, f: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    let iter = input.into_iter();
    let mut out = Vec::with_capacity(iter.size_hint().0);
    out.extend(iter.map(f));
    out
}

/// Drops the last `amount` elements, or everything if there are fewer
///
/// Unlike `Vec::resize` this never needs to construct new elements.
pub fn truncate_tail<T>(values: &mut Vec<T>, amount: usize) {
    let keep = values.len().saturating_sub(amount);
    values.truncate(keep);
}

/// Rotates `values` left so the first occurrence of `value` comes first
///
/// The slice is left untouched if `value` is absent.
pub fn shift_to_value<T: PartialEq>(values: &mut [T], value: &T) {
    if let Some(position) = values.iter().position(|v| v == value) {
        values.rotate_left(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_restartable() {
        let run = range(3, 0);
        assert_eq!(run.clone().sum::<usize>(), 3);
        assert_eq!(run.collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(range(0, 7).is_empty());
    }

    #[test]
    fn test_zip_stops_at_shortest() {
        let keys = [1, 2, 3, 4];
        let values = ['a', 'b', 'c'];
        let pairs: Vec<_> = keys.iter().zip(values.iter()).zip(range(10, 0)).collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2], ((&3, &'c'), 2));
    }

    #[test]
    fn test_fmap() {
        assert_eq!(fmap(vec![1, 2, 3], |x| x * 10), vec![10, 20, 30]);
        assert_eq!(fmap(range(3, 1), |x| x.to_string()), vec!["1", "2", "3"]);
        assert!(fmap(Vec::<u8>::new(), |x| x).is_empty());
    }

    #[test]
    fn test_truncate_tail() {
        let mut values = vec![String::from("a"), String::from("b"), String::from("c")];
        truncate_tail(&mut values, 2);
        assert_eq!(values, vec!["a"]);
        truncate_tail(&mut values, 5);
        assert!(values.is_empty());
    }

    #[test]
    fn test_shift_to_value() {
        let mut values = vec![1, 2, 3, 4, 5];
        shift_to_value(&mut values, &4);
        assert_eq!(values, vec![4, 5, 1, 2, 3]);

        shift_to_value(&mut values, &9);
        assert_eq!(values, vec![4, 5, 1, 2, 3]);
    }
}
