use std::cmp::Ordering::{Greater, Less};

use super::{compare, starts_with};

/// Searches the open interval `(left, right)` for the last index whose phrase
/// sorts strictly before `prefix`.
///
/// `left` and `right` are sentinels: `-1` and `values.len()` mean "before
/// everything" and "after everything" and are never read. Returns `left` once
/// the interval is exhausted, so `-1` when nothing precedes `prefix`.
pub fn left_border_index<S: AsRef<str>>(
    values: &[S],
    prefix: &str,
    mut left: isize,
    mut right: isize,
) -> isize {
    while right - left > 1 {
        let i = midpoint(left, right);
        if compare(get(values, i), prefix) == Less {
            left = i;
        } else {
            right = i;
        }
    }

    left
}

/// Searches the open interval `(left, right)` for the first index past every
/// phrase that sorts at or before `prefix` or starts with it.
///
/// A phrase that extends `prefix` sorts after it, so both checks are needed to
/// keep it inside the range. Same sentinel convention as
/// [`left_border_index`]; returns `right`.
pub fn right_border_index<S: AsRef<str>>(
    values: &[S],
    prefix: &str,
    mut left: isize,
    mut right: isize,
) -> isize {
    while right - left > 1 {
        let i = midpoint(left, right);
        let value = get(values, i);
        if compare(prefix, value) != Less || starts_with(value, prefix) {
            left = i;
        } else {
            debug_assert_eq!(compare(value, prefix), Greater);
            right = i;
        }
    }

    right
}

fn midpoint(start: isize, end: isize) -> isize {
    let distance = end - start;
    start + distance / 2
}

// only called with midpoints, which lie strictly between the sentinels
#[allow(clippy::cast_sign_loss)]
fn get<S: AsRef<str>>(values: &[S], i: isize) -> &str {
    debug_assert!(i >= 0);
    values[i as usize].as_ref()
}
