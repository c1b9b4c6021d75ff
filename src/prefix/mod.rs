mod border;

use std::cmp::Ordering;

use itertools::Itertools;

pub use self::border::{left_border_index, right_border_index};

/// Case-insensitive ordinal comparison. Every search, sort and match check in
/// this crate goes through this function (or [`starts_with`], which agrees
/// with it on folding).
pub fn compare(a: &str, b: &str) -> Ordering {
    a.chars().map(fold).cmp(b.chars().map(fold))
}

/// Returns `true` if `string` begins with `prefix` under the same folding as
/// [`compare`].
pub fn starts_with(string: &str, prefix: &str) -> bool {
    let mut chars = string.chars().map(fold);
    prefix.chars().map(fold).all(|p| chars.next() == Some(p))
}

pub fn sort<S: AsRef<str>>(strings: &mut [S]) {
    strings.sort_by(|a, b| compare(a.as_ref(), b.as_ref()));
}

/// Index of the first element that sorts strictly before its predecessor.
pub fn first_unsorted<S: AsRef<str>>(strings: &[S]) -> Option<usize> {
    strings
        .iter()
        .tuple_windows::<(_, _)>()
        .position(|(a, b)| compare(a.as_ref(), b.as_ref()) == Ordering::Greater)
        .map(|i| i + 1)
}

pub fn is_sorted<S: AsRef<str>>(strings: &[S]) -> bool {
    first_unsorted(strings).is_none()
}

/// Length in bytes of the longest common prefix of `a` and `b`, measured on
/// `a` and compared case-insensitively.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    let mut len = 0;
    for ((i, x), y) in a.char_indices().zip(b.chars()) {
        if fold(x) != fold(y) {
            return i;
        }
        len = i + x.len_utf8();
    }

    len
}

fn fold(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
