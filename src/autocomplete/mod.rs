#[cfg(test)]
mod tests;

use std::ops::Range;

use crate::{
    error::{Error, Result},
    prefix::{common_prefix_len, left_border_index, right_border_index, starts_with},
};

/// Returns the first phrase starting with `prefix`, if any.
pub fn find_first_by_prefix<'a, S: AsRef<str>>(phrases: &'a [S], prefix: &str) -> Option<&'a str> {
    let index = match_start(phrases, prefix);
    phrases
        .get(index)
        .map(|phrase| phrase.as_ref())
        .filter(|phrase| starts_with(phrase, prefix))
}

/// Returns up to `count` phrases starting with `prefix`, in list order.
///
/// Runs in `O(log n + count)`. A negative `count` yields nothing.
pub fn top_by_prefix<'a, S: AsRef<str>>(
    phrases: &'a [S],
    prefix: &str,
    count: isize,
) -> Vec<&'a str> {
    let start = match_start(phrases, prefix);
    if start == phrases.len() {
        return Vec::new();
    }

    let count = usize::try_from(count).unwrap_or(0);
    let limit = count.min(phrases.len() - start);
    phrases[start..start + limit]
        .iter()
        .map(|phrase| phrase.as_ref())
        .take_while(|phrase| starts_with(phrase, prefix))
        .collect()
}

/// Returns the number of phrases starting with `prefix` in `O(log n)`.
pub fn count_by_prefix<S: AsRef<str>>(phrases: &[S], prefix: &str) -> usize {
    let n = sentinel(phrases);
    let left = left_border_index(phrases, prefix, -1, n);
    let right = right_border_index(phrases, prefix, -1, n);
    usize::try_from(right - left - 1).unwrap_or(0)
}

/// Index range of every phrase starting with `prefix`. Empty, and positioned
/// where such phrases would be inserted, when nothing matches.
pub fn prefix_range<S: AsRef<str>>(phrases: &[S], prefix: &str) -> Range<usize> {
    let start = match_start(phrases, prefix);
    let end = start + count_by_prefix(phrases, prefix);
    start..end
}

pub fn find_one_by_prefix<'a, S: AsRef<str>>(phrases: &'a [S], prefix: &str) -> Result<&'a str> {
    match prefix_range(phrases, prefix).len() {
        0 => Err(Error::NoItemForPrefix(prefix.to_owned())),
        1 => Ok(phrases[match_start(phrases, prefix)].as_ref()),
        _ => Err(Error::MultipleItemsForPrefix(prefix.to_owned())),
    }
}

/// Longest prefix shared by every phrase starting with `prefix`, sliced from
/// the first of them. Only the ends of the range need comparing, since
/// everything between them sorts in between.
pub fn common_completion<'a, S: AsRef<str>>(phrases: &'a [S], prefix: &str) -> Option<&'a str> {
    let range = prefix_range(phrases, prefix);
    let first = phrases[range.clone()].first()?.as_ref();
    let last = phrases[range].last()?.as_ref();
    let len = common_prefix_len(first, last);
    Some(&first[..len])
}

fn match_start<S: AsRef<str>>(phrases: &[S], prefix: &str) -> usize {
    let left = left_border_index(phrases, prefix, -1, sentinel(phrases));
    // `left` is at least -1
    usize::try_from(left + 1).unwrap_or(0)
}

// slices of non-zero-sized elements never exceed `isize::MAX` entries
#[allow(clippy::cast_possible_wrap)]
fn sentinel<S>(phrases: &[S]) -> isize {
    phrases.len() as isize
}
