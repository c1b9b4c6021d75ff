use crate::{
    autocomplete::{
        common_completion, count_by_prefix as count, find_first_by_prefix as first,
        find_one_by_prefix, prefix_range, top_by_prefix as top,
    },
    error::Error,
    prefix::{is_sorted, starts_with},
};

const VOCABULARY: [&str; 10] = ["", "a", "A", "ab", "aB", "abc", "b", "ba", "Bb", "c"];
const PREFIXES: [&str; 13] = [
    "", "a", "A", "ab", "AB", "abc", "abcd", "b", "B", "bb", "c", "d", "0",
];

fn words(input: &str) -> Vec<&str> {
    input.split_ascii_whitespace().collect()
}

fn brute_force<'a>(phrases: &[&'a str], prefix: &str) -> Vec<&'a str> {
    phrases
        .iter()
        .copied()
        .filter(|phrase| starts_with(phrase, prefix))
        .collect()
}

/// Every non-decreasing selection of up to `max_len` words from the vocabulary.
fn sorted_lists(max_len: usize) -> Vec<Vec<&'static str>> {
    let mut lists = vec![vec![]];
    let mut frontier: Vec<(usize, Vec<&str>)> = vec![(0, vec![])];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for (start, list) in &frontier {
            for (i, word) in VOCABULARY.iter().enumerate().skip(*start) {
                let mut extended = list.clone();
                extended.push(*word);
                next.push((i, extended));
            }
        }
        lists.extend(next.iter().map(|(_, list)| list.clone()));
        frontier = next;
    }
    lists
}

#[test]
fn vocabulary_is_sorted() {
    assert!(is_sorted(&VOCABULARY));
    assert_eq!(sorted_lists(2).len(), 1 + 10 + 55);
}

#[test]
fn count_matches_brute_force() {
    for phrases in sorted_lists(4) {
        for prefix in PREFIXES {
            let expected = brute_force(&phrases, prefix).len();
            assert_eq!(count(&phrases, prefix), expected, "{phrases:?} / {prefix:?}");
        }
    }
}

#[test]
fn top_matches_brute_force() {
    for phrases in sorted_lists(4) {
        for prefix in PREFIXES {
            let expected = brute_force(&phrases, prefix);
            for n in -1..=5 {
                let limit = usize::try_from(n).unwrap_or(0).min(expected.len());
                assert_eq!(
                    top(&phrases, prefix, n),
                    &expected[..limit],
                    "{phrases:?} / {prefix:?} / {n}"
                );
            }
        }
    }
}

#[test]
fn first_matches_top() {
    for phrases in sorted_lists(4) {
        for prefix in PREFIXES {
            assert_eq!(
                first(&phrases, prefix),
                top(&phrases, prefix, 1).first().copied(),
                "{phrases:?} / {prefix:?}"
            );
        }
    }
}

#[test]
fn range_covers_matches() {
    for phrases in sorted_lists(4) {
        for prefix in PREFIXES {
            let range = prefix_range(&phrases, prefix);
            assert_eq!(phrases[range], brute_force(&phrases, prefix)[..]);
        }
    }
}

#[test]
fn top_boundary() {
    let phrases = words("can candy candys candyshop");
    assert_eq!(top(&phrases, "ca", 2), words("can candy"));
    assert_eq!(top(&phrases, "candy", 2), words("candy candys"));
    assert_eq!(top(&phrases, "candys", 10), words("candys candyshop"));
}

#[test]
fn top_no_match() {
    let phrases = words("can cand candy");
    assert!(top(&phrases, "a", 0).is_empty());
    assert!(top(&phrases, "a", 3).is_empty());
    assert!(top(&phrases, "d", 3).is_empty());
    assert!(top(&phrases, "cb", 3).is_empty());
    assert_eq!(count(&phrases, "a"), 0);
    assert_eq!(first(&phrases, "a"), None);
}

#[test]
fn top_zero_or_negative_count() {
    let phrases = words("can cand candy");
    assert!(top(&phrases, "c", 0).is_empty());
    assert!(top(&phrases, "c", -1).is_empty());
    assert!(top(&phrases, "", isize::MIN).is_empty());
}

#[test]
fn top_count_larger_than_matches() {
    let phrases = words("apple can cand candy dog");
    assert_eq!(top(&phrases, "can", 100), words("can cand candy"));
    assert_eq!(top(&phrases, "", isize::MAX).len(), 5);
}

#[test]
fn empty_phrases() {
    let phrases = words("");
    for prefix in ["", "q"] {
        assert!(top(&phrases, prefix, 0).is_empty());
        assert!(top(&phrases, prefix, 5).is_empty());
        assert_eq!(count(&phrases, prefix), 0);
        assert_eq!(first(&phrases, prefix), None);
        assert_eq!(prefix_range(&phrases, prefix), 0..0);
        assert_eq!(common_completion(&phrases, prefix), None);
    }
}

#[test]
fn count_empty_prefix_is_total() {
    let phrases = words("i love programming");
    assert_eq!(count(&phrases, ""), 3);
}

#[test]
fn count_all_match() {
    let phrases = words("he hell hello help");
    assert_eq!(count(&phrases, "he"), 4);
    assert_eq!(count(&phrases, "HEL"), 3);
    assert_eq!(count(&phrases, "hello"), 1);
    assert_eq!(count(&phrases, "helloo"), 0);
}

#[test]
fn case_insensitive_matching() {
    let phrases = words("Apple banana BANANAS Cherry");
    assert_eq!(first(&phrases, "BAN"), Some("banana"));
    assert_eq!(top(&phrases, "bananas", 5), words("BANANAS"));
    assert_eq!(count(&phrases, "c"), 1);
    assert_eq!(first(&phrases, "ch"), Some("Cherry"));
}

#[test]
fn owned_strings() {
    let phrases: Vec<String> = words("can candy dog").into_iter().map(String::from).collect();
    assert_eq!(first(&phrases, "cand"), Some("candy"));
    assert_eq!(count(&phrases, "c"), 2);
}

#[test]
fn repeated_calls_agree() {
    let phrases = words("a ab abc b");
    let once = (first(&phrases, "ab"), top(&phrases, "ab", 3), count(&phrases, "ab"));
    let twice = (first(&phrases, "ab"), top(&phrases, "ab", 3), count(&phrases, "ab"));
    assert_eq!(once, twice);
}

#[test]
fn find_one() {
    let phrases = words("can candy dog");
    assert_eq!(find_one_by_prefix(&phrases, "d"), Ok("dog"));
    assert_eq!(find_one_by_prefix(&phrases, "candy"), Ok("candy"));
    assert_eq!(
        find_one_by_prefix(&phrases, "ca"),
        Err(Error::MultipleItemsForPrefix("ca".to_owned()))
    );
    assert_eq!(
        find_one_by_prefix(&phrases, "e"),
        Err(Error::NoItemForPrefix("e".to_owned()))
    );
}

#[test]
fn completion() {
    let phrases = words("can Candy CANDYS candyshop dog");
    assert_eq!(common_completion(&phrases, "ca"), Some("can"));
    assert_eq!(common_completion(&phrases, "cand"), Some("Candy"));
    assert_eq!(common_completion(&phrases, "candys"), Some("CANDYS"));
    assert_eq!(common_completion(&phrases, "d"), Some("dog"));
    assert_eq!(common_completion(&phrases, "x"), None);
    assert_eq!(common_completion(&phrases, ""), Some(""));
}
