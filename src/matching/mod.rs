//! Pure filter and highlight computations over choice labels.
//!
//! Nothing in this module touches the terminal: given the current query text
//! it decides which choices are visible and which character spans inside a
//! visible label should be emphasized. Keeping it free of UI types makes the
//! semantics testable without a terminal harness.

use std::ops::Range;

use crate::catalog::Choice;

/// Lowercase a string one character at a time so that the folded string has
/// the same char length as the input. For the rare characters whose lowercase
/// form expands to multiple characters only the first is kept; this keeps
/// highlight indices aligned with the original label.
fn fold(text: &str) -> Vec<char> {
    text.chars()
        .map(|ch| ch.to_lowercase().next().unwrap_or(ch))
        .collect()
}

/// Indices of the choices whose label contains `query` case-insensitively.
///
/// An empty query matches everything. Result order follows the input order;
/// no scoring or re-ranking happens here.
pub fn filter_indices(choices: &[Choice], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..choices.len()).collect();
    }
    let needle = fold(query);
    choices
        .iter()
        .enumerate()
        .filter(|(_, choice)| contains(&fold(&choice.label), &needle))
        .map(|(index, _)| index)
        .collect()
}

/// Char-index ranges of every case-insensitive occurrence of `query` inside
/// `label`, left to right and non-overlapping.
///
/// The query is always treated as literal text; characters that carry
/// meaning in pattern languages (`(`, `.`, `*`, ...) match themselves. An
/// empty query yields no spans, so nothing is ever emphasized for it.
pub fn match_spans(label: &str, query: &str) -> Vec<Range<usize>> {
    if query.is_empty() {
        return Vec::new();
    }
    let haystack = fold(label);
    let needle = fold(query);
    if needle.len() > haystack.len() {
        return Vec::new();
    }

    let mut spans = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            spans.push(start..start + needle.len());
            start += needle.len();
        } else {
            start += 1;
        }
    }
    spans
}

/// Flatten spans into the per-char index list consumed by the highlight cell
/// renderer.
pub fn span_indices(spans: &[Range<usize>]) -> Vec<usize> {
    spans.iter().flat_map(|span| span.clone()).collect()
}

fn contains(haystack: &[char], needle: &[char]) -> bool {
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(labels: &[&str]) -> Vec<Choice> {
        labels
            .iter()
            .enumerate()
            .map(|(index, label)| Choice {
                value: index as u64 + 1,
                label: (*label).to_string(),
                image: String::new(),
            })
            .collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let choices = choices(&["Rick Sanchez", "Morty Smith"]);
        assert_eq!(filter_indices(&choices, ""), vec![0, 1]);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let choices = choices(&["Rick Sanchez", "Morty Smith", "Birdperson"]);
        assert_eq!(filter_indices(&choices, "ric"), vec![0]);
        assert_eq!(filter_indices(&choices, "SMITH"), vec![1]);
        assert_eq!(filter_indices(&choices, "r"), vec![0, 1, 2]);
        assert_eq!(filter_indices(&choices, "zzz"), Vec::<usize>::new());
    }

    #[test]
    fn spans_cover_every_occurrence_left_to_right() {
        let spans = match_spans("abcabc", "ab");
        assert_eq!(spans, vec![0..2, 3..5]);
    }

    #[test]
    fn spans_are_case_insensitive() {
        let spans = match_spans("Rick Sanchez", "ric");
        assert_eq!(spans, vec![0..3]);
    }

    #[test]
    fn empty_query_emphasizes_nothing() {
        assert!(match_spans("Rick Sanchez", "").is_empty());
    }

    #[test]
    fn spans_and_gaps_reconstruct_the_label() {
        let label = "Mr. Poopybutthole";
        let spans = match_spans(label, "oo");
        let chars: Vec<char> = label.chars().collect();
        let mut rebuilt = String::new();
        let mut cursor = 0;
        for span in &spans {
            rebuilt.extend(&chars[cursor..span.start]);
            rebuilt.extend(&chars[span.clone()]);
            cursor = span.end;
        }
        rebuilt.extend(&chars[cursor..]);
        assert_eq!(rebuilt, label);
        for span in &spans {
            let text: String = chars[span.clone()].iter().collect();
            assert!(text.eq_ignore_ascii_case("oo"));
        }
    }

    #[test]
    fn pattern_metacharacters_are_literal() {
        assert_eq!(match_spans("a(b)c", "(b)"), vec![1..4]);
        assert!(match_spans("abc", ".").is_empty());
        assert_eq!(match_spans("a.c", "."), vec![1..2]);
        assert!(match_spans("abc", "a*").is_empty());
    }

    #[test]
    fn filter_and_spans_agree() {
        let list = choices(&["Abradolf Lincler", "Squanchy"]);
        for query in ["a", "lin", "SQUANCH", "q", "xyz"] {
            for &index in &filter_indices(&list, query) {
                assert!(
                    !match_spans(&list[index].label, query).is_empty(),
                    "visible choice must carry at least one span for {query:?}"
                );
            }
        }
    }

    #[test]
    fn span_indices_flatten_in_order() {
        assert_eq!(span_indices(&[0..2, 3..5]), vec![0, 1, 3, 4]);
    }
}
