use crate::cleanup;
use crate::myers::{self, chunks};
use crate::options::DiffOptions;
use crate::tokenize;
use crate::types::{DiffSpan, DiffToken};

/// Word-level diff of two texts, as one run of tokens per edit.
///
/// Words and the whitespace between them are compared as atomic units.
/// Adjacent deletions and insertions stay separate tokens (deletion first);
/// they are never merged into a replacement at this granularity.
///
/// ```
/// use diffly::{diff_words, DiffKind};
///
/// let tokens = diff_words("the quick fox", "the slow fox");
/// let kinds: Vec<DiffKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [DiffKind::Equal, DiffKind::Delete, DiffKind::Insert, DiffKind::Equal]);
/// assert_eq!(tokens[1].value, "quick");
/// assert_eq!(tokens[2].value, "slow");
/// ```
pub fn diff_words(original: &str, modified: &str) -> Vec<DiffToken> {
    diff_words_with(original, modified, &DiffOptions::default())
}

/// Word-level diff bounded by `options.timeout`.
///
/// Past the deadline the unmatched middle is reported as one deletion
/// followed by one insertion, as for the line diff.
pub fn diff_words_with(original: &str, modified: &str, options: &DiffOptions) -> Vec<DiffToken> {
    let old = tokenize::words(original);
    let new = tokenize::words(modified);
    let edits = myers::diff_with_deadline(&old, &new, options.deadline());
    let script = cleanup::merge(chunks(edits));

    script
        .into_iter()
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| DiffToken {
            kind: chunk.op.into(),
            value: chunk.items.concat(),
        })
        .filter(|token| !token.value.is_empty())
        .collect()
}

/// Decorates tokens with a stable key and an accessible label.
pub fn to_html_spans(tokens: &[DiffToken]) -> Vec<DiffSpan> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| DiffSpan {
            kind: token.kind,
            value: token.value.clone(),
            key: format!("{}-{}", token.kind, index),
            aria_label: token.kind.aria_label(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiffKind;
    use proptest::prelude::*;
    use std::time::Duration;

    fn token(kind: DiffKind, value: &str) -> DiffToken {
        DiffToken {
            kind,
            value: value.to_string(),
        }
    }

    fn side(tokens: &[DiffToken], skip: DiffKind) -> String {
        tokens
            .iter()
            .filter(|t| t.kind != skip)
            .map(|t| t.value.as_str())
            .collect()
    }

    #[test]
    fn test_empty_inputs() {
        assert!(diff_words("", "").is_empty());
        assert_eq!(diff_words("", "a"), vec![token(DiffKind::Insert, "a")]);
        assert_eq!(diff_words("a", ""), vec![token(DiffKind::Delete, "a")]);
    }

    #[test]
    fn test_identical() {
        assert_eq!(
            diff_words("same words here", "same words here"),
            vec![token(DiffKind::Equal, "same words here")]
        );
    }

    #[test]
    fn test_word_replacement() {
        assert_eq!(
            diff_words("Hello world", "Hello there world"),
            vec![
                token(DiffKind::Equal, "Hello "),
                token(DiffKind::Insert, "there "),
                token(DiffKind::Equal, "world"),
            ]
        );
    }

    #[test]
    fn test_delete_reads_before_insert() {
        assert_eq!(
            diff_words("a cat sat", "a dog sat"),
            vec![
                token(DiffKind::Equal, "a "),
                token(DiffKind::Delete, "cat"),
                token(DiffKind::Insert, "dog"),
                token(DiffKind::Equal, " sat"),
            ]
        );
    }

    #[test]
    fn test_whole_words_only() {
        let tokens = diff_words("kitten", "sitting");
        assert_eq!(
            tokens,
            vec![token(DiffKind::Delete, "kitten"), token(DiffKind::Insert, "sitting")]
        );
    }

    #[test]
    fn test_spans() {
        let spans = to_html_spans(&diff_words("a b", "a c"));
        let keys: Vec<&str> = spans.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["equal-0", "delete-1", "insert-2"]);
        assert_eq!(spans[1].aria_label, "removed text");
        assert_eq!(spans[2].aria_label, "added text");
    }

    #[test]
    fn test_long_paste_with_every_word_changed() {
        let original: String = (0..15_000).map(|i| format!("a{} ", i)).collect();
        let modified: String = (0..15_000).map(|i| format!("b{} ", i)).collect();
        let options = DiffOptions {
            timeout: Some(Duration::from_millis(200)),
            ..DiffOptions::default()
        };
        let tokens = diff_words_with(&original, &modified, &options);
        assert_eq!(side(&tokens, DiffKind::Insert), original);
        assert_eq!(side(&tokens, DiffKind::Delete), modified);
    }

    #[test]
    fn test_expired_timeout_replaces_whole_middle() {
        let options = DiffOptions {
            timeout: Some(Duration::ZERO),
            ..DiffOptions::default()
        };
        assert_eq!(
            diff_words_with("keep one two keep", "keep two three keep", &options),
            vec![
                token(DiffKind::Equal, "keep "),
                token(DiffKind::Delete, "one two"),
                token(DiffKind::Insert, "two three"),
                token(DiffKind::Equal, " keep"),
            ]
        );
        assert_eq!(
            diff_words_with("keep one two keep", "keep two three keep", &DiffOptions::unbounded()),
            vec![
                token(DiffKind::Equal, "keep "),
                token(DiffKind::Delete, "one "),
                token(DiffKind::Equal, "two"),
                token(DiffKind::Insert, " three"),
                token(DiffKind::Equal, " keep"),
            ]
        );
    }

    proptest! {
        #[test]
        fn test_reconstructs_both_texts(original in "[ab \n]{0,24}", modified in "[ab \n]{0,24}") {
            let tokens = diff_words(&original, &modified);
            prop_assert_eq!(side(&tokens, DiffKind::Insert), original.clone());
            prop_assert_eq!(side(&tokens, DiffKind::Delete), modified.clone());
            prop_assert!(tokens.iter().all(|t| !t.value.is_empty() && t.kind != DiffKind::Replace));
            prop_assert_eq!(diff_words(&original, &modified), tokens);
        }
    }
}
