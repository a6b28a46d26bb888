//! Text diffs for two pasted blocks of text.
//!
//! [`build_diff`] produces everything a viewer needs in one go: a word-level
//! inline diff, an aligned line table for a split view, and line counts.
//! The [`share`] module packs a comparison into URL query parameters.
//!
//! ```
//! use diffly::build_diff;
//!
//! let result = build_diff("a\nb\nc\n", "a\nx\nc\n");
//! assert!(result.has_changes);
//! assert_eq!(result.summary.changed, 1);
//! ```

pub mod cleanup;
pub mod config;
pub mod error;
pub mod export;
pub mod inline;
pub mod lines;
pub mod myers;
pub mod options;
pub mod serialization;
pub mod share;
pub mod tokenize;
pub mod types;

pub use error::{DifflyError, Result};
pub use inline::{diff_words, diff_words_with, to_html_spans};
pub use lines::{diff_lines, diff_lines_with, LineDiff};
pub use options::DiffOptions;
pub use types::*;

/// Diffs two texts with the default [`DiffOptions`].
pub fn build_diff(original: &str, modified: &str) -> DiffResult {
    build_diff_with(original, modified, &DiffOptions::default())
}

/// Diffs two texts both word by word and line by line.
///
/// Never fails: any pair of strings, empty ones included, has a diff.
pub fn build_diff_with(original: &str, modified: &str, options: &DiffOptions) -> DiffResult {
    let inline = diff_words_with(original, modified, options);
    let LineDiff { lines, summary } = diff_lines_with(original, modified, options);
    let has_changes = summary.has_changes();

    DiffResult {
        inline,
        lines,
        summary,
        has_changes,
    }
}
