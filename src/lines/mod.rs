mod builder;

use crate::cleanup;
use crate::myers::{self, chunks, Op};
use crate::options::DiffOptions;
use crate::tokenize;
use crate::types::{DiffLine, DiffSummary};
use builder::RowBuilder;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// The split view of a comparison: aligned rows plus their counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    pub lines: Vec<DiffLine>,
    pub summary: DiffSummary,
}

/// Line-level diff of two texts with the default [`DiffOptions`].
///
/// ```
/// use diffly::{diff_lines, DiffKind};
///
/// let diff = diff_lines("a\nb\nc\n", "a\nx\nc\n");
/// let kinds: Vec<DiffKind> = diff.lines.iter().map(|l| l.kind).collect();
/// assert_eq!(kinds, [DiffKind::Equal, DiffKind::Replace, DiffKind::Equal]);
/// assert_eq!(diff.summary.changed, 1);
/// ```
pub fn diff_lines(original: &str, modified: &str) -> LineDiff {
    diff_lines_with(original, modified, &DiffOptions::default())
}

/// Line-level diff of two texts.
///
/// Lines are compared whole. The raw edit script goes through the semantic
/// and then the efficiency cleanup before rows are built. A deletion directly
/// followed by an insertion is read as a modification: its lines pair up as
/// `replace` rows and only the surplus on either side becomes `delete` or
/// `insert` rows.
pub fn diff_lines_with(original: &str, modified: &str, options: &DiffOptions) -> LineDiff {
    let started = Instant::now();
    let old = tokenize::lines(original);
    let new = tokenize::lines(modified);

    let edits = myers::diff_with_deadline(&old, &new, options.deadline());
    let script = cleanup::merge(chunks(edits));
    let script = cleanup::semantic(script);
    let script = cleanup::efficiency(script, options.edit_cost);

    let mut builder = RowBuilder::new();
    let mut script = script.into_iter().filter(|c| !c.is_empty()).peekable();
    while let Some(chunk) = script.next() {
        match chunk.op {
            Op::Equal => builder.equal(&chunk.items),
            Op::Delete => match script.next_if(|next| next.op == Op::Insert) {
                Some(inserted) => builder.replace(&chunk.items, &inserted.items),
                None => builder.delete(&chunk.items),
            },
            Op::Insert => builder.insert(&chunk.items),
        }
    }
    let (lines, summary) = builder.finish();

    debug!(
        "line diff: {} -> {} lines, {} rows ({:?}) in {:?}",
        old.len(),
        new.len(),
        lines.len(),
        summary,
        started.elapsed()
    );
    LineDiff { lines, summary }
}
