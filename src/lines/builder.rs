use crate::types::{DiffLine, DiffSummary};

/// Turns runs of equal, deleted and inserted lines into table rows while
/// keeping a 1-based line counter per side.
pub(crate) struct RowBuilder {
    left_line: usize,
    right_line: usize,
    rows: Vec<DiffLine>,
    summary: DiffSummary,
}

impl RowBuilder {
    pub(crate) fn new() -> Self {
        RowBuilder {
            left_line: 1,
            right_line: 1,
            rows: vec![],
            summary: DiffSummary::default(),
        }
    }

    pub(crate) fn equal(&mut self, lines: &[&str]) {
        for line in lines {
            self.rows
                .push(DiffLine::equal(line, self.left_line, self.right_line));
            self.left_line += 1;
            self.right_line += 1;
        }
    }

    /// A deletion directly followed by an insertion.
    ///
    /// Lines are paired off as replacements for as long as both sides last;
    /// whatever is left over on either side becomes plain deletions or
    /// insertions.
    pub(crate) fn replace(&mut self, deleted: &[&str], inserted: &[&str]) {
        let shared = deleted.len().min(inserted.len());
        self.summary.changed += shared;
        for (offset, (left, right)) in deleted.iter().zip(inserted).enumerate() {
            self.rows.push(DiffLine::replace(
                left,
                self.left_line + offset,
                right,
                self.right_line + offset,
            ));
        }

        self.summary.removed += deleted.len() - shared;
        for (offset, line) in deleted.iter().enumerate().skip(shared) {
            self.rows.push(DiffLine::delete(line, self.left_line + offset));
        }

        self.summary.added += inserted.len() - shared;
        for (offset, line) in inserted.iter().enumerate().skip(shared) {
            self.rows.push(DiffLine::insert(line, self.right_line + offset));
        }

        self.left_line += deleted.len();
        self.right_line += inserted.len();
    }

    pub(crate) fn delete(&mut self, lines: &[&str]) {
        self.summary.removed += lines.len();
        for line in lines {
            self.rows.push(DiffLine::delete(line, self.left_line));
            self.left_line += 1;
        }
    }

    pub(crate) fn insert(&mut self, lines: &[&str]) {
        self.summary.added += lines.len();
        for line in lines {
            self.rows.push(DiffLine::insert(line, self.right_line));
            self.right_line += 1;
        }
    }

    pub(crate) fn finish(self) -> (Vec<DiffLine>, DiffSummary) {
        (self.rows, self.summary)
    }
}
