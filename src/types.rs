use crate::myers::Op;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a token or a row of the line table relates the two texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Equal,
    Insert,
    Delete,
    /// Only produced by the line table, for a deleted line paired with an inserted one.
    Replace,
}

impl DiffKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiffKind::Equal => "equal",
            DiffKind::Insert => "insert",
            DiffKind::Delete => "delete",
            DiffKind::Replace => "replace",
        }
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            DiffKind::Equal => "unchanged text",
            DiffKind::Insert => "added text",
            DiffKind::Delete => "removed text",
            DiffKind::Replace => "modified text",
        }
    }
}

impl From<Op> for DiffKind {
    fn from(op: Op) -> Self {
        match op {
            Op::Equal => DiffKind::Equal,
            Op::Insert => DiffKind::Insert,
            Op::Delete => DiffKind::Delete,
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous run of text from the word-level diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffToken {
    pub kind: DiffKind,
    pub value: String,
}

/// A [`DiffToken`] decorated for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSpan {
    pub kind: DiffKind,
    pub value: String,
    pub key: String,
    pub aria_label: &'static str,
}

/// One side of a row in the line table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSide {
    pub value: String,
    /// 1-based position among the lines of that side's text.
    pub line_number: usize,
}

impl LineSide {
    pub fn new(value: impl Into<String>, line_number: usize) -> Self {
        LineSide {
            value: value.into(),
            line_number,
        }
    }
}

/// A row of the aligned, two-column line table.
///
/// Insert rows have no `left`, delete rows have no `right`, equal and replace
/// rows have both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub key: String,
    pub kind: DiffKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<LineSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<LineSide>,
}

impl DiffLine {
    pub fn equal(value: &str, left_line: usize, right_line: usize) -> Self {
        DiffLine {
            key: format!("equal-{}-{}", left_line, right_line),
            kind: DiffKind::Equal,
            left: Some(LineSide::new(value, left_line)),
            right: Some(LineSide::new(value, right_line)),
        }
    }

    pub fn replace(left: &str, left_line: usize, right: &str, right_line: usize) -> Self {
        DiffLine {
            key: format!("replace-{}-{}", left_line, right_line),
            kind: DiffKind::Replace,
            left: Some(LineSide::new(left, left_line)),
            right: Some(LineSide::new(right, right_line)),
        }
    }

    pub fn delete(value: &str, left_line: usize) -> Self {
        DiffLine {
            key: format!("delete-{}", left_line),
            kind: DiffKind::Delete,
            left: Some(LineSide::new(value, left_line)),
            right: None,
        }
    }

    pub fn insert(value: &str, right_line: usize) -> Self {
        DiffLine {
            key: format!("insert-{}", right_line),
            kind: DiffKind::Insert,
            left: None,
            right: Some(LineSide::new(value, right_line)),
        }
    }
}

/// Line counts per category, not character counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

impl DiffSummary {
    pub fn total(&self) -> usize {
        self.added + self.removed + self.changed
    }

    pub fn has_changes(&self) -> bool {
        self.total() > 0
    }
}

/// Everything a view needs to render one comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub inline: Vec<DiffToken>,
    pub lines: Vec<DiffLine>,
    pub summary: DiffSummary,
    /// Whether any line was added, removed or changed.
    ///
    /// Lines are compared without their terminators, so texts that differ
    /// only in line endings or a trailing newline report `false` here even
    /// though `inline` shows the difference.
    pub has_changes: bool,
}

/// Which of the two views is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Inline,
    Split,
}

impl ViewMode {
    /// Anything but `"split"`, including nothing at all, means the inline view.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("split") => ViewMode::Split,
            _ => ViewMode::Inline,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Inline => "inline",
            ViewMode::Split => "split",
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline" => Ok(ViewMode::Inline),
            "split" => Ok(ViewMode::Split),
            other => Err(format!("unknown view mode '{}', expected 'inline' or 'split'", other)),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
