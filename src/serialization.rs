//! Plain-text and HTML renderings of a diff, for copying and exporting.

use crate::types::{DiffKind, DiffLine, DiffResult, DiffSummary, DiffToken, LineSide};
use html_escape::{encode_double_quoted_attribute, encode_text};

pub trait ToPlainText {
    fn to_plain_text(&self) -> String;
}

pub trait ToHtml {
    fn to_html(&self) -> String;
}

fn side_value(side: &Option<LineSide>) -> &str {
    side.as_ref().map_or("", |s| s.value.as_str())
}

fn side_number(side: &Option<LineSide>) -> String {
    side.as_ref()
        .map_or_else(String::new, |s| s.line_number.to_string())
}

impl ToPlainText for DiffSummary {
    fn to_plain_text(&self) -> String {
        format!(
            "Added: {}, Removed: {}, Changed: {}",
            self.added, self.removed, self.changed
        )
    }
}

impl ToPlainText for DiffLine {
    fn to_plain_text(&self) -> String {
        match self.kind {
            DiffKind::Equal => format!("  {}", side_value(&self.left)),
            DiffKind::Insert => format!("+ {}", side_value(&self.right)),
            DiffKind::Delete => format!("- {}", side_value(&self.left)),
            DiffKind::Replace => format!(
                "~ {} → {}",
                side_value(&self.left),
                side_value(&self.right)
            ),
        }
    }
}

impl ToPlainText for [DiffLine] {
    fn to_plain_text(&self) -> String {
        self.iter()
            .map(|line| line.to_plain_text())
            .collect::<Vec<String>>()
            .join("\n")
    }
}

/// Inline tokens in `wdiff` notation: `[-removed-]{+added+}`.
impl ToPlainText for [DiffToken] {
    fn to_plain_text(&self) -> String {
        self.iter()
            .map(|token| match token.kind {
                DiffKind::Delete => format!("[-{}-]", token.value),
                DiffKind::Insert => format!("{{+{}+}}", token.value),
                DiffKind::Equal | DiffKind::Replace => token.value.clone(),
            })
            .collect()
    }
}

impl ToPlainText for DiffResult {
    fn to_plain_text(&self) -> String {
        if self.lines.is_empty() {
            return format!("{}\n\nNo differences.\n", self.summary.to_plain_text());
        }
        format!(
            "{}\n\n{}\n",
            self.summary.to_plain_text(),
            self.lines.to_plain_text()
        )
    }
}

impl ToHtml for DiffToken {
    fn to_html(&self) -> String {
        format!(
            "<span class=\"diff-{}\" aria-label=\"{}\">{}</span>",
            self.kind,
            encode_double_quoted_attribute(self.kind.aria_label()),
            encode_text(&self.value)
        )
    }
}

impl ToHtml for DiffLine {
    fn to_html(&self) -> String {
        format!(
            "<tr class=\"diff-{}\"><td class=\"line-number\">{}</td><td class=\"line-text\">{}</td><td class=\"line-number\">{}</td><td class=\"line-text\">{}</td></tr>",
            self.kind,
            side_number(&self.left),
            encode_text(side_value(&self.left)),
            side_number(&self.right),
            encode_text(side_value(&self.right))
        )
    }
}

impl ToHtml for DiffSummary {
    fn to_html(&self) -> String {
        format!(
            "<ul class=\"diff-summary\"><li class=\"diff-insert\">Added {}</li><li class=\"diff-delete\">Removed {}</li><li class=\"diff-replace\">Changed {}</li></ul>",
            self.added, self.removed, self.changed
        )
    }
}

const STYLE: &str = "body{font-family:ui-monospace,monospace}\
.diff-insert{background:#e6ffec}\
.diff-delete{background:#ffebe9}\
.diff-replace{background:#fff8c5}\
span.diff-delete{text-decoration:line-through}\
.line-number{color:#6e7781;text-align:right;padding-right:.5em}\
.line-text{white-space:pre-wrap}";

impl ToHtml for DiffResult {
    fn to_html(&self) -> String {
        let inline: String = self.inline.iter().map(ToHtml::to_html).collect();
        let rows: String = self.lines.iter().map(ToHtml::to_html).collect();
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>diffly</title>\n<style>{}</style>\n</head>\n<body>\n{}\n<pre class=\"diff-inline\">{}</pre>\n<table class=\"diff-split\">\n<tbody>\n{}\n</tbody>\n</table>\n</body>\n</html>\n",
            STYLE,
            self.summary.to_html(),
            inline,
            rows
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_diff;

    #[test]
    fn test_plain_text_rows() {
        let result = build_diff("a\nb\nc\nd\ne\nf\n", "a\nx\nc\nd\ne\n");
        assert_eq!(
            result.to_plain_text(),
            "Added: 0, Removed: 1, Changed: 1\n\n  a\n~ b → x\n  c\n  d\n  e\n- f\n"
        );
    }

    #[test]
    fn test_plain_text_insertions() {
        let result = build_diff("", "hello\n");
        assert_eq!(
            result.to_plain_text(),
            "Added: 1, Removed: 0, Changed: 0\n\n+ hello\n"
        );
    }

    #[test]
    fn test_plain_text_empty() {
        let result = build_diff("", "");
        assert_eq!(
            result.to_plain_text(),
            "Added: 0, Removed: 0, Changed: 0\n\nNo differences.\n"
        );
    }

    #[test]
    fn test_inline_plain_text() {
        let result = build_diff("a cat sat", "a dog sat");
        assert_eq!(result.inline.to_plain_text(), "a [-cat-]{+dog+} sat");
    }

    #[test]
    fn test_token_html_is_escaped() {
        let token = DiffToken {
            kind: DiffKind::Insert,
            value: "<b>&</b>".to_string(),
        };
        assert_eq!(
            token.to_html(),
            "<span class=\"diff-insert\" aria-label=\"added text\">&lt;b&gt;&amp;&lt;/b&gt;</span>"
        );
    }

    #[test]
    fn test_row_html() {
        let row = DiffLine::delete("x < y", 3);
        assert_eq!(
            row.to_html(),
            "<tr class=\"diff-delete\"><td class=\"line-number\">3</td><td class=\"line-text\">x &lt; y</td><td class=\"line-number\"></td><td class=\"line-text\"></td></tr>"
        );
    }

    #[test]
    fn test_document_html() {
        let html = build_diff("a\nb\n", "a\nc\n").to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<tr class=\"diff-replace\">"));
        assert!(html.contains("<span class=\"diff-delete\" aria-label=\"removed text\">b</span>"));
        assert!(html.contains("Changed 1"));
    }
}
