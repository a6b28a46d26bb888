//! Splitting text into the elements the diff engine compares.

/// Splits `input` into lines.
///
/// `\r\n` counts as a plain `\n`, and one trailing empty line caused by a
/// final terminator is dropped, so `"a\nb\n"` and `"a\r\nb"` both give
/// `["a", "b"]` and the empty string gives no lines at all.
pub fn lines(input: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = input.split('\n').collect();
    // Only a '\r' that precedes a '\n' belongs to a line ending.
    let terminated = lines.len() - 1;
    for line in lines[..terminated].iter_mut() {
        if let Some(stripped) = line.strip_suffix('\r') {
            *line = stripped;
        }
    }
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Word,
    Space,
    Symbol,
}

fn classify(ch: char) -> Class {
    if ch.is_alphanumeric() || ch == '_' {
        Class::Word
    } else if ch.is_whitespace() {
        Class::Space
    } else {
        Class::Symbol
    }
}

/// Splits `input` into words, whitespace runs and single punctuation marks.
///
/// Concatenating the tokens gives back `input` unchanged.
pub fn words(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<Class> = None;
    for (index, ch) in input.char_indices() {
        let class = classify(ch);
        if let Some(previous) = current {
            if previous != class || class == Class::Symbol {
                tokens.push(&input[start..index]);
                start = index;
            }
        }
        current = Some(class);
    }
    if start < input.len() {
        tokens.push(&input[start..]);
    }
    tokens
}
