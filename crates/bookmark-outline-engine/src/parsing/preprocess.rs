use std::sync::OnceLock;

use regex::Regex;

/// A non-blank source line after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanLine<'a> {
    /// Normalized text handed to the line strategies.
    pub text: String,
    /// The line as it appeared in the source, for diagnostics.
    pub raw: &'a str,
    /// 1-based line number in the source.
    pub line_number: usize,
}

/// Iterator over the candidate lines of a text. Clones are independent
/// cursors over the same text.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Split<'a, char>>,
}

/// Split `text` on `\n` and normalize every line, dropping blank ones.
pub fn preprocess(text: &str) -> Lines<'_> {
    Lines {
        inner: text.split('\n').enumerate(),
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = CleanLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, raw) in self.inner.by_ref() {
            let text = normalize(raw);
            if text.is_empty() {
                continue;
            }
            return Some(CleanLine {
                text,
                raw,
                line_number: index + 1,
            });
        }
        None
    }
}

/// Normalize a single line.
///
/// - replacement characters (U+FFFD) are removed
/// - each indentation character becomes one ASCII space, so the indentation
///   width in characters is kept
/// - after the indentation, whitespace runs (full-width included) collapse
///   to one space
/// - `" . "` and `"．"` become a bare `"."`
/// - trailing whitespace is trimmed
pub fn normalize(line: &str) -> String {
    static DOT_SEPARATOR: OnceLock<Regex> = OnceLock::new();
    let dot_separator = DOT_SEPARATOR
        .get_or_init(|| Regex::new(r" ?\. ?| ?． ?").expect("Invalid dot separator regex"));

    let line = line.replace('\u{FFFD}', "");
    let body_start = line
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(line.len());
    let (indent, body) = line.split_at(body_start);

    let mut out: String = indent.chars().map(|_| ' ').collect();
    out.push_str(&dot_separator.replace_all(&collapse_whitespace(body), "."));
    out.truncate(out.trim_end().len());
    out
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}
