//! # Line Strategies
//!
//! Each strategy turns one normalized line into a [`LinearEntry`]. The level
//! of an entry comes from a different cue per strategy:
//!
//! - **`indent`**: leading whitespace, measured in a unit learned from the
//!   first indented line of the document
//! - **`sequence`**: the dotted sequence marker (`1.2.5`), either in its plain
//!   numeric form or wrapped in Chinese numerals and units (`第1章`)
//!
//! One strategy is chosen per parse call via [`StrategySelector::resolve`],
//! and [`StrategyKind::session`] hands out a fresh [`LineParser`] so no
//! learned state leaks between documents.

pub mod indent;
pub mod sequence;

use regex::Captures;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::models::LinearEntry;
use crate::parsing::preprocess::CleanLine;

pub use indent::IndentParser;
pub use sequence::{ChineseSequenceParser, StandardSequenceParser};

/// How the caller wants the strategy chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategySelector {
    /// Chinese sequences when the text contains CJK ideographs, standard
    /// sequences otherwise.
    #[default]
    Auto,
    Indent,
    StandardSequence,
    ChineseSequence,
}

impl StrategySelector {
    pub fn resolve(self, text: &str) -> StrategyKind {
        match self {
            Self::Auto if contains_cjk(text) => StrategyKind::ChineseSequence,
            Self::Auto => StrategyKind::StandardSequence,
            Self::Indent => StrategyKind::Indent,
            Self::StandardSequence => StrategyKind::StandardSequence,
            Self::ChineseSequence => StrategyKind::ChineseSequence,
        }
    }
}

/// The strategy used for one parse pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Indent,
    StandardSequence,
    ChineseSequence,
}

impl StrategyKind {
    /// A new parser with empty per-document state.
    pub fn session(self) -> LineParser {
        match self {
            Self::Indent => LineParser::Indent(IndentParser::new()),
            Self::StandardSequence => LineParser::StandardSequence(StandardSequenceParser),
            Self::ChineseSequence => LineParser::ChineseSequence(ChineseSequenceParser),
        }
    }
}

#[derive(Debug)]
pub enum LineParser {
    Indent(IndentParser),
    StandardSequence(StandardSequenceParser),
    ChineseSequence(ChineseSequenceParser),
}

impl LineParser {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Indent(_) => StrategyKind::Indent,
            Self::StandardSequence(_) => StrategyKind::StandardSequence,
            Self::ChineseSequence(_) => StrategyKind::ChineseSequence,
        }
    }

    pub fn parse_line(
        &mut self,
        line: &CleanLine<'_>,
        offset: i32,
    ) -> Result<LinearEntry, FormatError> {
        match self {
            Self::Indent(parser) => parser.parse_line(line, offset),
            Self::StandardSequence(parser) => parser.parse_line(line, offset),
            Self::ChineseSequence(parser) => parser.parse_line(line, offset),
        }
    }
}

/// Whether `text` contains a CJK unified ideograph.
pub fn contains_cjk(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}'))
}

pub(crate) fn format_error(line: &CleanLine<'_>) -> FormatError {
    FormatError {
        line: line.raw.to_string(),
        line_number: line.line_number,
    }
}

/// Trailing page group plus offset. A page that does not fit in `i32` makes
/// the line unparseable.
pub(crate) fn page_number(
    caps: &Captures<'_>,
    offset: i32,
    line: &CleanLine<'_>,
) -> Result<Option<i32>, FormatError> {
    let Some(page) = caps.name("page") else {
        return Ok(None);
    };
    page.as_str()
        .parse::<i32>()
        .ok()
        .and_then(|n| n.checked_add(offset))
        .map(Some)
        .ok_or_else(|| format_error(line))
}
