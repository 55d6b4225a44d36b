//! # Outline Parsing
//!
//! Text is turned into a bookmark tree in three phases:
//!
//! 1. **Preprocessing** (`preprocess`): blank lines are dropped and every
//!    remaining line is normalized (whitespace, dot separators, stray
//!    replacement characters)
//!
//! 2. **Line parsing** (`strategy`): one strategy, chosen per call, turns each
//!    line into a `LinearEntry` carrying title, page and nominal level
//!
//! 3. **Tree building** (`builder`): a `TreeBuilder` places the entries in a
//!    `BookmarkTree` by comparing each level with the structural depth of the
//!    previous entry
//!
//! Parsing fails fast: the first bad line aborts the call and no tree is
//! returned.

pub mod builder;
pub mod preprocess;
pub mod strategy;

use crate::error::{OutlineError, StructureError};
use crate::models::{BookmarkTree, LinearEntry, OutlineEntry};

pub use builder::TreeBuilder;
pub use preprocess::{CleanLine, Lines, preprocess};
pub use strategy::{LineParser, StrategyKind, StrategySelector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Added to every parsed page number.
    pub offset: i32,
    pub selector: StrategySelector,
}

#[derive(Debug)]
pub struct ParsedOutline {
    pub tree: BookmarkTree,
    /// Entries in source order, with the levels the strategy produced.
    pub entries: Vec<LinearEntry>,
    pub strategy: StrategyKind,
}

pub fn parse(
    text: &str,
    offset: i32,
    selector: StrategySelector,
) -> Result<BookmarkTree, OutlineError> {
    parse_outline(text, &ParseOptions { offset, selector }).map(|parsed| parsed.tree)
}

pub fn parse_outline(text: &str, options: &ParseOptions) -> Result<ParsedOutline, OutlineError> {
    let strategy = options.selector.resolve(text);
    let mut parser = strategy.session();

    let entries = preprocess(text)
        .map(|line| parser.parse_line(&line, options.offset))
        .collect::<Result<Vec<_>, _>>()?;

    let tree = TreeBuilder::build(&entries)?;
    tree.verify_levels()?;
    log::debug!("parsed {} outline entries using {strategy:?}", entries.len());

    Ok(ParsedOutline {
        tree,
        entries,
        strategy,
    })
}

/// Build a tree from an outline that already carries depths, e.g. one read
/// from an existing document.
pub fn parse_external_outline(
    entries: impl IntoIterator<Item = OutlineEntry>,
) -> Result<BookmarkTree, StructureError> {
    let mut builder = TreeBuilder::new();
    for (index, entry) in entries.into_iter().enumerate() {
        builder.push(&LinearEntry {
            title: entry.title,
            page: entry.page,
            level: entry.depth,
            line_number: index + 1,
        })?;
    }

    let tree = builder.finish();
    tree.verify_levels()?;
    Ok(tree)
}
