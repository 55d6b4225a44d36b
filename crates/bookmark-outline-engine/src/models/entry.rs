use serde::{Deserialize, Serialize};

/// One parsed line, before it is placed in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearEntry {
    pub title: String,
    pub page: Option<i32>,
    /// Nominal level, 1 for top-level entries.
    pub level: usize,
    /// 1-based line in the source text (or position in an external outline).
    pub line_number: usize,
}

/// Flat `(title, page, depth)` view of a bookmark, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    pub title: String,
    pub page: Option<i32>,
    pub depth: usize,
}

impl OutlineEntry {
    pub fn new(title: impl Into<String>, page: Option<i32>, depth: usize) -> Self {
        Self {
            title: title.into(),
            page,
            depth,
        }
    }
}
