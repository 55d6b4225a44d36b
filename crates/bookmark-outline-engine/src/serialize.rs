use crate::models::{BookmarkTree, OutlineEntry};

/// Placed between a title and its page number.
pub const PAGE_SEPARATOR: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Repeated once per level below the top.
    pub indent_unit: String,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent_unit: "\t".to_string(),
        }
    }
}

/// Canonical text for `tree`, one line per bookmark, tab-indented.
pub fn serialize(tree: &BookmarkTree) -> String {
    serialize_with(tree, &SerializeOptions::default())
}

/// Depths are taken from the tree's shape, never from cached levels, so a
/// tree that was edited without a level refresh still serializes correctly.
pub fn serialize_with(tree: &BookmarkTree, options: &SerializeOptions) -> String {
    let mut out = String::new();
    for node in tree.pre_order() {
        let bookmark = &tree[node];
        let depth = tree.structural_depth(node);

        out.push_str(&options.indent_unit.repeat(depth - 1));
        out.push_str(bookmark.title());
        out.push_str(PAGE_SEPARATOR);
        if let Some(page) = bookmark.page() {
            out.push_str(&page.to_string());
        }
        out.push('\n');
    }
    out
}

/// `(title, page, depth)` for every bookmark in display order.
pub fn flatten(tree: &BookmarkTree) -> Vec<OutlineEntry> {
    tree.pre_order()
        .map(|node| {
            let bookmark = &tree[node];
            OutlineEntry::new(
                bookmark.title(),
                bookmark.page(),
                tree.structural_depth(node),
            )
        })
        .collect()
}
