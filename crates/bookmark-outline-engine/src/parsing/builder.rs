use crate::error::StructureError;
use crate::models::{BookmarkTree, LinearEntry, NodeId};

/// Rebuilds a hierarchy from entries in display order.
///
/// The builder keeps a cursor on the last attached bookmark and compares
/// each new entry's level with the cursor's structural depth `d`:
///
/// - `level == d`: sibling of the cursor
/// - `level == d + 1`: child of the cursor
/// - `level < d`: child of the cursor's ancestor at depth `level - 1`
/// - `level > d + 1`: clamped to `d + 1`, i.e. child of the cursor
pub struct TreeBuilder {
    tree: BookmarkTree,
    last: NodeId,
}

impl TreeBuilder {
    pub fn new() -> Self {
        let tree = BookmarkTree::new();
        let last = tree.root();
        Self { tree, last }
    }

    pub fn build<'a>(
        entries: impl IntoIterator<Item = &'a LinearEntry>,
    ) -> Result<BookmarkTree, StructureError> {
        let mut builder = Self::new();
        for entry in entries {
            builder.push(entry)?;
        }
        Ok(builder.finish())
    }

    pub fn push(&mut self, entry: &LinearEntry) -> Result<NodeId, StructureError> {
        if entry.level == 0 {
            return Err(StructureError::InvalidLevel {
                index: entry.line_number,
            });
        }

        let depth = self.tree.structural_depth(self.last);
        let level = if entry.level > depth + 1 {
            log::debug!(
                "entry {} jumps from depth {depth} to level {}, clamping to {}",
                entry.line_number,
                entry.level,
                depth + 1
            );
            depth + 1
        } else {
            entry.level
        };

        let parent = if level == depth + 1 {
            self.last
        } else {
            // The cursor's ancestors run from depth - 1 down to the root.
            self.tree
                .ancestors(self.last)
                .nth(depth - level)
                .unwrap_or(self.tree.root())
        };

        let node = self.tree.create(entry.title.clone(), entry.page, level);
        self.tree.add_child(parent, node)?;
        self.tree.check_level(node)?;
        self.last = node;
        Ok(node)
    }

    pub fn finish(self) -> BookmarkTree {
        self.tree
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
