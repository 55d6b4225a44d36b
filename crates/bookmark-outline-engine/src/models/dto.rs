use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bookmark::{BookmarkTree, NodeId};
use crate::error::StructureError;

/// Nested, serializable mirror of a bookmark tree for UI collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkDto {
    pub id: Uuid,
    pub title: String,
    pub page: Option<i32>,
    pub level: usize,
    #[serde(default)]
    pub children: Vec<BookmarkDto>,
}

impl BookmarkDto {
    /// Snapshot the whole tree, starting at the synthetic root.
    pub fn from_tree(tree: &BookmarkTree) -> Self {
        Self::from_node(tree, tree.root())
    }

    pub fn from_node(tree: &BookmarkTree, node: NodeId) -> Self {
        let bookmark = &tree[node];
        Self {
            id: bookmark.id(),
            title: bookmark.title().to_string(),
            page: bookmark.page(),
            level: bookmark.level(),
            children: bookmark
                .children()
                .iter()
                .map(|&child| Self::from_node(tree, child))
                .collect(),
        }
    }

    /// Rebuild a tree from a root snapshot.
    ///
    /// Ids are preserved. Levels are taken from the nesting, not from the
    /// `level` fields, which a UI may not have kept up to date.
    pub fn into_tree(self) -> Result<BookmarkTree, StructureError> {
        let mut tree = BookmarkTree::with_root_id(self.id);
        let root = tree.root();
        for child in self.children {
            attach(&mut tree, root, child, 1)?;
        }
        Ok(tree)
    }
}

fn attach(
    tree: &mut BookmarkTree,
    parent: NodeId,
    dto: BookmarkDto,
    depth: usize,
) -> Result<(), StructureError> {
    let node = tree.create_with_id(dto.id, dto.title, dto.page, depth);
    tree.add_child(parent, node)?;
    for child in dto.children {
        attach(tree, node, child, depth + 1)?;
    }
    Ok(())
}
