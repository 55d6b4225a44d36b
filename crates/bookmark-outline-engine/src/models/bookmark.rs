use std::ops::Index;

use uuid::Uuid;

use crate::error::StructureError;

/// Handle to a bookmark stored in a [`BookmarkTree`].
///
/// Handles are only meaningful for the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A single outline entry.
///
/// Links to the parent and children are owned by the tree; the only way to
/// change them is through [`BookmarkTree::add_child`],
/// [`BookmarkTree::insert_child`] and [`BookmarkTree::change_pos`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    id: Uuid,
    title: String,
    page: Option<i32>,
    level: usize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Bookmark {
    fn new(id: Uuid, title: String, page: Option<i32>, level: usize) -> Self {
        Self {
            id,
            title,
            page,
            level,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Stable identity, assigned once at creation.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Offset-adjusted page number, `None` when the entry has no page target.
    pub fn page(&self) -> Option<i32> {
        self.page
    }

    /// Cached nesting level. May be stale after [`BookmarkTree::change_pos`]
    /// until [`BookmarkTree::refresh_levels`] runs.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_page(&mut self, page: Option<i32>) {
        self.page = page;
    }
}

/// Arena-backed bookmark hierarchy with a synthetic root at level 0.
#[derive(Debug, Clone)]
pub struct BookmarkTree {
    nodes: Vec<Bookmark>,
    root: NodeId,
}

impl BookmarkTree {
    pub fn new() -> Self {
        Self::with_root_id(Uuid::new_v4())
    }

    pub(crate) fn with_root_id(id: Uuid) -> Self {
        Self {
            nodes: vec![Bookmark::new(id, "root".to_string(), None, 0)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn is_root(&self, node: NodeId) -> bool {
        node == self.root
    }

    pub fn get(&self, node: NodeId) -> &Bookmark {
        &self.nodes[node.0]
    }

    pub fn get_mut(&mut self, node: NodeId) -> &mut Bookmark {
        &mut self.nodes[node.0]
    }

    /// Number of bookmarks reachable from the root, root excluded.
    pub fn len(&self) -> usize {
        self.pre_order().count()
    }

    pub fn is_empty(&self) -> bool {
        self.get(self.root).children.is_empty()
    }

    /// Look up a bookmark by its stable id.
    pub fn find(&self, id: Uuid) -> Option<NodeId> {
        self.nodes.iter().position(|b| b.id == id).map(NodeId)
    }

    /// Create a detached bookmark. It becomes part of the outline once it is
    /// attached with [`add_child`](Self::add_child) or
    /// [`insert_child`](Self::insert_child).
    pub fn create(&mut self, title: impl Into<String>, page: Option<i32>, level: usize) -> NodeId {
        self.create_with_id(Uuid::new_v4(), title.into(), page, level)
    }

    pub(crate) fn create_with_id(
        &mut self,
        id: Uuid,
        title: String,
        page: Option<i32>,
        level: usize,
    ) -> NodeId {
        self.nodes.push(Bookmark::new(id, title, page, level));
        NodeId(self.nodes.len() - 1)
    }

    /// Append `child` to the children of `parent`.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), StructureError> {
        let index = self.get(parent).children.len();
        self.insert_child(parent, index, child)
    }

    /// Insert `child` at `index` in the children of `parent`, setting the
    /// back-reference in the same step.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), StructureError> {
        if self.is_root(child) || self.get(child).parent.is_some() {
            return Err(StructureError::NotAttachable(self.get(child).id));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(StructureError::Cycle(self.get(child).id));
        }
        let len = self.get(parent).children.len();
        if index > len {
            return Err(StructureError::IndexOutOfRange { index, len });
        }

        self.nodes[parent.0].children.insert(index, child);
        self.nodes[child.0].parent = Some(parent);
        Ok(())
    }

    /// Move `node` (with its subtree) to the end of `new_parent`'s children.
    ///
    /// Cached levels are left untouched; call [`refresh_levels`](Self::refresh_levels)
    /// once a batch of moves is done.
    pub fn change_pos(&mut self, node: NodeId, new_parent: NodeId) -> Result<(), StructureError> {
        let mut len = self.get(new_parent).children.len();
        if self.get(node).parent == Some(new_parent) {
            len -= 1;
        }
        self.change_pos_at(node, new_parent, len)
    }

    /// Move `node` to `index` in `new_parent`'s children. The index refers to
    /// the child list as it looks after `node` has been detached.
    pub fn change_pos_at(
        &mut self,
        node: NodeId,
        new_parent: NodeId,
        index: usize,
    ) -> Result<(), StructureError> {
        if self.is_root(node) {
            return Err(StructureError::RootImmovable);
        }
        if self.is_ancestor_or_self(node, new_parent) {
            return Err(StructureError::Cycle(self.get(node).id));
        }
        let old_parent = self.get(node).parent;
        let mut len = self.get(new_parent).children.len();
        if old_parent == Some(new_parent) {
            len -= 1;
        }
        if index > len {
            return Err(StructureError::IndexOutOfRange { index, len });
        }

        self.detach(node);
        self.insert_child(new_parent, index, node)
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != node);
        }
    }

    /// Parents of `node`, nearest first, root included.
    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(node).parent,
        }
    }

    /// Depth computed from the parent links; the root is at depth 0.
    pub fn structural_depth(&self, node: NodeId) -> usize {
        self.ancestors(node).count()
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        candidate == node || self.ancestors(node).any(|a| a == candidate)
    }

    /// Rewrite every cached level from the current shape of the tree.
    pub fn refresh_levels(&mut self) {
        let nodes: Vec<NodeId> = self.pre_order().collect();
        for node in nodes {
            let depth = self.structural_depth(node);
            self.nodes[node.0].level = depth;
        }
    }

    /// Fails on the first bookmark (in display order) whose cached level does
    /// not match its structural depth.
    pub fn verify_levels(&self) -> Result<(), StructureError> {
        self.pre_order().try_for_each(|node| self.check_level(node))
    }

    pub(crate) fn check_level(&self, node: NodeId) -> Result<(), StructureError> {
        let bookmark = self.get(node);
        let depth = self.structural_depth(node);
        if bookmark.level != depth {
            return Err(StructureError::StructuralConsistency {
                id: bookmark.id,
                title: bookmark.title.clone(),
                level: bookmark.level,
                depth,
            });
        }
        Ok(())
    }

    /// The list `node` belongs to, i.e. its parent's children.
    pub fn siblings(&self, node: NodeId) -> &[NodeId] {
        match self.get(node).parent {
            Some(parent) => &self.get(parent).children,
            None => &[],
        }
    }

    /// The bookmark displayed directly above `node` in a fully expanded view.
    pub fn preceding(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.get(node).parent?;
        let position = self.siblings(node).iter().position(|&s| s == node)?;
        if position == 0 {
            return (!self.is_root(parent)).then_some(parent);
        }

        let mut current = self.siblings(node)[position - 1];
        while let Some(&last) = self.get(current).children.last() {
            current = last;
        }
        Some(current)
    }

    /// Depth-first traversal in display order, root excluded.
    pub fn pre_order(&self) -> PreOrder<'_> {
        let mut stack = self.get(self.root).children.clone();
        stack.reverse();
        PreOrder { tree: self, stack }
    }

    /// Add `delta` to every page number, e.g. after the offset changed.
    pub fn shift_pages(&mut self, delta: i32) {
        for bookmark in &mut self.nodes {
            if let Some(page) = bookmark.page {
                bookmark.page = Some(page.saturating_add(delta));
            }
        }
    }
}

impl Default for BookmarkTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeId> for BookmarkTree {
    type Output = Bookmark;

    fn index(&self, node: NodeId) -> &Bookmark {
        self.get(node)
    }
}

pub struct Ancestors<'a> {
    tree: &'a BookmarkTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.get(current).parent;
        Some(current)
    }
}

pub struct PreOrder<'a> {
    tree: &'a BookmarkTree,
    stack: Vec<NodeId>,
}

impl Iterator for PreOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.stack.pop()?;
        self.stack
            .extend(self.tree.get(node).children.iter().rev().copied());
        Some(node)
    }
}
