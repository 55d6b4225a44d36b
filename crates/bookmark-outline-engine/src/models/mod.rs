pub mod bookmark;
pub mod dto;
pub mod entry;

pub use bookmark::{Ancestors, Bookmark, BookmarkTree, NodeId, PreOrder};
pub use dto::BookmarkDto;
pub use entry::{LinearEntry, OutlineEntry};
