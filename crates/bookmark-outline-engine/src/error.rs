use uuid::Uuid;

/// A line the active strategy could not turn into an outline entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line_number}: cannot parse outline entry from \"{line}\"")]
pub struct FormatError {
    /// The raw source line, before preprocessing.
    pub line: String,
    /// 1-based index of the line in the source text.
    pub line_number: usize,
}

/// Violations of the tree shape, raised by the builder and the mutation API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error(
        "bookmark {id} (\"{title}\") has level {level} but sits at structural depth {depth}"
    )]
    StructuralConsistency {
        id: Uuid,
        title: String,
        level: usize,
        depth: usize,
    },
    #[error("entry {index} has level 0, which is reserved for the root")]
    InvalidLevel { index: usize },
    #[error("bookmark {0} is already attached to a parent")]
    NotAttachable(Uuid),
    #[error("the root bookmark cannot be moved")]
    RootImmovable,
    #[error("cannot move bookmark {0} underneath itself")]
    Cycle(Uuid),
    #[error("index {index} is out of range for a parent with {len} children")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutlineError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Structure(#[from] StructureError),
}
