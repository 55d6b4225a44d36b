pub mod error;
pub mod models;
pub mod parsing;
pub mod serialize;

// Re-export key types for easier usage
pub use error::{FormatError, OutlineError, StructureError};
pub use models::*;
pub use parsing::{
    ParseOptions, ParsedOutline, StrategyKind, StrategySelector, TreeBuilder, parse,
    parse_external_outline, parse_outline,
};
pub use serialize::{SerializeOptions, flatten, serialize, serialize_with};
