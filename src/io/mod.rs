//! Persistence codec for the dynamics element
//!
//! The element reads its attribute subset from a structured XML tree
//! (roxmltree) and writes it back with quick-xml. Tags it does not own go
//! to the composed text base; tags neither recognizes are reported back
//! to the caller, unconsumed, for the outer score reader to handle.

pub mod read;
pub mod write;

pub use read::{read_dynamic, ReadOutcome};
pub use write::write_dynamic;

use thiserror::Error;

/// Malformed structural content in persisted input. Unresolvable subtype
/// tags are NOT errors (they fall back to OTHER); unknown tags are
/// reported through `ReadOutcome`, not through this type.
#[derive(Debug, Error)]
pub enum XmlReadError {
    #[error("bad integer in <{tag}>: {source}")]
    BadInt {
        tag: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("bad number in <{tag}>: {source}")]
    BadFloat {
        tag: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}
