//! Tag metadata for loaded audio items.
//!
//! Extraction is best-effort: callers always get a `Metadata` value, with
//! placeholder strings for anything the file does not provide. Embedded cover
//! art is written to one fixed-name file and removed again when the owning
//! `CoverArt` handle goes away.

mod extract;
mod model;

pub use extract::MetadataExtractor;
pub use model::*;
