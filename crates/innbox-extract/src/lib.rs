//! Innbox Extract — the heuristic core.
//!
//! Converts one raw notification email into structured review data using an
//! ordered cascade of pattern heuristics: independent field extractors,
//! boilerplate-stripping thread segmentation, an implicit-suggestion rule
//! engine, and immutable record assembly.
//!
//! Everything here is pure: deterministic output for a given input text, no
//! I/O, no shared mutable state. The pattern catalogs are compiled once into
//! process-wide statics and are safe to share across concurrent calls.

pub mod fields;
pub mod record;
pub mod suggestion;
pub mod thread;

pub use fields::{extract_fields, ExtractedFields};
pub use record::{assemble, Record};
