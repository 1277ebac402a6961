//! Domain models for the waiting-list extractor.

mod record;
mod roster;
mod segment;
mod warning;

pub use record::*;
pub use roster::*;
pub use segment::*;
pub use warning::*;
