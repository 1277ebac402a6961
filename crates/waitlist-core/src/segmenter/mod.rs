//! Record segmentation.
//!
//! Pipeline: boundary rows → spacing normalization → record assembly
//!
//! The report has no field delimiters. Records are recovered from line order
//! and case: a boundary token (history number or a code-led line) followed by
//! either a patient line, a surgeon line, or a date standing in for a missing
//! surgeon.

mod assembly;
mod patterns;
mod rows;
mod spacing;

pub use assembly::*;
pub use patterns::*;
pub use rows::*;
pub use spacing::*;
