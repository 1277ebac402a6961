//! Waitlist Core Library
//!
//! Rebuilds a surgical waiting-list roster from the rich-text report exported
//! by the hospital scheduling system, and writes it out as a spreadsheet.
//!
//! # Architecture
//!
//! ```text
//! RTF report → Loader → Document (line stream)
//!                             │
//!                     Record Segmenter        boundary tokens → patient / surgeon rows
//!                             │
//!                     Spacing Normalizer      2 separator rows per surgeon block
//!                             │
//!                         Assembly            rows → explicit Records
//!                             │
//!              ┌──────────────┴──────────────┐
//!              ▼                             ▼
//!      Inclusion-date backfill      Diagnosis backfill
//!              └──────────────┬──────────────┘
//!                             │
//!                        Diagnostics          structured warnings
//!                             │
//!                         Exporter            filter, sort, xlsx / csv / json
//! ```
//!
//! # Core Principle
//!
//! **Bad data never aborts a run.** Lines that do not fit the expected layout
//! are skipped or degrade to unset fields, and every degradation is reported
//! as a [`Warning`]. Only unreadable input, malformed RTF, invalid
//! configuration and unwritable output are errors.
//!
//! # Modules
//!
//! - [`source`]: document loading (RTF or plain text) into a line stream
//! - [`models`]: domain types (Record, Surgeon, RosterRow, Warning, ...)
//! - [`segmenter`]: boundary detection, spacing normalization, assembly
//! - [`backfill`]: position-relative repair of dates and diagnoses
//! - [`diagnostics`]: review of assembled records for manual follow-up
//! - [`export`]: roster building and spreadsheet / CSV / JSON output
//! - [`pipeline`]: the passes wired together in order

pub mod backfill;
pub mod config;
pub mod diagnostics;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod segmenter;
pub mod source;

use thiserror::Error;

// Re-export commonly used types
pub use config::ParserConfig;
pub use export::{build_roster, OutputFormat};
pub use models::{
    Field, Provenance, Record, Roster, RosterRow, Surgeon, Warning, NULL_SURGEON,
};
pub use pipeline::{Extraction, Pipeline, PipelineOutcome};
pub use source::{load_document, Document};

/// Errors raised while loading a report or writing a roster.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse RTF: {0}")]
    Rtf(String),

    #[error("Invalid configuration file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type RosterResult<T> = Result<T, RosterError>;
