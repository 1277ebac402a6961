//! Roster building and file output.

mod delimited;
mod json;
mod roster;
mod xlsx;

pub use delimited::*;
pub use json::*;
pub use roster::*;
pub use xlsx::*;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::models::{Roster, Warning};
use crate::RosterResult;

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// Write `lista_espera-<date>.<ext>` into `dir` and return its path.
    pub fn write(&self, roster: &Roster, warnings: &[Warning], dir: &Path) -> RosterResult<PathBuf> {
        let path = dir.join(roster.file_name(self.extension()));

        match self {
            OutputFormat::Xlsx => write_xlsx(roster, &path)?,
            OutputFormat::Csv => write_csv(roster, BufWriter::new(File::create(&path)?))?,
            OutputFormat::Json => std::fs::write(&path, to_json(roster, warnings)?)?,
        }

        log::info!("Wrote {} rows to {}", roster.len(), path.display());
        Ok(path)
    }
}
