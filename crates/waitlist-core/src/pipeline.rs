//! The extraction passes wired together.
//!
//! Pipeline: Segment → Normalize spacing → Assemble → Backfill → Review → Roster

use chrono::NaiveDate;

use crate::backfill::Backfiller;
use crate::config::ParserConfig;
use crate::diagnostics;
use crate::export::build_roster;
use crate::models::{Record, Roster, Warning};
use crate::segmenter::{assemble, normalize_spacing, segment};
use crate::source::Document;
use crate::RosterResult;

/// Backfilled records and the warnings raised while extracting them.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub records: Vec<Record>,
    pub warnings: Vec<Warning>,
}

/// Final roster and every warning from extraction and roster building.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub roster: Roster,
    pub warnings: Vec<Warning>,
}

/// Runs the passes in order over one document.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: ParserConfig,
}

impl Pipeline {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Recover records from the document and review them.
    pub fn extract(&self, document: &Document) -> Extraction {
        let lines = &document.lines;

        // Step 1: Boundary tokens to patient / surgeon rows
        let rows = segment(lines, &self.config);

        // Step 2: Pad surgeon blocks and capture their diagnosis rows
        let table = normalize_spacing(&rows, self.config.separator_rows);

        // Step 3: Pair patients with surgeon blocks
        let assembly = assemble(&table);

        // Step 4: Repair fields by position in the document
        let backfiller = Backfiller::new(lines, &assembly.surgeon_names, &self.config);
        let records = backfiller.inclusion_dates(assembly.records);
        let records = backfiller.diagnoses(records);

        // Step 5: Report what needs a human
        let mut warnings = diagnostics::review(&records, &self.config);
        if assembly.unpaired_blocks > 0 {
            warnings.push(Warning::UnpairedSurgeonBlocks {
                count: assembly.unpaired_blocks,
            });
        }

        log::info!(
            "Extracted {} records from {} lines ({} with inferred fields, {} warnings)",
            records.len(),
            lines.len(),
            records.iter().filter(|r| r.has_inferred_fields()).count(),
            warnings.len()
        );

        Extraction { records, warnings }
    }

    /// Extract and build the sorted roster dated `generated_on`.
    pub fn run(&self, document: &Document, generated_on: NaiveDate) -> RosterResult<PipelineOutcome> {
        let Extraction {
            records,
            mut warnings,
        } = self.extract(document);

        let (roster, roster_warnings) = build_roster(&records, &self.config, generated_on)?;
        warnings.extend(roster_warnings);

        Ok(PipelineOutcome { roster, warnings })
    }
}
