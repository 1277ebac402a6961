//! End-to-end tests for the extraction pipeline.
//!
//! The fixture follows the scheduling report layout: history number, patient,
//! coded diagnosis, coded procedure, row code, surgeon, inclusion date.

use chrono::NaiveDate;
use waitlist_core::models::RowSlot;
use waitlist_core::segmenter::segment;
use waitlist_core::{
    load_document, Document, Field, OutputFormat, ParserConfig, Pipeline, Surgeon, Warning,
};

const REPORT: &str = "\
LISTA DE ESPERA QUIRURGICA
101
GARCIA LOPEZ, ANA
K40.9 HERNIA INGUINAL
53.00 HERNIORRAFIA
P01
Dr. Martinez
14/03/2024


105
PEREZ RUIZ, LUIS
K80.2 COLELITIASIS
51.23 COLECISTECTOMIA
P02
Dra. Soto
02/01/2024


105
PEREZ RUIZ, LUIS
K35.8 APENDICITIS
47.01 APENDICECTOMIA
P03
Dr. Martinez
20/02/2024


999
PRUEBA PRUEBA XYZ
K40.9 HERNIA INGUINAL
53.00 HERNIORRAFIA
P04
Dra. Soto
01/01/2024


103
LOPEZ DIAZ, MARIA
K60.2 FISURA ANAL
49.39 ESFINTEROTOMIA
P05
05/04/2024
";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
}

#[test]
fn test_patient_line_after_history_number() {
    let document = Document::from_text("101\nGARCIA LOPEZ, ANA");
    let rows = segment(&document.lines, &ParserConfig::default());

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].slot, RowSlot::Patient("GARCIA LOPEZ, ANA".into()));
    assert!(!rows[0].is_surgeon_attributed());
}

#[test]
fn test_surgeon_line_after_history_number() {
    let document = Document::from_text("102\nDr. Martinez");
    let rows = segment(&document.lines, &ParserConfig::default());

    assert_eq!(
        rows[0].slot,
        RowSlot::Surgeon(Surgeon::Named("Dr. Martinez".into()))
    );
    assert_eq!(rows[0].patient_text(), "");
}

#[test]
fn test_date_in_surgeon_position_renders_null() {
    let outcome = Pipeline::default()
        .run(&Document::from_text(REPORT), today())
        .unwrap();

    let row = outcome
        .roster
        .rows
        .iter()
        .find(|r| r.history_number == "103")
        .unwrap();
    assert_eq!(row.surgeon.as_deref(), Some("Null"));
    assert_eq!(row.patient, "LOPEZ DIAZ, MARIA");
    assert_eq!(row.diagnosis.as_deref(), Some("FISURA ANAL"));
    assert_eq!(row.procedure.as_deref(), Some("ESFINTEROTOMIA"));
}

#[test]
fn test_repeated_history_number_uses_block_fallback() {
    let extraction = Pipeline::default().extract(&Document::from_text(REPORT));

    let repeated: Vec<_> = extraction
        .records
        .iter()
        .filter(|r| r.history_number == "105")
        .collect();
    assert_eq!(repeated.len(), 2);

    // Repeated keys skip the direct scan, so the date is inferred
    assert_eq!(repeated[0].inclusion_date, Some(Field::inferred("02/01/2024")));
    assert_eq!(repeated[1].inclusion_date, None);
    assert!(repeated[0].has_inferred_fields());
    assert!(!extraction.records[0].has_inferred_fields());
    assert_eq!(repeated[1].surgeon, Surgeon::Named("Dr. Martinez".into()));

    assert!(extraction.warnings.contains(&Warning::InferredInclusionDate {
        history_number: "105".into(),
        value: "02/01/2024".into(),
    }));
    assert!(extraction.warnings.contains(&Warning::MissingInclusionDate {
        history_number: "105".into(),
        repeated: true,
    }));
}

#[test]
fn test_test_entry_excluded() {
    let outcome = Pipeline::default()
        .run(&Document::from_text(REPORT), today())
        .unwrap();

    assert!(outcome.roster.rows.iter().all(|r| r.history_number != "999"));
    assert!(outcome
        .warnings
        .iter()
        .all(|w| w.history_number() != Some("999")));
}

#[test]
fn test_roster_order() {
    let outcome = Pipeline::default()
        .run(&Document::from_text(REPORT), today())
        .unwrap();

    let rows: Vec<(&str, Option<&str>)> = outcome
        .roster
        .rows
        .iter()
        .map(|r| (r.history_number.as_str(), r.inclusion_date.as_deref()))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("105", Some("02/01/2024")),
            ("101", Some("14/03/2024")),
            ("105", None),
            ("103", None),
        ]
    );
}

#[test]
fn test_warnings_for_manual_follow_up() {
    let outcome = Pipeline::default()
        .run(&Document::from_text(REPORT), today())
        .unwrap();

    let manual: Vec<&str> = outcome
        .warnings
        .iter()
        .filter(|w| w.needs_manual_date())
        .filter_map(Warning::history_number)
        .collect();
    assert_eq!(manual, vec!["105", "105", "103"]);

    assert!(!outcome.warnings.iter().any(Warning::suspect_diagnosis));
}

#[test]
fn test_runs_are_reproducible() {
    let document = Document::from_text(REPORT);
    let pipeline = Pipeline::default();

    let first = pipeline.run(&document, today()).unwrap();
    let second = pipeline.run(&document, today()).unwrap();

    assert_eq!(first.roster.rows, second.roster.rows);
    assert_eq!(first.roster.fingerprint, second.roster.fingerprint);
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn test_config_from_toml_changes_exclusions() {
    let config = ParserConfig::from_toml_str("test_entry_prefixes = []").unwrap();
    let outcome = Pipeline::new(config)
        .run(&Document::from_text(REPORT), today())
        .unwrap();

    assert!(outcome.roster.rows.iter().any(|r| r.history_number == "999"));
}

#[test]
fn test_rtf_report_end_to_end() {
    let rtf = concat!(
        r"{\rtf1\ansi\deff0{\fonttbl{\f0 Times New Roman;}}\f0 ",
        r"101\par GARCIA LOPEZ, ANA\par K40.9 HERNIA INGUINAL\par 53.00 HERNIORRAFIA\par ",
        r"P01\par Dr. Martinez\par 14/03/2024\par}"
    );
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.rtf");
    std::fs::write(&input, rtf).unwrap();

    let document = load_document(&input).unwrap();
    let outcome = Pipeline::default().run(&document, today()).unwrap();

    assert_eq!(outcome.roster.len(), 1);
    let row = &outcome.roster.rows[0];
    assert_eq!(row.history_number, "101");
    assert_eq!(row.patient, "GARCIA LOPEZ, ANA");
    assert_eq!(row.surgeon.as_deref(), Some("Dr. Martinez"));
    assert_eq!(row.diagnosis.as_deref(), Some("HERNIA INGUINAL"));
    assert_eq!(row.inclusion_date.as_deref(), Some("14/03/2024"));

    let path = OutputFormat::Xlsx
        .write(&outcome.roster, &outcome.warnings, dir.path())
        .unwrap();
    assert_eq!(path, dir.path().join("lista_espera-2024-05-02.xlsx"));
}
