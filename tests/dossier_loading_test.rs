mod common;

use std::io::{Cursor, Write};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

use common::{DOSSIER_TEXT, FixtureTable, PROFILE, docx_bytes, sample_docx};
use cvtex::{DossierError, load_dossier};

#[test]
fn test_load_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("CV_Data.docx");
    std::fs::write(&path, sample_docx()).unwrap();

    let dossier = load_dossier(&path).unwrap();
    assert_eq!(dossier.paragraphs.len(), DOSSIER_TEXT.lines().count());
    assert_eq!(dossier.paragraphs[0], "Faculty Activity Dossier");
    assert_eq!(dossier.tables.len(), 2);
    assert_eq!(dossier.full_name().as_deref(), Some("Jane Q. Doe"));
}

#[test]
fn test_table_paragraphs_stay_out_of_text() {
    let dossier = common::sample_dossier();
    assert!(!dossier.text().contains("Penn State, University Park"));
    let degrees = dossier.table_with_column("Degrees - Dates").unwrap();
    assert_eq!(
        degrees.header().unwrap(),
        vec!["Name and City/State of Institution", "Degrees - Dates", "Major Subjects"]
    );
    assert_eq!(degrees.records()[0]["Degrees - Dates"], "Ph.D., 2007");
}

#[test]
fn test_smart_punctuation_is_normalized() {
    let bytes = docx_bytes("Master\u{2019}s Thesis Advisor\n2019\u{2013}2021", &[PROFILE]);
    let dossier = cvtex::Dossier::from_bytes(&bytes).unwrap();
    assert_eq!(dossier.paragraphs, vec!["Master's Thesis Advisor", "2019--2021"]);
}

#[test]
fn test_table_without_bold_header_has_no_records() {
    let plain = FixtureTable {
        header: &[],
        rows: &[&["Last Name"], &["Doe"]],
    };
    let bytes = docx_bytes("", &[plain]);
    let dossier = cvtex::Dossier::from_bytes(&bytes).unwrap();
    assert!(dossier.full_name().is_none());
}

#[test]
fn test_wrong_extension_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("CV_Data.pdf");
    std::fs::write(&path, sample_docx()).unwrap();

    let err = load_dossier(&path).unwrap_err();
    assert!(matches!(err, DossierError::InvalidExtension { ref extension } if extension == "pdf"));
}

#[test]
fn test_spreadsheet_rejected() {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut buffer);
        writer
            .start_file("xl/workbook.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<workbook/>").unwrap();
        writer.finish().unwrap();
    }

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("CV_Data.docx");
    std::fs::write(&path, buffer.into_inner()).unwrap();

    assert!(matches!(load_dossier(&path), Err(DossierError::Spreadsheet)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = load_dossier(&dir.path().join("absent.docx"));
    assert!(matches!(result, Err(DossierError::Io(_))));
}
