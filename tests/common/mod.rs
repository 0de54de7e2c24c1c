//! In-memory dossiers for integration tests
#![allow(dead_code)]

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use std::io::Cursor;

use cvtex::Dossier;

/// A table with a bold header row followed by plain rows
pub struct FixtureTable<'a> {
    pub header: &'a [&'a str],
    pub rows: &'a [&'a [&'a str]],
}

fn cell(text: &str, bold: bool) -> TableCell {
    let mut run = Run::new().add_text(text);
    if bold {
        run = run.bold();
    }
    TableCell::new().add_paragraph(Paragraph::new().add_run(run))
}

/// Pack paragraphs (one per line of `text`) and tables into .docx bytes
pub fn docx_bytes(text: &str, tables: &[FixtureTable]) -> Vec<u8> {
    let mut docx = Docx::new();
    for line in text.lines() {
        let paragraph = if line.is_empty() {
            Paragraph::new()
        } else {
            Paragraph::new().add_run(Run::new().add_text(line))
        };
        docx = docx.add_paragraph(paragraph);
    }

    for table in tables {
        let mut rows = Vec::new();
        if !table.header.is_empty() {
            rows.push(TableRow::new(
                table.header.iter().map(|h| cell(h, true)).collect(),
            ));
        }
        for row in table.rows {
            rows.push(TableRow::new(row.iter().map(|c| cell(c, false)).collect()));
        }
        docx = docx.add_table(Table::new(rows));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).expect("pack docx");
    buffer.into_inner()
}

pub const PROFILE: FixtureTable = FixtureTable {
    header: &["First Name and Initial", "Last Name"],
    rows: &[&["Jane Q.", "Doe"]],
};

pub const DEGREES: FixtureTable = FixtureTable {
    header: &["Name and City/State of Institution", "Degrees - Dates", "Major Subjects"],
    rows: &[&["Penn State, University Park", "Ph.D., 2007", "Engineering Mechanics"]],
};

/// Body text of a small but realistic dossier
pub const DOSSIER_TEXT: &str = "Faculty Activity Dossier

Journal Article

1. Roe, A. (Primary Author - Graduate Student), Doe, J. Q. Bone & Muscle. DOI: 10.1000/xyz.

Parts of Books

Ph.D. Dissertation Advisor

Roe, A., Ph.D. Bone Models. (2016 - 2020).

Ph.D. Dissertation Committee Member

List of Credit Courses Taught at Penn State for Each Semester with Enrollments in Each Course
Fall 2021
ME 330 Computational Tools 120
ME 600 Thesis Research 3
Concise Compilation of Results of Student Feedback from Multiple Sources";

pub fn sample_docx() -> Vec<u8> {
    docx_bytes(DOSSIER_TEXT, &[PROFILE, DEGREES])
}

pub fn sample_dossier() -> Dossier {
    Dossier::from_bytes(&sample_docx()).expect("parse sample dossier")
}

pub fn today() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
}
