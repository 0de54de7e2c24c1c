//! Service at college, department, university, profession and society level
//!
//! The dossier files service under three broad records (committee work,
//! academic leadership, participation). Each CV sub-section pulls its
//! entries from an inner marker pair within one of those records and labels
//! them with the kind of work.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{RenderContext, noindent_line, section_heading, subsection_heading};
use crate::extract::{SectionMarkers, between, blocks, first_line, parse_entries};
use crate::latex::escape::{accents_to_latex, escape_specials};

pub(crate) const COMMITTEE: SectionMarkers = SectionMarkers::new(
    "Committee Work",
    "Record of Committee Work at Department, Division, School, Campus, College, and University Levels",
    "Record of Academic Leadership and Support Work (College Representative, Faculty Mentoring, Assessment Activities, etc.)",
);
pub(crate) const ACADEMIC: SectionMarkers = SectionMarkers::new(
    "Academic Leadership and Support Work",
    "Academic Leadership and Support Work",
    "Participation in Development/Fundraising Activities",
);
pub(crate) const PARTICIPATION: SectionMarkers = SectionMarkers::new(
    "Participation in Development/Fundraising Activities",
    "Participation in Development/Fundraising Activities",
    "Service to Society as a Representative of the University",
);
pub(crate) const PROFESSION: SectionMarkers = SectionMarkers::new(
    "Organizing Conferences",
    "Organizing Conferences and Service on Conference Committees",
    "Honors or Awards for Leadership and/or Service to the University, Community, or the Profession",
);
pub(crate) const SOCIETY: SectionMarkers = SectionMarkers::new(
    "Service to Governmental Agencies",
    "Service to Governmental Agencies at the International, Federal, State, or Local Levels",
    "Service to the Disciplines and to the Profession",
);

/// Which broad service record an inner section lives in
#[derive(Debug, Clone, Copy)]
enum RecordKind {
    Committee,
    Academic,
    Participation,
}

/// Entries between `start` and `end` inside a service record, labelled `label`
struct ServiceSource {
    record: RecordKind,
    start: &'static str,
    end: Option<&'static str>,
    label: &'static str,
}

const fn source(
    record: RecordKind,
    start: &'static str,
    end: Option<&'static str>,
    label: &'static str,
) -> ServiceSource {
    ServiceSource {
        record,
        start,
        end,
        label,
    }
}

const COLLEGE: [ServiceSource; 3] = [
    source(RecordKind::Committee, "College", Some("University"), "Committee Work"),
    source(RecordKind::Academic, "\n\nCollege\n\n", None, "Academic Leadership and Support Work"),
    source(RecordKind::Participation, "\n\nCollege\n\n", None, "Competition Judging"),
];
const DEPARTMENT: [ServiceSource; 1] =
    [source(RecordKind::Committee, "Department", Some("College"), "Committee Work")];
const UNIVERSITY: [ServiceSource; 2] = [
    source(RecordKind::Committee, "University", None, "Committee Work"),
    source(
        RecordKind::Participation,
        "University",
        Some("Competition Judging"),
        "Participation in Development/Fundraising Activities",
    ),
];

/// `Title, ..., Role. (Date).`
static DATED_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(.*)\s\(([^)]+)\)\.$").expect("valid dated entry regex"));

static CONFERENCE_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*?)\((\w+ \d{4} - \w+ \d{4})\)\.$").expect("valid conference entry regex")
});

fn finish(line: &str) -> String {
    accents_to_latex(&escape_specials(line))
}

/// `Label, Role, ``Title''. (Date)` from the first line of a block, or the
/// line itself when it does not carry a trailing date.
pub fn format_point(label: &str, block: &str) -> String {
    let line = first_line(block);
    let Some(caps) = DATED_ENTRY.captures(line) else {
        return finish(line);
    };

    let parts: Vec<&str> = caps[1].trim().split(',').collect();
    let title = parts[0].trim();
    let role = parts[parts.len() - 1].replace('.', "");
    finish(&format!("{label}, {}, ``{title}''. ({})", role.trim(), caps[2].trim()))
}

/// Conference organizing: `Title, Institute (Month Year - Month Year)`
pub fn format_conference(block: &str) -> String {
    let line = first_line(block);
    let entries = parse_entries(line, &CONFERENCE_ENTRY);
    if let Some([head, dates]) = entries.first().map(Vec::as_slice) {
        let parts: Vec<&str> = head.trim().split(',').collect();
        if parts.len() >= 2 {
            return finish(&format!(
                "Organizing Conferences and Service on Conference Committees, ``{}'', {} ({})",
                parts[0].trim(),
                parts[1].trim(),
                dates
            ));
        }
    }
    finish(line)
}

/// Governmental service: needs title, institute and role
pub fn format_society(block: &str) -> String {
    let entries = parse_entries(block.trim(), &DATED_ENTRY);
    if let Some([head, date]) = entries.first().map(Vec::as_slice) {
        let parts: Vec<&str> = head.trim().split(',').collect();
        if parts.len() >= 3 {
            return finish(&format!(
                "Service to Governmental Agencies, {}, ``{}'', {}. ({})",
                parts[2].replace('.', "").trim(),
                parts[0].trim(),
                parts[1].trim(),
                date.trim()
            ));
        }
    }
    finish(block.trim())
}

struct ServiceRecords {
    committee: String,
    academic: String,
    participation: String,
}

impl ServiceRecords {
    fn extract(text: &str) -> Self {
        Self {
            committee: COMMITTEE.extract(text),
            academic: ACADEMIC.extract(text),
            participation: PARTICIPATION.extract(text),
        }
    }

    fn get(&self, record: RecordKind) -> &str {
        match record {
            RecordKind::Committee => &self.committee,
            RecordKind::Academic => &self.academic,
            RecordKind::Participation => &self.participation,
        }
    }

    fn points(&self, sources: &[ServiceSource]) -> Vec<String> {
        sources
            .iter()
            .flat_map(|source| {
                let inner = between(self.get(source.record), source.start, source.end);
                blocks(&inner)
                    .map(|block| format_point(source.label, block))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

pub fn render(ctx: &RenderContext) -> String {
    let records = ServiceRecords::extract(&ctx.text);
    let profession = PROFESSION.extract(&ctx.text);
    let society = SOCIETY.extract(&ctx.text);

    let groups = [
        ("College", records.points(&COLLEGE)),
        ("Department", records.points(&DEPARTMENT)),
        ("University", records.points(&UNIVERSITY)),
        ("Profession", blocks(&profession).map(format_conference).collect()),
        ("Society", blocks(&society).map(format_society).collect()),
    ];

    if groups.iter().all(|(_, points)| points.is_empty()) {
        return String::new();
    }

    let mut out = section_heading("SERVICE");
    for (heading, points) in &groups {
        if points.is_empty() {
            continue;
        }
        debug!(group = heading, count = points.len(), "rendering service");
        out.push_str(&subsection_heading(heading));
        for point in points {
            out.push_str(&noindent_line(point));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::render::test_support::{dossier_from_text, today};

    #[test]
    fn test_format_point() {
        assert_eq!(
            format_point("Committee Work", "Graduate Admissions, Mechanical Engineering, Member. (2019 - 2021).\nnotes"),
            "Committee Work, Member, ``Graduate Admissions''. (2019 - 2021)"
        );
        assert_eq!(format_point("Committee Work", "Undated entry"), "Undated entry");
    }

    #[test]
    fn test_format_conference_keeps_single_parens() {
        assert_eq!(
            format_conference("Biomechanics Summit, ASME & SES (June 2019 - June 2020)."),
            "Organizing Conferences and Service on Conference Committees, ``Biomechanics Summit'', ASME \\& SES (June 2019 - June 2020)"
        );
    }

    #[test]
    fn test_format_society_needs_three_parts() {
        assert_eq!(
            format_society("Blast Injury Panel, Department of Defense, Reviewer. (2020)."),
            "Service to Governmental Agencies, Reviewer, ``Blast Injury Panel'', Department of Defense. (2020)"
        );
        assert_eq!(format_society("Panel, Reviewer. (2020)."), "Panel, Reviewer. (2020).");
    }

    #[test]
    fn test_render_groups() {
        let dossier = dossier_from_text(
            "Record of Committee Work at Department, Division, School, Campus, College, and University Levels\n\
             \n\
             Department\n\
             \n\
             Seminar Committee, ME, Chair. (2020 - 2022).\n\
             \n\
             College\n\
             \n\
             Curriculum Committee, Engineering, Member. (2019).\n\
             \n\
             University\n\
             \n\
             Faculty Senate, Senator. (2021 - 2023).\n\
             \n\
             Record of Academic Leadership and Support Work (College Representative, Faculty Mentoring, Assessment Activities, etc.)\n\
             Participation in Development/Fundraising Activities\n\
             Service to Society as a Representative of the University",
        );
        let config = Config::default();
        let ctx = RenderContext::new(&dossier, &config, today());

        let out = render(&ctx);
        let college = out.find("\\subsection*{College}").unwrap();
        let department = out.find("\\subsection*{Department}").unwrap();
        let university = out.find("\\subsection*{University}").unwrap();
        assert!(college < department && department < university);
        assert!(out.contains("Committee Work, Chair, ``Seminar Committee''. (2020 - 2022)"));
        assert!(out.contains("Committee Work, Member, ``Curriculum Committee''. (2019)"));
        assert!(out.contains("Committee Work, Senator, ``Faculty Senate''. (2021 - 2023)"));
        assert!(!out.contains("\\subsection*{Society}"));
    }
}
