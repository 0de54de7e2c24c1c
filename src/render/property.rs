//! Patents and other intellectual property

use once_cell::sync::Lazy;
use regex::Regex;

use super::{RenderContext, noindent_line, section_heading};
use crate::extract::{SectionMarkers, blocks, first_line};
use crate::latex::escape::{escape_specials, latex_quotes};

pub(crate) const PROPERTY: SectionMarkers = SectionMarkers::new(
    "Patent Intellectual Property",
    "Patent Intellectual Property",
    "Impact in Society of Research Scholarship and Creative Accomplishment",
);

/// Inventors and the quoted title
static QUOTED_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)^.*?"[^"]*""#).expect("valid quoted title regex"));

static APPLICATION_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(application: (?:\d{4}|\w+\s\d{4})\)").expect("valid application date regex")
});

/// `Inventors, "Title"  (application: 2021)`; blocks without a quoted title
/// keep their first line.
pub fn format_property(block: &str) -> String {
    let title = QUOTED_PART
        .find(block)
        .map(|m| m.as_str().trim())
        .unwrap_or_else(|| first_line(block));

    let entry = match APPLICATION_DATE.find(block) {
        Some(date) => format!("{title}  {}", date.as_str()),
        None => title.to_string(),
    };
    latex_quotes(&escape_specials(&entry))
}

pub fn render(ctx: &RenderContext) -> String {
    let text = PROPERTY.extract(&ctx.text);
    let entries: Vec<String> = blocks(&text).map(format_property).collect();
    if entries.is_empty() {
        return String::new();
    }

    let mut out = section_heading("INTELLECTUAL PROPERTY");
    for entry in &entries {
        out.push_str(&noindent_line(entry));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::render::test_support::{dossier_from_text, today};

    #[test]
    fn test_format_property() {
        assert_eq!(
            format_property(
                "Doe, J., Roe, A., \"Impact Sensor for Helmets\", US Patent 11,000,000 (application: May 2021). Licensed."
            ),
            "Doe, J., Roe, A., ``Impact Sensor for Helmets''  (application: May 2021)"
        );
        assert_eq!(format_property("Untitled disclosure\nsecond line"), "Untitled disclosure");
    }

    #[test]
    fn test_render_section() {
        let dossier = dossier_from_text(
            "Patent Intellectual Property\n\
             \n\
             Doe, J., \"Bone Phantom\" (application: 2020)\n\
             \n\
             Impact in Society of Research Scholarship and Creative Accomplishment",
        );
        let config = Config::default();
        let ctx = RenderContext::new(&dossier, &config, today());

        let out = render(&ctx);
        assert!(out.contains("\\section*{INTELLECTUAL PROPERTY}"));
        assert!(out.contains("\\noindent Doe, J., ``Bone Phantom''  (application: 2020)\\par"));
    }
}
