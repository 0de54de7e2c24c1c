//! Service: drop the sub-section name repeated at the start of each entry

use tracing::debug;

use super::splice;

pub const SERVICE_LABELS: [&str; 5] = ["College", "Department", "University", "Profession", "Society"];

/// Within each `\subsubsection{Label}` span, remove every `Label, `
pub fn clean_service_section(text: &str) -> String {
    let mut text = text.to_string();

    for label in SERVICE_LABELS {
        let heading = format!("\\subsubsection{{{label}}}");
        let Some(start) = text.find(&heading) else {
            debug!(label, "service sub-section not found");
            continue;
        };
        let body_start = start + heading.len();
        let end = text[body_start..]
            .find(r"\subsubsection")
            .map(|pos| pos + body_start)
            .unwrap_or(text.len());

        let cleaned = text[start..end].replace(&format!("{label}, "), "");
        text = splice(&text, start..end, &cleaned);
    }

    text
}
