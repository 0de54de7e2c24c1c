//! Whole-document edits
//!
//! Each edit looks for one literal anchor. When the anchor is missing the
//! edit logs a warning and returns the text unchanged.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::warn;

const BEGIN_DOCUMENT: &str = r"\begin{document}";
const AUTHOR: &str = r"\author{";

static DOCUMENTCLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\\documentclass\[(.*?)\]\{article\}").expect("valid documentclass regex")
});

static SUBSECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\subsection\{([^}]*)\}").expect("valid subsection regex"));

static SUBSECTION_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)(\\titleformat\{\\subsection\}.*?\\color\{)[^}]*(\})")
        .expect("valid subsection color regex")
});

static SUBSUBSECTION_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)(\\titleformat\{\\subsubsection\}.*?\\color\{)[^}]*(\})")
        .expect("valid subsubsection color regex")
});

fn insert_before(text: &str, anchor: &str, block: &str, edit: &str) -> String {
    match text.find(anchor) {
        Some(pos) => format!("{}{}{}", &text[..pos], block, &text[pos..]),
        None => {
            warn!(edit, anchor, "anchor not found, document left unchanged");
            text.to_string()
        }
    }
}

fn insert_after(text: &str, anchor: &str, block: &str, edit: &str) -> String {
    match text.find(anchor) {
        Some(pos) => {
            let pos = pos + anchor.len();
            format!("{}{}{}", &text[..pos], block, &text[pos..])
        }
        None => {
            warn!(edit, anchor, "anchor not found, document left unchanged");
            text.to_string()
        }
    }
}

/// `\usepackage{name}` on its own line before `\author{`
pub fn add_custom_package(text: &str, package: &str) -> String {
    insert_before(
        text,
        AUTHOR,
        &format!("\\usepackage{{{package}}}\n"),
        "add_custom_package",
    )
}

/// titlesec heading formats with the given colours, before `\begin{document}`
pub fn set_section_colors(text: &str, subsection_color: &str, subsubsection_color: &str) -> String {
    let commands = format!(
        r"
\usepackage{{titlesec}}
\usepackage{{color}}
\titleformat{{\subsection}}
  {{\normalfont\large\bfseries\color{{{subsection_color}}}}}
  {{\thesubsection}}
  {{1em}}
  {{}}
\titleformat{{\subsubsection}}
  {{\normalfont\normalsize\bfseries\color{{{subsubsection_color}}}}}
  {{\thesubsubsection}}
  {{1em}}
  {{}}
"
    );
    insert_before(text, BEGIN_DOCUMENT, &commands, "set_section_colors")
}

/// Recolour headings previously set up by `set_section_colors`
pub fn replace_section_colors(text: &str, subsection_color: &str, subsubsection_color: &str) -> String {
    if !SUBSECTION_COLOR.is_match(text) && !SUBSUBSECTION_COLOR.is_match(text) {
        warn!("no \\titleformat colours found, document left unchanged");
        return text.to_string();
    }

    let text = SUBSECTION_COLOR.replace(text, |caps: &Captures| {
        format!("{}{}{}", &caps[1], subsection_color, &caps[2])
    });
    SUBSUBSECTION_COLOR
        .replace(&text, |caps: &Captures| {
            format!("{}{}{}", &caps[1], subsubsection_color, &caps[2])
        })
        .into_owned()
}

/// First-page header with `stamp` (usually month and year) at the top right
pub fn add_date_to_header(text: &str, stamp: &str) -> String {
    let header = format!(
        r"
\usepackage{{fancyhdr}}
\usepackage{{xcolor}}
\definecolor{{darkgray}}{{gray}}{{0.4}}
\fancypagestyle{{firstpage}}{{
    \fancyhf{{}}
    \rhead{{\textcolor{{darkgray}}{{{stamp}}}}}
    \renewcommand{{\headrulewidth}}{{0pt}}
}}
\thispagestyle{{firstpage}}
"
    );
    insert_before(text, BEGIN_DOCUMENT, &header, "add_date_to_header")
}

/// Centered small-caps name with a rule below, right after `\begin{document}`
pub fn format_header(text: &str, title: &str, rule_width: &str) -> String {
    let header = format!(
        r"
\begin{{center}}
\LARGE \textbf{{\textsc{{{title}}}}} \\
\rule{{\linewidth}}{{{rule_width}}}
\end{{center}}
\normalsize
",
        title = title.to_uppercase()
    );
    insert_after(text, BEGIN_DOCUMENT, &header, "format_header")
}

/// Remove a literal block (e.g. the contact lines pandoc puts under the title)
pub fn remove_block(text: &str, block: &str) -> String {
    let block = block.trim();
    if block.is_empty() || !text.contains(block) {
        warn!("block to remove not found, document left unchanged");
        return text.to_string();
    }
    text.replace(block, "")
}

/// Set the size option of `\documentclass[...]{article}` to `{size}pt`
pub fn update_documentclass_font_size(text: &str, size: u8) -> String {
    if !DOCUMENTCLASS.is_match(text) {
        warn!("\\documentclass[...]{{article}} not found, document left unchanged");
        return text.to_string();
    }
    DOCUMENTCLASS
        .replace_all(text, format!(r"\documentclass[{size}pt]{{article}}").as_str())
        .into_owned()
}

/// Uppercase every `\subsection{...}` title, collapsing runs of whitespace.
pub fn capitalize_subsections(text: &str) -> String {
    SUBSECTION
        .replace_all(text, |caps: &Captures| {
            let title = caps[1].split_whitespace().collect::<Vec<_>>().join(" ");
            format!(r"\subsection{{{}}}", title.to_uppercase())
        })
        .into_owned()
}

/// Literal heading renames, e.g. `\subsubsection{Other}` to a friendlier title
pub fn rename_sections(text: &str, renames: &[(&str, &str)]) -> String {
    let mut text = text.to_string();
    for (from, to) in renames {
        if text.contains(from) {
            text = text.replace(from, to);
        }
    }
    text
}
