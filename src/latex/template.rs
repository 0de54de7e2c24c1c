//! The article template that `build` fills in

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// Sections of the generated CV, in template order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Positions,
    Education,
    Awards,
    Publications,
    Presentations,
    Grants,
    Property,
    Students,
    Teaching,
    Service,
    Editorial,
    Memberships,
    Impact,
}

impl Placeholder {
    pub const ALL: [Placeholder; 13] = [
        Placeholder::Positions,
        Placeholder::Education,
        Placeholder::Awards,
        Placeholder::Publications,
        Placeholder::Presentations,
        Placeholder::Grants,
        Placeholder::Property,
        Placeholder::Students,
        Placeholder::Teaching,
        Placeholder::Service,
        Placeholder::Editorial,
        Placeholder::Memberships,
        Placeholder::Impact,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Positions => "{{positions}}",
            Placeholder::Education => "{{education}}",
            Placeholder::Awards => "{{awards}}",
            Placeholder::Publications => "{{publications}}",
            Placeholder::Presentations => "{{presentations}}",
            Placeholder::Grants => "{{grants}}",
            Placeholder::Property => "{{property}}",
            Placeholder::Students => "{{students}}",
            Placeholder::Teaching => "{{teaching}}",
            Placeholder::Service => "{{service}}",
            Placeholder::Editorial => "{{editorial}}",
            Placeholder::Memberships => "{{memberships}}",
            Placeholder::Impact => "{{impact}}",
        }
    }
}

static UNFILLED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*\{\{[a-z_]+\}\}[ \t]*\n?").expect("valid placeholder regex"));

/// Article preamble and body with one placeholder per CV section
pub fn cv_template() -> String {
    let body: String = Placeholder::ALL
        .iter()
        .map(|placeholder| format!("{}\n", placeholder.token()))
        .collect();

    format!("{PREAMBLE}\\begin{{document}}\n{body}\\end{{document}}\n")
}

const PREAMBLE: &str = r"\documentclass[a4paper,10pt]{article}
\usepackage[a4paper, margin=1in]{geometry}
\usepackage{amsmath,amssymb}
\usepackage{iftex}
\usepackage{enumitem}

\ifPDFTeX
  \usepackage[T1]{fontenc}
  \usepackage[utf8]{inputenc}
  \usepackage{textcomp}
  \usepackage{newtxtext,newtxmath}
\else
  \usepackage{fontspec}
  \setmainfont{Times New Roman}
\fi

\IfFileExists{upquote.sty}{\usepackage{upquote}}{}
\IfFileExists{microtype.sty}{%
  \usepackage[]{microtype}
  \UseMicrotypeSet[protrusion]{basicmath}
}{}
\makeatletter
\@ifundefined{KOMAClassName}{%
  \IfFileExists{parskip.sty}{%
    \usepackage{parskip}
  }{
    \setlength{\parindent}{0pt}
    \setlength{\parskip}{6pt plus 2pt minus 1pt}}
}{
\KOMAoptions{parskip=half}}
\makeatother
\usepackage{xcolor}
\usepackage{tabularx}
\usepackage{longtable}
\usepackage{booktabs}
\setlength{\emergencystretch}{3em}
\providecommand{\tightlist}{%
  \setlength{\itemsep}{0pt}\setlength{\parskip}{0pt}}
\setcounter{secnumdepth}{-\maxdimen}
\usepackage{bookmark}
\IfFileExists{xurl.sty}{\usepackage{xurl}}{}
\urlstyle{same}
\hypersetup{
  hidelinks,
  pdfcreator={LaTeX via cvtex}}

\author{}
\date{}
";

/// Replace a placeholder token with rendered content
pub fn fill(text: &str, placeholder: Placeholder, content: &str) -> String {
    let token = placeholder.token();
    if !text.contains(token) {
        warn!(placeholder = token, "placeholder not found in template");
        return text.to_string();
    }
    text.replace(token, content)
}

/// Drop any placeholder lines nothing was rendered for
pub fn clear_unfilled(text: &str) -> String {
    UNFILLED.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_has_every_placeholder_and_anchor() {
        let template = cv_template();
        for placeholder in Placeholder::ALL {
            assert!(
                template.contains(placeholder.token()),
                "template should contain {}",
                placeholder.token()
            );
        }
        assert!(template.contains(r"\author{"));
        assert!(template.contains(r"\begin{document}"));
        assert!(template.contains(r"\documentclass[a4paper,10pt]{article}"));
    }

    #[test]
    fn test_fill_and_clear() {
        let text = "a\n{{education}}\n{{awards}}\nb\n";
        let filled = fill(text, Placeholder::Education, "EDU");
        assert_eq!(filled, "a\nEDU\n{{awards}}\nb\n");
        assert_eq!(clear_unfilled(&filled), "a\nEDU\nb\n");
    }

    #[test]
    fn test_fill_missing_placeholder_is_noop() {
        assert_eq!(fill("plain", Placeholder::Grants, "x"), "plain");
    }
}
