//! Author-name highlighting in publication entries

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::PersonConfig;
use crate::dossier::Dossier;

static STUDENT_AUTHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([A-Z][A-Za-z'\-]+,(?:\s?[A-Z]\.)+) \((?:Primary Author|Author|Co-Author|Student Author)(?: -? ?(?:Graduate Student|Undergraduate Student|Postdoctoral Student))?\)",
    )
    .expect("valid student author regex")
});

/// Matches the CV owner's name in author lists
#[derive(Debug, Clone)]
pub struct AuthorMatcher {
    regex: Regex,
}

impl AuthorMatcher {
    /// Build from literal spellings; longer spellings win over their prefixes
    pub fn new(patterns: &[String]) -> Option<Self> {
        let mut patterns: Vec<&str> = patterns
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect();
        if patterns.is_empty() {
            return None;
        }
        patterns.sort_by_key(|p| std::cmp::Reverse(p.len()));
        patterns.dedup();

        let alternation = patterns
            .iter()
            .map(|p| regex::escape(p).replace(' ', r"\s*"))
            .collect::<Vec<_>>()
            .join("|");
        // Do not match inside an existing \textbf{...}
        let regex = Regex::new(&format!(r"(\\textbf\{{)?\b({alternation})")).ok()?;
        Some(Self { regex })
    }

    /// Configured spellings, or `Last, F. M.`, `Last, F.` and `Last,` derived
    /// from the dossier profile table.
    pub fn resolve(person: &PersonConfig, dossier: Option<&Dossier>) -> Option<Self> {
        if !person.author_patterns.is_empty() {
            return Self::new(&person.author_patterns);
        }

        let profile = dossier?.profile();
        let last = profile.get("Last Name")?.trim().to_string();
        if last.is_empty() {
            return None;
        }

        let initials: Vec<String> = profile
            .get("First Name and Initial")
            .map(|first| {
                first
                    .split_whitespace()
                    .filter_map(|part| part.chars().next())
                    .filter(|c| c.is_alphabetic())
                    .map(|c| format!("{}.", c.to_uppercase()))
                    .collect()
            })
            .unwrap_or_default();

        let mut patterns = vec![format!("{last},")];
        if let Some(first) = initials.first() {
            patterns.push(format!("{last}, {first}"));
        }
        if initials.len() > 1 {
            patterns.push(format!("{last}, {}", initials.join(" ")));
        }
        Self::new(&patterns)
    }

    /// Wrap every match in `\textbf{}`; names already bold are left alone
    pub fn bold(&self, text: &str) -> String {
        self.regex
            .replace_all(text, |caps: &Captures| {
                if caps.get(1).is_some() {
                    caps[0].to_string()
                } else {
                    format!(r"\textbf{{{}}}", &caps[2])
                }
            })
            .into_owned()
    }
}

/// Underline student co-authors marked with their authorship role, dropping
/// the role annotation.
pub fn underline_students(text: &str) -> String {
    STUDENT_AUTHOR
        .replace_all(text, r"\underline{$1}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dossier::{DossierTable, TableCell};

    fn matcher(patterns: &[&str]) -> AuthorMatcher {
        let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        AuthorMatcher::new(&patterns).expect("matcher")
    }

    #[test]
    fn test_longest_spelling_bolded_once() {
        let m = matcher(&["Doe,", "Doe, J.", "Doe, J. Q."]);
        assert_eq!(
            m.bold("Roe, A., Doe, J. Q., and Poe, C."),
            r"Roe, A., \textbf{Doe, J. Q.}, and Poe, C."
        );
        assert_eq!(m.bold(r"\textbf{Doe, J. Q.}"), r"\textbf{Doe, J. Q.}");
    }

    #[test]
    fn test_spacing_between_initials_is_flexible() {
        let m = matcher(&["Doe, J. Q."]);
        assert_eq!(m.bold("Doe, J.Q. (2020)"), r"\textbf{Doe, J.Q.} (2020)");
    }

    #[test]
    fn test_empty_patterns_give_no_matcher() {
        assert!(AuthorMatcher::new(&[]).is_none());
        assert!(AuthorMatcher::new(&["  ".to_string()]).is_none());
    }

    #[test]
    fn test_resolve_from_profile() {
        let dossier = Dossier {
            paragraphs: vec![],
            tables: vec![DossierTable {
                rows: vec![
                    vec![
                        TableCell::new("First Name and Initial").with_bold(true),
                        TableCell::new("Last Name").with_bold(true),
                    ],
                    vec![TableCell::new("Jane Q."), TableCell::new("Doe")],
                ],
            }],
        };
        let m = AuthorMatcher::resolve(&PersonConfig::default(), Some(&dossier)).expect("matcher");
        assert_eq!(m.bold("Doe, J. Q., Roe, A."), r"\textbf{Doe, J. Q.}, Roe, A.");
        assert_eq!(m.bold("Doe, J., Roe, A."), r"\textbf{Doe, J.}, Roe, A.");
    }

    #[test]
    fn test_underline_students() {
        let text = "Roe, A. (Primary Author - Graduate Student), Doe, J. (Co-Author)";
        assert_eq!(underline_students(text), r"\underline{Roe, A.}, \underline{Doe, J.}");
        assert_eq!(underline_students("Roe, A. (Editor)"), "Roe, A. (Editor)");
    }
}
