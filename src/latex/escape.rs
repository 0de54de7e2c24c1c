//! Character-level LaTeX conversions

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static STRAIGHT_QUOTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)"(.*?)""#).expect("valid quote regex"));

static ITEM_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\\item\s*\d+\.").expect("valid item number regex"));

const ACCENTS: &[(char, &str)] = &[
    ('á', r"\'a"),
    ('é', r"\'e"),
    ('í', r"\'i"),
    ('ó', r"\'o"),
    ('ú', r"\'u"),
    ('ñ', r"\~n"),
    ('ü', r#"\"u"#),
    ('Á', r"\'A"),
    ('É', r"\'E"),
    ('Í', r"\'I"),
    ('Ó', r"\'O"),
    ('Ú', r"\'U"),
    ('Ñ', r"\~N"),
    ('Ü', r#"\"U"#),
    ('ç', r"\c{c}"),
    ('Ç', r"\c{C}"),
    ('ö', r#"\"o"#),
    ('Ö', r#"\"O"#),
    ('ä', r#"\"a"#),
    ('Ä', r#"\"A"#),
    ('ß', r"\ss{}"),
];

/// Escape `& $ # %`, leaving already escaped ones alone
pub fn escape_specials(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut previous = None;

    for c in text.chars() {
        if matches!(c, '&' | '$' | '#' | '%') && previous != Some('\\') {
            escaped.push('\\');
        }
        escaped.push(c);
        previous = Some(c);
    }

    escaped
}

/// Replace accented letters with LaTeX accent commands
pub fn accents_to_latex(text: &str) -> String {
    let mut converted = String::with_capacity(text.len());

    for c in text.chars() {
        match ACCENTS.iter().find(|(accented, _)| *accented == c) {
            Some((_, latex)) => converted.push_str(latex),
            None => converted.push(c),
        }
    }

    converted
}

/// Turn `"quoted"` into ``` ``quoted'' ```. Spans that already open with
/// LaTeX quotes are left as they are.
pub fn latex_quotes(text: &str) -> String {
    STRAIGHT_QUOTES
        .replace_all(text, |caps: &Captures| {
            let content = &caps[1];
            if content.starts_with("``") {
                format!("\"{content}\"")
            } else {
                format!("``{content}''")
            }
        })
        .into_owned()
}

/// `\item 12. Text` becomes `\item Text`
pub fn strip_item_number(entry: &str) -> String {
    ITEM_NUMBER.replace(entry, r"\item").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_specials() {
        assert_eq!(escape_specials("R&D 50% #1 $5"), r"R\&D 50\% \#1 \$5");
        assert_eq!(escape_specials(r"R\&D"), r"R\&D", "no double escaping");
        assert_eq!(escape_specials("&&"), r"\&\&");
    }

    #[test]
    fn test_accents() {
        assert_eq!(accents_to_latex("Pérez Muñoz"), r"P\'erez Mu\~noz");
        assert_eq!(accents_to_latex("Müller"), r#"M\"uller"#);
        assert_eq!(accents_to_latex("plain"), "plain");
    }

    #[test]
    fn test_latex_quotes() {
        assert_eq!(
            latex_quotes(r#"Smith, "Bone Models", 2020"#),
            "Smith, ``Bone Models'', 2020"
        );
        assert_eq!(latex_quotes("spans \"two\nlines\""), "spans ``two\nlines''");
        assert_eq!(latex_quotes("no quotes"), "no quotes");
    }

    #[test]
    fn test_strip_item_number() {
        assert_eq!(strip_item_number(r"\item 12. Doe, J."), r"\item Doe, J.");
        assert_eq!(strip_item_number(r"\item Doe, J. 12."), r"\item Doe, J. 12.");
    }
}
