//! Post-processing of text pulled out of the dossier
//!
//! Word's typographic punctuation would otherwise break marker matching
//! (`Master’s Thesis Advisor` vs `Master's Thesis Advisor`) and regex entry
//! parsing. Accented letters are kept; they are converted to LaTeX accents
//! when the text is rendered.

pub(crate) fn normalize_text(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{2032}' => normalized.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201F}' | '\u{2033}' => normalized.push('"'),
            '\u{2013}' => normalized.push_str("--"),
            '\u{2014}' => normalized.push_str("---"),
            '\u{2026}' => normalized.push_str("..."),
            '\u{00A0}' | '\u{2007}' | '\u{202F}' => normalized.push(' '),
            '\u{00AD}' | '\u{200B}' | '\u{FEFF}' => {}
            _ => normalized.push(c),
        }
    }

    normalized
}
