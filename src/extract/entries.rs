//! Regex entry parsing

use regex::Regex;

/// One tuple per match of `pattern` in `section`, holding capture groups
/// 1..n in order. Groups that did not participate come back empty.
pub fn parse_entries(section: &str, pattern: &Regex) -> Vec<Vec<String>> {
    pattern
        .captures_iter(section)
        .map(|caps| {
            (1..caps.len())
                .map(|i| caps.get(i).map(|m| m.as_str().to_string()).unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Non-empty, trimmed blocks separated by blank lines
pub fn blocks(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n").map(str::trim).filter(|block| !block.is_empty())
}

/// First line of a block, trimmed
pub fn first_line(block: &str) -> &str {
    block.lines().next().unwrap_or("").trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuples_per_match() {
        let pattern = Regex::new(r"(\w+)=(\d+)(?:;(\w+))?").expect("valid regex");
        let entries = parse_entries("a=1;x b=2", &pattern);
        assert_eq!(
            entries,
            vec![
                vec!["a".to_string(), "1".to_string(), "x".to_string()],
                vec!["b".to_string(), "2".to_string(), String::new()],
            ]
        );
    }

    #[test]
    fn test_no_matches() {
        let pattern = Regex::new(r"(\d{4})").expect("valid regex");
        assert!(parse_entries("no years here", &pattern).is_empty());
    }

    #[test]
    fn test_blocks_skip_blank_runs() {
        let text = "first\nline\n\n\n\n second \n\n";
        let collected: Vec<_> = blocks(text).collect();
        assert_eq!(collected, vec!["first\nline", "second"]);
        assert_eq!(first_line(collected[0]), "first");
    }
}
