//! Paraphrase output parsing
//!
//! The chat backend returns free-form text. Variants are recovered
//! line by line, stripped of list scaffolding, and deduplicated.

use std::collections::HashSet;

use textmorph_common::{Result, TextMorphError};

/// Clean a single line of paraphrase model output
///
/// Returns None for lines that should be discarded: empty lines,
/// numbered list lines, and lines left with two or fewer words after
/// stripping a leading bullet marker and all double quotes.
pub fn clean_paraphrase_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    // Numbered lines ("1." / "12)") are list scaffolding, not content
    let numbered = regex::Regex::new(r"^[0-9]+[.)]").unwrap();
    if numbered.is_match(line) {
        return None;
    }

    // Strip one leading bullet marker and any following whitespace
    let line = match line.strip_prefix(&['•', '*', '-'][..]) {
        Some(rest) => rest.trim_start(),
        None => line,
    };

    let line = line.replace('"', "");
    let line = line.trim();

    // Lines of two or fewer words carry no usable paraphrase
    if line.split_whitespace().count() <= 2 {
        return None;
    }

    Some(line.to_string())
}

/// Parse free-form paraphrase model output into distinct variants
///
/// Splits on newlines, cleans each line, deduplicates exact matches
/// preserving first-seen order, and truncates to `num_variants`.
/// A response that yields zero usable lines is a reportable failure,
/// not an empty list.
pub fn parse_paraphrases(content: &str, num_variants: usize) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut variants = Vec::new();

    for line in content.lines() {
        if let Some(cleaned) = clean_paraphrase_line(line) {
            if seen.insert(cleaned.clone()) {
                variants.push(cleaned);
                if variants.len() == num_variants {
                    break;
                }
            }
        }
    }

    if variants.is_empty() {
        return Err(TextMorphError::empty_result(
            "No valid paraphrases generated",
        ));
    }

    Ok(variants)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line_passthrough() {
        assert_eq!(
            clean_paraphrase_line("Alpha beta gamma"),
            Some("Alpha beta gamma".to_string())
        );
    }

    #[test]
    fn test_clean_line_drops_numbered() {
        assert_eq!(clean_paraphrase_line("1. Foo bar baz"), None);
        assert_eq!(clean_paraphrase_line("12) Foo bar baz"), None);
    }

    #[test]
    fn test_clean_line_strips_bullet_and_quotes() {
        assert_eq!(
            clean_paraphrase_line("• \"Quoted phrase here\""),
            Some("Quoted phrase here".to_string())
        );
        assert_eq!(
            clean_paraphrase_line("- Another good line"),
            Some("Another good line".to_string())
        );
        assert_eq!(
            clean_paraphrase_line("*No space after star"),
            Some("No space after star".to_string())
        );
    }

    #[test]
    fn test_clean_line_drops_short_lines() {
        assert_eq!(clean_paraphrase_line("Hi"), None);
        assert_eq!(clean_paraphrase_line("Two words"), None);
        assert_eq!(clean_paraphrase_line("   "), None);
        // Bullet-only line is empty after stripping
        assert_eq!(clean_paraphrase_line("• "), None);
    }

    #[test]
    fn test_parse_idempotent_on_clean_input() {
        let input = "Alpha beta gamma\nDelta epsilon zeta";
        let variants = parse_paraphrases(input, 3).unwrap();
        assert_eq!(variants, vec!["Alpha beta gamma", "Delta epsilon zeta"]);
    }

    #[test]
    fn test_parse_mixed_input() {
        let input = "1. Foo bar baz\n• \"Quoted phrase here\"\nHi\n- Another good line";
        let variants = parse_paraphrases(input, 3).unwrap();
        assert_eq!(variants, vec!["Quoted phrase here", "Another good line"]);
    }

    #[test]
    fn test_parse_dedup_preserves_order() {
        let input = "A nice line\nA nice line";
        let variants = parse_paraphrases(input, 3).unwrap();
        assert_eq!(variants, vec!["A nice line"]);

        let input = "Second one here\nFirst one here\nSecond one here";
        let variants = parse_paraphrases(input, 3).unwrap();
        assert_eq!(variants, vec!["Second one here", "First one here"]);
    }

    #[test]
    fn test_parse_truncates_to_requested_count() {
        let input = "First variant line\nSecond variant line\nThird variant line";
        let variants = parse_paraphrases(input, 2).unwrap();
        assert_eq!(variants, vec!["First variant line", "Second variant line"]);
    }

    #[test]
    fn test_parse_all_filtered_is_error() {
        let err = parse_paraphrases("1. one\n2. two", 3).unwrap_err();
        assert!(matches!(err, TextMorphError::EmptyResult(_)));
    }
}
