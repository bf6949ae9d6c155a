//! Heading-number patterns shared by the normalizer and the extractor.
//!
//! Two forms exist for each heading kind: a bare match used when deciding
//! separator placement, and a capturing form used during extraction. The
//! capturing form also tolerates `<SEC>`/`<SUBSEC>` wrappers so manually
//! annotated intermediate files still parse.

use once_cell::sync::Lazy;
use regex::Regex;

/// `1. ` style top-level section heading.
static SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// `1.1 `, `1.1.1 ` or `1.1. ` style subsection heading.
static SUBSECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+(?:\.\d+)?\.?\s").unwrap());

static SECTION_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:<SEC>\s*)?(\d+\.\s)(.+?)(?:\s*</SEC>)?$").unwrap());

static SUBSECTION_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:<SUBSEC>\s*)?(\d+\.\d+(?:\.\d+)?\.?\s)(.+?)(?:\s*</SUBSEC>)?$").unwrap());

/// Does this line open a section?
pub fn is_section(line: &str) -> bool {
    SECTION.is_match(line)
}

/// Does this line open a subsection?
pub fn is_subsection(line: &str) -> bool {
    SUBSECTION.is_match(line)
}

/// Match a section heading and return its text with the numbering token
/// (and any tag wrapper) stripped.
pub fn match_section(line: &str) -> Option<&str> {
    SECTION_HEADING
        .captures(line)
        .and_then(|c| c.get(2))
        .map(|m| m.as_str())
}

/// Match a subsection heading and return its text with the numbering token
/// (and any tag wrapper) stripped.
pub fn match_subsection(line: &str) -> Option<&str> {
    SUBSECTION_HEADING
        .captures(line)
        .and_then(|c| c.get(2))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_matching() {
        assert!(is_section("1. Overview"));
        assert!(is_section("12. Another"));
        assert!(!is_section("1.1 Nested"));
        assert!(!is_section("1.Overview"));
        assert!(!is_section("Overview"));
    }

    #[test]
    fn subsection_matching() {
        assert!(is_subsection("1.1 Details"));
        assert!(is_subsection("2.3.4 Deep"));
        assert!(is_subsection("2.3. Dotted"));
        assert!(!is_subsection("1. Top"));
        assert!(!is_subsection("1.1Details"));
    }

    #[test]
    fn strips_numbering_prefix() {
        assert_eq!(match_section("1. Overview"), Some("Overview"));
        assert_eq!(match_subsection("1.1 Details: more"), Some("Details: more"));
        assert_eq!(match_section("1.1 Details"), None);
    }

    #[test]
    fn strips_tag_wrappers() {
        assert_eq!(match_section("<SEC> 2. Scope </SEC>"), Some("Scope"));
        assert_eq!(match_subsection("<SUBSEC>2.1 Terms</SUBSEC>"), Some("Terms"));
    }

    #[test]
    fn near_misses_do_not_match() {
        // No text after the number token, or no whitespace after the dot.
        assert_eq!(match_section("3."), None);
        assert_eq!(match_subsection("3.1"), None);
        assert_eq!(match_section("v1. notes"), None);
    }
}
