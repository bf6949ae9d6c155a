//! Structural normalizer: paragraph blocks in, clean text lines out.
//!
//! Bulleted lists are folded into single prose sentences, runs of blank
//! lines collapse to one, and a separator token is appended to body lines
//! so the extractor's consumers can tell content units apart.

use crate::block::{BulletEntry, ParagraphBlock};
use crate::config::Config;
use crate::patterns;

/// Where the normalizer is relative to a bulleted list.
enum ListState {
    NotInList,
    InList {
        /// Lead-in paragraph ending in `:`, kept verbatim (colon included).
        intro: Option<String>,
        bullets: Vec<BulletEntry>,
    },
}

/// Normalize a block stream into the final line sequence.
pub fn normalize_blocks(blocks: &[ParagraphBlock], config: &Config) -> Vec<String> {
    let mut lines = Vec::new();
    let mut state = ListState::NotInList;

    for block in blocks {
        if config.skips_style(&block.style) {
            continue;
        }
        let text = block.text.trim();

        // A non-list paragraph ends any open list; the merged sentence is
        // emitted and the paragraph is then handled as if no list existed.
        if matches!(state, ListState::InList { .. }) && block.list_level.is_none() {
            finish_list(&mut state, &mut lines);
        }

        match &mut state {
            ListState::NotInList => {
                if text.ends_with(':') {
                    state = ListState::InList {
                        intro: Some(text.to_string()),
                        bullets: Vec::new(),
                    };
                } else if block.list_level.is_some() {
                    state = ListState::InList {
                        intro: None,
                        bullets: vec![BulletEntry::new(text)],
                    };
                } else {
                    lines.push(text.to_string());
                }
            }
            ListState::InList { bullets, .. } => match block.list_level {
                Some(level) if level > 0 => match bullets.last_mut() {
                    Some(last) => last.nested.push(text.to_string()),
                    // Nested item with no parent yet: promote it rather
                    // than lose it.
                    None => bullets.push(BulletEntry::new(text)),
                },
                _ => bullets.push(BulletEntry::new(text)),
            },
        }
    }
    finish_list(&mut state, &mut lines);

    let lines = collapse_blank_lines(lines);
    insert_separators(lines, &config.separator)
}

/// Join normalized lines into the intermediate text artifact.
pub fn lines_to_text(lines: &[String]) -> String {
    lines.join("\n")
}

fn finish_list(state: &mut ListState, lines: &mut Vec<String>) {
    if let ListState::InList { intro, bullets } = std::mem::replace(state, ListState::NotInList) {
        lines.push(merge_list(intro.as_deref(), &bullets));
    }
}

/// Fold one list block into a single sentence.
fn merge_list(intro: Option<&str>, entries: &[BulletEntry]) -> String {
    let joined = entries
        .iter()
        .map(merge_entry)
        .collect::<Vec<_>>()
        .join(", ");
    match intro {
        Some(intro) => format!("{intro} {joined}").trim_end().to_string(),
        None => joined,
    }
}

fn merge_entry(entry: &BulletEntry) -> String {
    match entry.nested.as_slice() {
        [] => entry.text.clone(),
        [only] => format!("{} {}", entry.text, only),
        nested => {
            // Trailing periods are dropped from every nested clause except
            // the last, which keeps the sentence-ending punctuation.
            let last = nested.len() - 1;
            let joined = nested
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    if i == last {
                        text.as_str()
                    } else {
                        text.trim_end_matches('.')
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} {}", entry.text, joined)
        }
    }
}

/// Collapse runs of blank lines into a single blank line.
fn collapse_blank_lines(lines: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        if line.trim().is_empty() {
            if matches!(cleaned.last(), Some(prev) if prev.trim().is_empty()) {
                continue;
            }
            cleaned.push(String::new());
        } else {
            cleaned.push(line);
        }
    }
    cleaned
}

/// A line gets a trailing separator unless it is a heading. Subsection
/// headings that carry a colon still get one: their tail is body content.
fn wants_separator(line: &str) -> bool {
    let stripped = line.trim();
    if stripped.is_empty() {
        return false;
    }
    if patterns::is_section(stripped) {
        return false;
    }
    if patterns::is_subsection(stripped) {
        return stripped.contains(':');
    }
    true
}

/// Append the separator to every qualifying line except the last qualifying
/// line of the whole document. Lines that already end with the separator are
/// left alone so re-normalizing normalized text is a no-op.
fn insert_separators(lines: Vec<String>, separator: &str) -> Vec<String> {
    let last_qualifying = lines.iter().rposition(|l| wants_separator(l));
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if wants_separator(&line) && Some(i) != last_qualifying && !line.ends_with(separator) {
                format!("{line}{separator}")
            } else {
                line
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::ParagraphBlock;

    fn normalize(blocks: &[ParagraphBlock]) -> Vec<String> {
        normalize_blocks(blocks, &Config::default())
    }

    #[test]
    fn plain_paragraphs_pass_through() {
        let blocks = [
            ParagraphBlock::plain("First paragraph."),
            ParagraphBlock::plain("Second paragraph."),
        ];
        assert_eq!(
            normalize(&blocks),
            vec!["First paragraph.<SEP>", "Second paragraph."]
        );
    }

    #[test]
    fn heading_styles_are_skipped() {
        let blocks = [
            ParagraphBlock::styled("Employment Handbook", "Heading 1"),
            ParagraphBlock::plain("Body."),
        ];
        assert_eq!(normalize(&blocks), vec!["Body."]);
    }

    #[test]
    fn flat_bullets_merge_with_intro() {
        let blocks = [
            ParagraphBlock::plain("Factors include:"),
            ParagraphBlock::list_item("age.", 0),
            ParagraphBlock::list_item("income.", 0),
        ];
        assert_eq!(normalize(&blocks), vec!["Factors include: age., income."]);
    }

    #[test]
    fn nested_bullets_strip_inner_periods() {
        let blocks = [
            ParagraphBlock::list_item("Conditions apply.", 0),
            ParagraphBlock::list_item("Eligible if:", 0),
            ParagraphBlock::list_item("over 18.", 1),
            ParagraphBlock::list_item("resident.", 1),
            ParagraphBlock::list_item("employed.", 1),
        ];
        assert_eq!(
            normalize(&blocks),
            vec!["Conditions apply., Eligible if: over 18, resident, employed."]
        );
    }

    #[test]
    fn colon_ending_first_item_becomes_the_intro() {
        // The intro rule fires before the list check, so a colon-ending
        // block opening a list is absorbed as the lead-in clause.
        let blocks = [
            ParagraphBlock::list_item("Eligible if:", 0),
            ParagraphBlock::list_item("over 18.", 0),
            ParagraphBlock::list_item("resident.", 0),
        ];
        assert_eq!(
            normalize(&blocks),
            vec!["Eligible if: over 18., resident."]
        );
    }

    #[test]
    fn single_nested_bullet_keeps_period() {
        let blocks = [
            ParagraphBlock::list_item("Applies to", 0),
            ParagraphBlock::list_item("permanent staff.", 1),
        ];
        assert_eq!(normalize(&blocks), vec!["Applies to permanent staff."]);
    }

    #[test]
    fn paragraph_after_list_closes_it() {
        let blocks = [
            ParagraphBlock::list_item("one.", 0),
            ParagraphBlock::list_item("two.", 0),
            ParagraphBlock::plain("Afterwards."),
        ];
        assert_eq!(normalize(&blocks), vec!["one., two.<SEP>", "Afterwards."]);
    }

    #[test]
    fn colon_paragraph_after_list_opens_new_intro() {
        let blocks = [
            ParagraphBlock::list_item("first.", 0),
            ParagraphBlock::plain("Also note:"),
            ParagraphBlock::list_item("second.", 0),
        ];
        assert_eq!(normalize(&blocks), vec!["first.<SEP>", "Also note: second."]);
    }

    #[test]
    fn orphan_nested_bullet_is_promoted() {
        let blocks = [
            ParagraphBlock::plain("Includes:"),
            ParagraphBlock::list_item("deep item.", 2),
        ];
        assert_eq!(normalize(&blocks), vec!["Includes: deep item."]);
    }

    #[test]
    fn pending_list_flushes_at_end_of_stream() {
        let blocks = [ParagraphBlock::list_item("tail item.", 0)];
        assert_eq!(normalize(&blocks), vec!["tail item."]);
    }

    #[test]
    fn blank_runs_collapse_to_one() {
        let blocks = [
            ParagraphBlock::plain("Above."),
            ParagraphBlock::plain(""),
            ParagraphBlock::plain(""),
            ParagraphBlock::plain("Below."),
        ];
        assert_eq!(normalize(&blocks), vec!["Above.<SEP>", "", "Below."]);
    }

    #[test]
    fn separator_placement_around_headings() {
        let blocks = [
            ParagraphBlock::plain("1. Overview"),
            ParagraphBlock::plain("First body."),
            ParagraphBlock::plain("Second body."),
            ParagraphBlock::plain("1.1 Details"),
            ParagraphBlock::plain("Final body."),
        ];
        // Headings never carry the separator; body lines all do except the
        // document-final qualifying one.
        assert_eq!(
            normalize(&blocks),
            vec![
                "1. Overview",
                "First body.<SEP>",
                "Second body.<SEP>",
                "1.1 Details",
                "Final body.",
            ]
        );
    }

    #[test]
    fn subsection_with_colon_gets_separator() {
        let blocks = [
            ParagraphBlock::plain("1.1 Details: inline content."),
            ParagraphBlock::plain("More."),
        ];
        assert_eq!(
            normalize(&blocks),
            vec!["1.1 Details: inline content.<SEP>", "More."]
        );
    }

    #[test]
    fn renormalizing_is_a_no_op() {
        let blocks = [
            ParagraphBlock::plain("1. Overview"),
            ParagraphBlock::plain("Body one."),
            ParagraphBlock::plain("Body two."),
        ];
        let once = normalize(&blocks);
        let again: Vec<ParagraphBlock> =
            once.iter().map(|line| ParagraphBlock::plain(line.as_str())).collect();
        assert_eq!(normalize(&again), once);
    }

    #[test]
    fn missing_list_metadata_degrades_to_body_text() {
        // A would-be list item whose level could not be read is emitted as
        // an ordinary paragraph; nothing is dropped.
        let blocks = [ParagraphBlock::plain("would-be bullet text.")];
        assert_eq!(normalize(&blocks), vec!["would-be bullet text."]);
    }

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(normalize(&[]).is_empty());
    }
}
