//! Segment extractor: normalized text in, section/subsection records out.
//!
//! Works from the text alone. No structural metadata crosses the boundary
//! from the normalizer, so an intermediate file that was inspected or even
//! hand-edited still extracts the same way.

use serde::Serialize;

use crate::patterns;

/// One content group: the headings active when its body text was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(rename = "Section")]
    pub section: Option<String>,
    #[serde(rename = "Subsection")]
    pub subsection: Option<String>,
    #[serde(rename = "Content")]
    pub content: String,
}

/// Scan normalized text and build the record sequence.
pub fn extract_records(text: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut section: Option<String> = None;
    let mut subsection: Option<String> = None;
    let mut content: Vec<String> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = patterns::match_subsection(line) {
            flush(&mut records, &section, &subsection, &mut content);
            // Text after a colon belongs to the body of the new group, not
            // to the heading itself.
            match rest.split_once(':') {
                Some((heading, extra)) => {
                    subsection = Some(heading.trim().to_string());
                    let extra = extra.trim();
                    if !extra.is_empty() {
                        content.push(extra.to_string());
                    }
                }
                None => subsection = Some(rest.to_string()),
            }
            continue;
        }

        if let Some(rest) = patterns::match_section(line) {
            flush(&mut records, &section, &subsection, &mut content);
            // Sections keep any colon remainder inside the heading text;
            // only subsections split. The asymmetry is intentional.
            section = Some(rest.to_string());
            subsection = None;
            continue;
        }

        // Anything else, including near-miss numbering, is body text.
        content.push(line.to_string());
    }
    flush(&mut records, &section, &subsection, &mut content);

    records
}

fn flush(
    records: &mut Vec<Record>,
    section: &Option<String>,
    subsection: &Option<String>,
    content: &mut Vec<String>,
) {
    if content.is_empty() {
        return;
    }
    records.push(Record {
        section: section.clone(),
        subsection: subsection.clone(),
        content: content.join(" ").trim().to_string(),
    });
    content.clear();
}
