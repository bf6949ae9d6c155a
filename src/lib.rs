mod block;
mod config;
mod docx;
mod error;
mod extract;
mod normalize;
mod patterns;

pub use block::{BulletEntry, ParagraphBlock};
pub use config::Config;
pub use docx::{read_docx, read_docx_from};
pub use error::{Error, Result};
pub use extract::{Record, extract_records};
pub use normalize::{lines_to_text, normalize_blocks};

use std::path::Path;

/// Read a .docx file and produce the normalized plain-text form.
pub fn docx_to_text(path: &Path, config: &Config) -> Result<String> {
    let blocks = read_docx(path)?;
    Ok(lines_to_text(&normalize_blocks(&blocks, config)))
}

/// Full pipeline: .docx file to section/subsection records.
pub fn docx_to_records(path: &Path, config: &Config) -> Result<Vec<Record>> {
    let text = docx_to_text(path, config)?;
    Ok(extract_records(&text))
}

/// Serialize records as a UTF-8 JSON array.
pub fn records_to_json(records: &[Record], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}
