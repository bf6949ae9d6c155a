//! Minimal .docx reader.
//!
//! DOCX files are ZIP archives of Open XML parts; the paragraphs live in
//! `word/document.xml`. Only what the normalizer needs is read: paragraph
//! text, the paragraph style, and the list nesting level from
//! `w:pPr/w:numPr/w:ilvl`.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use zip::ZipArchive;

use crate::block::ParagraphBlock;
use crate::error::{Error, Result};

/// Read all paragraphs of a .docx file, in document order.
pub fn read_docx(path: &Path) -> Result<Vec<ParagraphBlock>> {
    let file = File::open(path)?;
    read_docx_from(BufReader::new(file), &path.display().to_string())
}

/// Read paragraphs from any seekable source holding a .docx archive.
pub fn read_docx_from<R: Read + Seek>(reader: R, name: &str) -> Result<Vec<ParagraphBlock>> {
    let mut archive = ZipArchive::new(reader)?;
    let styles = read_style_names(&mut archive);
    let xml = read_part(&mut archive, "word/document.xml")
        .ok_or_else(|| Error::MissingDocumentPart(name.to_string()))?;
    parse_document_xml(&xml, &styles)
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, part: &str) -> Option<String> {
    let mut content = String::new();
    archive
        .by_name(part)
        .ok()?
        .read_to_string(&mut content)
        .ok()?;
    Some(content)
}

fn parse_document_xml(
    xml: &str,
    styles: &HashMap<String, String>,
) -> Result<Vec<ParagraphBlock>> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut blocks = Vec::new();

    let mut text = String::new();
    let mut style_id: Option<String> = None;
    let mut has_numbering = false;
    let mut list_level: Option<u32> = None;
    let mut in_properties = false;
    let mut in_numbering = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    text.clear();
                    style_id = None;
                    has_numbering = false;
                    list_level = None;
                }
                b"pPr" => in_properties = true,
                b"numPr" => {
                    if in_properties {
                        has_numbering = true;
                        in_numbering = true;
                    }
                }
                b"pStyle" => {
                    if in_properties {
                        style_id = get_attribute(e, "val");
                    }
                }
                b"ilvl" => {
                    if in_numbering {
                        list_level = get_attribute(e, "val").and_then(|v| v.parse().ok());
                    }
                }
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"pStyle" => {
                    if in_properties {
                        style_id = get_attribute(e, "val");
                    }
                }
                b"numPr" => {
                    if in_properties {
                        has_numbering = true;
                    }
                }
                b"ilvl" => {
                    if in_numbering {
                        // Unparseable levels fall back to 0 below; the item
                        // still counts as part of the list.
                        list_level = get_attribute(e, "val").and_then(|v| v.parse().ok());
                    }
                }
                b"br" | b"tab" => {
                    if in_text || !text.is_empty() {
                        text.push(' ');
                    }
                }
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    let style = match &style_id {
                        Some(id) => styles.get(id).cloned().unwrap_or_else(|| id.clone()),
                        None => "Normal".to_string(),
                    };
                    blocks.push(ParagraphBlock {
                        text: std::mem::take(&mut text),
                        style,
                        list_level: if has_numbering {
                            Some(list_level.unwrap_or(0))
                        } else {
                            None
                        },
                    });
                }
                b"pPr" => in_properties = false,
                b"numPr" => in_numbering = false,
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    text.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(blocks)
}

/// Map style ids to their display names from `word/styles.xml`. A missing
/// or unreadable part degrades to raw style ids, never to a failure.
fn read_style_names<R: Read + Seek>(archive: &mut ZipArchive<R>) -> HashMap<String, String> {
    let mut names = HashMap::new();
    let Some(xml) = read_part(archive, "word/styles.xml") else {
        return names;
    };

    let mut reader = Reader::from_str(&xml);
    let mut buf = Vec::new();
    let mut current_id: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if e.local_name().as_ref() == b"style" {
                    current_id = get_attribute(e, "styleId");
                }
            }
            Ok(Event::Empty(ref e)) => {
                if e.local_name().as_ref() == b"name" {
                    if let (Some(id), Some(name)) = (&current_id, get_attribute(e, "val")) {
                        names.insert(id.clone(), name);
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                if e.local_name().as_ref() == b"style" {
                    current_id = None;
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    names
}

/// Get an attribute value by local name, ignoring the namespace prefix.
fn get_attribute(e: &BytesStart, name: &str) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == name.as_bytes() {
            return Some(String::from_utf8_lossy(&attr.value).to_string());
        }
    }
    None
}
