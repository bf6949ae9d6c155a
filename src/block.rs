/// A paragraph as delivered by the document reader: its raw text, the style
/// name attached to it, and its position in a bullet/numbered list if any.
#[derive(Debug, Clone)]
pub struct ParagraphBlock {
    pub text: String,
    pub style: String,
    /// `None` for a plain paragraph, `Some(0)` for a top-level list item,
    /// `Some(n)` for an item nested `n` levels deep.
    pub list_level: Option<u32>,
}

impl ParagraphBlock {
    /// A plain body paragraph with the default style.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: "Normal".to_string(),
            list_level: None,
        }
    }

    /// A paragraph carrying an explicit style name.
    pub fn styled(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: style.into(),
            list_level: None,
        }
    }

    /// A list item at the given nesting depth (0 = top level).
    pub fn list_item(text: impl Into<String>, level: u32) -> Self {
        Self {
            text: text.into(),
            style: "List Paragraph".to_string(),
            list_level: Some(level),
        }
    }
}

/// A top-level bullet and the text of its directly nested children.
/// Only lives while a single list block is being merged into prose.
#[derive(Debug, Clone, Default)]
pub struct BulletEntry {
    pub text: String,
    pub nested: Vec<String>,
}

impl BulletEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            nested: Vec::new(),
        }
    }
}
