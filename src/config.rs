use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Conversion settings, loadable from a TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Paragraph styles dropped entirely (document titles live outside the
    /// section numbering).
    pub skip_styles: Vec<String>,
    /// Token appended to body lines in the intermediate text.
    pub separator: String,
    /// Pretty-print the JSON output.
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_styles: vec!["Heading 1".to_string()],
            separator: "<SEP>".to_string(),
            pretty_json: true,
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Should paragraphs with this style be skipped? Style names arrive
    /// either resolved ("Heading 1") or as raw ids ("Heading1", lowercase
    /// in some producers), so the comparison ignores spaces and case.
    pub fn skips_style(&self, style: &str) -> bool {
        let canon = canonical(style);
        self.skip_styles.iter().any(|s| canonical(s) == canon)
    }
}

fn canonical(style: &str) -> String {
    style
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_matching_ignores_spacing_and_case() {
        let config = Config::default();
        assert!(config.skips_style("Heading 1"));
        assert!(config.skips_style("Heading1"));
        assert!(config.skips_style("heading 1"));
        assert!(!config.skips_style("Heading 2"));
        assert!(!config.skips_style("Normal"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Path::new("does-not-exist.toml"));
        assert_eq!(config.separator, "<SEP>");
        assert!(config.pretty_json);
    }
}
