//! Fragment sources: where the pipeline's input comes from.
//!
//! Turning document bytes into styled fragments is the job of a content
//! extraction adapter outside this crate. [`FragmentSource`] is the seam such
//! an adapter plugs into. [`JsonFragmentSource`] reads fragments that an
//! adapter has already serialized.

use crate::error::Result;
use crate::geometry::Rect;
use crate::layout::TextFragment;
use crate::text::clean_text;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Anything that can produce a document's fragments in reading order.
pub trait FragmentSource {
    /// Produce the fragments. An empty list means "nothing extractable".
    fn fragments(&self) -> Result<Vec<TextFragment>>;
}

impl FragmentSource for Vec<TextFragment> {
    fn fragments(&self) -> Result<Vec<TextFragment>> {
        Ok(self.clone())
    }
}

/// Serialized fragment as written by extraction adapters. Only text, page and
/// bounding box are required.
#[derive(Debug, Deserialize)]
struct RawFragment {
    text: String,
    page_num: u32,
    bbox: Rect,
    #[serde(default)]
    font_size: f32,
    #[serde(default)]
    font_name: String,
    #[serde(default)]
    font_flags: u32,
    #[serde(default)]
    line_height: Option<f32>,
    #[serde(default)]
    is_bold: Option<bool>,
}

impl RawFragment {
    fn into_fragment(self) -> Option<TextFragment> {
        let text = clean_text(&self.text);
        if text.is_empty() {
            return None;
        }
        let mut fragment = TextFragment::new(text, self.page_num, self.bbox, self.font_size)
            .with_font(self.font_name, self.font_flags);
        if let Some(is_bold) = self.is_bold {
            fragment = fragment.with_bold(is_bold);
        }
        if let Some(line_height) = self.line_height {
            fragment = fragment.with_line_height(line_height);
        }
        Some(fragment)
    }
}

enum JsonInput {
    Path(PathBuf),
    Text(String),
}

/// Reads a JSON array of fragments.
///
/// Fragment text is cleaned (whitespace collapsed, control characters
/// removed) and fragments left empty are dropped. A missing `is_bold` is
/// inferred from font name and flags, a missing `line_height` defaults to the
/// box height.
///
/// # Examples
///
/// ```
/// use outline_oxide::source::{FragmentSource, JsonFragmentSource};
///
/// let json = r#"[
///     {"text": "1.  Introduction", "page_num": 1, "bbox": [72, 90, 300, 104], "font_size": 14},
///     {"text": "   ", "page_num": 1, "bbox": [0, 0, 0, 0]}
/// ]"#;
/// let fragments = JsonFragmentSource::from_str(json).fragments().unwrap();
/// assert_eq!(fragments.len(), 1);
/// assert_eq!(fragments[0].text, "1. Introduction");
/// ```
pub struct JsonFragmentSource {
    input: JsonInput,
}

impl JsonFragmentSource {
    /// Read fragments from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            input: JsonInput::Path(path.as_ref().to_path_buf()),
        }
    }

    /// Read fragments from a JSON string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: impl Into<String>) -> Self {
        Self {
            input: JsonInput::Text(json.into()),
        }
    }
}

impl FragmentSource for JsonFragmentSource {
    fn fragments(&self) -> Result<Vec<TextFragment>> {
        let raw: Vec<RawFragment> = match &self.input {
            JsonInput::Path(path) => {
                log::debug!("Reading fragments from {}", path.display());
                let data = std::fs::read_to_string(path)?;
                serde_json::from_str(&data)?
            },
            JsonInput::Text(text) => serde_json::from_str(text)?,
        };

        let total = raw.len();
        let fragments: Vec<TextFragment> =
            raw.into_iter().filter_map(RawFragment::into_fragment).collect();
        if fragments.len() < total {
            log::debug!("Dropped {} empty fragments", total - fragments.len());
        }
        Ok(fragments)
    }
}
