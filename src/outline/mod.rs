//! Document outline: title plus a flat, reading-order list of headings.
//!
//! This is the external contract of the crate. It serializes to
//!
//! ```text
//! { "title": "...", "outline": [ { "level": "H1", "text": "...", "page": 1 }, ... ] }
//! ```

pub mod builder;
pub mod title;

pub use builder::build_outline;
pub use title::resolve_title;

use serde::{Deserialize, Serialize};

/// A single heading in the flat outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// `"H1"`, `"H2"` or `"H3"`
    pub level: String,
    /// Heading text
    pub text: String,
    /// 1-based page number
    pub page: u32,
}

/// Title and outline of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineResult {
    /// Document title, empty if none could be determined
    pub title: String,
    /// Headings in reading order
    pub outline: Vec<OutlineEntry>,
}

impl OutlineResult {
    /// The canonical empty result.
    ///
    /// # Examples
    ///
    /// ```
    /// use outline_oxide::outline::OutlineResult;
    ///
    /// let empty = OutlineResult::empty();
    /// assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"title":"","outline":[]}"#);
    /// ```
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when there is neither a title nor any heading.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.outline.is_empty()
    }
}
