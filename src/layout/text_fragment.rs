//! The text fragment: one styled run of text handed over by a content
//! extraction adapter.
//!
//! Fragments are read-only to the heading engine. They arrive in encounter
//! order and that order is meaningful: title resolution picks the *first*
//! level-1 heading by fragment position.

use crate::error::{Error, Result};
use crate::geometry::Rect;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Span style flags as reported by common PDF text extractors.
    ///
    /// Unknown bits are retained; only [`FontFlags::BOLD`] is consulted by the
    /// heuristics.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FontFlags: u32 {
        /// Bit 0: superscripted text
        const SUPERSCRIPT = 1 << 0;
        /// Bit 1: italic
        const ITALIC = 1 << 1;
        /// Bit 2: serifed font
        const SERIFED = 1 << 2;
        /// Bit 3: monospaced font
        const MONOSPACED = 1 << 3;
        /// Bit 4: bold
        const BOLD = 1 << 4;
    }
}

/// One styled run of text with position and typography metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// Text content (trimmed before any heuristic looks at it)
    pub text: String,
    /// 1-based page number
    pub page_num: u32,
    /// Bounding box `(x0, y0, x1, y1)`, y growing downwards
    pub bbox: Rect,
    /// Font size in points; `0.0` means unknown
    pub font_size: f32,
    /// Font name/family
    pub font_name: String,
    /// Raw style flags, see [`FontFlags`]
    pub font_flags: u32,
    /// Height of the line the fragment sits on
    pub line_height: f32,
    /// Whether the fragment is set in a bold face
    pub is_bold: bool,
}

impl TextFragment {
    /// Create a regular-weight fragment with no font metadata besides its size.
    ///
    /// # Examples
    ///
    /// ```
    /// use outline_oxide::geometry::Rect;
    /// use outline_oxide::layout::TextFragment;
    ///
    /// let frag = TextFragment::new("1. Introduction", 1, Rect::from_points(72.0, 90.0, 300.0, 104.0), 14.0)
    ///     .with_bold(true);
    /// assert_eq!(frag.page_num, 1);
    /// assert!(frag.is_bold);
    /// ```
    pub fn new(text: impl Into<String>, page_num: u32, bbox: Rect, font_size: f32) -> Self {
        Self {
            text: text.into(),
            page_num,
            bbox,
            font_size,
            font_name: String::new(),
            font_flags: 0,
            line_height: bbox.height(),
            is_bold: false,
        }
    }

    /// Set font name and flags. Boldness is re-inferred from both.
    pub fn with_font(mut self, font_name: impl Into<String>, font_flags: u32) -> Self {
        self.font_name = font_name.into();
        self.font_flags = font_flags;
        self.is_bold = Self::infer_bold(&self.font_name, self.flags());
        self
    }

    /// Override the bold flag.
    pub fn with_bold(mut self, is_bold: bool) -> Self {
        self.is_bold = is_bold;
        self
    }

    /// Set the line height.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Typed view of [`TextFragment::font_flags`].
    pub fn flags(&self) -> FontFlags {
        FontFlags::from_bits_retain(self.font_flags)
    }

    /// Trimmed text as seen by the heuristics.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Guess boldness from font name and style flags.
    ///
    /// Font names such as `Helvetica-Bold` or `Arial Black` carry the weight in
    /// the name even when the flag bit is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use outline_oxide::layout::{FontFlags, TextFragment};
    ///
    /// assert!(TextFragment::infer_bold("Helvetica-Bold", FontFlags::empty()));
    /// assert!(TextFragment::infer_bold("ArialBlack", FontFlags::empty()));
    /// assert!(TextFragment::infer_bold("Times", FontFlags::BOLD));
    /// assert!(!TextFragment::infer_bold("Times-Italic", FontFlags::ITALIC));
    /// ```
    pub fn infer_bold(font_name: &str, flags: FontFlags) -> bool {
        let name = font_name.to_lowercase();
        name.contains("bold") || name.contains("black") || flags.contains(FontFlags::BOLD)
    }

    /// Check the fragment for data the heuristics cannot work with.
    ///
    /// `index` is the fragment's position in the input list and is carried into
    /// the error for diagnostics.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.page_num == 0 {
            return Err(Error::invalid_fragment(index, "page number must be >= 1"));
        }
        if !self.bbox.is_well_formed() {
            return Err(Error::invalid_fragment(
                index,
                format!("malformed bounding box {:?}", self.bbox.corners()),
            ));
        }
        if !self.font_size.is_finite() || self.font_size < 0.0 {
            return Err(Error::invalid_fragment(
                index,
                format!("font size {} is not a non-negative number", self.font_size),
            ));
        }
        Ok(())
    }
}
