//! Configuration for outline inference.
//!
//! The defaults reproduce the stock heuristics. Every knob here is a tuning
//! surface of the heading cascade; the word/marker tables live in
//! [`crate::layout::lexicon`].

use serde::{Deserialize, Serialize};

/// Outline inference configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Body font size assumed when no fragment carries a usable size.
    pub default_body_size: f32,

    /// Points above body size for the "large" threshold.
    pub large_delta: f32,

    /// Points above body size for the "very large" threshold.
    pub very_large_delta: f32,

    /// Candidates below this confidence are rejected.
    pub confidence_floor: f32,

    /// Fragments with more words than this are never headings.
    pub max_heading_words: usize,

    /// Fragments shorter than this (in characters, after trimming) are never headings.
    pub min_heading_chars: usize,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            default_body_size: 12.0,
            large_delta: 2.0,
            very_large_delta: 4.0,
            confidence_floor: 0.70,
            max_heading_words: 12,
            min_heading_chars: 3,
        }
    }

    /// Set the fallback body font size.
    pub fn with_default_body_size(mut self, size: f32) -> Self {
        self.default_body_size = size;
        self
    }

    /// Set the large/very-large offsets above body size.
    pub fn with_size_deltas(mut self, large: f32, very_large: f32) -> Self {
        self.large_delta = large;
        self.very_large_delta = very_large;
        self
    }

    /// Set the acceptance floor for candidate confidence.
    pub fn with_confidence_floor(mut self, floor: f32) -> Self {
        self.confidence_floor = floor;
        self
    }

    /// Set the maximum word count of a heading.
    pub fn with_max_heading_words(mut self, words: usize) -> Self {
        self.max_heading_words = words;
        self
    }

    /// Set the minimum character count of a heading.
    pub fn with_min_heading_chars(mut self, chars: usize) -> Self {
        self.min_heading_chars = chars;
        self
    }
}
