// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]
#![cfg_attr(test, allow(unused_variables))]

//! # Outline Oxide
//!
//! Infers a document outline (title plus H1/H2/H3 headings with page numbers)
//! from styled text fragments produced by a PDF or document text extractor.
//!
//! ## Core Features
//!
//! - **Font Statistics**: body size as the most frequent font size, size thresholds above it
//! - **Exclusion Filter**: drops sentence pieces, bullets, list items and over-long lines
//! - **Heading Cascade**: ordered rules (numbering, capitals, size, weight, casing),
//!   first match decides level and confidence
//! - **Title Resolution**: first H1, else the most prominent text on page 1
//! - **Flat Outline**: reading-order list in a stable JSON shape
//! - **Fail-soft**: malformed input yields an empty outline, never a partial one
//!
//! ## Quick Start
//!
//! ```
//! use outline_oxide::geometry::Rect;
//! use outline_oxide::layout::TextFragment;
//! use outline_oxide::extract_outline;
//!
//! let fragments = vec![
//!     TextFragment::new("1. Introduction", 1, Rect::from_points(72.0, 72.0, 300.0, 86.0), 14.0),
//!     TextFragment::new("This is a sentence about things.", 1, Rect::from_points(72.0, 100.0, 500.0, 112.0), 12.0),
//!     TextFragment::new("1.1 Motivation", 2, Rect::from_points(72.0, 72.0, 300.0, 84.0), 12.0),
//! ];
//!
//! let result = extract_outline(&fragments);
//! assert_eq!(result.title, "1. Introduction");
//! assert_eq!(result.outline.len(), 2);
//! println!("{}", serde_json::to_string_pretty(&result).unwrap());
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Geometry and text helpers
pub mod geometry;
pub mod text;

// Heading inference
pub mod layout;

// Output format
pub mod outline;

// Orchestration
pub mod pipeline;

// Input seam
pub mod source;

// Re-exports
pub use config::OutlineConfig;
pub use error::{Error, Result};
pub use layout::{CandidateHeading, FontStatistics, HeadingLevel, TextFragment};
pub use outline::{OutlineEntry, OutlineResult};
pub use pipeline::{extract_outline, OutlinePipeline};
pub use source::{FragmentSource, JsonFragmentSource};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all other values.
    /// This ensures that sorting operations never panic due to NaN comparisons.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater, // NaN > all numbers
            (false, true) => Ordering::Less,    // all numbers < NaN
            (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_safe_float_cmp_normal() {
            assert_eq!(safe_float_cmp(1.0, 2.0), Ordering::Less);
            assert_eq!(safe_float_cmp(2.0, 1.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(1.5, 1.5), Ordering::Equal);
        }

        #[test]
        fn test_safe_float_cmp_nan() {
            assert_eq!(safe_float_cmp(f32::NAN, f32::NAN), Ordering::Equal);
            assert_eq!(safe_float_cmp(f32::NAN, 0.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(0.0, f32::NAN), Ordering::Less);
        }

        #[test]
        fn test_safe_float_cmp_infinity() {
            assert_eq!(safe_float_cmp(f32::INFINITY, f32::INFINITY), Ordering::Equal);
            assert_eq!(safe_float_cmp(f32::INFINITY, 1.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(f32::NEG_INFINITY, f32::INFINITY), Ordering::Less);
        }
    }
}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
