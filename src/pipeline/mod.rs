//! Outline extraction pipeline with a single fail-soft boundary.
//!
//! ```text
//! TextFragment[]
//!     ↓
//! [validate] (page numbers, bounding boxes, font sizes)
//!     ↓
//! [FontStatistics::analyze] (body size, thresholds)
//!     ↓
//! [detect_headings_with_stats] (exclusion filter → rule cascade)
//!     ↓
//! CandidateHeading[] (fragment order)
//!     ↓                      ↓
//! [resolve_title]      [build_outline]
//!     ↓                      ↓
//! OutlineResult { title, outline }
//! ```
//!
//! Extraction is a pure function of the fragment list: no state survives a
//! call, and one [`OutlinePipeline`] can be shared freely between threads.

use crate::config::OutlineConfig;
use crate::error::{Error, Result};
use crate::layout::{detect_headings_with_stats, FontStatistics, TextFragment};
use crate::outline::{build_outline, resolve_title, OutlineResult};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// The outline extraction pipeline.
#[derive(Debug, Clone, Default)]
pub struct OutlinePipeline {
    config: OutlineConfig,
}

impl OutlinePipeline {
    /// Create a new pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(OutlineConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: OutlineConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    /// Extract the outline, reporting faults to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFragment`] for malformed fragment data and
    /// [`Error::Internal`] if classification panics.
    pub fn try_extract(&self, fragments: &[TextFragment]) -> Result<OutlineResult> {
        if fragments.is_empty() {
            return Ok(OutlineResult::empty());
        }

        for (index, fragment) in fragments.iter().enumerate() {
            fragment.validate(index)?;
        }

        catch_unwind(AssertUnwindSafe(|| self.run(fragments))).map_err(|payload| {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Error::Internal(message)
        })
    }

    /// Extract the outline. Never fails: any fault yields the empty result.
    ///
    /// # Examples
    ///
    /// ```
    /// use outline_oxide::geometry::Rect;
    /// use outline_oxide::layout::TextFragment;
    /// use outline_oxide::pipeline::OutlinePipeline;
    ///
    /// let fragments = vec![
    ///     TextFragment::new("1. Introduction", 1, Rect::from_points(72.0, 80.0, 300.0, 94.0), 14.0),
    ///     TextFragment::new("1.1 Motivation", 2, Rect::from_points(72.0, 80.0, 300.0, 92.0), 12.0),
    /// ];
    /// let result = OutlinePipeline::new().extract(&fragments);
    /// assert_eq!(result.title, "1. Introduction");
    /// assert_eq!(result.outline.len(), 2);
    /// assert_eq!(result.outline[1].level, "H2");
    /// ```
    pub fn extract(&self, fragments: &[TextFragment]) -> OutlineResult {
        match self.try_extract(fragments) {
            Ok(result) => result,
            Err(e) => {
                log::warn!("Outline extraction failed, returning empty outline: {}", e);
                OutlineResult::empty()
            },
        }
    }

    fn run(&self, fragments: &[TextFragment]) -> OutlineResult {
        let stats = FontStatistics::analyze(fragments, &self.config);
        let headings = detect_headings_with_stats(fragments, &stats, &self.config);
        let title = resolve_title(&headings, fragments);
        let outline = build_outline(&headings);

        log::debug!(
            "Outline: title {:?}, {} entries from {} fragments",
            title,
            outline.len(),
            fragments.len()
        );

        OutlineResult { title, outline }
    }
}

/// Extract a document outline with the default configuration.
///
/// Shorthand for `OutlinePipeline::new().extract(fragments)`.
pub fn extract_outline(fragments: &[TextFragment]) -> OutlineResult {
    OutlinePipeline::new().extract(fragments)
}
