//! Document font statistics.
//!
//! The body font size is the most frequent size across all fragments. Heading
//! size thresholds are fixed offsets above it.

use crate::config::OutlineConfig;
use crate::layout::text_fragment::TextFragment;
use crate::utils::safe_float_cmp;

/// Font size statistics for one document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontStatistics {
    /// Most frequent font size ("normal text")
    pub body_size: f32,
    /// `body_size + large_delta`
    pub large_threshold: f32,
    /// `body_size + very_large_delta`
    pub very_large_threshold: f32,
    /// Mean of the usable font sizes
    pub mean_size: f32,
    /// Total number of fragments seen
    pub fragment_count: usize,
    /// Number of fragments with a usable font size
    pub sized_fragment_count: usize,
}

impl Default for FontStatistics {
    /// Statistics for a document without usable font sizes: body 12pt,
    /// thresholds 14pt and 16pt.
    fn default() -> Self {
        Self::with_body_size(12.0, &OutlineConfig::default())
    }
}

impl FontStatistics {
    /// Build statistics around a known body size.
    pub fn with_body_size(body_size: f32, config: &OutlineConfig) -> Self {
        Self {
            body_size,
            large_threshold: body_size + config.large_delta,
            very_large_threshold: body_size + config.very_large_delta,
            mean_size: body_size,
            fragment_count: 0,
            sized_fragment_count: 0,
        }
    }

    /// Analyze the font sizes of a document's fragments.
    ///
    /// Zero, negative and non-finite sizes are ignored. When several sizes are
    /// equally frequent the smallest one wins. Without any usable size the
    /// configured default body size is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use outline_oxide::config::OutlineConfig;
    /// use outline_oxide::geometry::Rect;
    /// use outline_oxide::layout::{FontStatistics, TextFragment};
    ///
    /// let bbox = Rect::from_points(0.0, 0.0, 100.0, 12.0);
    /// let fragments = vec![
    ///     TextFragment::new("Title Page", 1, bbox, 24.0),
    ///     TextFragment::new("body", 1, bbox, 11.0),
    ///     TextFragment::new("more body", 1, bbox, 11.0),
    /// ];
    /// let stats = FontStatistics::analyze(&fragments, &OutlineConfig::default());
    /// assert_eq!(stats.body_size, 11.0);
    /// assert_eq!(stats.large_threshold, 13.0);
    /// assert_eq!(stats.very_large_threshold, 15.0);
    /// ```
    pub fn analyze(fragments: &[TextFragment], config: &OutlineConfig) -> Self {
        let mut sizes: Vec<f32> = fragments
            .iter()
            .map(|f| f.font_size)
            .filter(|s| s.is_finite() && *s > 0.0)
            .collect();

        if sizes.is_empty() {
            log::debug!(
                "No usable font sizes in {} fragments, using default body size {}",
                fragments.len(),
                config.default_body_size
            );
            return Self {
                fragment_count: fragments.len(),
                ..Self::with_body_size(config.default_body_size, config)
            };
        }

        sizes.sort_by(|a, b| safe_float_cmp(*a, *b));

        // Walk runs of equal sizes in ascending order; only a strictly longer
        // run replaces the current mode, so ties keep the smallest size.
        let mut body_size = sizes[0];
        let mut best_run = 0usize;
        let mut run_start = 0usize;
        for i in 1..=sizes.len() {
            if i == sizes.len() || sizes[i] != sizes[run_start] {
                let run = i - run_start;
                if run > best_run {
                    best_run = run;
                    body_size = sizes[run_start];
                }
                run_start = i;
            }
        }

        let mean_size = sizes.iter().sum::<f32>() / sizes.len() as f32;

        log::debug!(
            "Font statistics: body={} ({} of {} sized fragments), mean={:.2}",
            body_size,
            best_run,
            sizes.len(),
            mean_size
        );

        Self {
            mean_size,
            fragment_count: fragments.len(),
            sized_fragment_count: sizes.len(),
            ..Self::with_body_size(body_size, config)
        }
    }
}
