//! Heading inference over styled text fragments.
//!
//! The stages, in the order the pipeline runs them:
//! - Font statistics (body size and size thresholds)
//! - Exclusion filter (sentence pieces, bullets, over-long lines)
//! - Heading rule cascade (level and confidence per fragment)

pub mod exclusion;
pub mod font_stats;
pub mod heading_detector;
pub mod lexicon;
pub mod text_fragment;

// Re-export main types
pub use exclusion::{exclusion_reason, ExclusionReason};
pub use font_stats::FontStatistics;
pub use heading_detector::{
    classify_fragment, detect_headings, detect_headings_with_stats, CandidateHeading,
    HeadingLevel, HeadingRule, RuleVerdict, RULE_CASCADE,
};
pub use text_fragment::{FontFlags, TextFragment};
