//! Heading detection using an ordered rule cascade.
//!
//! Each fragment that survives the [exclusion filter](super::exclusion) is run
//! through [`RULE_CASCADE`] in order. The first rule that has an opinion about
//! the fragment decides: it either accepts it with a level and a fixed
//! confidence, or rejects it outright. Later rules never see a fragment an
//! earlier rule decided on.

use crate::config::OutlineConfig;
use crate::geometry::Rect;
use crate::layout::exclusion::exclusion_reason;
use crate::layout::font_stats::FontStatistics;
use crate::layout::lexicon::{
    contains_word, BOLD_FORBIDDEN_PUNCT, H3_FORBIDDEN_ENDINGS, H3_STOP_WORDS, RE_SECTION_L1,
    RE_SECTION_L2, RE_SECTION_L3, UPPERCASE_FORBIDDEN_PUNCT,
};
use crate::layout::text_fragment::TextFragment;
use crate::text::casing::{is_title_case, is_upper, starts_uppercase};
use crate::text::words;

/// Heading level in the output outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingLevel {
    /// Main heading
    H1,
    /// Section heading
    H2,
    /// Subsection heading
    H3,
}

impl HeadingLevel {
    /// Level from a numeric depth. Depths beyond 3 clamp to [`HeadingLevel::H3`],
    /// depth 0 is treated as 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use outline_oxide::layout::HeadingLevel;
    ///
    /// assert_eq!(HeadingLevel::from_depth(2), HeadingLevel::H2);
    /// assert_eq!(HeadingLevel::from_depth(5), HeadingLevel::H3);
    /// ```
    pub fn from_depth(depth: u8) -> Self {
        match depth {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            _ => HeadingLevel::H3,
        }
    }

    /// External label: `"H1"`, `"H2"` or `"H3"`.
    pub fn label(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        }
    }
}

/// The rules of the cascade, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingRule {
    /// `1. Intro`, `1.1 Intro`, `1.1.1 Intro`
    NumberedSection,
    /// Short all-uppercase line without sentence punctuation
    AllCaps,
    /// Font at least `very_large_threshold`
    VeryLargeFont,
    /// Font at least `large_threshold`
    LargeFont,
    /// Short bold title-case line or bold label
    BoldTitle,
    /// Short title-case label ending in `:`
    ColonLabel,
    /// Short title-case phrase
    TitleCasePhrase,
}

/// Evaluation order of the cascade.
pub const RULE_CASCADE: &[HeadingRule] = &[
    HeadingRule::NumberedSection,
    HeadingRule::AllCaps,
    HeadingRule::VeryLargeFont,
    HeadingRule::LargeFont,
    HeadingRule::BoldTitle,
    HeadingRule::ColonLabel,
    HeadingRule::TitleCasePhrase,
];

/// Outcome of evaluating one rule against one fragment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleVerdict {
    /// The rule does not apply; try the next one
    Pass,
    /// The rule claims the fragment as a heading
    Accept {
        /// Assigned level
        level: HeadingLevel,
        /// Fixed confidence of the rule
        confidence: f32,
    },
    /// The rule claims the fragment and rejects it; the cascade stops
    Reject,
}

/// Features of one fragment the rules look at.
#[derive(Debug)]
pub struct FragmentFeatures<'a> {
    /// Trimmed text
    pub text: &'a str,
    /// Whitespace-separated words of `text`
    pub words: Vec<&'a str>,
    /// Font size in points
    pub font_size: f32,
    /// Bold face
    pub is_bold: bool,
}

impl<'a> FragmentFeatures<'a> {
    /// Extract features from a fragment.
    pub fn of(fragment: &'a TextFragment) -> Self {
        let text = fragment.trimmed();
        Self {
            text,
            words: words(text),
            font_size: fragment.font_size,
            is_bold: fragment.is_bold,
        }
    }

    fn word_count_in(&self, min: usize, max: usize) -> bool {
        (min..=max).contains(&self.words.len())
    }
}

impl HeadingRule {
    /// Evaluate this rule.
    pub fn evaluate(&self, f: &FragmentFeatures<'_>, stats: &FontStatistics) -> RuleVerdict {
        let accept = |depth: u8, confidence: f32| RuleVerdict::Accept {
            level: HeadingLevel::from_depth(depth),
            confidence,
        };

        match self {
            HeadingRule::NumberedSection => {
                if RE_SECTION_L1.is_match(f.text) {
                    accept(1, 0.95)
                } else if RE_SECTION_L2.is_match(f.text) {
                    accept(2, 0.95)
                } else if RE_SECTION_L3.is_match(f.text) {
                    accept(3, 0.95)
                } else {
                    RuleVerdict::Pass
                }
            },
            HeadingRule::AllCaps => {
                if is_upper(f.text)
                    && f.word_count_in(2, 6)
                    && !f.text.contains(UPPERCASE_FORBIDDEN_PUNCT)
                {
                    accept(1, 0.90)
                } else {
                    RuleVerdict::Pass
                }
            },
            // Size rules claim the fragment on size alone; a bad word count
            // rejects instead of falling through to the typographic rules.
            HeadingRule::VeryLargeFont => {
                if f.font_size < stats.very_large_threshold {
                    RuleVerdict::Pass
                } else if f.word_count_in(2, 8) {
                    accept(1, 0.85)
                } else {
                    RuleVerdict::Reject
                }
            },
            HeadingRule::LargeFont => {
                if f.font_size < stats.large_threshold {
                    RuleVerdict::Pass
                } else if f.word_count_in(2, 8) {
                    accept(2, 0.80)
                } else {
                    RuleVerdict::Reject
                }
            },
            HeadingRule::BoldTitle => {
                if f.is_bold
                    && f.word_count_in(2, 6)
                    && (is_title_case(f.text) || f.text.ends_with(':'))
                    && !f.text.contains(BOLD_FORBIDDEN_PUNCT)
                {
                    accept(2, 0.75)
                } else {
                    RuleVerdict::Pass
                }
            },
            HeadingRule::ColonLabel => {
                if f.text.ends_with(':') && is_title_case(f.text) && f.word_count_in(2, 4) {
                    accept(2, 0.80)
                } else {
                    RuleVerdict::Pass
                }
            },
            HeadingRule::TitleCasePhrase => {
                let alpha_words_capitalized = f
                    .words
                    .iter()
                    .filter(|w| w.chars().all(char::is_alphabetic))
                    .all(|w| starts_uppercase(w));

                if is_title_case(f.text)
                    && f.word_count_in(2, 5)
                    && !f.text.ends_with(H3_FORBIDDEN_ENDINGS)
                    && alpha_words_capitalized
                {
                    if f.words.iter().any(|w| contains_word(H3_STOP_WORDS, w)) {
                        RuleVerdict::Reject
                    } else {
                        accept(3, 0.70)
                    }
                } else {
                    RuleVerdict::Pass
                }
            },
        }
    }
}

/// A fragment accepted as a heading.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateHeading {
    /// Trimmed heading text
    pub text: String,
    /// Assigned level
    pub level: HeadingLevel,
    /// 1-based page number
    pub page_num: u32,
    /// Bounding box of the source fragment
    pub bbox: Rect,
    /// Font size of the source fragment
    pub font_size: f32,
    /// Bold face
    pub is_bold: bool,
    /// Confidence of the rule that fired
    pub confidence: f32,
    /// The rule that fired
    pub rule: HeadingRule,
    /// Index of the source fragment in the input list
    pub order: usize,
}

/// Run the cascade on one fragment.
///
/// Returns the deciding rule with its level and confidence, or `None` if the
/// fragment is excluded, rejected, matches no rule, or the rule's confidence
/// is below the configured floor.
pub fn classify_fragment(
    fragment: &TextFragment,
    stats: &FontStatistics,
    config: &OutlineConfig,
) -> Option<(HeadingRule, HeadingLevel, f32)> {
    if let Some(_reason) = exclusion_reason(&fragment.text, config) {
        #[cfg(feature = "logging")]
        log::trace!("excluded {:?}: {}", fragment.trimmed(), _reason);
        return None;
    }

    let features = FragmentFeatures::of(fragment);

    for rule in RULE_CASCADE {
        match rule.evaluate(&features, stats) {
            RuleVerdict::Pass => continue,
            RuleVerdict::Reject => {
                #[cfg(feature = "logging")]
                log::trace!("rejected {:?} by {:?}", features.text, rule);
                return None;
            },
            RuleVerdict::Accept { level, confidence } => {
                if confidence < config.confidence_floor {
                    log::debug!(
                        "{:?} matched {:?} below confidence floor ({} < {})",
                        features.text,
                        rule,
                        confidence,
                        config.confidence_floor
                    );
                    return None;
                }
                return Some((*rule, level, confidence));
            },
        }
    }

    None
}

/// Detect headings among a document's fragments.
///
/// Computes font statistics once, then classifies every fragment. The result
/// keeps fragment order.
///
/// # Examples
///
/// ```
/// use outline_oxide::config::OutlineConfig;
/// use outline_oxide::geometry::Rect;
/// use outline_oxide::layout::{detect_headings, HeadingLevel, TextFragment};
///
/// let bbox = Rect::from_points(72.0, 100.0, 400.0, 112.0);
/// let fragments = vec![
///     TextFragment::new("1. Introduction", 1, bbox, 12.0),
///     TextFragment::new("This is a sentence about things.", 1, bbox, 12.0),
///     TextFragment::new("1.1 Background", 1, bbox, 12.0),
/// ];
/// let headings = detect_headings(&fragments, &OutlineConfig::default());
/// assert_eq!(headings.len(), 2);
/// assert_eq!(headings[0].level, HeadingLevel::H1);
/// assert_eq!(headings[1].level, HeadingLevel::H2);
/// ```
pub fn detect_headings(fragments: &[TextFragment], config: &OutlineConfig) -> Vec<CandidateHeading> {
    if fragments.is_empty() {
        return vec![];
    }

    let stats = FontStatistics::analyze(fragments, config);
    detect_headings_with_stats(fragments, &stats, config)
}

/// Like [`detect_headings`] with precomputed statistics.
pub fn detect_headings_with_stats(
    fragments: &[TextFragment],
    stats: &FontStatistics,
    config: &OutlineConfig,
) -> Vec<CandidateHeading> {
    let headings: Vec<CandidateHeading> = fragments
        .iter()
        .enumerate()
        .filter_map(|(order, fragment)| {
            classify_fragment(fragment, stats, config).map(|(rule, level, confidence)| {
                CandidateHeading {
                    text: fragment.trimmed().to_string(),
                    level,
                    page_num: fragment.page_num,
                    bbox: fragment.bbox,
                    font_size: fragment.font_size,
                    is_bold: fragment.is_bold,
                    confidence,
                    rule,
                    order,
                }
            })
        })
        .collect();

    log::debug!("Detected {} headings in {} fragments", headings.len(), fragments.len());
    headings
}
