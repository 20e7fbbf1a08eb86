//! Exclusion filter: structural reasons a fragment cannot be a standalone heading.
//!
//! Runs before the heading cascade. A fragment rejected here never becomes a
//! heading, whatever its typography.

use crate::config::OutlineConfig;
use crate::layout::lexicon::{
    contains_word, CONNECTOR_WORDS, RE_BULLET, RE_LIST_PREFIX, SENTENCE_INDICATORS,
    TRAILING_CONNECTOR_WORDS,
};
use crate::text::words;
use std::fmt;

/// Why a fragment was excluded from heading detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusionReason {
    /// Fewer characters than the configured minimum
    TooShort,
    /// Opens or closes with a connector word ("and", "of", ...)
    ConnectorFragment,
    /// Starts with a bullet marker
    Bullet,
    /// Starts with a `a)` / `1)` list prefix
    ListItem,
    /// Contains a mid-sentence word ("is", "the", ...)
    Sentence,
    /// Ends with a word that leaves the line dangling
    DanglingEnd,
    /// More words than the configured maximum
    TooLong,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExclusionReason::TooShort => "too short",
            ExclusionReason::ConnectorFragment => "leading/trailing connector word",
            ExclusionReason::Bullet => "bullet item",
            ExclusionReason::ListItem => "list item",
            ExclusionReason::Sentence => "sentence indicator",
            ExclusionReason::DanglingEnd => "dangling last word",
            ExclusionReason::TooLong => "too many words",
        };
        f.write_str(s)
    }
}

/// Check a fragment's text against the exclusion rules.
///
/// Returns the first rule that rejects the text, or `None` if the text may
/// proceed to the heading cascade. The text is trimmed here.
///
/// # Examples
///
/// ```
/// use outline_oxide::config::OutlineConfig;
/// use outline_oxide::layout::exclusion::{exclusion_reason, ExclusionReason};
///
/// let config = OutlineConfig::default();
/// assert_eq!(
///     exclusion_reason("and therefore we conclude", &config),
///     Some(ExclusionReason::ConnectorFragment)
/// );
/// assert_eq!(exclusion_reason("• Item one", &config), Some(ExclusionReason::Bullet));
/// assert_eq!(exclusion_reason("Methods And Materials", &config), None);
/// ```
pub fn exclusion_reason(text: &str, config: &OutlineConfig) -> Option<ExclusionReason> {
    let text = text.trim();
    if text.chars().count() < config.min_heading_chars {
        return Some(ExclusionReason::TooShort);
    }

    let words = words(text);

    // Connector words only count as whole words next to another word
    if words.len() >= 2 {
        let first = words[0];
        let last = words[words.len() - 1];
        if contains_word(CONNECTOR_WORDS, first) || contains_word(CONNECTOR_WORDS, last) {
            return Some(ExclusionReason::ConnectorFragment);
        }
    }

    if RE_BULLET.is_match(text) {
        return Some(ExclusionReason::Bullet);
    }
    if RE_LIST_PREFIX.is_match(text) {
        return Some(ExclusionReason::ListItem);
    }

    let lower = text.to_lowercase();
    if SENTENCE_INDICATORS
        .iter()
        .any(|w| lower.contains(&format!(" {} ", w)))
    {
        return Some(ExclusionReason::Sentence);
    }

    // Case-sensitive: "Appendix A" and "Plan B" are legitimate headings
    if let [_, .., last] = words.as_slice() {
        if TRAILING_CONNECTOR_WORDS.iter().any(|w| w == last) {
            return Some(ExclusionReason::DanglingEnd);
        }
    }
    if words.len() > config.max_heading_words {
        return Some(ExclusionReason::TooLong);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(text: &str) -> Option<ExclusionReason> {
        exclusion_reason(text, &OutlineConfig::default())
    }

    #[test]
    fn test_too_short() {
        assert_eq!(reason("Hi"), Some(ExclusionReason::TooShort));
        assert_eq!(reason("   ab   "), Some(ExclusionReason::TooShort));
        assert_eq!(reason(""), Some(ExclusionReason::TooShort));
        assert_eq!(reason("Abc"), None);
    }

    #[test]
    fn test_leading_connector() {
        assert_eq!(reason("and therefore we conclude"), Some(ExclusionReason::ConnectorFragment));
        assert_eq!(reason("Of Mice Men"), Some(ExclusionReason::ConnectorFragment));
        assert_eq!(reason("WITH RESPECT"), Some(ExclusionReason::ConnectorFragment));
    }

    #[test]
    fn test_trailing_connector() {
        assert_eq!(reason("Terms and"), Some(ExclusionReason::ConnectorFragment));
        assert_eq!(reason("Results For"), Some(ExclusionReason::ConnectorFragment));
    }

    #[test]
    fn test_connector_is_whole_word() {
        // "Android" starts with "and", "Into" starts with "in"
        assert_eq!(reason("Android Platform"), None);
        assert_eq!(reason("Into Orbit"), None);
        // A single word is never a connector fragment
        assert_eq!(reason("Forward"), None);
    }

    #[test]
    fn test_bullets() {
        for text in ["• Item", "- Item", "* Item", "◦ Item", "▪ Item"] {
            assert_eq!(reason(text), Some(ExclusionReason::Bullet), "{text}");
        }
        // A marker glued to the word is part of the text
        assert_eq!(reason("•Item"), None);
        assert_eq!(reason("-Based Design"), None);
        assert_eq!(reason("*Starred Heading"), None);
    }

    #[test]
    fn test_list_items() {
        assert_eq!(reason("a) Scope Review"), Some(ExclusionReason::ListItem));
        assert_eq!(reason("3) Budget Review"), Some(ExclusionReason::ListItem));
        assert_eq!(reason("12) Budget Review"), Some(ExclusionReason::ListItem));
        assert_eq!(reason("a)Scope Review"), None);
    }

    #[test]
    fn test_sentence_indicators() {
        assert_eq!(reason("This is a sentence about things."), Some(ExclusionReason::Sentence));
        assert_eq!(reason("Results Are Final"), Some(ExclusionReason::Sentence));
        assert_eq!(reason("Choosing A Vendor"), Some(ExclusionReason::Sentence));
        // Indicator must be space-delimited on both sides
        assert_eq!(reason("Isolation Testing"), None);
    }

    #[test]
    fn test_dangling_end() {
        assert_eq!(reason("Planning but"), Some(ExclusionReason::DanglingEnd));
        assert_eq!(reason("Choose an"), Some(ExclusionReason::DanglingEnd));
    }

    #[test]
    fn test_dangling_end_case_sensitive() {
        assert_eq!(reason("Appendix A"), None);
        assert_eq!(reason("Plan An"), None);
    }

    #[test]
    fn test_too_long() {
        let long = "Alpha Beta Gamma Delta Epsilon Zeta Eta Theta Iota Kappa Lambda Mu Nu";
        assert_eq!(reason(long), Some(ExclusionReason::TooLong));

        let twelve = "Alpha Beta Gamma Delta Epsilon Zeta Eta Theta Iota Kappa Lambda Mu";
        assert_eq!(reason(twelve), None);
    }

    #[test]
    fn test_respects_config() {
        let config = OutlineConfig::new().with_max_heading_words(3).with_min_heading_chars(5);
        assert_eq!(exclusion_reason("Abcd", &config), Some(ExclusionReason::TooShort));
        assert_eq!(
            exclusion_reason("Alpha Beta Gamma Delta", &config),
            Some(ExclusionReason::TooLong)
        );
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(ExclusionReason::Bullet.to_string(), "bullet item");
    }
}
