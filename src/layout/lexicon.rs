//! Fixed word and marker tables used by the exclusion filter and the heading
//! cascade.
//!
//! All word lists are lowercase; callers lower-case the text before comparing.

use lazy_static::lazy_static;
use regex::Regex;

/// Words that mark a fragment as a sentence piece when they open or close it.
pub const CONNECTOR_WORDS: &[&str] = &["and", "or", "the", "of", "in", "to", "for", "with"];

/// Words that leave a line dangling when they close it.
pub const TRAILING_CONNECTOR_WORDS: &[&str] =
    &["a", "an", "the", "and", "or", "but", "with", "for", "of", "in"];

/// Words that only occur mid-sentence. Matched as space-delimited substrings
/// of the lower-cased text, so the first and last word never match.
pub const SENTENCE_INDICATORS: &[&str] = &[
    "is", "are", "was", "were", "will", "would", "should", "could", "have", "has", "had", "must",
    "may", "can", "shall", "do", "does", "the", "this", "that", "these", "those", "a", "an",
];

/// Words that disqualify a short title-case phrase as a subsection heading.
pub const H3_STOP_WORDS: &[&str] = &["the", "and", "for", "with", "from"];

/// Characters that disqualify an all-uppercase fragment.
pub const UPPERCASE_FORBIDDEN_PUNCT: &[char] = &['.', ',', ';', ':'];

/// Characters that disqualify a bold fragment.
pub const BOLD_FORBIDDEN_PUNCT: &[char] = &['.', ',', ';'];

/// Characters a subsection heading may not end with.
pub const H3_FORBIDDEN_ENDINGS: &[char] = &['.', ',', ';'];

lazy_static! {
    /// `• item`, `- item`: a bullet marker followed by whitespace.
    pub static ref RE_BULLET: Regex = Regex::new(r"^[•\-*◦▪]\s").unwrap();

    /// `a) item`, `12) item`: a list label followed by whitespace.
    pub static ref RE_LIST_PREFIX: Regex = Regex::new(r"^(?:\w|\d+)\)\s").unwrap();

    /// `3. Methods`
    pub static ref RE_SECTION_L1: Regex = Regex::new(r"^\d+\.\s+[A-Z]").unwrap();

    /// `3.2 Sampling`
    pub static ref RE_SECTION_L2: Regex = Regex::new(r"^\d+\.\d+\s+[A-Z]").unwrap();

    /// `3.2.1 Weights`
    pub static ref RE_SECTION_L3: Regex = Regex::new(r"^\d+\.\d+\.\d+\s+[A-Z]").unwrap();
}

/// Case-insensitive membership test against one of the word tables.
pub fn contains_word(table: &[&str], word: &str) -> bool {
    let lower = word.to_lowercase();
    table.iter().any(|w| *w == lower)
}
