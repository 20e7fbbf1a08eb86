//! Text-level helpers shared by the exclusion filter and the heading cascade.
//!
//! - [`casing`]: Latin-script casing checks (all-uppercase, title-case)
//! - [`normalize`]: whitespace collapsing and control-character removal

pub mod casing;
pub mod normalize;

pub use casing::{is_title_case, is_upper};
pub use normalize::clean_text;

/// Split text into whitespace-separated words.
///
/// # Examples
///
/// ```
/// use outline_oxide::text::words;
///
/// assert_eq!(words("  1.1   Background \t Notes "), vec!["1.1", "Background", "Notes"]);
/// assert!(words("   ").is_empty());
/// ```
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
