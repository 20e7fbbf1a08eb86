//! Casing predicates for heading heuristics.
//!
//! Both predicates look only at *cased* characters (letters with an upper/lower
//! form). Digits, punctuation and whitespace are uncased and act as word
//! separators for title-casing purposes.

/// True when the text has at least one cased character and none of them is
/// lowercase.
///
/// # Examples
///
/// ```
/// use outline_oxide::text::is_upper;
///
/// assert!(is_upper("PROJECT OVERVIEW"));
/// assert!(is_upper("SECTION 2"));
/// assert!(!is_upper("Project OVERVIEW"));
/// assert!(!is_upper("2024"));
/// ```
pub fn is_upper(text: &str) -> bool {
    let mut cased = false;
    for ch in text.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// Title-case check.
///
/// An uppercase character may only follow an uncased character, a lowercase
/// character may only follow a cased one, and at least one cased character must
/// be present. So `"Market Analysis"` passes while `"Market analysis"`,
/// `"MARKET Analysis"` and `"McDonald Farms"` do not.
///
/// # Examples
///
/// ```
/// use outline_oxide::text::is_title_case;
///
/// assert!(is_title_case("Market Analysis"));
/// assert!(is_title_case("Key Findings:"));
/// assert!(is_title_case("1.2 Related Work"));
/// assert!(!is_title_case("Market analysis"));
/// assert!(!is_title_case("EXECUTIVE SUMMARY"));
/// ```
pub fn is_title_case(text: &str) -> bool {
    let mut cased = false;
    let mut previous_is_cased = false;

    for ch in text.chars() {
        if ch.is_uppercase() {
            if previous_is_cased {
                return false;
            }
            previous_is_cased = true;
            cased = true;
        } else if ch.is_lowercase() {
            if !previous_is_cased {
                return false;
            }
            previous_is_cased = true;
            cased = true;
        } else {
            previous_is_cased = false;
        }
    }

    cased
}

/// True when the first character of `word` is an uppercase letter.
pub(crate) fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}
