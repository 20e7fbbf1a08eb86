//! Fragment text cleanup applied by fragment sources.

/// Collapse whitespace runs into single spaces, drop control characters and trim.
///
/// # Examples
///
/// ```
/// use outline_oxide::text::clean_text;
///
/// assert_eq!(clean_text("  Table\tof \n Contents "), "Table of Contents");
/// assert_eq!(clean_text("Re\u{0007}sults"), "Results");
/// assert_eq!(clean_text(" \u{0000} "), "");
/// ```
pub fn clean_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        let printable: String = word.chars().filter(|c| !c.is_control()).collect();
        if printable.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&printable);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_already_clean() {
        assert_eq!(clean_text("Revenue Growth"), "Revenue Growth");
    }

    #[test]
    fn test_clean_text_non_breaking_space_collapses() {
        assert_eq!(clean_text("Key\u{00A0}\u{00A0}Terms"), "Key Terms");
    }

    #[test]
    fn test_clean_text_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("\t\r\n"), "");
    }
}
