//! Title resolution.

use crate::layout::{CandidateHeading, HeadingLevel, TextFragment};
use crate::utils::safe_float_cmp;

/// Pick the document title.
///
/// The first level-1 heading in fragment order wins. Without one, the most
/// prominent fragment on page 1 is used: largest font first, then topmost.
/// Returns an empty string when page 1 has no fragments.
///
/// `headings` must be in fragment order, as produced by
/// [`detect_headings`](crate::layout::detect_headings).
pub fn resolve_title(headings: &[CandidateHeading], fragments: &[TextFragment]) -> String {
    if let Some(h1) = headings.iter().find(|h| h.level == HeadingLevel::H1) {
        log::debug!("Title from first H1 heading (fragment {})", h1.order);
        return h1.text.clone();
    }

    // min_by keeps the first of equal elements, matching a stable sort
    let prominent = fragments
        .iter()
        .filter(|f| f.page_num == 1)
        .min_by(|a, b| {
            safe_float_cmp(b.font_size, a.font_size)
                .then_with(|| safe_float_cmp(a.bbox.top(), b.bbox.top()))
        });

    match prominent {
        Some(f) => {
            log::debug!("Title from most prominent page-1 fragment ({}pt)", f.font_size);
            f.trimmed().to_string()
        },
        None => String::new(),
    }
}
