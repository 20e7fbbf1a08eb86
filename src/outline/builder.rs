//! Outline assembly: reading order and the flat external format.

use crate::layout::CandidateHeading;
use crate::outline::OutlineEntry;
use crate::utils::safe_float_cmp;

/// Order headings by page, then top edge, and flatten them into outline entries.
///
/// The sort is stable, so headings sharing page and top edge keep fragment
/// order. Bounding box, font and confidence data are dropped.
pub fn build_outline(headings: &[CandidateHeading]) -> Vec<OutlineEntry> {
    let mut ordered: Vec<&CandidateHeading> = headings.iter().collect();
    ordered.sort_by(|a, b| {
        a.page_num
            .cmp(&b.page_num)
            .then_with(|| safe_float_cmp(a.bbox.top(), b.bbox.top()))
    });

    ordered
        .into_iter()
        .map(|h| OutlineEntry {
            level: h.level.label().to_string(),
            text: h.text.clone(),
            page: h.page_num,
        })
        .collect()
}
