use crate::foundation::core::{Rect, rects_overlap};
use crate::model::element::PositionedElement;
use crate::model::snapshot::{LayoutSnapshot, SectionLayout};

impl LayoutSnapshot {
    /// Every cell, header and footer whose frame overlaps `rect`.
    ///
    /// Sections whose vertical extent misses `rect` are skipped without visiting their elements.
    /// Result order is unspecified; use each element's `z_index` for stacking.
    pub fn elements_intersecting(&self, rect: Rect) -> Vec<PositionedElement> {
        let rect = rect.abs();
        self.sections
            .iter()
            .filter(|s| section_spans(s, rect))
            .flat_map(SectionLayout::elements)
            .filter(|e| rects_overlap(e.frame, rect))
            .copied()
            .collect()
    }
}

fn section_spans(section: &SectionLayout, rect: Rect) -> bool {
    !(section.bottom <= rect.y0 || section.top >= rect.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/query.rs"]
mod tests;
