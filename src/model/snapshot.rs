use crate::foundation::core::{IndexPath, Size};
use crate::model::element::PositionedElement;

/// Laid-out contents of a single section.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionLayout {
    /// Item cells in ascending item order.
    pub cells: Vec<PositionedElement>,
    /// Header, when the host supplied a non-empty header size.
    pub header: Option<PositionedElement>,
    /// Footer, when the host supplied a non-empty footer size.
    pub footer: Option<PositionedElement>,
    /// Smallest `y` of any element in the section (the section's base offset when empty).
    pub top: f64,
    /// Largest bottom edge of any element in the section.
    pub bottom: f64,
}

impl SectionLayout {
    /// Every element of the section: header, cells, then footer.
    pub fn elements(&self) -> impl Iterator<Item = &PositionedElement> {
        self.header
            .iter()
            .chain(self.cells.iter())
            .chain(self.footer.iter())
    }
}

/// Cached output of one layout pass.
///
/// A snapshot is built wholesale by a pass and never mutated afterwards; the next pass replaces it.
/// Elements carry no identity across passes, only their index-based position.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutSnapshot {
    /// Per-section layouts, indexed by section.
    pub sections: Vec<SectionLayout>,
    /// Total scrollable content extent.
    pub content_size: Size,
    /// Pass counter of the engine that produced this snapshot; 0 for a never-prepared engine.
    pub generation: u64,
}

impl LayoutSnapshot {
    /// Snapshot with no sections and zero content size.
    pub fn empty() -> Self {
        Self::default()
    }

    /// `true` when the snapshot holds no elements at all.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.elements().next().is_none())
    }

    /// Number of laid-out sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Section layout, if `section` is in range.
    pub fn section(&self, section: usize) -> Option<&SectionLayout> {
        self.sections.get(section)
    }

    /// Cells of `section`; empty when out of range.
    pub fn cells(&self, section: usize) -> &[PositionedElement] {
        self.sections
            .get(section)
            .map(|s| s.cells.as_slice())
            .unwrap_or(&[])
    }

    /// Direct index lookup of a cell. Out-of-range paths yield `None`.
    pub fn element_at(&self, path: IndexPath) -> Option<&PositionedElement> {
        self.sections.get(path.section)?.cells.get(path.item)
    }

    /// Header of `section`, if any.
    pub fn header(&self, section: usize) -> Option<&PositionedElement> {
        self.sections.get(section)?.header.as_ref()
    }

    /// Footer of `section`, if any.
    pub fn footer(&self, section: usize) -> Option<&PositionedElement> {
        self.sections.get(section)?.footer.as_ref()
    }

    /// All elements of all sections, in section order.
    pub fn elements(&self) -> impl Iterator<Item = &PositionedElement> {
        self.sections.iter().flat_map(SectionLayout::elements)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/snapshot.rs"]
mod tests;
