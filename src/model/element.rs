use crate::foundation::core::Rect;

/// What a positioned element represents inside its section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// An item card, carrying its index within the section.
    Cell(usize),
    /// The section header.
    Header,
    /// The section footer.
    Footer,
}

/// One laid-out rectangle of a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PositionedElement {
    /// Owning section.
    pub section: usize,
    /// Cell, header or footer.
    pub kind: ElementKind,
    /// Final frame in content coordinates.
    pub frame: Rect,
    /// Stacking order; larger draws on top.
    pub z_index: i32,
    /// Set for collapsed cards deeper than the stack depth limit.
    pub is_hidden: bool,
}

impl PositionedElement {
    /// Item index for cells, `None` for supplementary elements.
    pub fn item(&self) -> Option<usize> {
        match self.kind {
            ElementKind::Cell(item) => Some(item),
            ElementKind::Header | ElementKind::Footer => None,
        }
    }
}

impl ElementKind {
    /// Reading-order rank within a section: header first, cells by index, footer last.
    pub fn display_rank(self) -> (u8, usize) {
        match self {
            Self::Header => (0, 0),
            Self::Cell(item) => (1, item),
            Self::Footer => (2, 0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/element.rs"]
mod tests;
