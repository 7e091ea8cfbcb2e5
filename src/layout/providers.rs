//! Capability interfaces the host implements to drive a layout pass.

use crate::foundation::core::{IndexPath, Size};
use crate::model::state::SectionState;

/// Source of truth for each section's presentation state.
pub trait SectionStateProvider {
    /// State `section` should be laid out in for the current pass.
    fn current_state(&self, section: usize) -> SectionState;
}

/// Every section shares one state.
impl SectionStateProvider for SectionState {
    fn current_state(&self, _section: usize) -> SectionState {
        *self
    }
}

/// One state per section; sections past the end use the default state.
impl SectionStateProvider for [SectionState] {
    fn current_state(&self, section: usize) -> SectionState {
        self.get(section).copied().unwrap_or_default()
    }
}

impl SectionStateProvider for Vec<SectionState> {
    fn current_state(&self, section: usize) -> SectionState {
        self.as_slice().current_state(section)
    }
}

/// Per-item sizing supplied by the host.
///
/// Only the height is honoured; card width is always derived from the container and the
/// section state.
pub trait ItemSizeProvider {
    /// Size of the item at `path`, or `None` to use the configured card height.
    fn size_for_item(&self, path: IndexPath) -> Option<Size>;
}

/// Header and footer sizes. A zero height suppresses the element.
pub trait SupplementarySizeProvider {
    /// Header size for `section`.
    fn header_size(&self, section: usize) -> Size {
        let _ = section;
        Size::ZERO
    }

    /// Footer size for `section`.
    fn footer_size(&self, section: usize) -> Size {
        let _ = section;
        Size::ZERO
    }
}

/// Read-only description of the surface the deck is laid out in.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Container {
    /// Visible content width.
    pub width: f64,
    /// Number of items in each section.
    pub item_counts: Vec<usize>,
}

impl Container {
    /// Build a container description.
    pub fn new(width: f64, item_counts: impl Into<Vec<usize>>) -> Self {
        Self {
            width,
            item_counts: item_counts.into(),
        }
    }

    /// Number of sections.
    pub fn number_of_sections(&self) -> usize {
        self.item_counts.len()
    }

    /// Item count of `section`; 0 when out of range.
    pub fn number_of_items(&self, section: usize) -> usize {
        self.item_counts.get(section).copied().unwrap_or(0)
    }
}

/// The set of host capabilities consulted by one layout pass.
#[derive(Clone, Copy)]
pub struct LayoutDelegates<'a> {
    /// Required state source.
    pub states: &'a dyn SectionStateProvider,
    /// Optional per-item sizes.
    pub item_sizes: Option<&'a dyn ItemSizeProvider>,
    /// Optional header/footer sizes.
    pub supplementary: Option<&'a dyn SupplementarySizeProvider>,
}

impl<'a> LayoutDelegates<'a> {
    /// Delegates with only a state source.
    pub fn new(states: &'a dyn SectionStateProvider) -> Self {
        Self {
            states,
            item_sizes: None,
            supplementary: None,
        }
    }

    /// Attach a per-item size source.
    pub fn with_item_sizes(mut self, sizes: &'a dyn ItemSizeProvider) -> Self {
        self.item_sizes = Some(sizes);
        self
    }

    /// Attach a header/footer size source.
    pub fn with_supplementary(mut self, sizes: &'a dyn SupplementarySizeProvider) -> Self {
        self.supplementary = Some(sizes);
        self
    }
}
