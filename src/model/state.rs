/// Presentation state of one section.
///
/// The engine never stores this value between passes: it is read from the host's
/// [`crate::SectionStateProvider`] at the start of every layout pass.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionState {
    /// Overlapping cards, each showing a peeking strip beneath the one above.
    #[default]
    Collapsed,
    /// Every card fully visible, stacked downward with spacing.
    Expanded,
    /// Flat list: no inset, no peeking.
    Regular,
}

impl SectionState {
    /// Flip between collapsed and expanded. Regular sections have nothing to toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
            Self::Regular => Self::Regular,
        }
    }

    /// Whether cards in this state overlap one another.
    pub fn is_collapsed(self) -> bool {
        self == Self::Collapsed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/state.rs"]
mod tests;
