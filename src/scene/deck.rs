use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::layout_config::LayoutConfig;
use crate::engine::layout_engine::CardStackLayout;
use crate::foundation::core::{IndexPath, Size};
use crate::foundation::error::{CardStackError, CardStackResult};
use crate::layout::providers::{
    Container, ItemSizeProvider, LayoutDelegates, SectionStateProvider, SupplementarySizeProvider,
};
use crate::model::state::SectionState;

/// Largest item count a deck section may declare.
pub(crate) const MAX_SECTION_ITEMS: usize = 1_000_000;

/// JSON-facing description of a host: configuration, container and per-section data.
///
/// A deck implements every provider trait, so it can drive a layout pass on its own
/// (see [`Deck::layout`]).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    /// Layout constants.
    #[serde(default)]
    pub config: LayoutConfig,
    /// Container width; absent means no surface is attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_width: Option<f64>,
    /// Sections in display order.
    #[serde(default)]
    pub sections: Vec<DeckSection>,
}

/// One section of a [`Deck`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSection {
    /// Presentation state.
    #[serde(default)]
    pub state: SectionState,
    /// Number of items.
    pub items: usize,
    /// Optional per-item heights; items past the end use the configured card height.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item_heights: Vec<f64>,
    /// Optional header size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Size>,
    /// Optional footer size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Size>,
}

impl Deck {
    /// Parse a deck from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CardStackResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CardStackError::validation(format!("parse deck JSON: {e}")))
    }

    /// Parse a deck from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CardStackResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CardStackError::validation(format!("open deck JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject decks whose data cannot describe a real host.
    ///
    /// The engine itself clamps bad values; this check is for authored files.
    pub fn validate(&self) -> CardStackResult<()> {
        if let Some(width) = self.container_width {
            check_length(width, || "containerWidth".to_string())?;
        }
        for (idx, section) in self.sections.iter().enumerate() {
            if section.items > MAX_SECTION_ITEMS {
                return Err(CardStackError::validation(format!(
                    "section {idx}: {} items exceeds the limit of {MAX_SECTION_ITEMS}",
                    section.items
                )));
            }
            if section.item_heights.len() > section.items {
                return Err(CardStackError::validation(format!(
                    "section {idx}: {} item heights for {} items",
                    section.item_heights.len(),
                    section.items
                )));
            }
            for (item, h) in section.item_heights.iter().enumerate() {
                check_length(*h, || format!("section {idx}: item {item} height"))?;
            }
            for (name, size) in [("header", section.header), ("footer", section.footer)] {
                if let Some(size) = size {
                    check_length(size.width, || format!("section {idx}: {name} width"))?;
                    check_length(size.height, || format!("section {idx}: {name} height"))?;
                }
            }
        }
        Ok(())
    }

    /// Container described by this deck, if a width is set.
    pub fn container(&self) -> Option<Container> {
        self.container_width.map(|width| {
            Container::new(
                width,
                self.sections.iter().map(|s| s.items).collect::<Vec<_>>(),
            )
        })
    }

    /// Delegates backed by this deck.
    pub fn delegates(&self) -> LayoutDelegates<'_> {
        LayoutDelegates::new(self)
            .with_item_sizes(self)
            .with_supplementary(self)
    }

    /// Validate the deck and run one layout pass on a fresh engine.
    pub fn layout(&self) -> CardStackResult<CardStackLayout> {
        self.validate()?;
        let mut engine = CardStackLayout::new(self.config.clone());
        engine.prepare(self.container().as_ref(), &self.delegates());
        Ok(engine)
    }
}

impl SectionStateProvider for Deck {
    fn current_state(&self, section: usize) -> SectionState {
        self.sections
            .get(section)
            .map(|s| s.state)
            .unwrap_or_default()
    }
}

impl ItemSizeProvider for Deck {
    fn size_for_item(&self, path: IndexPath) -> Option<Size> {
        let height = self.sections.get(path.section)?.item_heights.get(path.item)?;
        Some(Size::new(0.0, *height))
    }
}

impl SupplementarySizeProvider for Deck {
    fn header_size(&self, section: usize) -> Size {
        self.sections
            .get(section)
            .and_then(|s| s.header)
            .unwrap_or(Size::ZERO)
    }

    fn footer_size(&self, section: usize) -> Size {
        self.sections
            .get(section)
            .and_then(|s| s.footer)
            .unwrap_or(Size::ZERO)
    }
}

fn check_length(v: f64, what: impl FnOnce() -> String) -> CardStackResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(CardStackError::validation(format!(
            "{} must be finite and >= 0, got {v}",
            what()
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/deck.rs"]
mod tests;
