use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::non_negative;
use crate::foundation::error::{CardStackError, CardStackResult};

/// Visual constants for a card deck.
///
/// All lengths are in points. Values are supplied by the host and are expected to be non-negative;
/// [`LayoutConfig::sanitized`] clamps anything else to zero, and the engine only ever stores
/// sanitized copies.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Fully visible card height, used when the host does not size items itself.
    pub card_height: f64,
    /// Accepted for config compatibility. Has no effect on geometry.
    pub collapsed_height: f64,
    /// Visible strip of each card beneath the one above it in a collapsed stack.
    pub card_peek_height: f64,
    /// Left and right margin between the container edge and the top card.
    pub horizontal_spacing: f64,
    /// Gap between cards in expanded and regular sections.
    pub vertical_spacing: f64,
    /// Gap between the bottom of one section and the top of the next.
    pub section_spacing: f64,
    /// Width reduction per depth step for cards below the top one.
    pub depth_width_offset: f64,
    /// Deepest item index that still gets its own peeking strip when collapsed.
    pub normal_stack_depth_limit: usize,
    /// Whether removed items get the flick-off exit transition.
    pub show_delete_animation: bool,
    /// Container width assumed when no container is attached (exit transitions only).
    pub fallback_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_height: 130.0,
            collapsed_height: 50.0,
            card_peek_height: 30.0,
            horizontal_spacing: 10.0,
            vertical_spacing: 30.0,
            section_spacing: 200.0,
            depth_width_offset: 30.0,
            normal_stack_depth_limit: 3,
            show_delete_animation: true,
            fallback_width: 320.0,
        }
    }
}

impl LayoutConfig {
    /// Return a copy with every negative or non-finite length clamped to zero.
    pub fn sanitized(&self) -> Self {
        let mut clamped = 0usize;
        let mut fix = |v: f64| {
            let out = non_negative(v);
            if out != v {
                clamped += 1;
            }
            out
        };

        let out = Self {
            card_height: fix(self.card_height),
            collapsed_height: fix(self.collapsed_height),
            card_peek_height: fix(self.card_peek_height),
            horizontal_spacing: fix(self.horizontal_spacing),
            vertical_spacing: fix(self.vertical_spacing),
            section_spacing: fix(self.section_spacing),
            depth_width_offset: fix(self.depth_width_offset),
            normal_stack_depth_limit: self.normal_stack_depth_limit,
            show_delete_animation: self.show_delete_animation,
            fallback_width: fix(self.fallback_width),
        };
        if clamped > 0 {
            tracing::debug!(clamped, "layout config values clamped to zero");
        }
        out
    }

    /// Parse a config from a JSON reader. Missing keys take their default value.
    pub fn from_reader<R: std::io::Read>(r: R) -> CardStackResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CardStackError::validation(format!("parse layout config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CardStackResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CardStackError::validation(format!("open layout config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/layout_config.rs"]
mod tests;
