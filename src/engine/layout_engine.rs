use std::sync::Arc;

use crate::config::layout_config::LayoutConfig;
use crate::foundation::core::{IndexPath, Rect, Size, non_negative};
use crate::layout::pass::prepare_snapshot;
use crate::layout::providers::{Container, LayoutDelegates};
use crate::model::element::PositionedElement;
use crate::model::snapshot::LayoutSnapshot;
use crate::model::state::SectionState;
use crate::transition::exit::{ExitTransition, exit_frame};

/// Card deck layout engine.
///
/// The engine owns its configuration and the snapshot produced by the most recent pass. Section
/// state is never kept here: each [`CardStackLayout::prepare`] call reads it afresh from the
/// delegates, so any pass may jump between arbitrary states.
///
/// A pass builds the new snapshot completely before replacing the old one. Readers holding a
/// [`CardStackLayout::shared_snapshot`] keep seeing the complete snapshot they grabbed.
#[derive(Debug)]
pub struct CardStackLayout {
    config: LayoutConfig,
    snapshot: Arc<LayoutSnapshot>,
    container_width: Option<f64>,
    generation: u64,
}

impl Default for CardStackLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl CardStackLayout {
    /// Create an engine with an empty snapshot.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config: config.sanitized(),
            snapshot: Arc::new(LayoutSnapshot::empty()),
            container_width: None,
            generation: 0,
        }
    }

    /// Active (sanitized) configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect at the next pass.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config.sanitized();
    }

    /// Run a layout pass and publish its snapshot.
    ///
    /// `container` is `None` when no rendering surface is attached, which publishes an empty
    /// snapshot.
    pub fn prepare(
        &mut self,
        container: Option<&Container>,
        delegates: &LayoutDelegates<'_>,
    ) -> &LayoutSnapshot {
        let mut next = prepare_snapshot(&self.config, container, delegates);
        self.generation += 1;
        next.generation = self.generation;

        self.container_width = container.map(|c| non_negative(c.width));
        self.snapshot = Arc::new(next);
        tracing::debug!(generation = self.generation, "snapshot published");
        &self.snapshot
    }

    /// Snapshot of the last pass.
    pub fn snapshot(&self) -> &LayoutSnapshot {
        &self.snapshot
    }

    /// Shared handle to the snapshot of the last pass.
    pub fn shared_snapshot(&self) -> Arc<LayoutSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Content size the host should give its scrolling region.
    pub fn content_size(&self) -> Size {
        self.snapshot.content_size
    }

    /// Elements of the current snapshot overlapping `rect`.
    pub fn elements_intersecting(&self, rect: Rect) -> Vec<PositionedElement> {
        self.snapshot.elements_intersecting(rect)
    }

    /// Cell at `path` in the current snapshot.
    pub fn element_at(&self, path: IndexPath) -> Option<PositionedElement> {
        self.snapshot.element_at(path).copied()
    }

    /// Header of `section` in the current snapshot.
    pub fn header_at(&self, section: usize) -> Option<PositionedElement> {
        self.snapshot.header(section).copied()
    }

    /// Footer of `section` in the current snapshot.
    pub fn footer_at(&self, section: usize) -> Option<PositionedElement> {
        self.snapshot.footer(section).copied()
    }

    /// Exit placement for a card being removed.
    ///
    /// The card's normal frame is computed against the section's base offset from the current
    /// snapshot (0 for unknown sections) and the last container width, or the configured fallback
    /// width when no container was attached.
    pub fn exit_frame(
        &self,
        path: IndexPath,
        state: SectionState,
        item_size: Option<Size>,
    ) -> Option<ExitTransition> {
        let width = self.container_width.unwrap_or(self.config.fallback_width);
        let offset = self.snapshot.section(path.section).map_or(0.0, |s| {
            s.header.as_ref().map_or(s.top, |h| h.frame.y1)
        });
        exit_frame(&self.config, width, path, state, item_size, offset)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/layout_engine.rs"]
mod tests;
