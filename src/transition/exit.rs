use crate::config::layout_config::LayoutConfig;
use crate::foundation::core::{Affine, IndexPath, Rect, Size, non_negative, rect_at};
use crate::layout::geometry::card_frame;
use crate::model::state::SectionState;

/// Vertical lift applied to a card as it leaves.
pub const EXIT_LIFT: f64 = 40.0;

/// Rotation applied to a card as it leaves, in radians.
pub const EXIT_ROTATION_RAD: f64 = 0.3;

/// Final placement of a removed card: flicked past the right edge with a slight rotation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExitTransition {
    /// Off-screen frame the card animates to.
    pub frame: Rect,
    /// Rotation hint, applied about the frame centre.
    pub rotation_rad: f64,
}

impl ExitTransition {
    /// Rotation about the centre of [`ExitTransition::frame`].
    pub fn transform(&self) -> Affine {
        Affine::rotate_about(self.rotation_rad, self.frame.center())
    }
}

/// Exit placement for the card at `path`, or `None` when delete animations are disabled and the
/// host should use its default.
pub fn exit_frame(
    config: &LayoutConfig,
    container_width: f64,
    path: IndexPath,
    state: SectionState,
    item_size: Option<Size>,
    vertical_offset: f64,
) -> Option<ExitTransition> {
    if !config.show_delete_animation {
        return None;
    }
    let config = &config.sanitized();
    let container_width = non_negative(container_width);
    let frame = card_frame(config, container_width, path, state, item_size, vertical_offset);
    Some(ExitTransition {
        frame: rect_at(
            frame.x1 + container_width,
            frame.y1 - EXIT_LIFT,
            frame.width(),
            frame.height(),
        ),
        rotation_rad: EXIT_ROTATION_RAD,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/transition/exit.rs"]
mod tests;
