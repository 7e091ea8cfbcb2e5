use crate::config::layout_config::LayoutConfig;
use crate::foundation::core::{IndexPath, Rect, Size, non_negative, rect_at};
use crate::model::state::SectionState;

/// Total horizontal width removed from a card, split evenly between its two sides.
///
/// The depth coefficient is the raw item index: collapsed cards keep narrowing past the stack
/// depth limit even though their vertical offset stops growing there.
pub fn horizontal_inset(config: &LayoutConfig, item: usize, state: SectionState) -> f64 {
    if item == 0 {
        return 0.0;
    }
    match state {
        SectionState::Collapsed => item as f64 * non_negative(config.depth_width_offset),
        SectionState::Expanded => non_negative(config.depth_width_offset),
        SectionState::Regular => 0.0,
    }
}

/// Frame of one card.
///
/// `vertical_offset` is the running base offset of the card's section. The height comes from
/// `item_size` when the host provides one, otherwise from the configured card height.
/// Expanded and regular cards are spaced using the configured card height, not the per-item height.
/// Negative or non-finite config lengths are treated as zero.
pub fn frame_for(
    config: &LayoutConfig,
    container_width: f64,
    path: IndexPath,
    state: SectionState,
    item_size: Option<Size>,
    vertical_offset: f64,
) -> Rect {
    card_frame(
        &config.sanitized(),
        container_width,
        path,
        state,
        item_size,
        vertical_offset,
    )
}

/// [`frame_for`] for a config that has already been through [`LayoutConfig::sanitized`].
pub(crate) fn card_frame(
    config: &LayoutConfig,
    container_width: f64,
    path: IndexPath,
    state: SectionState,
    item_size: Option<Size>,
    vertical_offset: f64,
) -> Rect {
    let inset = horizontal_inset(config, path.item, state);
    let width = non_negative(container_width) - 2.0 * config.horizontal_spacing - inset;
    let x = config.horizontal_spacing + inset / 2.0;
    let height = item_size.map_or(config.card_height, |s| non_negative(s.height));

    let y = if path.item == 0 {
        vertical_offset
    } else {
        match state {
            SectionState::Collapsed => {
                let depth = path.item.min(config.normal_stack_depth_limit) as f64;
                vertical_offset + depth * config.card_peek_height
            }
            SectionState::Expanded | SectionState::Regular => {
                let i = path.item as f64;
                vertical_offset + i * config.card_height + i * config.vertical_spacing
            }
        }
    };

    rect_at(x, y, width, height)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
