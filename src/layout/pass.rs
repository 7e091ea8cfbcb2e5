use crate::config::layout_config::LayoutConfig;
use crate::foundation::core::{IndexPath, Size, non_negative, rect_at};
use crate::layout::geometry::card_frame;
use crate::layout::providers::{Container, LayoutDelegates};
use crate::model::element::{ElementKind, PositionedElement};
use crate::model::snapshot::{LayoutSnapshot, SectionLayout};

/// Lay out every section of `container` and return a fresh snapshot.
///
/// Sections stack downward: each one starts `section_spacing` below the bottom edge of the
/// previous one. A missing container yields an empty snapshot. Config lengths are clamped with
/// [`LayoutConfig::sanitized`] first. The returned snapshot has generation 0; the engine stamps it
/// when publishing.
#[tracing::instrument(skip_all, fields(sections = container.map_or(0, Container::number_of_sections)))]
pub fn prepare_snapshot(
    config: &LayoutConfig,
    container: Option<&Container>,
    delegates: &LayoutDelegates<'_>,
) -> LayoutSnapshot {
    let Some(container) = container else {
        tracing::debug!("no container attached, producing empty snapshot");
        return LayoutSnapshot::empty();
    };

    let config = &config.sanitized();
    let width = non_negative(container.width);
    let mut sections = Vec::with_capacity(container.number_of_sections());
    let mut previous_bottom: Option<f64> = None;

    for section in 0..container.number_of_sections() {
        let base = previous_bottom.map_or(0.0, |bottom| bottom + config.section_spacing);
        let layout = layout_section(
            config,
            width,
            section,
            container.number_of_items(section),
            base,
            delegates,
        );
        previous_bottom = Some(layout.bottom);
        sections.push(layout);
    }

    let snapshot = LayoutSnapshot {
        sections,
        content_size: Size::new(width, previous_bottom.unwrap_or(0.0)),
        generation: 0,
    };
    tracing::debug!(
        elements = snapshot.elements().count(),
        width = snapshot.content_size.width,
        height = snapshot.content_size.height,
        "layout pass complete"
    );
    snapshot
}

fn layout_section(
    config: &LayoutConfig,
    width: f64,
    section: usize,
    item_count: usize,
    base: f64,
    delegates: &LayoutDelegates<'_>,
) -> SectionLayout {
    let state = delegates.states.current_state(section);
    let header_size = delegates
        .supplementary
        .and_then(|p| visible_size(p.header_size(section), width));
    let footer_size = delegates
        .supplementary
        .and_then(|p| visible_size(p.footer_size(section), width));

    // Cards start below the header so that it sits directly above the top card.
    let item_offset = base + header_size.map_or(0.0, |s| s.height);
    let mut bottom = item_offset;
    let mut cells = Vec::with_capacity(item_count);

    for item in 0..item_count {
        let path = IndexPath::new(section, item);
        let size = delegates.item_sizes.and_then(|p| p.size_for_item(path));
        let frame = card_frame(config, width, path, state, size, item_offset);

        let edge = if state.is_collapsed() {
            frame.y1.max(frame.y0 + config.card_peek_height)
        } else {
            frame.y1
        };
        bottom = bottom.max(edge);

        cells.push(PositionedElement {
            section,
            kind: ElementKind::Cell(item),
            frame,
            z_index: stack_z_index(item_count, item),
            is_hidden: state.is_collapsed() && item > config.normal_stack_depth_limit,
        });
    }

    let header = header_size.map(|size| {
        let first_top = cells.first().map_or(item_offset, |c| c.frame.y0);
        supplementary(section, ElementKind::Header, width, size, first_top - size.height)
    });
    let footer = footer_size.map(|size| {
        let last_bottom = cells.last().map_or(item_offset, |c| c.frame.y1);
        supplementary(section, ElementKind::Footer, width, size, last_bottom)
    });
    if let Some(footer) = &footer {
        bottom = bottom.max(footer.frame.y1);
    }

    tracing::trace!(section, ?state, items = item_count, base, bottom, "section laid out");

    SectionLayout {
        cells,
        header,
        footer,
        top: base,
        bottom,
    }
}

/// Top card gets the highest value; the count is at least one more than `item`.
fn stack_z_index(item_count: usize, item: usize) -> i32 {
    i32::try_from(item_count - item).unwrap_or(i32::MAX)
}

/// `None` when the element should be suppressed. Zero or oversized widths span the container.
fn visible_size(size: Size, container_width: f64) -> Option<Size> {
    let height = non_negative(size.height);
    if height == 0.0 {
        return None;
    }
    let width = non_negative(size.width);
    let width = if width == 0.0 || width > container_width {
        container_width
    } else {
        width
    };
    Some(Size::new(width, height))
}

fn supplementary(
    section: usize,
    kind: ElementKind,
    container_width: f64,
    size: Size,
    y: f64,
) -> PositionedElement {
    PositionedElement {
        section,
        kind,
        frame: rect_at((container_width - size.width) / 2.0, y, size.width, size.height),
        z_index: 0,
        is_hidden: false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/pass.rs"]
mod tests;
