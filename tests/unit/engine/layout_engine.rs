use super::*;

fn prepared(state: SectionState, counts: &[usize]) -> CardStackLayout {
    let mut engine = CardStackLayout::default();
    engine.prepare(
        Some(&Container::new(300.0, counts)),
        &LayoutDelegates::new(&state),
    );
    engine
}

#[test]
fn fresh_engine_has_empty_snapshot() {
    let engine = CardStackLayout::default();
    assert!(engine.snapshot().is_empty());
    assert_eq!(engine.snapshot().generation, 0);
    assert_eq!(engine.content_size(), Size::ZERO);
}

#[test]
fn every_pass_publishes_a_new_generation() {
    let mut engine = CardStackLayout::default();
    let container = Container::new(300.0, [3]);
    let state = SectionState::Collapsed;
    assert_eq!(engine.prepare(Some(&container), &LayoutDelegates::new(&state)).generation, 1);
    assert_eq!(engine.prepare(None, &LayoutDelegates::new(&state)).generation, 2);
    assert!(engine.snapshot().is_empty());
}

#[test]
fn held_snapshot_survives_the_next_pass() {
    let mut engine = prepared(SectionState::Collapsed, &[3]);
    let before = engine.shared_snapshot();

    let expanded = SectionState::Expanded;
    engine.prepare(
        Some(&Container::new(300.0, [3])),
        &LayoutDelegates::new(&expanded),
    );

    assert_eq!(before.cells(0)[1].frame.y0, 30.0);
    assert_eq!(engine.snapshot().cells(0)[1].frame.y0, 160.0);
    assert!(engine.snapshot().generation > before.generation);
}

#[test]
fn lookups_degrade_to_none_out_of_range() {
    let engine = prepared(SectionState::Regular, &[2]);
    assert!(engine.element_at(IndexPath::new(0, 1)).is_some());
    assert!(engine.element_at(IndexPath::new(0, 2)).is_none());
    assert!(engine.element_at(IndexPath::new(3, 0)).is_none());
    assert!(engine.header_at(0).is_none());
    assert!(engine.footer_at(5).is_none());
}

#[test]
fn config_is_sanitized_on_the_way_in() {
    let mut engine = CardStackLayout::new(LayoutConfig {
        horizontal_spacing: -10.0,
        ..LayoutConfig::default()
    });
    assert_eq!(engine.config().horizontal_spacing, 0.0);
    engine.set_config(LayoutConfig {
        card_peek_height: f64::NAN,
        ..LayoutConfig::default()
    });
    assert_eq!(engine.config().card_peek_height, 0.0);
    assert_eq!(engine.config().horizontal_spacing, 10.0);
}

#[test]
fn collapsed_query_hits_top_two_cards() {
    let engine = prepared(SectionState::Collapsed, &[5]);
    let mut items: Vec<usize> = engine
        .elements_intersecting(Rect::new(0.0, 0.0, 300.0, 50.0))
        .iter()
        .filter_map(PositionedElement::item)
        .collect();
    items.sort_unstable();
    assert_eq!(items, vec![0, 1]);
}

#[test]
fn exit_frame_uses_section_offset_from_snapshot() {
    let engine = prepared(SectionState::Expanded, &[2, 2]);
    // Section 0 ends at 290, so section 1 starts at 490.
    let t = engine
        .exit_frame(IndexPath::new(1, 0), SectionState::Expanded, None)
        .unwrap();
    assert_eq!(t.frame, Rect::new(590.0, 580.0, 870.0, 710.0));
}

#[test]
fn exit_frame_without_container_uses_fallback_width() {
    let engine = CardStackLayout::default();
    let t = engine
        .exit_frame(IndexPath::new(0, 0), SectionState::Collapsed, None)
        .unwrap();
    // Fallback width 320: card spans 10..310, exits at 310 + 320.
    assert_eq!(t.frame.x0, 630.0);
    assert_eq!(t.frame.width(), 300.0);
}

#[test]
fn exit_frame_is_none_when_disabled() {
    let mut engine = prepared(SectionState::Collapsed, &[3]);
    engine.set_config(LayoutConfig {
        show_delete_animation: false,
        ..LayoutConfig::default()
    });
    assert!(engine
        .exit_frame(IndexPath::new(0, 1), SectionState::Collapsed, None)
        .is_none());
}
