use super::*;
use crate::foundation::core::Rect;
use crate::layout::providers::{ItemSizeProvider, SupplementarySizeProvider};
use crate::model::state::SectionState;

struct Chrome {
    header: Size,
    footer: Size,
}

impl SupplementarySizeProvider for Chrome {
    fn header_size(&self, _section: usize) -> Size {
        self.header
    }

    fn footer_size(&self, _section: usize) -> Size {
        self.footer
    }
}

struct Heights(Vec<f64>);

impl ItemSizeProvider for Heights {
    fn size_for_item(&self, path: IndexPath) -> Option<Size> {
        self.0.get(path.item).map(|h| Size::new(0.0, *h))
    }
}

fn run(container: &Container, states: &[SectionState]) -> LayoutSnapshot {
    let states = states.to_vec();
    prepare_snapshot(
        &LayoutConfig::default(),
        Some(container),
        &LayoutDelegates::new(&states),
    )
}

#[test]
fn collapsed_single_section_matches_reference() {
    let snap = run(&Container::new(300.0, [5]), &[SectionState::Collapsed]);
    let ys: Vec<f64> = snap.cells(0).iter().map(|c| c.frame.y0).collect();
    assert_eq!(ys, vec![0.0, 30.0, 60.0, 90.0, 90.0]);
    assert_eq!(snap.cells(0)[0].frame, Rect::new(10.0, 0.0, 290.0, 130.0));
    assert_eq!(snap.content_size, Size::new(300.0, 220.0));
}

#[test]
fn z_index_decreases_down_the_stack() {
    let snap = run(&Container::new(300.0, [5]), &[SectionState::Expanded]);
    let z: Vec<i32> = snap.cells(0).iter().map(|c| c.z_index).collect();
    assert_eq!(z, vec![5, 4, 3, 2, 1]);
}

#[test]
fn only_deep_collapsed_cards_are_hidden() {
    let snap = run(
        &Container::new(300.0, [6, 6, 6]),
        &[
            SectionState::Collapsed,
            SectionState::Expanded,
            SectionState::Regular,
        ],
    );
    let limit = LayoutConfig::default().normal_stack_depth_limit;
    for cell in snap.cells(0) {
        assert_eq!(cell.is_hidden, cell.item().unwrap() > limit);
    }
    for section in 1..3 {
        assert!(snap.cells(section).iter().all(|c| !c.is_hidden));
    }
}

#[test]
fn sections_start_below_previous_bottom_plus_spacing() {
    let snap = run(
        &Container::new(300.0, [5, 3]),
        &[SectionState::Collapsed, SectionState::Expanded],
    );
    let s0_bottom = snap.cells(0).iter().map(|c| c.frame.y1).fold(0.0, f64::max);
    assert_eq!(s0_bottom, 220.0);
    let s1_ys: Vec<f64> = snap.cells(1).iter().map(|c| c.frame.y0).collect();
    assert_eq!(s1_ys, vec![420.0, 580.0, 740.0]);
    assert!(s1_ys.iter().all(|y| *y >= s0_bottom + 200.0));
    assert_eq!(snap.content_size.height, 870.0);
    assert_eq!(snap.sections[1].top, 420.0);
    assert_eq!(snap.sections[1].bottom, 870.0);
}

#[test]
fn missing_container_yields_empty_snapshot() {
    let states = SectionState::Expanded;
    let snap = prepare_snapshot(&LayoutConfig::default(), None, &LayoutDelegates::new(&states));
    assert!(snap.is_empty());
    assert_eq!(snap.content_size, Size::ZERO);
}

#[test]
fn header_sits_above_first_card_and_footer_below_last() {
    let chrome = Chrome {
        header: Size::new(0.0, 40.0),
        footer: Size::new(100.0, 20.0),
    };
    let states = vec![SectionState::Collapsed, SectionState::Expanded];
    let container = Container::new(300.0, [2, 0]);
    let snap = prepare_snapshot(
        &LayoutConfig::default(),
        Some(&container),
        &LayoutDelegates::new(&states).with_supplementary(&chrome),
    );

    let header = snap.header(0).unwrap();
    let first = snap.element_at(IndexPath::new(0, 0)).unwrap();
    assert_eq!(header.frame, Rect::new(0.0, 0.0, 300.0, 40.0));
    assert_eq!(header.frame.y1, first.frame.y0);
    assert_eq!(header.kind, ElementKind::Header);

    let last = snap.element_at(IndexPath::new(0, 1)).unwrap();
    let footer = snap.footer(0).unwrap();
    assert_eq!(last.frame.y0, 70.0);
    assert_eq!(footer.frame, Rect::new(100.0, 200.0, 200.0, 220.0));
    assert_eq!(snap.sections[0].bottom, 220.0);

    // Empty section: header at the base, footer right under it.
    assert_eq!(snap.header(1).unwrap().frame.y0, 420.0);
    assert_eq!(snap.footer(1).unwrap().frame, Rect::new(100.0, 460.0, 200.0, 480.0));
    assert_eq!(snap.content_size.height, 480.0);
}

#[test]
fn zero_height_supplementary_is_suppressed() {
    let chrome = Chrome {
        header: Size::new(300.0, 0.0),
        footer: Size::ZERO,
    };
    let states = SectionState::Regular;
    let container = Container::new(300.0, [1]);
    let snap = prepare_snapshot(
        &LayoutConfig::default(),
        Some(&container),
        &LayoutDelegates::new(&states).with_supplementary(&chrome),
    );
    assert!(snap.header(0).is_none());
    assert!(snap.footer(0).is_none());
    assert_eq!(snap.cells(0)[0].frame.y0, 0.0);
}

#[test]
fn item_sizes_override_height_only() {
    let heights = Heights(vec![50.0, 80.0]);
    let states = SectionState::Regular;
    let container = Container::new(300.0, [3]);
    let snap = prepare_snapshot(
        &LayoutConfig::default(),
        Some(&container),
        &LayoutDelegates::new(&states).with_item_sizes(&heights),
    );
    let cells = snap.cells(0);
    assert_eq!(cells[0].frame.height(), 50.0);
    assert_eq!(cells[1].frame.height(), 80.0);
    assert_eq!(cells[2].frame.height(), 130.0);
    assert_eq!(cells[1].frame.width(), 280.0);
    assert_eq!(cells[1].frame.y0, 160.0);
}

#[test]
fn states_are_read_per_section() {
    let states = vec![SectionState::Expanded];
    let snap = run(&Container::new(300.0, [2, 2]), &states);
    // Second section falls back to the default (collapsed) state.
    assert_eq!(snap.cells(0)[1].frame.y0, 160.0);
    assert_eq!(snap.cells(1)[1].frame.y0 - snap.cells(1)[0].frame.y0, 30.0);
}

#[test]
fn negative_spacing_is_clamped_so_sections_stay_ordered() {
    let cfg = LayoutConfig {
        section_spacing: -300.0,
        horizontal_spacing: -10.0,
        ..LayoutConfig::default()
    };
    let states = SectionState::Expanded;
    let snap = prepare_snapshot(
        &cfg,
        Some(&Container::new(300.0, [1, 1])),
        &LayoutDelegates::new(&states),
    );
    let s0_bottom = snap.sections[0].bottom;
    let s1_top = snap.cells(1)[0].frame.y0;
    assert_eq!(s0_bottom, 130.0);
    assert_eq!(s1_top, 130.0);
    assert!(s1_top >= s0_bottom);
    assert_eq!(snap.cells(0)[0].frame, Rect::new(0.0, 0.0, 300.0, 130.0));
}
