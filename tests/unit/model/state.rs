use super::*;

#[test]
fn toggle_flips_stacked_states_only() {
    assert_eq!(SectionState::Collapsed.toggled(), SectionState::Expanded);
    assert_eq!(SectionState::Expanded.toggled(), SectionState::Collapsed);
    assert_eq!(SectionState::Regular.toggled(), SectionState::Regular);
}

#[test]
fn serde_names_are_lowercase() {
    assert_eq!(
        serde_json::to_string(&SectionState::Expanded).unwrap(),
        "\"expanded\""
    );
    let s: SectionState = serde_json::from_str("\"regular\"").unwrap();
    assert_eq!(s, SectionState::Regular);
}

#[test]
fn default_is_collapsed() {
    assert!(SectionState::default().is_collapsed());
}
