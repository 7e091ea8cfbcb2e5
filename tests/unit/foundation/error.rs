use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CardStackError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CardStackError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CardStackError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
