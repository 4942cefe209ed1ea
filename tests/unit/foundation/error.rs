use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ClipsynthError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ClipsynthError::planning("x")
            .to_string()
            .contains("planning error:")
    );
    assert!(
        ClipsynthError::synthesis("x")
            .to_string()
            .contains("synthesis error:")
    );
    assert!(
        ClipsynthError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        ClipsynthError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        ClipsynthError::storage("x")
            .to_string()
            .contains("storage error:")
    );
}

#[test]
fn cancelled_is_its_own_variant() {
    assert!(matches!(ClipsynthError::Cancelled, ClipsynthError::Cancelled));
    assert_eq!(ClipsynthError::Cancelled.to_string(), "generation cancelled");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ClipsynthError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
