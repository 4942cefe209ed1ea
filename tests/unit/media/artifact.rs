use super::*;

#[test]
fn duration_labels_are_m_ss() {
    assert_eq!(duration_label(5.0), "0:05");
    assert_eq!(duration_label(65.0), "1:05");
    assert_eq!(duration_label(0.0), "0:00");
    assert_eq!(duration_label(600.0), "10:00");
    assert_eq!(duration_label(-3.0), "0:00");
}

#[test]
fn media_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&MediaKind::Video).unwrap(), "\"video\"");
    assert_eq!(serde_json::to_string(&MediaKind::Image).unwrap(), "\"image\"");
}
