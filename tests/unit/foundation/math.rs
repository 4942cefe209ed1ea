use super::*;

#[test]
fn mul_div255_endpoints() {
    assert_eq!(mul_div255_u16(0, 255), 0);
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(255, 0), 0);
    assert_eq!(mul_div255_u16(128, 255), 128);
}

#[test]
fn lerp_clamps_t() {
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    assert_eq!(lerp(0.0, 10.0, -1.0), 0.0);
    assert_eq!(lerp(0.0, 10.0, 2.0), 10.0);
}

#[test]
fn clamp01_bounds() {
    assert_eq!(clamp01(-0.5), 0.0);
    assert_eq!(clamp01(0.25), 0.25);
    assert_eq!(clamp01(1.5), 1.0);
}
