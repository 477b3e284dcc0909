use super::*;
use approx::assert_relative_eq;

#[test]
fn test_tube_simple() {
    let tube = Solid::new_tube("Target", 0.0, 5.0, 1.5).expect("tube succeeds");
    assert_eq!(tube.kind(), "Tube");
    assert_eq!(tube.axial_half_length(), 1.5);
    assert_eq!(tube.radial_reach(), 5.0);
    assert_relative_eq!(tube.volume(), PI * 25.0 * 3.0);
}

#[test]
fn test_hollow_tube_volume() {
    let tube = Solid::new_tube("Shell", 1.0, 2.0, 0.5).expect("tube succeeds");
    assert_relative_eq!(tube.volume(), PI * 3.0);
    assert_eq!(tube.radial_inner(), 1.0);
}

#[test]
fn test_tube_rejects_degenerate_input() {
    assert!(Solid::new_tube("t", 0.0, 5.0, 0.0).is_err());
    assert!(Solid::new_tube("t", 0.0, 5.0, -1.0).is_err());
    assert!(Solid::new_tube("t", -0.1, 5.0, 1.0).is_err());
    assert!(Solid::new_tube("t", 5.0, 5.0, 1.0).is_err());
    assert!(Solid::new_tube("t", 0.0, f64::NAN, 1.0).is_err());
}

#[test]
fn test_box_extents() {
    let world = Solid::new_box("World", 6.0, 12.0, 12.0).expect("box succeeds");
    assert_eq!(world.axial_half_length(), 6.0);
    assert_eq!(world.radial_capacity(), 12.0);
    assert_relative_eq!(world.radial_reach(), 12.0 * 2f64.sqrt());
    assert_relative_eq!(world.volume(), 8.0 * 6.0 * 12.0 * 12.0);
}

#[test]
fn test_box_rejects_zero_extent() {
    let err = Solid::new_box("World", 6.0, 0.0, 12.0).unwrap_err();
    assert!(err.to_string().contains("along y"));
}
