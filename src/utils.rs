//! This file contains simple helper functions and test helpers.

/// Returns a mask full of 1s, of `b` bits.
pub fn mask(b: usize) -> usize {
    (1 << (b)) - 1
}

#[test]
fn test_masking() {
    assert_eq!(mask(0), 0x0);
    assert_eq!(mask(9), 511);
    assert_eq!(mask(12), 0xFFF);
}

#[cfg(feature = "std")]
/// Returns a list of interesting values that the tests and the demo use
/// to catch edge cases.
pub fn get_special_test_values() -> [f32; 16] {
    [
        3.14159265358979,
        1.23456789e-5,
        9.87654321e8,
        -2.71828182845905,
        0.0,
        -0.0,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
        1.2345e-40,  // Subnormal.
        -5.6789e-42, // Subnormal.
        f32::EPSILON,
        f32::MIN_POSITIVE,
        f32::MAX,
        f32::MIN,
        355. / 113.,
    ]
}

#[cfg(feature = "std")]
#[test]
fn test_special_values_cover_all_classes() {
    use super::cast::{SourceClass, Unpacked};

    let classes: std::vec::Vec<SourceClass> = get_special_test_values()
        .iter()
        .map(|v| Unpacked::from_f32(*v).class)
        .collect();
    for class in [
        SourceClass::Zero,
        SourceClass::Subnormal,
        SourceClass::Normal,
        SourceClass::Infinity,
        SourceClass::NaN,
    ] {
        assert!(classes.contains(&class));
    }
}
