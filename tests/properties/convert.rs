//! Property tests for the angle conversion.

use proptest::prelude::*;

use qcompass::{parse_degrees, to_compass, to_qcad};

/// Angular distance between two values in degrees, in [0, 180].
fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

fn is_canonical(output: &str) -> bool {
    let Some((whole, frac)) = output.split_once('.') else {
        return false;
    };
    (1..=3).contains(&whole.len())
        && whole.bytes().all(|b| b.is_ascii_digit())
        && frac.len() == 2
        && frac.bytes().all(|b| b.is_ascii_digit())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: qcad -> compass -> qcad returns to the start within rounding.
    #[test]
    fn property_round_trip_from_qcad(x in 0.0f64..360.0) {
        let back = to_qcad(&to_compass(&x.to_string()));
        let back: f64 = back.parse().unwrap();
        prop_assert!(angular_distance(back, x) <= 0.01, "x={} back={}", x, back);
    }

    /// PROPERTY: compass -> qcad -> compass returns to the start within rounding.
    #[test]
    fn property_round_trip_from_compass(x in 0.0f64..360.0) {
        let back = to_compass(&to_qcad(&x.to_string()));
        let back: f64 = back.parse().unwrap();
        prop_assert!(angular_distance(back, x) <= 0.01, "x={} back={}", x, back);
    }

    /// PROPERTY: both directions are the same function.
    #[test]
    fn property_directions_agree(text in "(?s).{0,24}") {
        prop_assert_eq!(to_compass(&text), to_qcad(&text));
    }

    /// PROPERTY: any finite number converts to a canonical value in [0, 360).
    #[test]
    fn property_output_is_canonical(x in -1.0e9f64..1.0e9) {
        let out = to_compass(&x.to_string());
        prop_assert!(is_canonical(&out), "output {:?}", out);
        let value: f64 = out.parse().unwrap();
        prop_assert!((0.0..360.0).contains(&value));
    }

    /// PROPERTY: conversion never panics, and yields empty exactly when the text is not a number.
    #[test]
    fn property_empty_iff_not_a_number(text in "(?s).{0,32}") {
        let out = to_compass(&text);
        prop_assert_eq!(out.is_empty(), parse_degrees(&text).is_none());
    }

    /// PROPERTY: adding whole turns does not change the result.
    #[test]
    fn property_whole_turns_are_invisible(hundredths in 0i64..36_000, turns in -50i64..50) {
        let base = hundredths as f64 / 100.0;
        let shifted = base + 360.0 * turns as f64;
        prop_assert_eq!(
            to_compass(&format!("{:.2}", base)),
            to_compass(&format!("{:.2}", shifted))
        );
    }
}
