//! QCAD angle ↔ compass bearing conversion
//!
//! Both directions use the same reflection about the 45° line:
//!
//! ```text
//! compass = (90 - qcad)    mod 360
//! qcad    = (90 - compass) mod 360
//! ```
//!
//! The textual operations never fail. Empty or unparseable input produces an
//! empty string, which is the normal "no value" state of a field being edited.
//!
//! ## Numeric rules
//!
//! - Surrounding whitespace is ignored. Only `0-9 + - . e E` are accepted, so
//!   `inf`/`NaN` spellings and numbers with a trailing suffix are rejected.
//! - Values that overflow to infinity are rejected.
//! - The result is normalized into `[0, 360)`; negative zero becomes zero.
//! - Output is rounded to hundredths by rounding the f64 product
//!   `value * 100` half away from zero, then printed from integer hundredths.
//!   The product is inexact, so a decimal tie such as 89.995 may land either
//!   way. A result that rounds up to 360.00 prints as `0.00`.

use crate::models::Axis;

/// Degrees in a full turn
pub const FULL_TURN: f64 = 360.0;

/// Offset between the East-based and North-based zero directions
pub const QUARTER_TURN: f64 = 90.0;

const HUNDREDTHS_PER_TURN: u64 = 36_000;

/// Convert QCAD text into compass bearing text.
///
/// ```
/// assert_eq!(qcompass::to_compass("90"), "0.00");
/// assert_eq!(qcompass::to_compass("-10"), "100.00");
/// assert_eq!(qcompass::to_compass("abc"), "");
/// ```
pub fn to_compass(qcad_text: &str) -> String {
    convert_text(Axis::Qcad, qcad_text)
}

/// Convert compass bearing text into QCAD text.
pub fn to_qcad(compass_text: &str) -> String {
    convert_text(Axis::Compass, compass_text)
}

/// Convert `text`, expressed in `from`, into the other axis.
///
/// The formula is its own inverse, so `from` only affects logging.
pub fn convert_text(from: Axis, text: &str) -> String {
    let output = match parse_degrees(text) {
        Some(degrees) => format_normalized(reflect(degrees)),
        None => String::new(),
    };
    log::trace!("{} {:?} -> {} {:?}", from, text, from.other(), output);
    output
}

/// Parse a decimal angle in degrees.
///
/// Returns `None` for empty input, malformed numbers and non-finite values.
pub fn parse_degrees(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    // `f64::from_str` also accepts "inf", "infinity" and "nan".
    let numeric = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !numeric {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `(90 - degrees) mod 360`, shifted into `[0, 360)`.
///
/// Non-finite input yields NaN.
pub fn reflect(degrees: f64) -> f64 {
    let mut raw = (QUARTER_TURN - degrees) % FULL_TURN;
    if raw < 0.0 {
        raw += FULL_TURN;
    }
    // A tiny negative remainder can round up to exactly 360 after the shift.
    if raw >= FULL_TURN {
        raw -= FULL_TURN;
    }
    if raw == 0.0 {
        // also clears -0.0
        return 0.0;
    }
    raw
}

/// Format a value in `[0, 360)` with exactly two decimals.
fn format_normalized(degrees: f64) -> String {
    debug_assert!((0.0..FULL_TURN).contains(&degrees));

    // f64::round is half away from zero, applied to the already-inexact product.
    let mut hundredths = (degrees * 100.0).round() as u64;
    if hundredths >= HUNDREDTHS_PER_TURN {
        hundredths -= HUNDREDTHS_PER_TURN;
    }
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}
