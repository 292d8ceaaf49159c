#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Conversion never panics and never leaves [0, 360)
        let out = qcompass::to_compass(text);
        if !out.is_empty() {
            let value: f64 = out.parse().expect("output is a number");
            assert!((0.0..360.0).contains(&value), "{:?} -> {:?}", text, out);
        }
        assert_eq!(out, qcompass::to_qcad(text));
    }
});
