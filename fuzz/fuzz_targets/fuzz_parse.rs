#![no_main]

use libfuzzer_sys::fuzz_target;

use decmath_core::LongInt;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing must never panic; accepted values must round-trip.
    if let Ok(value) = input.parse::<LongInt>() {
        let rendered = value.to_string();
        let reparsed: LongInt = rendered.parse().unwrap();
        assert_eq!(value, reparsed, "round-trip failed for {input:?}");
        // Canonical form is a fixed point of parse-then-render
        assert_eq!(rendered, reparsed.to_string());
    }
});
