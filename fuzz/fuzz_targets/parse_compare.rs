#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else { return };
    let (a, b) = text.split_once('\n').unwrap_or((text, text));
    if let Ok(score) = ctph::compare(a, b) {
        assert!(score <= 100);
        assert_eq!(Ok(score), ctph::compare(b, a).map_err(|_| ()));
    }
});
