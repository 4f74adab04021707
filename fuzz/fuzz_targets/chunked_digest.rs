#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else { return };
    let cfg = ctph::HashConfig::lenient();
    let whole = ctph::digest_with(rest, &cfg).expect("lenient digest").hash;

    let mut d = ctph::Digest::new();
    for chunk in rest.chunks(split as usize + 1) {
        d.append(chunk);
    }
    assert_eq!(d.finalize_with(&cfg).expect("lenient digest").hash, whole);
});
