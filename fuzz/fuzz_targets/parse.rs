#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary text through the TLV parser and the full verifier.
    // Both must reject garbage with an Error, never panic.
    if let Ok(payload) = std::str::from_utf8(data) {
        let _ = brcode::parse(payload);
        let _ = brcode::verify(payload);
    }
});
