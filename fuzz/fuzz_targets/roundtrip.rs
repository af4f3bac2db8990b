#![no_main]
use libfuzzer_sys::fuzz_target;
use brcode::PixPayload;

fuzz_target!(|data: &[u8]| {
    // Split the input into the five payload parameters and round-trip:
    // whatever the encoder accepts must verify cleanly.
    if let Ok(text) = std::str::from_utf8(data) {
        let mut parts = text.splitn(5, '\n');
        let key = parts.next().unwrap_or_default();
        let name = parts.next().unwrap_or_default();
        let city = parts.next().unwrap_or_default();
        let amount = parts.next();
        let description = parts.next();

        let mut payload = PixPayload::new(key, name, city);
        if let Some(amount) = amount {
            payload = payload.with_amount(amount);
        }
        if let Some(description) = description {
            payload = payload.with_description(description);
        }

        if let Ok(brcode) = brcode::encode(&payload) {
            brcode::verify(&brcode).expect("encoder output must verify");
        }
    }
});
