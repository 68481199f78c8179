#![no_main]

use libfuzzer_sys::fuzz_target;
use sss_gf256::Share;

// Decoding arbitrary input never panics, and whatever decodes re-encodes to
// an equivalent share.
fuzz_target!(|data: &[u8]| {
    if let Ok(share) = Share::from_bytes(data) {
        assert_eq!(&share.to_bytes()[..], data);
    }

    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(share) = text.parse::<Share>() {
            let again: Share = share.to_string().parse().unwrap();
            assert_eq!(again, share);
        }
    }
});
