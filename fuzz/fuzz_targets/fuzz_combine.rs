#![no_main]

use libfuzzer_sys::fuzz_target;
use sss_gf256::{Secret, Share, SplitMode};

// Arbitrary shares must make combine return Ok or Err, never panic:
// zero and duplicate indices, mismatched payload lengths, empty payloads.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let num_shares = (data[0] % 16) as usize;
    let payload_len = (data[1] % 64) as usize;
    let mut rest = &data[2..];

    let mut shares = Vec::with_capacity(num_shares);
    for _ in 0..num_shares {
        let Some((&index, tail)) = rest.split_first() else {
            break;
        };
        let take = payload_len.min(tail.len());
        shares.push(Share::new(index, tail[..take].to_vec()));
        rest = &tail[take..];
    }

    let sequential = Secret::combine(&shares);
    let parallel = Secret::combine_with_mode(&shares, SplitMode::Parallel);
    assert_eq!(sequential, parallel);

    let _ = Secret::combine(&[]);
});
