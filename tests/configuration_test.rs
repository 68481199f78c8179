use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use sss_gf256::{Config, RandomError, Secret, ShamirError, SplitMode};

#[test]
fn test_builder_defaults() {
    let secret = Secret::builder(b"test secret", 3, 5).build().unwrap();
    assert_eq!(secret.config().mode, SplitMode::Sequential);

    let shares = secret.split().unwrap();
    assert_eq!(Secret::combine(&shares[..3]).unwrap(), b"test secret");
}

#[test]
fn test_builder_with_parallel_mode() {
    let config = Config::new().with_mode(SplitMode::Parallel);
    let secret = Secret::builder(b"test secret", 3, 5)
        .with_config(config)
        .build()
        .unwrap();
    assert_eq!(secret.config().mode, SplitMode::Parallel);

    let shares = secret.split().unwrap();
    for share in &shares {
        assert_eq!(share.payload.len(), b"test secret".len());
    }
    let reconstructed = Secret::combine_with_mode(&shares[2..], SplitMode::Parallel).unwrap();
    assert_eq!(reconstructed, b"test secret");
}

#[test]
fn test_same_seed_same_shares() {
    let secret = Secret::new(b"deterministic", 2, 4).unwrap();
    let a = secret
        .split_with_rng(&mut ChaCha20Rng::seed_from_u64(42))
        .unwrap();
    let b = secret
        .split_with_rng(&mut ChaCha20Rng::seed_from_u64(42))
        .unwrap();
    let c = secret
        .split_with_rng(&mut ChaCha20Rng::seed_from_u64(43))
        .unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_invalid_draw_cap() {
    assert!(matches!(
        Config::new().with_max_leading_draws(0),
        Err(ShamirError::InvalidConfig(_))
    ));
}

#[test]
fn test_draw_cap_of_one_fails_on_zero_leading_coefficient() {
    // with one draw allowed, a zero leading coefficient cannot be replaced;
    // over 4096 polynomials of degree 1 that happens with probability ~1 - 2^-23
    let config = Config::new().with_max_leading_draws(1).unwrap();
    let secret = Secret::builder(&[0u8; 4096], 2, 2)
        .with_config(config)
        .build()
        .unwrap();
    assert!(matches!(
        secret.split_with_rng(&mut ChaCha20Rng::seed_from_u64(1)),
        Err(RandomError::InsufficientRandomness { attempts: 1 })
    ));
}
