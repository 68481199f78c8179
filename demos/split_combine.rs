use anyhow::{Context, Result};
use sss_gf256::{Secret, Share};

fn main() -> Result<()> {
    println!("=== Shamir Secret Sharing Demo ===\n");

    let message = b"Hello World!!!";
    let secret = Secret::new(message, 3, 5)?;
    println!(
        "Secret: {:?}",
        std::str::from_utf8(secret.data()).context("demo secret is text")?
    );
    println!(
        "Configuration: {} total shares, threshold of {}\n",
        secret.share_count(),
        secret.threshold()
    );

    let shares = secret.split()?;
    let encoded: Vec<String> = shares.iter().map(Share::to_string).collect();
    for line in &encoded {
        println!("  {line}");
    }
    println!();

    // Any three shares will do
    let picked = [&encoded[1], &encoded[4], &encoded[2]];
    let loaded = picked
        .iter()
        .map(|s| s.parse::<Share>())
        .collect::<Result<Vec<_>, _>>()?;
    let recovered = Secret::combine(&loaded)?;
    println!(
        "Recovered from shares 2, 5, 3: {:?}",
        String::from_utf8_lossy(&recovered)
    );

    // Two are not enough
    let wrong = Secret::combine(&loaded[..2])?;
    println!(
        "From only two shares: {:?} (matches: {})",
        String::from_utf8_lossy(&wrong),
        wrong == message
    );

    Ok(())
}
