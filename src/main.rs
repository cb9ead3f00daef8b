//! Interactive password checker.
//!
//! Reads one password from stdin (echoed, not masked) and prints the
//! evaluation report. No flags, no configuration beyond the optional
//! `PWD_WORDLIST_PATH` environment variable.

use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use pwd_entropy::{evaluate_password_strength, init_wordlist};
use secrecy::{ExposeSecret, SecretString};

fn main() -> Result<()> {
    init_wordlist().context("failed to load common-password wordlist")?;

    println!("Enter the password you want to check (input will be shown):");

    let mut line = String::new();
    let bytes_read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password")?;
    if bytes_read == 0 {
        bail!("unexpected end of input");
    }

    let password = SecretString::new(line.trim_end_matches(['\r', '\n']).to_string().into());
    let evaluation = evaluate_password_strength(&password);

    println!();
    println!("Entered password: {}", evaluation.password.expose_secret());
    println!("Result:");
    println!("Length: {}", evaluation.length);
    println!("Entropy (bits): {}", evaluation.entropy_bits);
    println!("Strength: {}", evaluation.strength);
    println!(
        "Detected character classes: {}",
        evaluation.classes.detected().join(", ")
    );
    println!();
    println!("Suggestions:");
    for suggestion in &evaluation.suggestions {
        println!("- {suggestion}");
    }

    Ok(())
}
