use rand::rngs::ThreadRng;
use rand::Rng;

use crate::generators::strength;
use crate::models::{PasswordGenerationOptions, StrengthLabel, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

pub const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*";

/// Build the character pool for the given options.
///
/// Letters always come first, then digits, then symbols, so the pool is
/// never empty.
pub fn build_alphabet(options: &PasswordGenerationOptions) -> Vec<u8> {
    let mut chars = Vec::with_capacity(LETTERS.len() + DIGITS.len() + SYMBOLS.len());

    chars.extend_from_slice(LETTERS);
    if options.include_numbers {
        chars.extend_from_slice(DIGITS);
    }
    if options.include_symbols {
        chars.extend_from_slice(SYMBOLS);
    }

    chars
}

/// Draw a password from `rng`.
///
/// Each character is picked independently and uniformly from the alphabet.
/// A length outside the supported range yields an empty password.
pub fn generate_password_with<R: Rng>(rng: &mut R, options: &PasswordGenerationOptions) -> String {
    if options.length == 0 {
        return String::new();
    }
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&options.length) {
        log::warn!(
            "Refusing to generate password of length {} (allowed {}..={})",
            options.length,
            MIN_PASSWORD_LENGTH,
            MAX_PASSWORD_LENGTH
        );
        return String::new();
    }

    let chars = build_alphabet(options);

    (0..options.length)
        .map(|_| chars[rng.gen_range(0..chars.len())] as char)
        .collect()
}

pub struct PasswordGenerator<R: Rng = ThreadRng> {
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        PasswordGenerator { rng: rand::thread_rng() }
    }
}

impl<R: Rng> PasswordGenerator<R> {
    /// Use a caller-supplied random source, e.g. `OsRng` or a seeded RNG.
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate_password(&mut self, options: &PasswordGenerationOptions) -> String {
        generate_password_with(&mut self.rng, options)
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthLabel {
        strength::analyze_password_strength(password)
    }
}
