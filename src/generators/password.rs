use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;

use crate::models::GeneratorOptions;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Random password generator backed by the operating system's CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &GeneratorOptions) -> String {
        generate_password(options)
    }

    pub fn generate_batch(&self, options: &GeneratorOptions, count: usize) -> Vec<String> {
        (0..count).map(|_| generate_password(options)).collect()
    }
}

/// Alphabet the generator draws from. Falls back to lowercase when no
/// class is selected, so it is never empty.
pub fn charset(options: &GeneratorOptions) -> Vec<char> {
    let mut chars = String::new();

    if options.include_uppercase {
        chars.push_str(UPPERCASE);
    }
    if options.include_lowercase {
        chars.push_str(LOWERCASE);
    }
    if options.include_numbers {
        chars.push_str(NUMBERS);
    }
    if options.include_symbols {
        chars.push_str(SYMBOLS);
    }

    if chars.is_empty() {
        log::debug!("No character class selected, falling back to lowercase");
        chars.push_str(LOWERCASE);
    }

    chars.chars().collect()
}

// Every position is an independent uniform draw over the charset.
pub fn generate_password(options: &GeneratorOptions) -> String {
    let chars = charset(options);
    let dist = Uniform::from(0..chars.len());
    let mut rng = OsRng;

    (0..options.length)
        .map(|_| chars[dist.sample(&mut rng)])
        .collect()
}
