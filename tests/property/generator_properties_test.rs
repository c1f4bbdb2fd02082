//! Property-based tests for the password generator.
//!
//! These tests check that generated passwords always have the requested
//! length and only use characters from the selected classes.

use proptest::prelude::*;
use rust_passkeeper::generators::password::{charset, LOWERCASE, NUMBERS, SYMBOLS, UPPERCASE};
use rust_passkeeper::generators::PasswordGenerator;
use rust_passkeeper::models::{GeneratorOptions, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

fn options_strategy() -> impl Strategy<Value = GeneratorOptions> {
    (
        MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(length, upper, lower, numbers, symbols)| GeneratorOptions {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
        })
}

fn allowed(options: &GeneratorOptions) -> String {
    let mut allowed = String::new();
    if options.include_uppercase {
        allowed.push_str(UPPERCASE);
    }
    if options.include_lowercase {
        allowed.push_str(LOWERCASE);
    }
    if options.include_numbers {
        allowed.push_str(NUMBERS);
    }
    if options.include_symbols {
        allowed.push_str(SYMBOLS);
    }
    if allowed.is_empty() {
        allowed.push_str(LOWERCASE);
    }
    allowed
}

// **Property: exact length**
//
// *For any* length in 8..=64 and any class selection, the password has
// exactly `length` characters.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn generated_password_has_requested_length(options in options_strategy()) {
        let password = PasswordGenerator::new().generate_password(&options);
        prop_assert_eq!(password.chars().count(), options.length);
    }

    // **Property: alphabet membership**
    //
    // *For any* options, every character belongs to the union of the
    // selected classes (lowercase when nothing is selected).
    #[test]
    fn generated_characters_come_from_selected_classes(options in options_strategy()) {
        let password = PasswordGenerator::new().generate_password(&options);
        let allowed = allowed(&options);
        for c in password.chars() {
            prop_assert!(allowed.contains(c), "{:?} not allowed for {:?}", c, options);
        }
    }

    #[test]
    fn charset_matches_selection(options in options_strategy()) {
        let expected: Vec<char> = allowed(&options).chars().collect();
        prop_assert_eq!(charset(&options), expected);
    }
}

#[test]
fn no_class_selected_uses_lowercase_at_every_length() {
    let generator = PasswordGenerator::new();
    for length in MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH {
        let options = GeneratorOptions {
            length,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
        };
        let password = generator.generate_password(&options);
        assert_eq!(password.len(), length);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }
}

#[test]
fn every_symbol_is_reachable() {
    // 64 * 200 draws over a 26-symbol alphabet; a miss is astronomically unlikely
    let options = GeneratorOptions {
        length: MAX_PASSWORD_LENGTH,
        include_uppercase: false,
        include_lowercase: false,
        include_numbers: false,
        include_symbols: true,
    };
    let generator = PasswordGenerator::new();
    let seen: std::collections::HashSet<char> = generator
        .generate_batch(&options, 200)
        .iter()
        .flat_map(|p| p.chars().collect::<Vec<_>>())
        .collect();
    assert_eq!(seen.len(), SYMBOLS.chars().count());
}
