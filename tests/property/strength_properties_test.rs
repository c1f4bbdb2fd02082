//! Property-based tests for the strength scorer.
//!
//! The score is a pure function of the input: always within 0..=100,
//! stable across calls, and consistent with its level thresholds.

use proptest::prelude::*;
use rust_passkeeper::models::Locale;
use rust_passkeeper::strength::{
    calculate_password_strength, calculate_password_strength_localized, calculate_score, StrengthLevel,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn score_is_bounded_and_deterministic(password in ".{0,200}") {
        let first = calculate_password_strength(&password);
        let second = calculate_password_strength(&password);
        prop_assert!(first.score <= 100);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn level_follows_score(password in "[ -~]{0,80}") {
        let result = calculate_password_strength(&password);
        prop_assert_eq!(result.level, StrengthLevel::from_score(result.score));
        prop_assert_eq!(result.color, result.level.color());
    }

    #[test]
    fn all_digit_strings_never_go_negative(digits in "[0-9]{1,300}") {
        let score = calculate_score(&digits);
        // at most 40 for length + 10 for the class - 20 all-numeric
        prop_assert!(score <= 30);
    }

    #[test]
    fn locale_changes_only_the_label(password in "[ -~]{0,40}") {
        let en = calculate_password_strength_localized(&password, Locale::En);
        let ru = calculate_password_strength_localized(&password, Locale::Ru);
        prop_assert_eq!(en.score, ru.score);
        prop_assert_eq!(en.level, ru.level);
        prop_assert_eq!(en.color, ru.color);
    }

    // **Property: class monotonicity**
    //
    // Holding length fixed and avoiding every penalty, adding a character
    // class never lowers the score.
    #[test]
    fn adding_a_class_never_lowers_the_score(filler_len in 4usize..=16) {
        // '!' and '?' alternate, so no runs, no sequences, never all-alpha
        let filler: String = (0..filler_len).map(|i| if i % 2 == 0 { '!' } else { '?' }).collect();
        let candidates = [
            format!("{filler}!?!?"),
            format!("{filler}!?!q"),
            format!("{filler}!?Wq"),
            format!("{filler}!5Wq"),
        ];
        let scores: Vec<u8> = candidates.iter().map(|p| calculate_score(p)).collect();
        for pair in scores.windows(2) {
            prop_assert!(pair[0] <= pair[1], "{:?} -> {:?}", candidates, scores);
        }
    }
}

#[test]
fn empty_input_is_weak_zero() {
    let result = calculate_password_strength("");
    assert_eq!(result.score, 0);
    assert_eq!(result.level, StrengthLevel::Weak);
}

#[test]
fn mixed_beats_repetitive() {
    assert!(calculate_score("aaaa1111") < calculate_score("aB3$kL9!"));
}
