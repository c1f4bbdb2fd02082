// src/strength.rs
use serde::Serialize;

use crate::models::Locale;

const DIGIT_RUNS: [&str; 8] = ["123", "234", "345", "456", "567", "678", "789", "890"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => StrengthLevel::Weak,
            20..=39 => StrengthLevel::Fair,
            40..=59 => StrengthLevel::Good,
            60..=79 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }

    /// Display colour token.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "#f44336",
            StrengthLevel::Fair => "#ff9800",
            StrengthLevel::Good => "#ffc107",
            StrengthLevel::Strong => "#4caf50",
            StrengthLevel::VeryStrong => "#2e7d32",
        }
    }

    pub fn text(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, StrengthLevel::Weak) => "Weak",
            (Locale::En, StrengthLevel::Fair) => "Fair",
            (Locale::En, StrengthLevel::Good) => "Good",
            (Locale::En, StrengthLevel::Strong) => "Strong",
            (Locale::En, StrengthLevel::VeryStrong) => "Very strong",
            (Locale::Ru, StrengthLevel::Weak) => "Слабый",
            (Locale::Ru, StrengthLevel::Fair) => "Удовлетворительный",
            (Locale::Ru, StrengthLevel::Good) => "Хороший",
            (Locale::Ru, StrengthLevel::Strong) => "Сильный",
            (Locale::Ru, StrengthLevel::VeryStrong) => "Очень сильный",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthResult {
    pub score: u8,
    pub level: StrengthLevel,
    pub color: &'static str,
    pub text: &'static str,
}

/// Which character classes a password draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ClassPresence {
    lowercase: bool,
    uppercase: bool,
    digits: bool,
    symbols: bool,
}

impl ClassPresence {
    fn of(password: &str) -> Self {
        let mut presence = ClassPresence::default();
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                presence.lowercase = true;
            } else if c.is_ascii_uppercase() {
                presence.uppercase = true;
            } else if c.is_ascii_digit() {
                presence.digits = true;
            } else {
                presence.symbols = true;
            }
        }
        presence
    }

    fn count(&self) -> usize {
        [self.lowercase, self.uppercase, self.digits, self.symbols]
            .iter()
            .filter(|present| **present)
            .count()
    }
}

// Line terminators never form a repeated run
fn has_repeated_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        !matches!(w[0], '\n' | '\r' | '\u{2028}' | '\u{2029}') && w[0] == w[1] && w[1] == w[2]
    })
}

fn has_sequential_digits(password: &str) -> bool {
    DIGIT_RUNS.iter().any(|run| password.contains(run))
}

fn has_sequential_letters(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        let a = w[0].to_ascii_lowercase();
        let b = w[1].to_ascii_lowercase();
        let c = w[2].to_ascii_lowercase();
        a.is_ascii_lowercase()
            && c.is_ascii_lowercase()
            && b as u32 == a as u32 + 1
            && c as u32 == b as u32 + 1
    })
}

/// Heuristic strength score in `0..=100`.
pub fn calculate_score(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let chars: Vec<char> = password.chars().collect();
    let mut score: i32 = 0;

    // Length, up to 40 points
    let length = chars.len();
    for band in [8, 12, 16, 20] {
        if length >= band {
            score += 10;
        }
    }

    // Character classes, up to 40 points
    let presence = ClassPresence::of(password);
    score += 10 * presence.count() as i32;

    score += match presence.count() {
        2 => 5,
        3 => 10,
        4 => 20,
        _ => 0,
    };

    // Penalties
    if has_repeated_run(&chars) {
        score -= 10;
    }
    if chars.iter().all(|c| c.is_ascii_digit()) {
        score -= 20;
    }
    if chars.iter().all(|c| c.is_ascii_alphabetic()) {
        score -= 10;
    }
    if has_sequential_digits(password) {
        score -= 10;
    }
    if has_sequential_letters(&chars) {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

pub fn calculate_password_strength(password: &str) -> StrengthResult {
    calculate_password_strength_localized(password, Locale::default())
}

pub fn calculate_password_strength_localized(password: &str, locale: Locale) -> StrengthResult {
    let score = calculate_score(password);
    let level = StrengthLevel::from_score(score);

    StrengthResult {
        score,
        level,
        color: level.color(),
        text: level.text(locale),
    }
}

/// Advice for improving a password, most basic first.
pub fn password_recommendations(password: &str, locale: Locale) -> Vec<&'static str> {
    let ru = locale == Locale::Ru;
    let mut recommendations = Vec::new();

    if password.is_empty() {
        recommendations.push(if ru { "Введите пароль" } else { "Enter a password" });
        return recommendations;
    }

    let chars: Vec<char> = password.chars().collect();
    let presence = ClassPresence::of(password);

    if chars.len() < 8 {
        recommendations.push(if ru { "Используйте минимум 8 символов" } else { "Use at least 8 characters" });
    }
    if !presence.lowercase {
        recommendations.push(if ru { "Добавьте строчные буквы (a-z)" } else { "Add lowercase letters (a-z)" });
    }
    if !presence.uppercase {
        recommendations.push(if ru { "Добавьте заглавные буквы (A-Z)" } else { "Add uppercase letters (A-Z)" });
    }
    if !presence.digits {
        recommendations.push(if ru { "Добавьте цифры (0-9)" } else { "Add digits (0-9)" });
    }
    if !presence.symbols {
        recommendations.push(if ru {
            "Добавьте специальные символы (!@#$%^&*)"
        } else {
            "Add special characters (!@#$%^&*)"
        });
    }
    if has_repeated_run(&chars) {
        recommendations.push(if ru { "Избегайте повторяющихся символов" } else { "Avoid repeated characters" });
    }
    if has_sequential_digits(password) {
        recommendations.push(if ru { "Избегайте последовательных цифр" } else { "Avoid sequential digits" });
    }

    if chars.len() >= 16 && recommendations.is_empty() {
        recommendations.push(if ru { "Отличный пароль! 💪" } else { "Excellent password! 💪" });
    }

    recommendations
}
