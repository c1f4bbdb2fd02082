// src/cli/handlers.rs
use anyhow::{Context, Result};
use console::{style, Color, StyledObject};
use serde::Serialize;

use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{GeneratorOptions, Locale};
use crate::strength::{
    calculate_password_strength_localized, password_recommendations, StrengthLevel, StrengthResult,
};

#[derive(Debug, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthResult,
}

#[derive(Debug, Serialize)]
pub struct StrengthReport {
    #[serde(flatten)]
    pub strength: StrengthResult,
    pub recommendations: Vec<&'static str>,
}

/// Terminal colour matching a strength level.
pub fn level_color(level: StrengthLevel) -> Color {
    match level {
        StrengthLevel::Weak => Color::Red,
        StrengthLevel::Fair => Color::Color256(208),
        StrengthLevel::Good => Color::Yellow,
        StrengthLevel::Strong => Color::Green,
        StrengthLevel::VeryStrong => Color::Color256(28),
    }
}

pub fn styled_strength(result: &StrengthResult) -> StyledObject<String> {
    style(format!("{} ({}/100)", result.text, result.score))
        .fg(level_color(result.level))
        .bold()
}

// Command-line flags override configured defaults
pub fn resolve_generator_options(
    config: &Config,
    length: Option<u64>,
    no_uppercase: bool,
    no_lowercase: bool,
    no_numbers: bool,
    no_symbols: bool,
) -> GeneratorOptions {
    let defaults = config.generator_options();

    let options = GeneratorOptions {
        length: length.map(|l| l as usize).unwrap_or(defaults.length),
        include_uppercase: defaults.include_uppercase && !no_uppercase,
        include_lowercase: defaults.include_lowercase && !no_lowercase,
        include_numbers: defaults.include_numbers && !no_numbers,
        include_symbols: defaults.include_symbols && !no_symbols,
    };

    if !options.has_any_class() {
        log::warn!("All character classes disabled, generator will use lowercase letters");
    }
    options
}

pub fn generate_passwords(options: &GeneratorOptions, count: usize, locale: Locale) -> Vec<GeneratedPassword> {
    PasswordGenerator::new()
        .generate_batch(options, count)
        .into_iter()
        .map(|password| {
            let strength = calculate_password_strength_localized(&password, locale);
            GeneratedPassword { password, strength }
        })
        .collect()
}

pub fn render_generated(generated: &[GeneratedPassword], json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(generated).context("Failed to serialise generated passwords");
    }

    let lines: Vec<String> = generated
        .iter()
        .map(|g| format!("{}  {}", g.password, styled_strength(&g.strength)))
        .collect();
    Ok(lines.join("\n"))
}

pub fn strength_report(password: &str, locale: Locale) -> StrengthReport {
    StrengthReport {
        strength: calculate_password_strength_localized(password, locale),
        recommendations: password_recommendations(password, locale),
    }
}

pub fn render_strength(report: &StrengthReport, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(report).context("Failed to serialise strength report");
    }

    let mut out = format!("Strength: {}", styled_strength(&report.strength));
    for advice in &report.recommendations {
        out.push_str(&format!("\n  • {}", advice));
    }
    Ok(out)
}

pub fn handle_generate(options: &GeneratorOptions, count: usize, locale: Locale, json: bool) -> Result<()> {
    log::info!("Generating {} password(s) of length {}", count, options.length);
    let generated = generate_passwords(options, count, locale);
    println!("{}", render_generated(&generated, json)?);
    Ok(())
}

pub fn handle_strength(password: Option<String>, locale: Locale, json: bool) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => inquire::Password::new("Password to check:")
            .with_display_mode(inquire::PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()
            .context("Failed to read password")?,
    };

    let report = strength_report(&password, locale);
    log::debug!("Scored a password at {}", report.strength.score);
    println!("{}", render_strength(&report, json)?);
    Ok(())
}
