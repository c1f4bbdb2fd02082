// src/models.rs
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 64;
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Language used for user-facing labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ru" | "russian" => Ok(Locale::Ru),
            other => Err(format!("unknown locale '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Social,
    Email,
    Banking,
    Work,
    Shopping,
    Entertainment,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 7] = [
        Category::Social,
        Category::Email,
        Category::Banking,
        Category::Work,
        Category::Shopping,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Social => "social",
            Category::Email => "email",
            Category::Banking => "banking",
            Category::Work => "work",
            Category::Shopping => "shopping",
            Category::Entertainment => "entertainment",
            Category::Other => "other",
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Category::Social) => "Social",
            (Locale::En, Category::Email) => "Email",
            (Locale::En, Category::Banking) => "Banking",
            (Locale::En, Category::Work) => "Work",
            (Locale::En, Category::Shopping) => "Shopping",
            (Locale::En, Category::Entertainment) => "Entertainment",
            (Locale::En, Category::Other) => "Other",
            (Locale::Ru, Category::Social) => "Соцсети",
            (Locale::Ru, Category::Email) => "Email",
            (Locale::Ru, Category::Banking) => "Банки",
            (Locale::Ru, Category::Work) => "Работа",
            (Locale::Ru, Category::Shopping) => "Покупки",
            (Locale::Ru, Category::Entertainment) => "Развлечения",
            (Locale::Ru, Category::Other) => "Другое",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(Locale::En))
    }
}

impl FromStr for Category {
    type Err = String;

    // Accepts the English name or the localized label of any locale.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| {
                c.name() == wanted
                    || c.label(Locale::En).to_lowercase() == wanted
                    || c.label(Locale::Ru).to_lowercase() == wanted
            })
            .ok_or_else(|| format!("unknown category '{}'", s.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub website: String,
    pub username: String,
    pub password: String,
    pub category: Category,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Build a brand-new account from form data with a fresh id.
    pub fn from_form(form: AccountForm) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            website: form.website,
            username: form.username,
            password: form.password,
            category: form.category,
            notes: form.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply edited form data, keeping identity and creation time.
    pub fn with_form(&self, form: AccountForm) -> Self {
        Self {
            id: self.id,
            website: form.website,
            username: form.username,
            password: form.password,
            category: form.category,
            notes: form.notes,
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    pub fn to_form(&self) -> AccountForm {
        AccountForm {
            website: self.website.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            category: self.category,
            notes: self.notes.clone(),
        }
    }
}

/// Editable fields of an account, as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountForm {
    pub website: String,
    pub username: String,
    pub password: String,
    pub category: Category,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Website,
    Username,
    CreatedAt,
    UpdatedAt,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOptions {
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl GeneratorOptions {
    pub fn has_any_class(&self) -> bool {
        self.include_uppercase || self.include_lowercase || self.include_numbers || self.include_symbols
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}
