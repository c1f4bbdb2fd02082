//! Session-scoped password keeper: a random password generator, a
//! heuristic strength scorer and an in-memory account vault with search
//! and category filtering.

pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod strength;
pub mod utils;

pub use crate::core::config::Config;
pub use crate::core::vault::{Vault, VaultAction, VaultError};
pub use crate::generators::PasswordGenerator;
pub use crate::strength::{calculate_password_strength, StrengthLevel, StrengthResult};
