// src/generators/mod.rs
pub mod password;

pub use password::{charset, generate_password, PasswordGenerator};
