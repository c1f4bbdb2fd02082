// src/core/mod.rs
pub mod config;
pub mod validation;
pub mod vault;
