// src/utils/mod.rs
pub mod origin;
pub mod validation;
