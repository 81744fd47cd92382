// src/core/mod.rs

pub mod engine;
pub mod simplifier;
pub mod types;
