// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod prompt;
pub mod upload;

pub use crate::config::Config;
pub use crate::core::engine::SimplifierEngine;
pub use crate::core::simplifier::simplify;
pub use crate::core::types::{Glossary, SimplificationResult, Trace};
pub use crate::error::{Result, SimplifyError};
pub use crate::persistence::GlossaryStore;
