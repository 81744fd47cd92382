// File: src/config.rs
use std::path::PathBuf;

/// File the glossary lives in when nothing else is configured.
pub const GLOSSARY_FILE: &str = "glossary.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub glossary_path: PathBuf,
}

impl Config {
    pub fn new(glossary_path: impl Into<PathBuf>) -> Self {
        Self { glossary_path: glossary_path.into() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(GLOSSARY_FILE)
    }
}
