use crate::config::Config;
use crate::core::simplifier::simplify;
use crate::core::types::{Glossary, SimplificationResult};
use crate::error::Result;
use crate::persistence::GlossaryStore;
use crate::upload::{decode_bytes, decode_data_url, DownloadArtifact, Notice};

pub const NOT_IN_GLOSSARY: &str = "Not in glossary.";
pub const UPLOAD_FAILED: &str = "Failed to read file.";

// The engine owns the glossary for the whole session; every operation
// borrows it explicitly instead of reaching for shared global state.
pub struct SimplifierEngine {
    glossary: Glossary,
    store: GlossaryStore,
    last_output: Option<SimplificationResult>,
}

impl SimplifierEngine {
    pub fn new(store: GlossaryStore, glossary: Glossary) -> Self {
        Self {
            glossary,
            store,
            last_output: None,
        }
    }

    /// Loads the configured glossary file, or starts empty if there is none.
    pub fn open(config: &Config) -> Result<Self> {
        let store = GlossaryStore::new(config.glossary_path.clone());
        let glossary = store.load()?;
        Ok(Self::new(store, glossary))
    }

    pub fn glossary(&self) -> &Glossary {
        &self.glossary
    }

    pub fn last_output(&self) -> Option<&SimplificationResult> {
        self.last_output.as_ref()
    }

    /// Simplifies `text` and remembers it as the current output.
    /// Blank input produces nothing and keeps the previous output.
    pub fn simplify(&mut self, text: &str) -> Option<&SimplificationResult> {
        if text.trim().is_empty() {
            return None;
        }
        let result = simplify(text, &self.glossary);
        log::debug!(
            "Simplified {} trace entries at {:.1}% confidence",
            result.trace.len(),
            result.confidence
        );
        self.last_output = Some(result);
        self.last_output.as_ref()
    }

    pub fn search(&self, term: &str) -> Option<String> {
        if term.is_empty() {
            return None;
        }
        Some(
            self.glossary
                .lookup(term)
                .unwrap_or(NOT_IN_GLOSSARY)
                .to_string(),
        )
    }

    /// Adds or replaces a term when both fields are filled in, then reports
    /// the glossary size. A failed save is returned; the term stays in memory.
    pub fn add_term(&mut self, term: &str, definition: &str) -> Result<String> {
        if !term.is_empty() && !definition.is_empty() {
            self.store.insert(&mut self.glossary, term, definition)?;
        }
        Ok(self.stats())
    }

    pub fn stats(&self) -> String {
        format!("Glossary contains {} terms.", self.glossary.size())
    }

    /// Decodes an uploaded data URL and simplifies it. Any decode failure
    /// becomes a failure notice; neither the glossary nor the current
    /// output is touched either way.
    pub fn handle_upload(&self, contents: &str, filename: &str) -> Notice {
        match decode_data_url(contents) {
            Ok(text) => self.upload_notice(&text, filename),
            Err(e) => {
                log::warn!("Upload '{}' rejected: {}", filename, e);
                Notice::Failure(UPLOAD_FAILED.to_string())
            }
        }
    }

    /// Same as `handle_upload` for raw file bytes, skipping the base64 layer.
    pub fn handle_upload_bytes(&self, bytes: Vec<u8>, filename: &str) -> Notice {
        match decode_bytes(bytes) {
            Ok(text) => self.upload_notice(&text, filename),
            Err(e) => {
                log::warn!("Upload '{}' rejected: {}", filename, e);
                Notice::Failure(UPLOAD_FAILED.to_string())
            }
        }
    }

    fn upload_notice(&self, text: &str, filename: &str) -> Notice {
        let result = simplify(text, &self.glossary);
        Notice::Success(format!(
            "File '{}' uploaded. Simplification confidence: {}%",
            filename,
            result.confidence_display()
        ))
    }

    pub fn download(&self, text: &str) -> Option<DownloadArtifact> {
        if text.is_empty() {
            return None;
        }
        let result = simplify(text, &self.glossary);
        Some(DownloadArtifact::new(result.simplified_text))
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
