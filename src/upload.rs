// File: src/upload.rs
// Transport boundary: uploads arrive as base64 data URLs, downloads leave as
// a fixed-name plain-text artifact. Nothing here reaches the simplifier core.

use crate::error::{Result, SimplifyError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fs;
use std::path::{Path, PathBuf};

pub const DOWNLOAD_FILENAME: &str = "simplified.txt";
pub const DOWNLOAD_MIME: &str = "text/plain";

/// Decodes `<header>,<base64 payload>` into UTF-8 text.
pub fn decode_data_url(contents: &str) -> Result<String> {
    let (_content_type, payload) = contents
        .split_once(',')
        .ok_or_else(|| SimplifyError::Decode("missing data URL separator".to_string()))?;

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| SimplifyError::Decode(e.to_string()))?;

    decode_bytes(bytes)
}

/// Decodes raw uploaded bytes as UTF-8 text.
pub fn decode_bytes(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| SimplifyError::Decode(e.to_string()))
}

/// Builds the data URL a browser would send for `bytes`.
#[cfg(test)]
pub(crate) fn encode_data_url(bytes: &[u8]) -> String {
    format!("data:{};base64,{}", DOWNLOAD_MIME, STANDARD.encode(bytes))
}

/// Simplified text offered back to the user as a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub filename: &'static str,
    pub mime: &'static str,
    pub content: String,
}

impl DownloadArtifact {
    pub fn new(content: String) -> Self {
        Self {
            filename: DOWNLOAD_FILENAME,
            mime: DOWNLOAD_MIME,
            content,
        }
    }

    /// Writes the artifact into `dir`, returning the full path written.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.filename);
        fs::write(&path, &self.content)?;
        Ok(path)
    }
}

/// User-facing outcome of a boundary operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Failure(m) => m,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
