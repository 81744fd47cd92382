// File: src/persistence.rs
use crate::core::types::Glossary;
use crate::error::{Result, SimplifyError};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File-backed storage for the glossary: one pretty-printed JSON object,
/// rewritten wholesale on every save.
#[derive(Debug, Clone)]
pub struct GlossaryStore {
    path: PathBuf,
}

impl GlossaryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the glossary file. A missing file is an empty glossary; a file
    /// that is not a JSON object of strings is a persistence error.
    pub fn load(&self) -> Result<Glossary> {
        log::debug!("Loading glossary from {:?}", self.path);

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No glossary file found, starting with empty glossary");
                return Ok(Glossary::new());
            }
            Err(e) => return Err(SimplifyError::Persistence(e.to_string())),
        };

        let glossary: Glossary = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            SimplifyError::Persistence(format!("{:?} is not a valid glossary: {}", self.path, e))
        })?;

        log::info!("Loaded {} glossary terms", glossary.size());
        Ok(glossary)
    }

    /// Writes the full glossary, replacing prior contents. The data goes to
    /// a temp file next to the target which is then renamed over it.
    pub fn save(&self, glossary: &Glossary) -> Result<()> {
        log::debug!("Persisting {} glossary terms to {:?}", glossary.size(), self.path);

        let parent_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir).map_err(persistence_error)?;

        let temp_file = NamedTempFile::new_in(parent_dir).map_err(persistence_error)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer_pretty(&mut writer, glossary)
                .map_err(|e| SimplifyError::Persistence(e.to_string()))?;
            writer.flush().map_err(persistence_error)?;
        }
        temp_file.as_file().sync_all().map_err(persistence_error)?;

        temp_file
            .persist(&self.path)
            .map_err(|e| persistence_error(e.error))?;
        Ok(())
    }

    /// Inserts `term.to_lowercase() -> definition` and saves immediately.
    /// The in-memory insert stands even if the save fails.
    pub fn insert(&self, glossary: &mut Glossary, term: &str, definition: &str) -> Result<()> {
        let replaced = glossary.insert(term, definition);
        log::info!(
            "{} glossary term '{}'",
            if replaced.is_some() { "Updated" } else { "Added" },
            term.to_lowercase()
        );
        self.save(glossary)
    }
}

fn persistence_error(e: std::io::Error) -> SimplifyError {
    SimplifyError::Persistence(e.to_string())
}

#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;
