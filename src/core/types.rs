// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// The term -> definition mapping driving substitution.
/// Serialized as a flat JSON object; the BTreeMap keeps the file's key order stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Glossary {
    entries: BTreeMap<String, String>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match lookup on the lowercased query.
    pub fn lookup(&self, term: &str) -> Option<&str> {
        self.entries.get(&term.to_lowercase()).map(String::as_str)
    }

    /// Raw key lookup, no case folding. The simplifier derives its own keys.
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Stores `term.to_lowercase() -> definition`, replacing any prior definition.
    /// In-memory only; `GlossaryStore::insert` is the persisting variant.
    pub fn insert(&mut self, term: &str, definition: impl Into<String>) -> Option<String> {
        self.entries.insert(term.to_lowercase(), definition.into())
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Glossary {
    /// Builds a glossary verbatim, without case folding the keys.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Record of which original tokens were replaced and with what.
/// Keyed by the token's surface form; a repeated token overwrites its
/// replacement but keeps the position of its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    entries: Vec<(String, String)>,
    /// surface form -> position in `entries`
    index: HashMap<String, usize>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, original: &str, replacement: &str) {
        match self.index.get(original) {
            Some(&pos) => self.entries[pos].1 = replacement.to_string(),
            None => {
                self.index.insert(original.to_string(), self.entries.len());
                self.entries
                    .push((original.to_string(), replacement.to_string()));
            }
        }
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.index
            .get(original)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// One `original → replacement` line per entry, in trace order.
    pub fn lines(&self) -> Vec<String> {
        self.iter().map(|(k, v)| format!("{} → {}", k, v)).collect()
    }
}

/// Output of a single simplification pass. Derived, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplificationResult {
    pub simplified_text: String,
    pub trace: Trace,
    /// Percentage of input tokens substituted, 0.0..=100.0, one decimal place.
    pub confidence: f64,
    /// Number of whitespace-separated input tokens.
    pub token_count: usize,
}

impl SimplificationResult {
    pub fn empty() -> Self {
        Self {
            simplified_text: String::new(),
            trace: Trace::new(),
            confidence: 0.0,
            token_count: 0,
        }
    }

    /// Confidence as shown to the user: `0` with no tokens, otherwise one decimal.
    pub fn confidence_display(&self) -> String {
        if self.token_count == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.confidence)
        }
    }

    pub fn confidence_line(&self) -> String {
        format!("Simplification Confidence: {}%", self.confidence_display())
    }
}
