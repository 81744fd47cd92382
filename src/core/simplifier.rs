// File: src/core/simplifier.rs
use crate::core::types::{Glossary, SimplificationResult, Trace};

/// Characters stripped from both ends of a token before lookup.
const STRIP_CHARS: [char; 4] = [',', '.', '(', ')'];

/// Token separator: Unicode whitespace plus the ASCII information
/// separators U+001C..=U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Splits `text` into non-empty tokens on `is_separator`.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(is_separator).filter(|t| !t.is_empty()).collect()
}

/// Derives the glossary key for a raw token: lowercased, with `STRIP_CHARS`
/// trimmed from the edges only.
pub fn lookup_key(token: &str) -> String {
    token.to_lowercase().trim_matches(&STRIP_CHARS[..]).to_string()
}

/// Single-pass dictionary substitution over whitespace-split tokens.
///
/// Each token whose key has a non-empty definition is replaced by that
/// definition and recorded in the trace under its original surface form.
/// Confidence is the share of tokens replaced, so a token repeated three
/// times counts three times even though it occupies one trace entry.
/// Pure: the glossary is only read.
pub fn simplify(text: &str, glossary: &Glossary) -> SimplificationResult {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return SimplificationResult::empty();
    }

    let mut emitted = Vec::with_capacity(tokens.len());
    let mut trace = Trace::new();
    let mut substitutions = 0usize;

    for &token in &tokens {
        match glossary.get(&lookup_key(token)) {
            Some(definition) if !definition.is_empty() => {
                trace.record(token, definition);
                emitted.push(definition);
                substitutions += 1;
            }
            _ => emitted.push(token),
        }
    }

    SimplificationResult {
        simplified_text: emitted.join(" "),
        trace,
        confidence: confidence(substitutions, tokens.len()),
        token_count: tokens.len(),
    }
}

/// `substitutions / total * 100` rounded to one decimal place.
///
/// Rounding goes through correctly-rounded decimal formatting so the exact
/// binary value decides the digit (ties to even), not an intermediate `x * 10`.
pub fn confidence(substitutions: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = substitutions as f64 / total as f64 * 100.0;
    format!("{:.1}", percent).parse().unwrap_or(0.0)
}

#[cfg(test)]
#[path = "simplifier_test.rs"]
mod tests;
