//! The fixed benchmark pattern registry
//!
//! Sources are kept verbatim so results stay comparable with other harnesses
//! run over the same corpus. Order is significant: reports follow it.

use crate::error::{HarnessError, Result};
use serde::Serialize;

/// A named pattern source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternEntry {
    pub name: &'static str,
    pub source: &'static str,
}

impl PatternEntry {
    pub const fn new(name: &'static str, source: &'static str) -> Self {
        Self { name, source }
    }
}

/// Benchmark patterns in report order
pub const PATTERN_REGISTRY: &[PatternEntry] = &[
    PatternEntry::new("literal_alt", r"error|warning|fatal|critical"),
    // Twelve alternatives, enough for multi-literal search paths.
    PatternEntry::new(
        "multi_literal",
        r"apple|banana|cherry|date|elderberry|fig|grape|honeydew|kiwi|lemon|mango|orange",
    ),
    // Not multi-line: only the very first corpus line can match.
    PatternEntry::new("anchored", r"^HTTP/[12]\.[01]"),
    PatternEntry::new("inner_literal", r".*@example\.com"),
    PatternEntry::new("suffix", r".*\.(txt|log|md)"),
    PatternEntry::new("char_class", r"[\w]+"),
    PatternEntry::new("email", r"[\w.+-]+@[\w.-]+\.[\w.-]+"),
    PatternEntry::new(
        "uri",
        r"[\w]+://[^/\s?#]+[^\s?#]+(?:\?[^\s#]*)?(?:#[^\s]*)?",
    ),
    PatternEntry::new("version", r"\d+\.\d+\.\d+"),
    PatternEntry::new(
        "ip",
        r"(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])",
    ),
];

/// Look up a registry entry by name
pub fn find(name: &str) -> Option<&'static PatternEntry> {
    PATTERN_REGISTRY.iter().find(|entry| entry.name == name)
}

/// Registry entries whose names appear in `names`, in registry order.
///
/// An empty filter selects the whole registry.
pub fn select<S: AsRef<str>>(names: &[S]) -> Result<Vec<&'static PatternEntry>> {
    if let Some(unknown) = names.iter().find(|n| find(n.as_ref()).is_none()) {
        return Err(HarnessError::UnknownPattern(unknown.as_ref().to_string()));
    }

    Ok(PATTERN_REGISTRY
        .iter()
        .filter(|entry| names.is_empty() || names.iter().any(|n| n.as_ref() == entry.name))
        .collect())
}
