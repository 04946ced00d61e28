//! Adapter for the `regex` crate's byte-oriented matcher

use crate::adapter::{CompiledPattern, EngineAdapter, Match};
use crate::error::CompileError;
use ::regex::bytes::Regex;

/// The `regex` crate, with all of its literal and DFA optimizations
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEngine;

impl RegexEngine {
    pub const NAME: &'static str = "regex";
}

impl EngineAdapter for RegexEngine {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn label(&self) -> &'static str {
        "Rust regex"
    }

    fn compile(&self, source: &str) -> Result<Box<dyn CompiledPattern>, CompileError> {
        let re = Regex::new(source).map_err(|e| CompileError::new(source, e))?;
        Ok(Box::new(CompiledRegex(re)))
    }
}

struct CompiledRegex(Regex);

impl CompiledPattern for CompiledRegex {
    fn find_all_non_overlapping(&self, haystack: &[u8]) -> Vec<Match> {
        self.0
            .find_iter(haystack)
            .map(|m| Match::new(m.start(), m.end()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_non_overlapping_spans() {
        let re = RegexEngine.compile("a+").unwrap();
        let matches = re.find_all_non_overlapping(b"aa b aaa");
        assert_eq!(matches, vec![Match::new(0, 2), Match::new(5, 8)]);
    }

    #[test]
    fn test_compile_error() {
        let err = RegexEngine.compile("(unclosed").err().unwrap();
        assert_eq!(err.pattern, "(unclosed");
        assert!(!err.reason.is_empty());
    }

    #[test]
    fn test_anchor_is_haystack_start() {
        let re = RegexEngine.compile("^HTTP").unwrap();
        assert_eq!(re.find_all_non_overlapping(b"HTTP x\nHTTP y\n").len(), 1);
    }
}
