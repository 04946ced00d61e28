//! Reference adapter over `regex-automata`'s PikeVM
//!
//! The PikeVM simulates the Thompson NFA directly with no prefilters and no
//! DFA, which makes it slow but a good oracle: its match spans should agree
//! with every optimized engine.

use crate::adapter::{CompiledPattern, EngineAdapter, Match};
use crate::error::CompileError;
use regex_automata::nfa::thompson::pikevm::PikeVM;

#[derive(Debug, Clone, Copy, Default)]
pub struct PikeVmEngine;

impl PikeVmEngine {
    pub const NAME: &'static str = "pikevm";
}

impl EngineAdapter for PikeVmEngine {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn label(&self) -> &'static str {
        "Rust regex-automata PikeVM"
    }

    fn compile(&self, source: &str) -> Result<Box<dyn CompiledPattern>, CompileError> {
        let vm = PikeVM::new(source).map_err(|e| CompileError::new(source, e))?;
        Ok(Box::new(CompiledPikeVm(vm)))
    }
}

struct CompiledPikeVm(PikeVM);

impl CompiledPattern for CompiledPikeVm {
    fn find_all_non_overlapping(&self, haystack: &[u8]) -> Vec<Match> {
        let mut cache = self.0.create_cache();
        self.0
            .find_iter(&mut cache, haystack)
            .map(|m| Match::new(m.start(), m.end()))
            .collect()
    }
}
