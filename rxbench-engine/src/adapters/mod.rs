//! Bundled engine adapters

pub mod pikevm;
pub mod regex;

pub use self::pikevm::PikeVmEngine;
pub use self::regex::RegexEngine;

use crate::adapter::EngineAdapter;

/// Names accepted by [`by_name`]
pub const ENGINE_NAMES: &[&str] = &[RegexEngine::NAME, PikeVmEngine::NAME];

/// Look up a bundled adapter by its short name
pub fn by_name(name: &str) -> Option<Box<dyn EngineAdapter>> {
    match name {
        RegexEngine::NAME => Some(Box::new(RegexEngine)),
        PikeVmEngine::NAME => Some(Box::new(PikeVmEngine)),
        _ => None,
    }
}
