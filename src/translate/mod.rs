pub mod interface;
pub mod mymemory;

pub use interface::{
    TranslateError, TranslateInterface, TranslateRequest, TranslationResult, ENGINE_SOURCE,
};
pub use mymemory::MyMemoryTranslator;
