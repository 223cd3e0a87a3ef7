pub mod config;
pub mod error;
pub mod grammar;
pub mod lexicon;
pub mod measure;
pub mod text;
pub mod token;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::TaggerConfig;
pub use error::{MeasureError, Result};
pub use measure::{Branch, Candidate, GrammarComposer, Magnitude, MeasureAnnotation, MeasureGrammar};
pub use text::{Segment, TextTagger};
