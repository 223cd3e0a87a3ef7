use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a tagger. Matching itself never fails.
#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("failed to read lexicon {path}: {source}")]
    LexiconIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexicon entry at line {line}: {content:?}")]
    MalformedLexicon { line: usize, content: String },

    #[error("lexicon contains no unit entries")]
    EmptyLexicon,

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, MeasureError>;
