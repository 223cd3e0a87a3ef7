// Numeric grammars consumed by the measure rules.
// The rules only see these traits; any spelling scheme can be plugged in.

pub mod english;

pub use english::{EnglishCardinal, EnglishDecimal};

use serde::Serialize;

/// Spelled-out integer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardinalValue {
    pub integer: String,
}

/// Spelled-out decimal; every part is optional
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DecimalValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integer_part: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fractional_part: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

/// Maps an integer surface span (no sign) to words
pub trait CardinalGrammar: Send + Sync {
    /// Words for the whole span, or `None` when it is not a cardinal
    fn verbalize(&self, surface: &str) -> Option<String>;

    /// Range phrasing such as "5-10" -> "five to ten"
    fn verbalize_range(&self, _surface: &str) -> Option<String> {
        None
    }
}

/// Maps a decimal surface span (no sign) to its parts
pub trait DecimalGrammar: Send + Sync {
    fn verbalize(&self, surface: &str) -> Option<DecimalValue>;
}
