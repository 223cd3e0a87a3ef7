use crate::grammar::{CardinalGrammar, CardinalValue, DecimalGrammar};
use crate::measure::types::{GrammaticalNumber, Magnitude};
use std::sync::Arc;

/// The only surface form that selects a singular unit
const SINGULAR_SURFACE: &str = "1";
const SINGULAR_WORD: &str = "one";

/// Wraps the injected numeric grammars and decides unit number
#[derive(Clone)]
pub struct NumberEmbedding {
    cardinal: Arc<dyn CardinalGrammar>,
    decimal: Arc<dyn DecimalGrammar>,
    with_ranges: bool,
}

impl NumberEmbedding {
    /// `with_ranges` extends the cardinal domain with range phrasing
    pub fn new(
        cardinal: Arc<dyn CardinalGrammar>,
        decimal: Arc<dyn DecimalGrammar>,
        with_ranges: bool,
    ) -> Self {
        Self {
            cardinal,
            decimal,
            with_ranges,
        }
    }

    /// Full cardinal graph, "1" included
    pub fn cardinal(&self, surface: &str) -> Option<Magnitude> {
        self.cardinal
            .verbalize(surface)
            .or_else(|| {
                if self.with_ranges {
                    self.cardinal.verbalize_range(surface)
                } else {
                    None
                }
            })
            .map(|integer| Magnitude::Cardinal(CardinalValue { integer }))
    }

    /// Cardinal with the unit number it selects.
    /// "1" is carved out of the grammar and always reads "one" + singular.
    pub fn cardinal_with_number(&self, surface: &str) -> Option<(Magnitude, GrammaticalNumber)> {
        if surface == SINGULAR_SURFACE {
            let one = Magnitude::Cardinal(CardinalValue {
                integer: SINGULAR_WORD.to_string(),
            });
            return Some((one, GrammaticalNumber::Singular));
        }
        self.cardinal(surface)
            .map(|magnitude| (magnitude, GrammaticalNumber::Plural))
    }

    pub fn decimal(&self, surface: &str) -> Option<Magnitude> {
        self.decimal.verbalize(surface).map(Magnitude::Decimal)
    }

    /// Decimals never select the singular form
    pub fn decimal_with_number(&self, surface: &str) -> Option<(Magnitude, GrammaticalNumber)> {
        self.decimal(surface)
            .map(|magnitude| (magnitude, GrammaticalNumber::Plural))
    }
}

impl std::fmt::Debug for NumberEmbedding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumberEmbedding")
            .field("with_ranges", &self.with_ranges)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{EnglishCardinal, EnglishDecimal};

    fn embedding(with_ranges: bool) -> NumberEmbedding {
        NumberEmbedding::new(Arc::new(EnglishCardinal), Arc::new(EnglishDecimal), with_ranges)
    }

    fn integer(magnitude: &Magnitude) -> &str {
        match magnitude {
            Magnitude::Cardinal(value) => &value.integer,
            _ => panic!("Expected cardinal"),
        }
    }

    #[test]
    fn test_one_is_singular() {
        let (magnitude, number) = embedding(false).cardinal_with_number("1").unwrap();
        assert_eq!(integer(&magnitude), "one");
        assert_eq!(number, GrammaticalNumber::Singular);
    }

    #[test]
    fn test_other_cardinals_are_plural() {
        let numbers = embedding(false);
        for (surface, words) in [("0", "zero"), ("12", "twelve"), ("21", "twenty one")] {
            let (magnitude, number) = numbers.cardinal_with_number(surface).unwrap();
            assert_eq!(integer(&magnitude), words);
            assert_eq!(number, GrammaticalNumber::Plural);
        }
    }

    #[test]
    fn test_decimals_are_plural() {
        let (magnitude, number) = embedding(false).decimal_with_number("1.0").unwrap();
        assert!(matches!(magnitude, Magnitude::Decimal(_)));
        assert_eq!(number, GrammaticalNumber::Plural);
    }

    #[test]
    fn test_ranges_only_when_enabled() {
        assert!(embedding(false).cardinal("5-10").is_none());
        let magnitude = embedding(true).cardinal("5-10").unwrap();
        assert_eq!(integer(&magnitude), "five to ten");
    }
}
