use crate::config::TaggerConfig;
use crate::error::Result;
use crate::grammar::{CardinalGrammar, DecimalGrammar, EnglishCardinal, EnglishDecimal};
use crate::lexicon::UnitLexicon;
use crate::measure::compound::unit_readings;
use crate::measure::dash::{dash_join, DashNumber, DashOrder};
use crate::measure::number::NumberEmbedding;
use crate::measure::sign::split_sign;
use crate::measure::types::{Branch, Candidate, GrammaticalNumber, Magnitude, MeasureAnnotation};
use crate::token::{add_tokens, Token};
use std::sync::Arc;

/// Collects the collaborators and builds the finalized grammar
pub struct GrammarComposer {
    lexicon: UnitLexicon,
    cardinal: Arc<dyn CardinalGrammar>,
    decimal: Arc<dyn DecimalGrammar>,
    deterministic: bool,
}

impl GrammarComposer {
    /// English numeric grammars, deterministic mode
    pub fn new(lexicon: UnitLexicon) -> Self {
        Self {
            lexicon,
            cardinal: Arc::new(EnglishCardinal),
            decimal: Arc::new(EnglishDecimal),
            deterministic: true,
        }
    }

    /// Lexicon, extra units and mode taken from a config
    pub fn from_config(config: &TaggerConfig) -> Result<Self> {
        let lexicon = match &config.lexicon {
            Some(path) => UnitLexicon::from_path(path)?,
            None => UnitLexicon::english()?,
        };
        let lexicon = lexicon.with_extra(
            config
                .extra_units
                .iter()
                .map(|(raw, name)| (raw.as_str(), name.as_str())),
        );
        Ok(Self::new(lexicon).deterministic(config.deterministic))
    }

    pub fn with_cardinal(mut self, cardinal: Arc<dyn CardinalGrammar>) -> Self {
        self.cardinal = cardinal;
        self
    }

    pub fn with_decimal(mut self, decimal: Arc<dyn DecimalGrammar>) -> Self {
        self.decimal = decimal;
        self
    }

    pub fn deterministic(mut self, deterministic: bool) -> Self {
        self.deterministic = deterministic;
        self
    }

    /// One-time build step; the result is immutable and shareable
    pub fn build(self) -> MeasureGrammar {
        // range phrasing only joins the cardinal domain when all readings are kept
        let numbers = NumberEmbedding::new(self.cardinal, self.decimal, !self.deterministic);

        tracing::debug!(
            "measure grammar finalized: {} units, {} branches, deterministic={}",
            self.lexicon.len(),
            Branch::PRIORITY.len(),
            self.deterministic
        );

        MeasureGrammar {
            lexicon: self.lexicon,
            numbers,
            deterministic: self.deterministic,
        }
    }
}

/// Finalized union of all measure branches
#[derive(Debug, Clone)]
pub struct MeasureGrammar {
    lexicon: UnitLexicon,
    numbers: NumberEmbedding,
    deterministic: bool,
}

impl MeasureGrammar {
    /// Bundled English lexicon and grammars
    pub fn english(deterministic: bool) -> Result<Self> {
        Ok(GrammarComposer::new(UnitLexicon::english()?)
            .deterministic(deterministic)
            .build())
    }

    pub fn is_deterministic(&self) -> bool {
        self.deterministic
    }

    pub fn lexicon(&self) -> &UnitLexicon {
        &self.lexicon
    }

    /// Every distinct reading of `input`, in branch priority order
    pub fn candidates(&self, input: &str) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = Vec::new();

        for branch in Branch::PRIORITY {
            for annotation in self.recognize(branch, input) {
                if candidates.iter().any(|c| c.annotation == annotation) {
                    continue;
                }
                candidates.push(Candidate { branch, annotation });
            }
        }

        candidates
    }

    /// Readings honoring the mode: at most one when deterministic
    pub fn classify(&self, input: &str) -> Vec<Candidate> {
        if self.deterministic {
            return self.first(input).into_iter().collect();
        }
        self.candidates(input)
    }

    /// The highest-priority reading
    pub fn annotate(&self, input: &str) -> Option<MeasureAnnotation> {
        self.first(input).map(|candidate| candidate.annotation)
    }

    /// Readings wrapped in the `measure { … }` envelope
    pub fn tag(&self, input: &str) -> Vec<Token<MeasureAnnotation>> {
        self.classify(input)
            .into_iter()
            .map(|candidate| add_tokens(candidate.annotation))
            .collect()
    }

    fn first(&self, input: &str) -> Option<Candidate> {
        Branch::PRIORITY.iter().find_map(|&branch| {
            self.recognize(branch, input)
                .into_iter()
                .next()
                .map(|annotation| Candidate { branch, annotation })
        })
    }

    fn recognize(&self, branch: Branch, input: &str) -> Vec<MeasureAnnotation> {
        let numbers = &self.numbers;
        match branch {
            Branch::PlainDecimal => self.plain(input, |s| numbers.decimal_with_number(s)),
            Branch::PlainCardinal => self.plain(input, |s| numbers.cardinal_with_number(s)),
            Branch::CardinalDashAlpha => {
                dash_join(numbers, input, DashNumber::Cardinal, DashOrder::NumberFirst)
                    .into_iter()
                    .collect()
            }
            Branch::AlphaDashCardinal => {
                dash_join(numbers, input, DashNumber::Cardinal, DashOrder::UnitFirst)
                    .into_iter()
                    .collect()
            }
            Branch::DecimalDashAlpha => {
                dash_join(numbers, input, DashNumber::Decimal, DashOrder::NumberFirst)
                    .into_iter()
                    .collect()
            }
            Branch::AlphaDashDecimal => {
                dash_join(numbers, input, DashNumber::Decimal, DashOrder::UnitFirst)
                    .into_iter()
                    .collect()
            }
        }
    }

    /// Optional sign, number, optional whitespace, units (with optional `/unit`)
    fn plain<F>(&self, input: &str, number: F) -> Vec<MeasureAnnotation>
    where
        F: Fn(&str) -> Option<(Magnitude, GrammaticalNumber)>,
    {
        let (negative, body) = split_sign(input);
        let mut annotations = Vec::new();

        for (split, _) in body.char_indices().skip(1) {
            let rest = body[split..].trim_start();
            if rest.is_empty() {
                continue;
            }
            let Some((magnitude, grammatical_number)) = number(&body[..split]) else {
                continue;
            };

            for units in unit_readings(&self.lexicon, rest, grammatical_number) {
                annotations.push(MeasureAnnotation {
                    negative,
                    magnitude: magnitude.clone(),
                    units,
                    preserve_order: false,
                });
            }
        }

        annotations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeasureGrammar>();
    }

    #[test]
    fn test_branch_priority_order() {
        let grammar = MeasureGrammar::english(false).unwrap();
        let candidates = grammar.candidates("12kg");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].branch, Branch::PlainCardinal);

        let candidates = grammar.candidates(".5kg");
        assert_eq!(candidates[0].branch, Branch::PlainDecimal);

        let candidates = grammar.candidates("ounce-5");
        assert_eq!(candidates[0].branch, Branch::AlphaDashCardinal);
    }

    #[test]
    fn test_from_config_applies_extra_units_and_mode() {
        let config = TaggerConfig::load_from_str(
            "deterministic = false\n[extra_units]\nst = \"stone\"\n",
        )
        .unwrap();
        let grammar = GrammarComposer::from_config(&config).unwrap().build();

        assert!(!grammar.is_deterministic());
        let annotation = grammar.annotate("12st").unwrap();
        assert_eq!(annotation.units, "stones");
    }

    #[test]
    fn test_from_config_missing_lexicon_is_fatal() {
        let config = TaggerConfig {
            lexicon: Some("/nonexistent/units.tsv".into()),
            ..TaggerConfig::default()
        };
        assert!(GrammarComposer::from_config(&config).is_err());
    }
}
