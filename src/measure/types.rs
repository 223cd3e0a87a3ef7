use crate::grammar::{CardinalValue, DecimalValue};
use serde::Serialize;
use std::fmt;

/// Numeric part of a measure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Magnitude {
    Cardinal(CardinalValue),
    Decimal(DecimalValue),
}

/// Whether the unit takes its singular or plural form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammaticalNumber {
    Singular,
    Plural,
}

/// Alternative shapes a measure can take, in union priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    PlainDecimal,
    PlainCardinal,
    CardinalDashAlpha,
    AlphaDashCardinal,
    DecimalDashAlpha,
    AlphaDashDecimal,
}

impl Branch {
    pub const PRIORITY: [Branch; 6] = [
        Branch::PlainDecimal,
        Branch::PlainCardinal,
        Branch::CardinalDashAlpha,
        Branch::AlphaDashCardinal,
        Branch::DecimalDashAlpha,
        Branch::AlphaDashDecimal,
    ];
}

/// Structured measure annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasureAnnotation {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub negative: bool,
    pub magnitude: Magnitude,
    pub units: String,
    /// Units render before the number
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub preserve_order: bool,
}

/// One matching branch and what it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub branch: Branch,
    pub annotation: MeasureAnnotation,
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Cardinal(value) => write!(f, "cardinal {{ integer: \"{}\" }}", value.integer),
            Magnitude::Decimal(value) => {
                write!(f, "decimal {{ ")?;
                if let Some(integer) = &value.integer_part {
                    write!(f, "integer_part: \"{}\" ", integer)?;
                }
                if let Some(fraction) = &value.fractional_part {
                    write!(f, "fractional_part: \"{}\" ", fraction)?;
                }
                if let Some(quantity) = &value.quantity {
                    write!(f, "quantity: \"{}\" ", quantity)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Field list without the surrounding `measure { }` envelope
impl fmt::Display for MeasureAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "negative: \"true\" ")?;
        }
        if self.preserve_order {
            write!(
                f,
                "units: \"{}\" {} preserve_order: true",
                self.units, self.magnitude
            )
        } else {
            write!(f, "{} units: \"{}\"", self.magnitude, self.units)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cardinal(words: &str) -> Magnitude {
        Magnitude::Cardinal(CardinalValue {
            integer: words.to_string(),
        })
    }

    #[test]
    fn test_display_natural_order() {
        let annotation = MeasureAnnotation {
            negative: true,
            magnitude: cardinal("twelve"),
            units: "kilograms".to_string(),
            preserve_order: false,
        };
        assert_eq!(
            annotation.to_string(),
            "negative: \"true\" cardinal { integer: \"twelve\" } units: \"kilograms\""
        );
    }

    #[test]
    fn test_display_preserved_order() {
        let annotation = MeasureAnnotation {
            negative: false,
            magnitude: cardinal("five"),
            units: "ounce".to_string(),
            preserve_order: true,
        };
        assert_eq!(
            annotation.to_string(),
            "units: \"ounce\" cardinal { integer: \"five\" } preserve_order: true"
        );
    }

    #[test]
    fn test_display_decimal_fields() {
        let magnitude = Magnitude::Decimal(DecimalValue {
            integer_part: Some("one".to_string()),
            fractional_part: Some("five".to_string()),
            quantity: Some("million".to_string()),
        });
        assert_eq!(
            magnitude.to_string(),
            "decimal { integer_part: \"one\" fractional_part: \"five\" quantity: \"million\" }"
        );
    }

    #[test]
    fn test_serialize_omits_false_flags() {
        let annotation = MeasureAnnotation {
            negative: false,
            magnitude: cardinal("one"),
            units: "kilogram".to_string(),
            preserve_order: false,
        };
        let json = serde_json::to_value(&annotation).unwrap();
        assert!(json.get("negative").is_none());
        assert!(json.get("preserve_order").is_none());
        assert_eq!(json["magnitude"]["cardinal"]["integer"], "one");
        assert_eq!(json["units"], "kilogram");
    }
}
