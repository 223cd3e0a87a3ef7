use crate::grammar::{CardinalGrammar, DecimalGrammar, DecimalValue};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Plain or comma-grouped integer without leading zeros
    /// Examples: "0", "12", "1200", "1,200,000"
    static ref CARDINAL_PATTERN: Regex =
        Regex::new(r"^(?:0|[1-9][0-9]{0,2}(?:,[0-9]{3})+|[1-9][0-9]*)$").unwrap();

    /// Two cardinals joined by a dash: "5-10"
    static ref RANGE_PATTERN: Regex = Regex::new(r"^([0-9][0-9,]*)-([0-9][0-9,]*)$").unwrap();

    /// Optional integer part, optional fraction, optional scale word
    /// Examples: ".5", "12.05", "1.5 million", "3 billion"
    static ref DECIMAL_PATTERN: Regex = Regex::new(
        r"^(?P<int>0|[1-9][0-9]{0,2}(?:,[0-9]{3})+|[1-9][0-9]*)?(?:\.(?P<frac>[0-9]+))?(?: (?P<qty>thousand|million|billion|trillion))?$"
    ).unwrap();
}

const ONES: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];
const TENS: &[&str] = &[
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
const SCALE: &[&str] = &["", "thousand", "million", "billion", "trillion"];

/// Largest integer the cardinal grammar spells out
const MAX_CARDINAL: u64 = 999_999_999_999_999;

fn three_digits_to_words(n: u64) -> Vec<&'static str> {
    let mut words = Vec::new();
    let hundreds = n / 100;
    let remainder = n % 100;

    if hundreds > 0 {
        words.push(ONES[hundreds as usize]);
        words.push("hundred");
    }
    if remainder >= 20 {
        words.push(TENS[(remainder / 10) as usize]);
        if remainder % 10 > 0 {
            words.push(ONES[(remainder % 10) as usize]);
        }
    } else if remainder > 0 {
        words.push(ONES[remainder as usize]);
    }
    words
}

/// Spell out a non-negative integer: 123 -> "one hundred twenty three"
pub fn number_to_words(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut chunks = Vec::new();
    let mut remaining = n;
    for scale in SCALE {
        let chunk = remaining % 1000;
        if chunk > 0 {
            let mut words = three_digits_to_words(chunk);
            if !scale.is_empty() {
                words.push(*scale);
            }
            chunks.push(words.join(" "));
        }
        remaining /= 1000;
        if remaining == 0 {
            break;
        }
    }
    chunks.reverse();
    chunks.join(" ")
}

fn parse_integer(surface: &str) -> Option<u64> {
    let digits: String = surface.chars().filter(|c| *c != ',').collect();
    digits.parse::<u64>().ok().filter(|n| *n <= MAX_CARDINAL)
}

fn digit_word(c: char) -> Option<&'static str> {
    c.to_digit(10).map(|d| ONES[d as usize])
}

/// English integer grammar
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCardinal;

impl CardinalGrammar for EnglishCardinal {
    fn verbalize(&self, surface: &str) -> Option<String> {
        if !CARDINAL_PATTERN.is_match(surface) {
            return None;
        }
        parse_integer(surface).map(number_to_words)
    }

    fn verbalize_range(&self, surface: &str) -> Option<String> {
        let caps = RANGE_PATTERN.captures(surface)?;
        let from = self.verbalize(caps.get(1)?.as_str())?;
        let to = self.verbalize(caps.get(2)?.as_str())?;
        Some(format!("{} to {}", from, to))
    }
}

/// English decimal grammar; fractional digits are read one by one
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishDecimal;

impl DecimalGrammar for EnglishDecimal {
    fn verbalize(&self, surface: &str) -> Option<DecimalValue> {
        let caps = DECIMAL_PATTERN.captures(surface)?;
        let integer = caps.name("int");
        let fraction = caps.name("frac");
        let quantity = caps.name("qty");

        // a bare integer is a cardinal, not a decimal
        if fraction.is_none() && (integer.is_none() || quantity.is_none()) {
            return None;
        }

        let integer_part = match integer {
            Some(m) => Some(number_to_words(parse_integer(m.as_str())?)),
            None => None,
        };
        let fractional_part = fraction.map(|m| {
            m.as_str()
                .chars()
                .filter_map(digit_word)
                .collect::<Vec<_>>()
                .join(" ")
        });

        Some(DecimalValue {
            integer_part,
            fractional_part,
            quantity: quantity.map(|m| m.as_str().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_words() {
        assert_eq!(number_to_words(0), "zero");
        assert_eq!(number_to_words(12), "twelve");
        assert_eq!(number_to_words(40), "forty");
        assert_eq!(number_to_words(123), "one hundred twenty three");
        assert_eq!(number_to_words(2005), "two thousand five");
        assert_eq!(
            number_to_words(1_000_001),
            "one million one"
        );
    }

    #[test]
    fn test_cardinal_surface_forms() {
        let cardinal = EnglishCardinal;
        assert_eq!(cardinal.verbalize("1").as_deref(), Some("one"));
        assert_eq!(cardinal.verbalize("1,200").as_deref(), Some("one thousand two hundred"));
        assert_eq!(cardinal.verbalize("012"), None);
        assert_eq!(cardinal.verbalize("1,20"), None);
        assert_eq!(cardinal.verbalize("-5"), None);
        assert_eq!(cardinal.verbalize("5 "), None);
        assert_eq!(cardinal.verbalize("1000000000000000"), None);
    }

    #[test]
    fn test_cardinal_range() {
        let cardinal = EnglishCardinal;
        assert_eq!(cardinal.verbalize_range("5-10").as_deref(), Some("five to ten"));
        assert_eq!(cardinal.verbalize_range("5-"), None);
        assert_eq!(cardinal.verbalize_range("5"), None);
    }

    #[test]
    fn test_decimal_parts() {
        let decimal = EnglishDecimal;

        let half = decimal.verbalize(".5").unwrap();
        assert_eq!(half.integer_part, None);
        assert_eq!(half.fractional_part.as_deref(), Some("five"));

        let value = decimal.verbalize("12.05").unwrap();
        assert_eq!(value.integer_part.as_deref(), Some("twelve"));
        assert_eq!(value.fractional_part.as_deref(), Some("zero five"));

        let scaled = decimal.verbalize("1.5 million").unwrap();
        assert_eq!(scaled.quantity.as_deref(), Some("million"));

        let whole = decimal.verbalize("3 billion").unwrap();
        assert_eq!(whole.integer_part.as_deref(), Some("three"));
        assert_eq!(whole.fractional_part, None);
    }

    #[test]
    fn test_decimal_rejects_integers() {
        let decimal = EnglishDecimal;
        assert!(decimal.verbalize("12").is_none());
        assert!(decimal.verbalize("12.").is_none());
        assert!(decimal.verbalize("").is_none());
        assert!(decimal.verbalize("million").is_none());
    }
}
