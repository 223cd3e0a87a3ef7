use crate::lexicon::{UnitLexicon, NON_BREAKING_SPACE};
use crate::measure::types::GrammaticalNumber;

/// Marker introducing the denominator of a compound unit
pub const DIVISION_MARKER: char = '/';

/// Word the division marker is rewritten to
pub const PER: &str = "per";

/// Rewrite `/ unit` into `per unit`. The denominator is always singular.
pub fn per_unit(lexicon: &UnitLexicon, suffix: &str) -> Option<String> {
    let unit = suffix.strip_prefix(DIVISION_MARKER)?.trim_start();
    let singular = lexicon.singular(unit)?;
    Some(format!("{}{}{}", PER, NON_BREAKING_SPACE, singular))
}

fn primary_unit<'a>(
    lexicon: &'a UnitLexicon,
    raw: &str,
    number: GrammaticalNumber,
) -> Option<&'a str> {
    match number {
        GrammaticalNumber::Singular => lexicon.singular(raw),
        GrammaticalNumber::Plural => lexicon.plural(raw),
    }
}

/// Every reading of `rest` as a units field: a lexicon unit, a unit
/// followed by one `/unit` suffix, or a bare `/unit` suffix.
/// `rest` must already have its leading whitespace removed.
pub fn unit_readings(lexicon: &UnitLexicon, rest: &str, number: GrammaticalNumber) -> Vec<String> {
    let mut readings = Vec::new();

    if let Some(unit) = primary_unit(lexicon, rest, number) {
        readings.push(unit.to_string());
    }

    for (idx, _) in rest.match_indices(DIVISION_MARKER) {
        let Some(per) = per_unit(lexicon, &rest[idx..]) else {
            continue;
        };

        let head = rest[..idx].trim_end();
        let reading = if head.is_empty() {
            per
        } else {
            match primary_unit(lexicon, head, number) {
                Some(unit) => format!("{}{}{}", unit, NON_BREAKING_SPACE, per),
                None => continue,
            }
        };

        if !readings.contains(&reading) {
            readings.push(reading);
        }
    }

    readings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> UnitLexicon {
        UnitLexicon::from_tsv_str("mi\tmile\nmiles\tmile\nhour\thour\nh\thour\nkm/h\tkilometer per hour\nkm\tkilometer\n")
            .unwrap()
    }

    #[test]
    fn test_per_unit() {
        let lexicon = lexicon();
        assert_eq!(per_unit(&lexicon, "/hour").as_deref(), Some("per\u{a0}hour"));
        assert_eq!(per_unit(&lexicon, "/  h").as_deref(), Some("per\u{a0}hour"));
        assert_eq!(per_unit(&lexicon, "hour"), None);
        assert_eq!(per_unit(&lexicon, "/fortnight"), None);
    }

    #[test]
    fn test_compound_suffix_collapses_whitespace() {
        let lexicon = lexicon();
        let readings = unit_readings(&lexicon, "miles / hour", GrammaticalNumber::Plural);
        assert_eq!(readings, vec!["miles\u{a0}per\u{a0}hour".to_string()]);
    }

    #[test]
    fn test_compound_denominator_stays_singular() {
        let lexicon = lexicon();
        let readings = unit_readings(&lexicon, "mi/h", GrammaticalNumber::Singular);
        assert_eq!(readings, vec!["mile\u{a0}per\u{a0}hour".to_string()]);
    }

    #[test]
    fn test_bare_compound_suffix() {
        let lexicon = lexicon();
        let readings = unit_readings(&lexicon, "/hour", GrammaticalNumber::Plural);
        assert_eq!(readings, vec!["per\u{a0}hour".to_string()]);
    }

    #[test]
    fn test_lexicon_spelling_with_slash_is_deduplicated() {
        let lexicon = lexicon();
        let readings = unit_readings(&lexicon, "km/h", GrammaticalNumber::Plural);
        assert_eq!(
            readings,
            vec!["kilometers\u{a0}per\u{a0}hour".to_string()]
        );
    }

    #[test]
    fn test_unknown_units_have_no_reading() {
        let lexicon = lexicon();
        assert!(unit_readings(&lexicon, "parsecs", GrammaticalNumber::Plural).is_empty());
        assert!(unit_readings(&lexicon, "miles/", GrammaticalNumber::Plural).is_empty());
        assert!(unit_readings(&lexicon, "", GrammaticalNumber::Plural).is_empty());
    }
}
