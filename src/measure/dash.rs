// Unit and number joined by a dash with no whitespace: "5-ounce", "ounce-5".
// Units here are taken verbatim, no lexicon lookup and no sign.

use crate::measure::number::NumberEmbedding;
use crate::measure::types::{Magnitude, MeasureAnnotation};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Number then dash then letters: "5-ounce", "2.5-inch"
    static ref NUMBER_DASH_ALPHA: Regex =
        Regex::new(r"^(?P<number>\S+)-(?P<alpha>[A-Za-z]+)$").unwrap();

    /// Letters then dash then number: "ounce-5", "size-2.5"
    static ref ALPHA_DASH_NUMBER: Regex =
        Regex::new(r"^(?P<alpha>[A-Za-z]+)-(?P<number>\S+)$").unwrap();
}

/// Which side of the dash carries the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashOrder {
    NumberFirst,
    UnitFirst,
}

/// Which numeric grammar reads the number side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashNumber {
    Cardinal,
    Decimal,
}

fn split<'a>(input: &'a str, order: DashOrder) -> Option<(&'a str, &'a str)> {
    let caps = match order {
        DashOrder::NumberFirst => NUMBER_DASH_ALPHA.captures(input)?,
        DashOrder::UnitFirst => ALPHA_DASH_NUMBER.captures(input)?,
    };
    let number = caps.name("number")?.as_str();
    let alpha = caps.name("alpha")?.as_str();
    Some((number, alpha))
}

/// Recognize one of the four dash-joined shapes
pub fn dash_join(
    numbers: &NumberEmbedding,
    input: &str,
    kind: DashNumber,
    order: DashOrder,
) -> Option<MeasureAnnotation> {
    let (surface, alpha) = split(input, order)?;

    let magnitude: Magnitude = match kind {
        DashNumber::Cardinal => numbers.cardinal(surface)?,
        DashNumber::Decimal => numbers.decimal(surface)?,
    };

    Some(MeasureAnnotation {
        negative: false,
        magnitude,
        units: alpha.to_string(),
        preserve_order: order == DashOrder::UnitFirst,
    })
}
