use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Irregular plurals, checked before any suffix rule
    static ref SUPPLETIVE: HashMap<&'static str, &'static str> = HashMap::from([
        ("foot", "feet"),
        ("tooth", "teeth"),
        ("man", "men"),
        ("woman", "women"),
        ("child", "children"),
        ("person", "people"),
        ("mouse", "mice"),
        ("deer", "deer"),
        ("sheep", "sheep"),
        ("fish", "fish"),
        ("series", "series"),
        ("species", "species"),
    ]);
}

/// Word endings that never take a plural marker
const INVARIANT_ENDINGS: &[&str] = &[
    "hertz",
    "celsius",
    "fahrenheit",
    "horsepower",
    "hundredweight",
    "percent",
    "lux",
];

/// Derive the plural of a normalized unit name.
///
/// Multi-word names inflect their head: the part before " per " when
/// present, the first word when the last word is invariant
/// ("degree Celsius" -> "degrees Celsius"), otherwise the last word.
pub fn pluralize(name: &str) -> String {
    if let Some(plural) = SUPPLETIVE.get(name) {
        return plural.to_string();
    }

    if let Some(idx) = name.find(" per ") {
        let (head, tail) = name.split_at(idx);
        return format!("{}{}", pluralize(head), tail);
    }

    match name.rsplit_once(' ') {
        Some((rest, last)) if is_invariant(last) => match rest.split_once(' ') {
            Some((first, middle)) => format!("{} {} {}", pluralize_word(first), middle, last),
            None => format!("{} {}", pluralize_word(rest), last),
        },
        Some((rest, last)) => format!("{} {}", rest, pluralize_word(last)),
        None => pluralize_word(name),
    }
}

fn is_invariant(word: &str) -> bool {
    let lower = word.to_lowercase();
    INVARIANT_ENDINGS.iter().any(|ending| lower.ends_with(ending))
}

fn pluralize_word(word: &str) -> String {
    if let Some(plural) = SUPPLETIVE.get(word.to_lowercase().as_str()) {
        return plural.to_string();
    }
    if word.is_empty() || is_invariant(word) {
        return word.to_string();
    }

    let lower = word.to_lowercase();
    let mut chars = lower.chars().rev();
    let last = chars.next();
    let before_last = chars.next();

    if last == Some('y') && before_last.map_or(false, is_consonant) {
        return format!("{}ies", &word[..word.len() - 1]);
    }

    let sibilant = ["s", "sh", "ch", "x", "z"]
        .iter()
        .any(|ending| lower.ends_with(ending));
    if sibilant {
        format!("{}es", word)
    } else {
        format!("{}s", word)
    }
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
