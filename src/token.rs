// Token envelopes shared with the rest of the normalization pipeline:
//   measure { <fields> }
//   tokens { measure { <fields> } }

use std::fmt;

/// Class name of the measure token
pub const MEASURE: &str = "measure";

/// Outermost wrapper around each classified token
pub const TOKENS: &str = "tokens";

/// A named, brace-delimited token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<T> {
    pub name: &'static str,
    pub body: T,
}

impl<T: fmt::Display> Token<T> {
    pub fn new(name: &'static str, body: T) -> Self {
        Self { name, body }
    }

    /// Wrap in the outer `tokens { … }` envelope
    pub fn into_tokens(self) -> Token<Token<T>> {
        Token::new(TOKENS, self)
    }
}

impl<T: fmt::Display> fmt::Display for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ {} }}", self.name, self.body)
    }
}

/// `measure { … }` around an annotation body
pub fn add_tokens<T: fmt::Display>(body: T) -> Token<T> {
    Token::new(MEASURE, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelopes() {
        let token = add_tokens("units: \"kilograms\"");
        assert_eq!(token.to_string(), "measure { units: \"kilograms\" }");
        assert_eq!(
            token.into_tokens().to_string(),
            "tokens { measure { units: \"kilograms\" } }"
        );
    }
}
