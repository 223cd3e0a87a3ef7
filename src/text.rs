use crate::config::TaggerConfig;
use crate::error::Result;
use crate::measure::{Candidate, GrammarComposer, MeasureGrammar};
use crate::token::add_tokens;
use serde::Serialize;

/// Punctuation peeled off a window before matching
const LEADING_PUNCTUATION: &[char] = &['(', '[', '"', '\''];
const TRAILING_PUNCTUATION: &[char] = &[',', ';', ':', '!', '?', '.', ')', ']', '"', '\''];

/// A piece of scanned text
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Text left as-is
    Text { text: String },
    /// A recognized measure; byte offsets into the input
    Measure {
        surface: String,
        start: usize,
        end: usize,
        readings: Vec<Candidate>,
    },
}

/// Finds measures in running text
#[derive(Debug, Clone)]
pub struct TextTagger {
    grammar: MeasureGrammar,
    max_window: usize,
}

impl TextTagger {
    pub fn new(grammar: MeasureGrammar, max_window: usize) -> Self {
        Self {
            grammar,
            max_window: max_window.max(1),
        }
    }

    pub fn from_config(config: &TaggerConfig) -> Result<Self> {
        let grammar = GrammarComposer::from_config(config)?.build();
        Ok(Self::new(grammar, config.max_window))
    }

    pub fn grammar(&self) -> &MeasureGrammar {
        &self.grammar
    }

    /// Split `text` into plain and measure segments.
    /// Longer windows of words win over shorter ones.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let words = word_spans(text);
        let mut segments = Vec::new();
        let mut cursor = 0;
        let mut i = 0;

        while i < words.len() {
            let widest = self.max_window.min(words.len() - i);
            let found = (1..=widest).rev().find_map(|width| {
                let window = &text[words[i].0..words[i + width - 1].1];
                let inner = window.trim_start_matches(LEADING_PUNCTUATION);
                let start = words[i].0 + (window.len() - inner.len());
                let surface = inner.trim_end_matches(TRAILING_PUNCTUATION);
                if surface.is_empty() {
                    return None;
                }

                let readings = self.grammar.classify(surface);
                if readings.is_empty() {
                    None
                } else {
                    Some((width, start, surface, readings))
                }
            });

            match found {
                Some((width, start, surface, readings)) => {
                    if start > cursor {
                        segments.push(Segment::Text {
                            text: text[cursor..start].to_string(),
                        });
                    }
                    let end = start + surface.len();
                    tracing::trace!("measure {:?} at {}..{}", surface, start, end);
                    segments.push(Segment::Measure {
                        surface: surface.to_string(),
                        start,
                        end,
                        readings,
                    });
                    cursor = end;
                    i += width;
                }
                None => i += 1,
            }
        }

        if cursor < text.len() {
            segments.push(Segment::Text {
                text: text[cursor..].to_string(),
            });
        }

        segments
    }

    /// Text with each measure replaced by its top reading in the
    /// `tokens { measure { … } }` envelope
    pub fn render(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for segment in self.segments(text) {
            match segment {
                Segment::Text { text } => out.push_str(&text),
                Segment::Measure { readings, .. } => {
                    if let Some(candidate) = readings.into_iter().next() {
                        out.push_str(&add_tokens(candidate.annotation).into_tokens().to_string());
                    }
                }
            }
        }
        out
    }
}

/// Byte ranges of whitespace-separated words
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;

    for (idx, ch) in text.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                spans.push((s, idx));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }

    spans
}
