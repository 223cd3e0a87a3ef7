use crate::error::{MeasureError, Result};
use crate::lexicon::plural::pluralize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Separator carried inside multi-word unit names so they stay one token
pub const NON_BREAKING_SPACE: char = '\u{00A0}';

/// Bundled English unit table
const ENGLISH_MEASUREMENTS: &str = include_str!("../../data/measurements.tsv");

/// One unit spelling and its normalized forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitEntry {
    pub raw_spelling: String,
    pub normalized_name: String,
    pub plural_name: String,
    singular_joined: String,
    plural_joined: String,
}

impl UnitEntry {
    pub fn new(raw_spelling: &str, normalized_name: &str) -> Self {
        let plural_name = pluralize(normalized_name);
        Self {
            raw_spelling: raw_spelling.to_string(),
            normalized_name: normalized_name.to_string(),
            singular_joined: convert_space(normalized_name),
            plural_joined: convert_space(&plural_name),
            plural_name,
        }
    }
}

/// Replace every ASCII space with a non-breaking space
pub fn convert_space(name: &str) -> String {
    name.replace(' ', &NON_BREAKING_SPACE.to_string())
}

/// Static raw-spelling -> unit name lookup, built once
#[derive(Debug, Clone, Default)]
pub struct UnitLexicon {
    entries: Vec<UnitEntry>,
    index: HashMap<String, usize>,
}

impl UnitLexicon {
    /// Lexicon built from the bundled English table
    pub fn english() -> Result<Self> {
        Self::from_tsv_str(ENGLISH_MEASUREMENTS)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| MeasureError::LexiconIo {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loading unit lexicon from {}", path.display());
        Self::from_tsv_str(&content)
    }

    /// Parse `raw_spelling \t normalized_name` lines.
    /// Blank lines and `#` comments are skipped.
    pub fn from_tsv_str(content: &str) -> Result<Self> {
        let mut lexicon = Self::default();

        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim_end_matches('\r');
            if trimmed.trim().is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let (raw, normalized) = trimmed
                .split_once('\t')
                .map(|(raw, normalized)| (raw.trim(), normalized.trim()))
                .filter(|(raw, normalized)| !raw.is_empty() && !normalized.is_empty())
                .ok_or_else(|| MeasureError::MalformedLexicon {
                    line: idx + 1,
                    content: trimmed.to_string(),
                })?;

            lexicon.insert(UnitEntry::new(raw, normalized));
        }

        if lexicon.is_empty() {
            return Err(MeasureError::EmptyLexicon);
        }

        tracing::debug!("unit lexicon ready with {} entries", lexicon.len());
        Ok(lexicon)
    }

    /// Add extra spellings on top of an existing table
    pub fn with_extra<'a, I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (raw, normalized) in pairs {
            self.insert(UnitEntry::new(raw, normalized));
        }
        self
    }

    fn insert(&mut self, entry: UnitEntry) {
        if self.index.contains_key(&entry.raw_spelling) {
            tracing::warn!(
                "duplicate unit spelling '{}' ignored (keeping first entry)",
                entry.raw_spelling
            );
            return;
        }
        self.index
            .insert(entry.raw_spelling.clone(), self.entries.len());
        self.entries.push(entry);
    }

    pub fn get(&self, raw: &str) -> Option<&UnitEntry> {
        self.index.get(raw).map(|&idx| &self.entries[idx])
    }

    /// Singular unit name in joined form
    pub fn singular(&self, raw: &str) -> Option<&str> {
        self.get(raw).map(|entry| entry.singular_joined.as_str())
    }

    /// Plural unit name in joined form
    pub fn plural(&self, raw: &str) -> Option<&str> {
        self.get(raw).map(|entry| entry.plural_joined.as_str())
    }

    pub fn entries(&self) -> &[UnitEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
