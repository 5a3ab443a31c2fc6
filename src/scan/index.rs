//! Occurrence index: token -> file -> line numbers
//!
//! Keys are the tokens exactly as they were spelled in the source, never the
//! lowercased or split forms. Iteration is in ascending byte-wise order of the
//! token string; reports and the max-reference tie-break rely on it.

use std::collections::{BTreeMap, BTreeSet};

/// 1-based line numbers of one file, ascending and unique
pub type LineSet = BTreeSet<u32>;

/// Where a single token occurs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceEntry {
    files: BTreeMap<String, LineSet>,
}

impl OccurrenceEntry {
    /// Total references: the sum of every file's line count
    pub fn references(&self) -> usize {
        self.files.values().map(BTreeSet::len).sum()
    }

    /// Files in ascending name order with their line sets
    pub fn files(&self) -> impl Iterator<Item = (&str, &LineSet)> {
        self.files.iter().map(|(file, lines)| (file.as_str(), lines))
    }

    #[cfg(test)]
    pub fn lines(&self, file: &str) -> Option<&LineSet> {
        self.files.get(file)
    }

    fn insert(&mut self, file: &str, line: u32) {
        match self.files.get_mut(file) {
            Some(lines) => {
                lines.insert(line);
            }
            None => {
                self.files.insert(file.to_string(), LineSet::from([line]));
            }
        }
    }
}

/// The token with the most references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxReference {
    pub token: String,
    pub references: usize,
}

/// Summary derived from an index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Distinct tokens registered
    pub total_tokens: usize,
    /// Tokens referenced exactly once over all files
    pub single_reference: usize,
    /// `None` only for an empty index
    pub max_references: Option<MaxReference>,
}

#[derive(Debug, Clone, Default)]
pub struct OccurrenceIndex {
    tokens: BTreeMap<String, OccurrenceEntry>,
}

impl OccurrenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `token` occurs on `line` of `file`.
    ///
    /// Registering the same triple again changes nothing.
    pub fn register(&mut self, token: &str, file: &str, line: u32) {
        match self.tokens.get_mut(token) {
            Some(entry) => entry.insert(file, line),
            None => {
                let mut entry = OccurrenceEntry::default();
                entry.insert(file, line);
                self.tokens.insert(token.to_string(), entry);
            }
        }
    }

    /// Tokens in ascending order with their occurrences
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OccurrenceEntry)> {
        self.tokens.iter().map(|(token, entry)| (token.as_str(), entry))
    }

    #[cfg(test)]
    pub fn get(&self, token: &str) -> Option<&OccurrenceEntry> {
        self.tokens.get(token)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Fold every occurrence of `other` into this index
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    pub fn merge(&mut self, other: OccurrenceIndex) {
        for (token, entry) in other.tokens {
            match self.tokens.get_mut(&token) {
                Some(existing) => {
                    for (file, lines) in entry.files {
                        existing.files.entry(file).or_default().extend(lines);
                    }
                }
                None => {
                    self.tokens.insert(token, entry);
                }
            }
        }
    }

    /// Compute summary statistics.
    ///
    /// Ties for the maximum go to the first token in iteration order, i.e.
    /// the smallest one.
    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            total_tokens: self.len(),
            ..IndexStats::default()
        };

        for (token, entry) in self.iter() {
            let references = entry.references();
            if references == 1 {
                stats.single_reference += 1;
            }
            let is_new_max = stats
                .max_references
                .as_ref()
                .map_or(true, |max| references > max.references);
            if is_new_max {
                stats.max_references = Some(MaxReference {
                    token: token.to_string(),
                    references,
                });
            }
        }

        stats
    }
}
