//! Dictionary of known words
//!
//! Built once before scanning and only read afterwards. Lookups are exact, so
//! callers lowercase their query first.
//!
//! Words loaded from a word list only get their *first* character lowercased
//! (`Paris` is stored as `paris`, `McDonald` as `mcDonald`). Words added from
//! the built-in lists are lowercased completely. Existing word lists depend on
//! this, so a mixed-case entry like `mcDonald` never matches.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::error::XrefError;
use crate::spell::wordlists::{CONTRACTIONS, KEYWORDS};

/// Where the words of a dictionary come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySources {
    /// Conventional word list; skipped with a warning when it can't be read
    pub default_list: Option<PathBuf>,
    /// Lists asked for explicitly; any failure is fatal
    pub extra_lists: Vec<PathBuf>,
    pub keywords: bool,
    pub contractions: bool,
}

impl Default for DictionarySources {
    fn default() -> Self {
        Self {
            default_list: None,
            extra_lists: Vec::new(),
            keywords: true,
            contractions: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the dictionary for a run.
    ///
    /// The default list comes first, then the extra lists in order; a list
    /// named twice is read once.
    pub fn from_sources(sources: &DictionarySources) -> Result<Self, XrefError> {
        let mut dictionary = Self::new();
        let mut seen = HashSet::new();

        // Only a default list that actually loaded can satisfy an explicit one
        if let Some(path) = &sources.default_list {
            match dictionary.load(path) {
                Ok(added) => {
                    seen.insert(path.clone());
                    debug!(path = %path.display(), added, "loaded default word list");
                }
                Err(e) => warn!("{}, continuing without it", e),
            }
        }

        for path in &sources.extra_lists {
            if !seen.insert(path.clone()) {
                continue;
            }
            let added = dictionary.load(path)?;
            debug!(path = %path.display(), added, "loaded word list");
        }

        if sources.keywords {
            dictionary.extend(KEYWORDS.iter().copied());
        }
        if sources.contractions {
            dictionary.extend(CONTRACTIONS.iter().copied());
        }

        debug!(words = dictionary.len(), "dictionary ready");
        Ok(dictionary)
    }

    /// Load a whitespace-separated word list from a file
    pub fn load(&mut self, path: &Path) -> Result<usize, XrefError> {
        let to_error = |source| XrefError::Dictionary {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(to_error)?;
        self.load_reader(file).map_err(to_error)
    }

    /// Load a word list from any reader
    pub fn load_reader<R: Read>(&mut self, mut reader: R) -> io::Result<usize> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Ok(self.load_text(&String::from_utf8_lossy(&buffer)))
    }

    /// Insert every word of `text`, returning how many were new
    fn load_text(&mut self, text: &str) -> usize {
        let before = self.words.len();
        for word in text.split_whitespace() {
            self.words.insert(lowercase_first(word));
        }
        self.words.len() - before
    }

    /// Insert a fully lowercased copy of `word`
    pub fn add(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    /// Insert every word of a built-in list
    pub fn extend<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        for word in words {
            self.add(word);
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn lowercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
