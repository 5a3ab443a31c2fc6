//! Token normalization and flagging
//!
//! The pre-filter throws away tokens that are never worth checking (numbers,
//! all-caps constants, single characters). [`TokenFilter`] then normalizes
//! what is left and decides whether it gets flagged against the dictionary.

use crate::scan::index::OccurrenceIndex;
use crate::spell::dictionary::Dictionary;

/// Shortest candidate that is looked up at all
pub const MIN_CANDIDATE_LEN: usize = 2;

/// Which dictionary outcome counts as a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagMode {
    /// Flag tokens missing from the dictionary (spell checking)
    #[default]
    Unknown,
    /// Flag tokens found in the dictionary (negated check)
    Known,
}

impl FlagMode {
    pub fn from_negate(negate: bool) -> Self {
        if negate {
            FlagMode::Known
        } else {
            FlagMode::Unknown
        }
    }

    fn is_flagged(self, found: bool) -> bool {
        match self {
            FlagMode::Unknown => !found,
            FlagMode::Known => found,
        }
    }
}

/// Digit-shaped token. Anything starting with `0` counts, so `0x1F` and
/// `0777` are treated as numeric literals.
pub fn is_all_digits(token: &str) -> bool {
    token.starts_with('0') || token.chars().all(|c| c.is_ascii_digit())
}

pub fn is_all_uppercase(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_uppercase())
}

pub fn remove_digits(token: &str) -> String {
    token.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Pre-filter applied to whole tokens in spell-check mode
pub fn should_skip(token: &str) -> bool {
    is_all_digits(token) || is_all_uppercase(token) || token.chars().count() == 1
}

#[derive(Debug, Clone, Copy)]
pub struct TokenFilter<'a> {
    dictionary: &'a Dictionary,
    remove_digits: bool,
    mode: FlagMode,
}

impl<'a> TokenFilter<'a> {
    pub fn new(dictionary: &'a Dictionary, remove_digits: bool, mode: FlagMode) -> Self {
        Self {
            dictionary,
            remove_digits,
            mode,
        }
    }

    /// Decide whether `candidate` is a finding.
    ///
    /// Candidates shorter than [`MIN_CANDIDATE_LEN`] after digit removal are
    /// never flagged.
    pub fn is_flagged(&self, candidate: &str) -> bool {
        let working = if self.remove_digits {
            remove_digits(candidate)
        } else {
            candidate.to_string()
        };

        if working.chars().count() < MIN_CANDIDATE_LEN {
            return false;
        }

        let found = self.dictionary.contains(&working.to_lowercase());
        self.mode.is_flagged(found)
    }

    /// Check `candidate` and record a finding under `original`.
    ///
    /// `candidate` may be one sub-word of `original`; the index is always
    /// keyed by the token as it appeared in the file.
    pub fn apply(
        &self,
        index: &mut OccurrenceIndex,
        candidate: &str,
        original: &str,
        file: &str,
        line: u32,
    ) -> bool {
        let flagged = self.is_flagged(candidate);
        if flagged {
            index.register(original, file, line);
        }
        flagged
    }
}
