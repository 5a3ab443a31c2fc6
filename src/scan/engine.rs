//! Scanning engine
//!
//! Drives every target file through the tokenizer and, depending on the
//! [`Mode`], either registers every token (cross-reference) or sends it
//! through the pre-filter, the composite splitter and the [`TokenFilter`]
//! (spell check).
//!
//! The configuration is fixed before scanning starts. Everything that changes
//! while scanning lives in [`EngineState`], which callers own and pass in.

use std::io::BufRead;
use tracing::{debug, warn};

use crate::core::error::XrefError;
use crate::core::file_reader::{open_lines, NumberedLines};
use crate::scan::index::OccurrenceIndex;
use crate::scan::targets::Target;
use crate::spell::composite;
use crate::spell::dictionary::Dictionary;
use crate::spell::filter::{self, FlagMode, TokenFilter};
use crate::spell::tokenizer;

/// What the engine does with each token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Index every token
    #[default]
    CrossReference,
    /// Index only the tokens the dictionary check flags
    SpellCheck,
}

/// Scanning options, fixed for a whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub mode: Mode,
    /// Check the sub-words of `camelCase`/`snake_case` tokens separately
    pub split_composites: bool,
    /// Strip digits before the dictionary lookup
    pub remove_digits: bool,
    /// Flag known words instead of unknown ones
    pub negate: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            mode: Mode::CrossReference,
            split_composites: false,
            remove_digits: true,
            negate: false,
        }
    }
}

/// Mutable state accumulated while scanning
#[derive(Debug, Clone, Default)]
pub struct EngineState {
    pub index: OccurrenceIndex,
    /// Token occurrences that made it past the spell-check pre-filter
    pub tokens_checked: usize,
    pub files_scanned: usize,
    /// Files that could not be opened or read to the end
    pub files_skipped: usize,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a worker's state into this one
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    pub fn merge(&mut self, other: EngineState) {
        self.index.merge(other.index);
        self.tokens_checked += other.tokens_checked;
        self.files_scanned += other.files_scanned;
        self.files_skipped += other.files_skipped;
    }
}

/// Process exit signal of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Findings,
}

impl Outcome {
    /// Findings only exist in spell-check mode, and only when something was
    /// flagged
    pub fn of(mode: Mode, state: &EngineState) -> Self {
        if mode == Mode::SpellCheck && !state.index.is_empty() {
            Outcome::Findings
        } else {
            Outcome::Clean
        }
    }

    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Clean => 0,
            Outcome::Findings => 1,
        }
    }
}

pub struct Engine<'a> {
    config: ScanConfig,
    filter: TokenFilter<'a>,
}

impl<'a> Engine<'a> {
    pub fn new(config: ScanConfig, dictionary: &'a Dictionary) -> Self {
        let filter = TokenFilter::new(
            dictionary,
            config.remove_digits,
            FlagMode::from_negate(config.negate),
        );
        Self { config, filter }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Process every token of one line
    pub fn process_line(&self, state: &mut EngineState, line: &str, file: &str, line_number: u32) {
        for token in tokenizer::tokens(line) {
            match self.config.mode {
                Mode::CrossReference => state.index.register(token, file, line_number),
                Mode::SpellCheck => self.check_token(state, token, file, line_number),
            }
        }
    }

    fn check_token(&self, state: &mut EngineState, token: &str, file: &str, line_number: u32) {
        if filter::should_skip(token) {
            return;
        }
        state.tokens_checked += 1;

        if self.config.split_composites && composite::is_composite(token) {
            for word in composite::split(token) {
                self.filter
                    .apply(&mut state.index, &word, token, file, line_number);
            }
        } else {
            self.filter
                .apply(&mut state.index, token, token, file, line_number);
        }
    }

    /// Process every line from `lines`, reporting lines under `name`
    pub fn process_lines<R: BufRead>(
        &self,
        state: &mut EngineState,
        lines: &mut NumberedLines<R>,
        name: &str,
    ) -> std::io::Result<()> {
        for line in lines {
            let (line_number, line) = line?;
            self.process_line(state, &line, name, line_number);
        }
        Ok(())
    }

    /// Open and process one target file.
    ///
    /// A read error partway through keeps what was indexed from the lines
    /// before it.
    pub fn process_file(&self, state: &mut EngineState, target: &Target) -> Result<(), XrefError> {
        let mut lines = open_lines(&target.path)?;
        self.process_lines(state, &mut lines, &target.name)
            .map_err(|source| XrefError::ReadFailed {
                path: target.path.clone(),
                line: lines.lines_read(),
                source,
            })?;

        if lines.lossy_lines() > 0 {
            debug!(
                file = %target.name,
                lines = lines.lossy_lines(),
                "replaced invalid UTF-8"
            );
        }
        Ok(())
    }

    /// Scan one target, absorbing a read failure as a warning
    fn scan_one(&self, state: &mut EngineState, target: &Target) {
        match self.process_file(state, target) {
            Ok(()) => {
                state.files_scanned += 1;
                debug!(file = %target.name, tokens = state.index.len(), "scanned");
            }
            Err(e) => {
                state.files_skipped += 1;
                warn!("{}: {}", e, source_message(&e));
            }
        }
    }

    /// Scan targets one after another
    pub fn scan(&self, state: &mut EngineState, targets: &[Target]) {
        for target in targets {
            self.scan_one(state, target);
        }
    }

    /// Scan targets on the rayon pool, one private state per file, then merge
    /// the states in target order
    #[cfg(feature = "parallel")]
    pub fn scan_parallel(&self, state: &mut EngineState, targets: &[Target]) {
        use rayon::prelude::*;

        let states: Vec<EngineState> = targets
            .par_iter()
            .map(|target| {
                let mut local = EngineState::new();
                self.scan_one(&mut local, target);
                local
            })
            .collect();

        for local in states {
            state.merge(local);
        }
    }
}

fn source_message(e: &XrefError) -> String {
    std::error::Error::source(e)
        .map(|source| source.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn dictionary(words: &[&str]) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.extend(words.iter().copied());
        dict
    }

    fn spell(split: bool, negate: bool) -> ScanConfig {
        ScanConfig {
            mode: Mode::SpellCheck,
            split_composites: split,
            remove_digits: true,
            negate,
        }
    }

    fn flagged(state: &EngineState) -> Vec<&str> {
        state.index.iter().map(|(token, _)| token).collect()
    }

    #[test]
    fn test_cross_reference_registers_everything() {
        let dict = Dictionary::new();
        let engine = Engine::new(ScanConfig::default(), &dict);
        let mut state = EngineState::new();

        engine.process_line(&mut state, "int x = 0x1F; // x", "a.c", 1);
        engine.process_line(&mut state, "return x;", "a.c", 2);

        assert_eq!(flagged(&state), vec!["0x1F", "int", "return", "x"]);
        let x = state.index.get("x").unwrap();
        assert_eq!(x.lines("a.c").unwrap().len(), 2);
        assert_eq!(x.references(), 2);
        assert_eq!(state.tokens_checked, 0);
    }

    #[test]
    fn test_spell_check_end_to_end() {
        let dict = dictionary(&["hello", "world"]);
        let engine = Engine::new(spell(true, false), &dict);
        let mut state = EngineState::new();

        engine.process_line(&mut state, "Hello there_World123", "f", 3);

        assert_eq!(flagged(&state), vec!["there_World123"]);
        let entry = state.index.get("there_World123").unwrap();
        assert_eq!(entry.files().count(), 1);
        assert!(entry.lines("f").unwrap().contains(&3));
        assert_eq!(entry.references(), 1);
        assert_eq!(state.tokens_checked, 2);
    }

    #[test]
    fn test_negate_inverts_flagging() {
        let dict = dictionary(&["foo"]);
        let mut state = EngineState::new();
        Engine::new(spell(false, false), &dict).process_line(&mut state, "foo bar", "f", 1);
        assert_eq!(flagged(&state), vec!["bar"]);

        let mut state = EngineState::new();
        Engine::new(spell(false, true), &dict).process_line(&mut state, "foo bar", "f", 1);
        assert_eq!(flagged(&state), vec!["foo"]);
    }

    #[test]
    fn test_prefilter_discards_numbers_constants_and_letters() {
        let dict = Dictionary::new();
        let engine = Engine::new(spell(false, false), &dict);
        let mut state = EngineState::new();

        engine.process_line(&mut state, "x 42 0777 MAX_LEN EOF typo", "f", 1);

        assert_eq!(flagged(&state), vec!["MAX_LEN", "typo"]);
        assert_eq!(state.tokens_checked, 2);
    }

    #[test]
    fn test_composite_without_split_is_checked_whole() {
        let dict = dictionary(&["my", "function"]);
        let engine = Engine::new(spell(false, false), &dict);
        let mut state = EngineState::new();

        engine.process_line(&mut state, "myFunction", "f", 1);
        assert_eq!(flagged(&state), vec!["myFunction"]);
    }

    #[test]
    fn test_split_composite_all_known() {
        let dict = dictionary(&["my", "function", "name"]);
        let engine = Engine::new(spell(true, false), &dict);
        let mut state = EngineState::new();

        engine.process_line(&mut state, "myFunctionName my_function_name", "f", 1);
        assert!(state.index.is_empty());
    }

    #[test]
    fn test_several_bad_subwords_record_once() {
        let dict = Dictionary::new();
        let engine = Engine::new(spell(true, false), &dict);
        let mut state = EngineState::new();

        engine.process_line(&mut state, "fooBarBaz fooBarBaz", "f", 9);

        let entry = state.index.get("fooBarBaz").unwrap();
        assert_eq!(entry.references(), 1);
        assert_eq!(state.index.len(), 1);
    }

    #[test]
    fn test_outcome_signal() {
        let mut state = EngineState::new();
        assert_eq!(Outcome::of(Mode::SpellCheck, &state), Outcome::Clean);

        state.index.register("typo", "f", 1);
        assert_eq!(Outcome::of(Mode::SpellCheck, &state), Outcome::Findings);
        assert_eq!(Outcome::of(Mode::CrossReference, &state), Outcome::Clean);
        assert_eq!(Outcome::Findings.exit_code(), 1);
        assert_eq!(Outcome::Clean.exit_code(), 0);
    }

    #[test]
    fn test_scan_skips_missing_files() {
        let temp = tempdir().unwrap();
        let present = temp.path().join("present.txt");
        fs::write(&present, "alpha\nbeta alpha\n").unwrap();

        let targets = vec![
            Target::new(temp.path().join("missing.txt")),
            Target::new(present.clone()),
        ];

        let dict = Dictionary::new();
        let engine = Engine::new(ScanConfig::default(), &dict);
        let mut state = EngineState::new();
        engine.scan(&mut state, &targets);

        assert_eq!(state.files_scanned, 1);
        assert_eq!(state.files_skipped, 1);
        let name = present.to_string_lossy().into_owned();
        let alpha = state.index.get("alpha").unwrap();
        assert_eq!(alpha.lines(&name).unwrap().len(), 2);
    }

    #[test]
    fn test_process_file_reports_unreadable() {
        let dict = Dictionary::new();
        let engine = Engine::new(ScanConfig::default(), &dict);
        let mut state = EngineState::new();
        let err = engine
            .process_file(&mut state, &Target::new(PathBuf::from("/no/such/file")))
            .unwrap_err();
        assert!(err.is_recoverable());
        assert!(state.index.is_empty());
    }

    #[test]
    fn test_read_failure_is_not_reported_as_open_failure() {
        let temp = tempdir().unwrap();
        let dict = Dictionary::new();
        let engine = Engine::new(ScanConfig::default(), &dict);
        let mut state = EngineState::new();

        // Opening a directory succeeds on Unix, reading it does not
        let err = engine
            .process_file(&mut state, &Target::new(temp.path().to_path_buf()))
            .unwrap_err();
        if cfg!(unix) {
            assert!(matches!(err, XrefError::ReadFailed { line: 0, .. }));
        }
        assert!(err.is_recoverable());
        assert!(state.index.is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let temp = tempdir().unwrap();
        let mut targets = Vec::new();
        for (ix, text) in ["one two", "two three", "three one four"].iter().enumerate() {
            let path = temp.path().join(format!("f{ix}.txt"));
            fs::write(&path, text).unwrap();
            targets.push(Target::new(path));
        }

        let dict = Dictionary::new();
        let engine = Engine::new(ScanConfig::default(), &dict);

        let mut sequential = EngineState::new();
        engine.scan(&mut sequential, &targets);
        let mut parallel = EngineState::new();
        engine.scan_parallel(&mut parallel, &targets);

        assert_eq!(sequential.index.stats(), parallel.index.stats());
        assert_eq!(flagged(&sequential), flagged(&parallel));
    }
}
