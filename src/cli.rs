//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;

use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::scan::engine::{Engine, EngineState, Mode, Outcome, ScanConfig};
use crate::scan::targets::{expand_targets, read_target_list};
use crate::spell::dictionary::{Dictionary, DictionarySources};

/// xref - cross-reference and spell-check the tokens of text files.
#[derive(Parser, Debug)]
#[command(name = "xref")]
#[command(
    author,
    version,
    about,
    long_about = r#"xref produces a cross reference of the tokens in a set of text files.

Tokens are found by replacing every character that is not a letter, digit
or underscore with a space, then splitting on spaces. The report lists each
token on its own line, followed by the files and line numbers containing it.

With --spell, tokens are checked against a dictionary instead and only the
misspelled ones are reported. The exit status is then 1 when anything was
flagged and 0 otherwise.

Examples:
    xref file1.c file2.c
    xref -t src
    xref -s -k -d words.txt src/*.rs
    find . -name '*.py' | xref -s -@
"#
)]
pub struct Cli {
    /// Files or directories to scan.
    #[arg(
        value_name = "FILE",
        required_unless_present = "stdin",
        long_help = "Files to scan. Directories are walked recursively; hidden files and\n\
paths ignored by .gitignore are skipped, and the rest are scanned in sorted order."
    )]
    pub targets: Vec<PathBuf>,

    /// Also read file names from stdin.
    #[arg(
        short = '@',
        long,
        long_help = "Read whitespace-separated file names from stdin and scan them after\n\
the files given on the command line."
    )]
    pub stdin: bool,

    /// Print tokens only, one per line.
    #[arg(short, long, overrides_with = "long")]
    pub tokens_only: bool,

    /// Long listing: tokens, files and line numbers (default).
    #[arg(short, long, overrides_with = "tokens_only")]
    pub long: bool,

    /// Print informational statistics after the report.
    #[arg(
        short = 'i',
        long = "stats",
        long_help = "Append the number of distinct tokens, the number of tokens referenced\n\
exactly once, and the token with the most references."
    )]
    pub stats: bool,

    /// Print dictionary loading and processing times to stderr.
    #[arg(short = 'T', long)]
    pub times: bool,

    /// Output format (text/json/jsonl).
    #[arg(
        long,
        default_value = "text",
        value_parser = ["text", "json", "jsonl"],
        value_name = "FORMAT",
        long_help = "Select the report format.\n\n\
Supported values:\n\
- text (default): the plain listing\n\
- json: a single JSON document\n\
- jsonl: one JSON value per token"
    )]
    pub format: String,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Spell check the tokens instead of cross-referencing them.
    #[arg(
        short = 's',
        long = "spell",
        long_help = "Check every token against the dictionary and report the tokens that\n\
are not in it. Tokens made only of digits, tokens starting with 0, tokens made\n\
only of upper case letters, and single characters are ignored."
    )]
    pub spell: bool,

    /// Split composite tokens (TwoWords, two_words) when spell checking.
    #[arg(
        short = 'k',
        long = "split",
        long_help = "Split composite tokens such as TwoWords or two_words into their words\n\
and check each one. A misspelled word is reported under the whole token."
    )]
    pub split: bool,

    /// Do not remove digits from tokens when spell checking.
    #[arg(short = 'g', long)]
    pub keep_digits: bool,

    /// Negate the spell check: report tokens that ARE in the dictionary.
    #[arg(short = 'n', long)]
    pub negate: bool,

    /// Additional word list (may be repeated).
    #[arg(
        short = 'd',
        long = "dict",
        value_name = "DICT",
        long_help = "Add a whitespace-separated word list to the dictionary. May be given\n\
more than once. A list that cannot be read aborts the run."
    )]
    pub dicts: Vec<PathBuf>,

    /// Word list replacing the default dictionary.
    #[arg(
        short = 'D',
        long = "default-dict",
        value_name = "DICT",
        env = "XREF_DICTIONARY",
        long_help = "The default word list. If it cannot be read, a warning is printed and\n\
the check continues without it."
    )]
    pub default_dict: Option<PathBuf>,

    /// Don't read the default dictionary.
    #[arg(short = 'N', long)]
    pub no_default_dict: bool,

    /// Don't add the built-in C/C++, Python and shell keywords.
    #[arg(short = 'c', long)]
    pub no_keywords: bool,

    /// Don't add the built-in contraction fragments (didn, wasn, ...).
    #[arg(short = 'C', long)]
    pub no_contractions: bool,

    /// Log each processed file to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored diagnostics.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            mode: if self.spell {
                Mode::SpellCheck
            } else {
                Mode::CrossReference
            },
            split_composites: self.split,
            remove_digits: !self.keep_digits,
            negate: self.negate,
        }
    }

    pub fn dictionary_sources(&self) -> DictionarySources {
        DictionarySources {
            default_list: if self.no_default_dict {
                None
            } else {
                self.default_dict.clone()
            },
            extra_lists: self.dicts.clone(),
            keywords: !self.no_keywords,
            contractions: !self.no_contractions,
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            format: self.format.parse::<OutputFormat>().unwrap_or_default(),
            tokens_only: self.tokens_only && !self.long,
            stats: self.stats,
            pretty: self.pretty,
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<Outcome> {
    let scan_config = cli.scan_config();
    let render_config = cli.render_config();

    let started = Instant::now();
    let dictionary = match scan_config.mode {
        Mode::SpellCheck => Dictionary::from_sources(&cli.dictionary_sources())
            .context("cannot build the dictionary")?,
        Mode::CrossReference => Dictionary::new(),
    };
    let dictionary_time = started.elapsed();
    if scan_config.mode == Mode::SpellCheck && dictionary.is_empty() {
        warn!("the dictionary is empty, every checked token will be reported");
    }

    let started = Instant::now();
    let mut paths = cli.targets.clone();
    if cli.stdin {
        paths.extend(read_target_list(io::stdin().lock())?);
    }
    let targets = expand_targets(&paths);

    let engine = Engine::new(scan_config, &dictionary);
    let mut state = EngineState::new();
    #[cfg(feature = "parallel")]
    engine.scan_parallel(&mut state, &targets);
    #[cfg(not(feature = "parallel"))]
    engine.scan(&mut state, &targets);
    let processing_time = started.elapsed();

    Renderer::new(render_config, engine.config().mode)
        .render_to(&state, io::stdout().lock())
        .context("failed to write the report")?;

    if cli.times {
        if scan_config.mode == Mode::SpellCheck {
            eprintln!(
                "Time to read dictionaries (sec) = {:.3}",
                dictionary_time.as_secs_f64()
            );
        }
        eprintln!(
            "Time to process files (sec)     = {:.3}",
            processing_time.as_secs_f64()
        );
    }

    Ok(Outcome::of(engine.config().mode, &state))
}
