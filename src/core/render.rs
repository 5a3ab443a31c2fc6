//! Renderer module
//!
//! Renders a finished scan to text, json or jsonl.

use std::fmt::Write as _;
use std::io::Write;

use crate::core::model::{Report, StatsReport, TokenLine, TokenReport};
use crate::scan::engine::{EngineState, Mode};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and report options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Print token names only, without files and lines
    pub tokens_only: bool,
    /// Append the statistics block
    pub stats: bool,
    /// Indent json output
    pub pretty: bool,
}

pub struct Renderer {
    config: RenderConfig,
    mode: Mode,
}

impl Renderer {
    pub fn new(config: RenderConfig, mode: Mode) -> Self {
        Self { config, mode }
    }

    /// Render a scan result. Every line ends in a newline.
    pub fn render(&self, state: &EngineState) -> serde_json::Result<String> {
        match self.config.format {
            OutputFormat::Text => Ok(self.render_text(state)),
            OutputFormat::Json => self.render_json(state),
            OutputFormat::Jsonl => self.render_jsonl(state),
        }
    }

    /// Render to a writer
    pub fn render_to<W: Write>(&self, state: &EngineState, mut writer: W) -> std::io::Result<()> {
        let output = self.render(state)?;
        writer.write_all(output.as_bytes())?;
        writer.flush()
    }

    /// The plain listing. An empty index renders nothing at all.
    fn render_text(&self, state: &EngineState) -> String {
        let mut output = String::new();
        if state.index.is_empty() {
            return output;
        }

        for (token, entry) in state.index.iter() {
            output.push_str(token);
            output.push('\n');
            if self.config.tokens_only {
                continue;
            }
            for (file, lines) in entry.files() {
                let numbers: Vec<String> = lines.iter().map(u32::to_string).collect();
                let _ = writeln!(
                    output,
                    "    {}: [{}] {}",
                    file,
                    lines.len(),
                    numbers.join(", ")
                );
            }
        }

        if self.config.stats {
            output.push('\n');
            output.push_str(&render_stats_text(&self.stats(state)));
        }

        output
    }

    fn render_json(&self, state: &EngineState) -> serde_json::Result<String> {
        let report = Report {
            tokens: self.token_lines(state),
            stats: self.config.stats.then(|| self.stats(state)),
        };
        let mut output = if self.config.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        output.push('\n');
        Ok(output)
    }

    /// One token per line, then the stats object when requested
    fn render_jsonl(&self, state: &EngineState) -> serde_json::Result<String> {
        let mut output = String::new();
        for line in self.token_lines(state) {
            output.push_str(&serde_json::to_string(&line)?);
            output.push('\n');
        }
        if self.config.stats {
            let stats = serde_json::json!({ "stats": self.stats(state) });
            output.push_str(&serde_json::to_string(&stats)?);
            output.push('\n');
        }
        Ok(output)
    }

    fn token_lines(&self, state: &EngineState) -> Vec<TokenLine> {
        state
            .index
            .iter()
            .map(|(token, entry)| {
                if self.config.tokens_only {
                    TokenLine::Name(token.to_string())
                } else {
                    TokenLine::Full(TokenReport::new(token, entry))
                }
            })
            .collect()
    }

    fn stats(&self, state: &EngineState) -> StatsReport {
        StatsReport::new(&state.index.stats(), self.mode, state)
    }
}

fn render_stats_text(stats: &StatsReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Total number of tokens       = {}", stats.total_tokens);
    let _ = writeln!(output, "Tokens with one reference    = {}", stats.single_reference);
    let _ = writeln!(
        output,
        "Maximum number of references = {} ({})",
        stats.max_references,
        stats.max_token.as_deref().unwrap_or("")
    );
    if let Some(checked) = stats.tokens_checked {
        let _ = writeln!(output, "Tokens checked               = {}", checked);
    }
    output
}
