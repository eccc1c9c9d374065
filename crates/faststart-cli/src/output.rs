//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::time::Duration;

use clap::ValueEnum;
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// An explicit `--output-format` wins over `output.format` in the config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or_default()
            }
            explicit => explicit,
        };
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }
    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet and JSON modes.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.decorated("\u{2713}", msg, |s| s.green().bold().to_string())
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.decorated("\u{26a0}", msg, |s| s.yellow().bold().to_string())
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.decorated("\u{2139}", msg, |s| s.blue().bold().to_string())
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// `label: value` with the label padded to a fixed width.
    pub fn field(&self, label: &str, value: &str) -> io::Result<()> {
        self.print(&format!("  {:<16}{value}", format!("{label}:")))
    }

    /// Pretty JSON on stdout. Written even in quiet mode: it was asked for.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// A spinner for long-running steps; hidden unless output is human.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.silent() || self.resolved_format != OutputFormat::Human {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn silent(&self) -> bool {
        self.quiet || self.resolved_format == OutputFormat::Json
    }

    fn decorated(&self, icon: &str, msg: &str, paint: impl Fn(&str) -> String) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{icon} {msg}")
        } else {
            format!("{} {msg}", paint(icon))
        };
        self.term.write_line(&line)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
