//! monkey-lex - tokenizes a monkey source file and prints the tokens.

use std::{
    path::PathBuf,
    process::ExitCode,
    str::FromStr,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use monkey_lex::{
    render_error, source::read_lines, tokenize_with, ErrorMode, LexOptions,
    SkipPolicy, Token, RESERVED_KEYWORDS,
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown format {:?}, expected `text` or `json`", s)),
        }
    }
}

/// Tokenize a monkey source file
#[derive(Parser, Debug)]
#[command(name = "monkey-lex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a monkey source file", long_about = None)]
struct Cli {
    /// Source file to tokenize
    file: PathBuf,

    /// Output format: text or json
    #[arg(long, default_value = "text", env = "MONKEY_LEX_FORMAT")]
    format: OutputFormat,

    /// Characters to skip: strict (space and backslash) or whitespace
    #[arg(long, default_value = "strict", env = "MONKEY_LEX_SKIP")]
    skip: SkipPolicy,

    /// On an unrecognised character: fail-fast or collect
    #[arg(long, default_value = "fail-fast", env = "MONKEY_LEX_ERRORS")]
    errors: ErrorMode,

    /// Trim surrounding whitespace from each line before lexing
    #[arg(long, env = "MONKEY_LEX_TRIM")]
    trim: bool,

    /// Enable verbose logging
    #[arg(short, long, env = "MONKEY_LEX_VERBOSE")]
    verbose: bool,

    /// Disable color output in logs
    #[arg(long, env = "MONKEY_LEX_NO_COLOR")]
    no_color: bool,
}

impl Cli {
    fn options(&self) -> LexOptions {
        LexOptions {
            skip: self.skip,
            error_mode: self.errors,
            trim_lines: self.trim,
        }
    }
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

fn print_tokens(tokens: &[Token], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                println!("{}", token);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(tokens).context("failed to serialize tokens")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn run(cli: Cli) -> Result<bool> {
    let options = cli.options();
    debug!(?options, file = %cli.file.display(), "starting");

    let lines = read_lines(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.display().to_string());

    let start = Instant::now();
    let report = tokenize_with(&lines, &RESERVED_KEYWORDS, &options, Some(file_name));
    info!(
        tokens = report.tokens.len(),
        errors = report.errors.len(),
        elapsed = ?start.elapsed(),
        "tokenized"
    );

    // Collect mode still prints the tokens of the lines that lexed.
    if report.is_ok() || !report.tokens.is_empty() {
        print_tokens(&report.tokens, cli.format)?;
    }
    if report.is_ok() {
        return Ok(true);
    }

    for error in &report.errors {
        eprintln!("{}\n", render_error(error, &lines, &options));
    }

    Ok(false)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("Error: {:#}", error);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}
