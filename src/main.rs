// SPDX-License-Identifier: MIT
//
// huescan: find every color literal in some text, deduplicate, convert.
//
// This is the command-line front end over the two library crates:
//
//   huescan-space   → color records and the conversion math
//   huescan-extract → matcher, parser, dedup, swatch order, format output
//
// Each run flows through:
//
//   argv → Config → read files (or stdin) → extract_all → [order] → convert
//   → one line per color on stdout
//
// Dedup spans every input of a run, so a color repeated across files is
// printed once. Parse failures inside the text are not errors; only
// unreadable inputs and bad flags stop the run.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

use huescan_extract::{ExtractedColor, FormatError, TargetFormat, convert, extract_all, order_for_layout};
use log::{debug, info};

const USAGE: &str = "\
usage: huescan [-t|--to FORMAT] [-o|--order] [-v|--verbose] [-h|--help] [FILE...]

Prints every distinct color literal found in FILEs (or stdin), one per line.

  -t, --to FORMAT   convert to FORMAT instead of printing canonical keys:
                    hex rgb hsl hwb lab lch oklab oklch
                    swiftui uikit compose flutter dotnet
  -o, --order       order colors for a swatch grid (similar colors adjacent)
  -v, --verbose     log dropped candidates (same as RUST_LOG=debug)
  -h, --help        show this help

A FILE of `-` reads stdin.";

// ─── Errors ─────────────────────────────────────────────────────────────────

/// Everything that stops a run.
#[derive(Debug)]
enum CliError {
    Io { path: PathBuf, source: io::Error },
    UnknownFormat(FormatError),
    MissingValue(&'static str),
    UnknownFlag(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::UnknownFormat(err) => write!(f, "{err} (try --help)"),
            Self::MissingValue(flag) => write!(f, "{flag} requires a value"),
            Self::UnknownFlag(flag) => write!(f, "unknown option `{flag}` (try --help)"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::UnknownFormat(err) => Some(err),
            Self::MissingValue(_) | Self::UnknownFlag(_) => None,
        }
    }
}

impl From<FormatError> for CliError {
    fn from(err: FormatError) -> Self {
        Self::UnknownFormat(err)
    }
}

// ─── Configuration ──────────────────────────────────────────────────────────

/// An input source named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn from_arg(arg: String) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    fn read(&self) -> Result<String, CliError> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|source| CliError::Io {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                Ok(text)
            }
            Self::File(path) => fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Config {
    /// `None` prints canonical keys.
    target: Option<TargetFormat>,
    order: bool,
    verbose: bool,
    inputs: Vec<Input>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: None,
            order: false,
            verbose: false,
            inputs: vec![Input::Stdin],
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Config),
    Help,
}

/// Parse argv (without the program name).
///
/// Flags may appear anywhere; `--` ends flag parsing. `--to` takes its
/// value either as the next argument or after `=`.
fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();
    let mut inputs = Vec::new();
    let mut args = args.into_iter();
    let mut flags_done = false;

    while let Some(arg) = args.next() {
        if flags_done || arg == "-" || !arg.starts_with('-') {
            inputs.push(Input::from_arg(arg));
            continue;
        }

        match arg.as_str() {
            "--" => flags_done = true,
            "-h" | "--help" => return Ok(Command::Help),
            "-o" | "--order" => config.order = true,
            "-v" | "--verbose" => config.verbose = true,
            "-t" | "--to" => {
                let value = args.next().ok_or(CliError::MissingValue("--to"))?;
                config.target = Some(value.parse()?);
            }
            other => match other.strip_prefix("--to=") {
                Some(value) => config.target = Some(value.parse()?),
                None => return Err(CliError::UnknownFlag(arg)),
            },
        }
    }

    if !inputs.is_empty() {
        config.inputs = inputs;
    }
    Ok(Command::Run(config))
}

// ─── Run ────────────────────────────────────────────────────────────────────

/// The output lines for a set of already-read texts.
fn render(texts: &[String], config: &Config) -> Vec<String> {
    let mut colors: Vec<ExtractedColor> = extract_all(texts.iter().map(String::as_str));
    if config.order {
        colors = order_for_layout(&colors);
    }

    colors
        .iter()
        .map(|color| match config.target {
            Some(target) => convert(color, target),
            None => color.canonical_key().to_owned(),
        })
        .collect()
}

fn run(config: &Config) -> Result<(), CliError> {
    let mut texts = Vec::with_capacity(config.inputs.len());
    for input in &config.inputs {
        debug!("reading {input:?}");
        texts.push(input.read()?);
    }

    let lines = render(&texts, config);
    info!(
        "{} color(s) from {} input(s){}",
        lines.len(),
        texts.len(),
        config.target.map_or_else(String::new, |t| format!(" as {t}"))
    );

    let stdout_error = |source| CliError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    };
    let mut out = BufWriter::new(io::stdout().lock());
    for line in &lines {
        writeln!(out, "{line}").map_err(stdout_error)?;
    }
    out.flush().map_err(stdout_error)
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn main() {
    let config = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("huescan: {e}");
            process::exit(2);
        }
    };

    init_logging(config.verbose);

    if let Err(e) = run(&config) {
        eprintln!("huescan: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
