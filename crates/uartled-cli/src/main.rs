use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use glob::glob;
use log::debug;
use serde::Serialize;
use uartled_core::{
    FrameProtocol, Led, LedCommand, LedState, Report, encode_frame, format_text_command,
    parse_hex_frame,
};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("UARTLED_BUILD_COMMIT"),
    ", ",
    env!("UARTLED_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "uartled")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decode, encode and replay UART LED command frames.",
    long_about = None,
    after_help = "Examples:\n  uartled decode 0000 0301\n  uartled decode --text \"esp led2 off\"\n  uartled encode --led 4 --state off\n  uartled replay bench.frames -o report.json"
)]
struct Cli {
    /// Log rejected frames and replay totals (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode frames given on the command line and print the results as JSON.
    Decode {
        /// Hex bytes per frame (`0001`, `00:01`, "00 01"), or ASCII commands with --text
        #[arg(required = true)]
        frames: Vec<String>,

        /// Decode ASCII commands (`esp led1 on`) instead of binary frames
        #[arg(long)]
        text: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Exit with a non-zero code if any frame is rejected
        #[arg(long)]
        strict: bool,
    },
    /// Print the frame for a command.
    Encode {
        /// LED number as printed on the board
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
        led: u8,

        /// Requested state
        #[arg(long, value_enum)]
        state: StateArg,

        /// Print the ASCII command instead of hex bytes
        #[arg(long)]
        text: bool,
    },
    /// Replay a capture file and generate a versioned JSON report.
    #[command(
        after_help = "Capture lines: [<unix-seconds>] bin <hex bytes> | [<unix-seconds>] txt <command>\n\nExamples:\n  uartled replay bench.frames -o report.json\n  uartled replay bench.frames --stdout --pretty"
    )]
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// Path to a capture file (glob patterns must match exactly one file)
    input: PathBuf,

    /// Output report path (JSON)
    #[arg(short = 'o', long, required_unless_present = "stdout")]
    report: Option<PathBuf>,

    /// Write JSON report to stdout
    #[arg(long, conflicts_with = "report")]
    stdout: bool,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,

    /// Exit with a non-zero code if any frame was rejected
    #[arg(long)]
    strict: bool,

    /// List rejected frame classes after the replay
    #[arg(long)]
    list_rejections: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StateArg {
    On,
    Off,
}

impl From<StateArg> for LedState {
    fn from(value: StateArg) -> Self {
        match value {
            StateArg::On => LedState::On,
            StateArg::Off => LedState::Off,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Decode {
            frames,
            text,
            pretty,
            strict,
        } => cmd_decode(frames, text, pretty, strict),
        Commands::Encode { led, state, text } => cmd_encode(led, state, text),
        Commands::Replay(args) => cmd_replay(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

#[derive(Debug, Serialize)]
struct DecodeOutcome {
    input: String,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    led: Option<Led>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<LedState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<OutcomeError>,
}

#[derive(Debug, Serialize)]
struct OutcomeError {
    id: &'static str,
    message: String,
}

fn cmd_decode(
    frames: Vec<String>,
    text: bool,
    pretty: bool,
    strict: bool,
) -> Result<(), CliError> {
    let protocol = if text {
        FrameProtocol::Text
    } else {
        FrameProtocol::Binary
    };

    let mut outcomes = Vec::with_capacity(frames.len());
    for input in frames {
        let data = match protocol {
            FrameProtocol::Binary => parse_hex_frame(&input).map_err(|err| {
                CliError::new(
                    format!("invalid frame '{}': {}", input, err),
                    Some("binary frames are hex bytes, e.g. 0001, 00:01 or \"00 01\"".to_string()),
                )
            })?,
            FrameProtocol::Text => input.as_bytes().to_vec(),
        };

        let outcome = match protocol.decode(&data) {
            Ok(command) => DecodeOutcome {
                input,
                success: true,
                led: Some(command.led),
                state: Some(command.state),
                error: None,
            },
            Err(err) => {
                debug!("rejected {} frame '{}': {}", protocol, input, err);
                DecodeOutcome {
                    input,
                    success: false,
                    led: None,
                    state: None,
                    error: Some(OutcomeError {
                        id: err.id(),
                        message: err.to_string(),
                    }),
                }
            }
        };
        outcomes.push(outcome);
    }

    let json = if pretty {
        serde_json::to_string_pretty(&outcomes)
    } else {
        serde_json::to_string(&outcomes)
    }
    .context("JSON serialization failed")?;
    println!("{}", json);

    if strict && outcomes.iter().any(|outcome| !outcome.success) {
        return Err(CliError::new(
            "rejected frames detected",
            Some("inspect the 'error' field of each result".to_string()),
        ));
    }
    Ok(())
}

fn cmd_encode(led: u8, state: StateArg, text: bool) -> Result<(), CliError> {
    let led = led
        .checked_sub(1)
        .and_then(Led::from_selector)
        .ok_or_else(|| {
            CliError::new(
                format!("invalid LED number {}", led),
                Some("use 1..=4".to_string()),
            )
        })?;
    let command = LedCommand::new(led, state.into());

    if text {
        println!("{}", format_text_command(command));
    } else {
        let hex = encode_frame(command)
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}", hex);
    }
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> Result<(), CliError> {
    let ReplayArgs {
        input,
        report,
        stdout,
        pretty,
        compact,
        quiet,
        strict,
        list_rejections,
    } = args;

    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;
    let input_abs = fs::canonicalize(&resolved_input)
        .with_context(|| format!("Failed to resolve input path: {}", resolved_input.display()))?;
    let report = if stdout {
        None
    } else {
        Some(report.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?)
    };

    if let Some(report_path) = report.as_ref() {
        let report_dir = match report_path.parent() {
            Some(parent) if parent.as_os_str().is_empty() => Some(PathBuf::from(".")),
            Some(parent) => Some(parent.to_path_buf()),
            None => None,
        };
        // A directory that does not exist yet cannot hold the input.
        let report_abs = report_dir
            .filter(|dir| dir.is_dir())
            .map(fs::canonicalize)
            .transpose()
            .with_context(|| format!("Failed to resolve output path: {}", report_path.display()))?;
        if let Some(report_dir) = report_abs {
            let report_target = report_dir.join(
                report_path
                    .file_name()
                    .ok_or_else(|| anyhow::anyhow!("Invalid report path"))?,
            );
            if report_target == input_abs {
                return Err(CliError::new(
                    format!(
                        "report path must differ from input: {}",
                        report_path.display()
                    ),
                    Some("choose a different output path".to_string()),
                ));
            }
        }
    }

    let rep = uartled_core::analyze_capture_file(&resolved_input)
        .context("capture replay failed")?;
    let json = serialize_report(&rep, pretty, compact)?;

    let Some(report) = report else {
        println!("{}", json);
        if list_rejections && !quiet {
            print_rejections(&rep);
        }
        return strict_check(&rep, strict);
    };

    if let Some(parent) = report.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&report, json)
        .with_context(|| format!("Failed to write report: {}", report.display()))?;

    if list_rejections && !quiet {
        print_rejections(&rep);
    }
    if !quiet {
        eprintln!("OK: report written -> {}", report.display());
    }
    strict_check(&rep, strict)
}

fn serialize_report(rep: &Report, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn strict_check(rep: &Report, strict: bool) -> Result<(), CliError> {
    if strict && !rep.rejections.is_empty() {
        return Err(CliError::new(
            "rejected frames detected",
            Some("use --list-rejections to inspect".to_string()),
        ));
    }
    Ok(())
}

fn print_rejections(rep: &Report) {
    eprintln!("Rejected frames:");
    for rejection in &rep.rejections {
        eprintln!(
            "  {} {} ({})",
            rejection.protocol, rejection.id, rejection.count
        );
    }
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a capture file with one frame per line".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a capture file with one frame per line".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.clone());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single capture file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
