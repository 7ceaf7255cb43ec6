//! CLI entry point for queryguard.
//!
//! This module is thin: it handles argument parsing, I/O, logging setup, and exit codes.
//! All business logic lives in the `queryguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use queryguard_app::{
    CONFIG_SOURCE_DEFAULTS, ConnectionMode, ExplainOutput, ScanInput, ValidateInput,
    format_connection_outcome, format_explanation, format_not_found, format_rules, format_scan,
    render_markdown, render_text, run_connection_check, run_explain, run_rules, run_scan,
    run_validate, serialize_report, serialize_request, verdict_exit_code,
};
use queryguard_settings::Overrides;
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG: &str = "queryguard.toml";

#[derive(Parser, Debug)]
#[command(
    name = "queryguard",
    version,
    about = "Validate SQL text before it is sent to a translation backend"
)]
struct Cli {
    /// Path to queryguard config TOML [default: queryguard.toml, if present].
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Override the maximum query length in characters.
    #[arg(long, global = true)]
    max_length: Option<usize>,

    /// Override the maximum number of `--` comment markers.
    #[arg(long, global = true)]
    max_comment_markers: Option<usize>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one query. Reads --query, --file, or stdin.
    Validate {
        /// Target connection id.
        #[arg(long, allow_negative_numbers = true)]
        target_id: i64,

        /// Query text.
        #[arg(long, conflicts_with = "file")]
        query: Option<String>,

        /// Read the query from a file.
        #[arg(long)]
        file: Option<Utf8PathBuf>,

        /// Report every failing check, not just the first.
        #[arg(long)]
        all: bool,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// On acceptance, print the translation request body instead of the report.
        #[arg(long)]
        emit_request: bool,

        /// Also write the JSON report to this path.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Validate every `.sql` file beneath a directory.
    Scan {
        dir: Utf8PathBuf,

        #[arg(long, allow_negative_numbers = true)]
        target_id: i64,
    },

    /// Explain a check_id or reason code with remediation guidance.
    Explain {
        /// The check_id (e.g., "query.unsafe_markup") or reason code (e.g., "NOT_SQL").
        identifier: String,
    },

    /// List the rules in evaluation order with their enabled state.
    Rules,

    /// Validate a connection form (JSON).
    Connection {
        #[arg(long)]
        file: Utf8PathBuf,

        #[arg(long, value_enum, default_value_t = Mode::Create)]
        mode: Mode,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
    Md,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Create,
    Update,
    Test,
}

impl From<Mode> for ConnectionMode {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Create => ConnectionMode::Create,
            Mode::Update => ConnectionMode::Update,
            Mode::Test => ConnectionMode::Test,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match &cli.cmd {
        Commands::Validate {
            target_id,
            query,
            file,
            all,
            format,
            emit_request,
            report_out,
        } => cmd_validate(
            &cli,
            *target_id,
            query.as_deref(),
            file.as_deref(),
            *all,
            *format,
            *emit_request,
            report_out.as_deref(),
        )?,
        Commands::Scan { dir, target_id } => cmd_scan(&cli, dir, *target_id)?,
        Commands::Explain { identifier } => cmd_explain(identifier),
        Commands::Rules => cmd_rules(&cli)?,
        Commands::Connection { file, mode } => cmd_connection(file, *mode)?,
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "queryguard=debug"
    } else {
        "queryguard=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        max_length: cli.max_length,
        max_comment_markers: cli.max_comment_markers,
    }
}

/// Returns `(text, source)`. A missing default config means built-in defaults; a missing
/// explicit `--config` is an error.
fn load_config(cli: &Cli) -> anyhow::Result<(String, String)> {
    match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config: {path}"))?;
            Ok((text, path.to_string()))
        }
        None => {
            let path = Utf8Path::new(DEFAULT_CONFIG);
            if path.is_file() {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("read config: {path}"))?;
                Ok((text, path.to_string()))
            } else {
                tracing::debug!("no {DEFAULT_CONFIG} found; using defaults");
                Ok((String::new(), CONFIG_SOURCE_DEFAULTS.to_string()))
            }
        }
    }
}

fn read_query(query: Option<&str>, file: Option<&Utf8Path>) -> anyhow::Result<String> {
    if let Some(q) = query {
        return Ok(q.to_string());
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path).with_context(|| format!("read query: {path}"));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("read query from stdin")?;
    Ok(text)
}

#[allow(clippy::too_many_arguments)]
fn cmd_validate(
    cli: &Cli,
    target_id: i64,
    query: Option<&str>,
    file: Option<&Utf8Path>,
    all: bool,
    format: Format,
    emit_request: bool,
    report_out: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let (config_text, config_source) = load_config(cli)?;
    let query_text = read_query(query, file)?;

    let output = run_validate(ValidateInput {
        config_text: &config_text,
        config_source: &config_source,
        overrides: overrides(cli),
        query_text: &query_text,
        target_id,
        audit: all,
    })?;

    if let Some(path) = report_out {
        write_report_file(path, &serialize_report(&output.report)?)?;
    }

    let code = verdict_exit_code(output.report.verdict);
    match (emit_request, output.accepted) {
        (true, Some(validated)) => println!("{}", serialize_request(validated)?),
        _ => match format {
            Format::Json => {
                let bytes = serialize_report(&output.report)?;
                println!("{}", String::from_utf8_lossy(&bytes));
            }
            Format::Text => print!("{}", render_text(&output.report)),
            Format::Md => print!("{}", render_markdown(&output.report)),
        },
    }
    Ok(code)
}

fn write_report_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))
}

fn cmd_scan(cli: &Cli, dir: &Utf8Path, target_id: i64) -> anyhow::Result<i32> {
    let (config_text, _) = load_config(cli)?;
    let output = run_scan(ScanInput {
        root: dir,
        config_text: &config_text,
        overrides: overrides(cli),
        target_id,
    })?;
    print!("{}", format_scan(&output));
    Ok(output.exit_code())
}

fn cmd_explain(identifier: &str) -> i32 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_check_ids, available_codes)
            );
            1
        }
    }
}

fn cmd_rules(cli: &Cli) -> anyhow::Result<i32> {
    let (config_text, _) = load_config(cli)?;
    print!("{}", format_rules(&run_rules(&config_text, overrides(cli))?));
    Ok(0)
}

fn cmd_connection(file: &Utf8Path, mode: Mode) -> anyhow::Result<i32> {
    let json =
        std::fs::read_to_string(file).with_context(|| format!("read connection form: {file}"))?;
    let outcome = run_connection_check(&json, mode.into())?;
    print!("{}", format_connection_outcome(&outcome));
    Ok(if outcome.is_ok() { 0 } else { 2 })
}
