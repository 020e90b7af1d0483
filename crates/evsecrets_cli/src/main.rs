//! # Commands
//!
//! - `evsecrets scan` - Scan the codebase for leaked environment secrets
//! - `evsecrets files` - List the files eligible for scanning
//! - `evsecrets walk` - List every file under the root, before filtering
//! - `evsecrets secrets` - List matched environment-variable names
//! - `evsecrets init` - Create a `.evsecrets.json` configuration file
//! - `evsecrets version` - Print the tool version

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod artifacts;
mod commands;
mod ui;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use console::style;
pub use evsecrets_core::CONFIG_FILENAME;

use crate::ui::colors;

const REPO_URL: &str = "https://github.com/evsecrets/evsecrets";

#[derive(Debug, Parser)]
#[command(
    name = "evsecrets",
    version,
    styles = ui::clap_styles(),
    allow_external_subcommands = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Print additional diagnostic detail.
    #[arg(long, global = true)]
    verbose: bool,

    /// Mirror intermediate file lists as pretty-printed JSON under `tmp/`.
    #[arg(long, global = true)]
    tmp_file_outputs: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the tool version.
    Version,

    /// Write the default configuration to `.evsecrets.json`.
    Init,

    /// List environment-variable names matching the configured patterns.
    Secrets,

    /// List the files eligible for scanning, sorted.
    Files(DirArgs),

    /// Scan eligible files for occurrences of secret values.
    #[command(visible_alias = "s")]
    Scan(DirArgs),

    /// List every regular file under the root, before filtering.
    Walk(DirArgs),

    /// Anything unrecognised falls through to the usage examples.
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

/// Root-directory argument shared by `files`, `scan`, and `walk`.
#[derive(Debug, clap::Args)]
struct DirArgs {
    /// Root directory to walk (defaults to the current working directory).
    dir: Option<PathBuf>,
}

fn main() {
    let cli = parse_cli();

    #[cfg(feature = "tracing")]
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(ui::exit::ERROR);
    }
}

#[cfg(feature = "tracing")]
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let default_filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();
}

fn parse_cli() -> Cli {
    let cmd = Cli::command().about(build_about()).after_help(build_after_help());

    let matches = cmd.get_matches();

    #[expect(clippy::expect_used, reason = "clap already validated args; this cannot fail")]
    Cli::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        None | Some(Command::External(_)) => {
            print_examples();
            Ok(())
        }
        Some(Command::Version) => {
            println!("evsecrets v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Init) => commands::init::run(),
        Some(Command::Secrets) => commands::secrets::run(cli.verbose),
        Some(Command::Files(args)) => commands::files::run(args.dir.as_deref(), cli.tmp_file_outputs),
        Some(Command::Scan(args)) => {
            commands::scan::run(args.dir.as_deref(), cli.verbose, cli.tmp_file_outputs)
        }
        Some(Command::Walk(args)) => commands::walk::run(args.dir.as_deref(), cli.tmp_file_outputs),
    }
}

/// Absent or unrecognised subcommands are not errors; the tool prints its
/// usage examples and exits zero.
fn print_examples() {
    println!();
    println!("{}", style("Examples:").bold());
    ui::print_hint("evsecrets init", "write the default .evsecrets.json");
    ui::print_hint("evsecrets secrets", "list matched env var names");
    ui::print_hint("evsecrets files", "list files eligible for scanning");
    ui::print_hint("evsecrets scan", "scan the current directory");
    ui::print_hint("evsecrets walk", "list all files, before filtering");
    ui::print_hint("evsecrets version", "print the tool version");
    println!();
}

fn build_about() -> String {
    format!(
        r"
  {} finds the values of your secret environment variables
  inside the files of your codebase, before they reach a repository.
  Matching is exact: only values pulled from the live environment
  are searched for. Works offline. Zero configuration.",
        colors::accent().apply_to("evsecrets").bold()
    )
}

fn build_after_help() -> String {
    format!(
        r"
  {}
    evsecrets scan                 Scan the current directory
    evsecrets scan sub/dir         Scan another root
    evsecrets files                List files eligible for scanning
    evsecrets secrets              List matched env var names
    evsecrets init                 Create config file

  Learn more: {}",
        style("Examples:").bold(),
        colors::accent().apply_to(REPO_URL).underlined()
    )
}
