//! # assetopt
//!
//! Post-build asset optimizer: strips comments and collapses whitespace in
//! every `.js` and `.css` file directly inside a build output directory.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + optional file + env).
//! 4. Build the [`OutputManager`].
//! 5. Run the optimizer.
//! 6. Translate any [`CliError`] into one error line and an exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                         |
//! |------|---------------------------------|
//! |  0   | Success                         |
//! |  1   | Internal / I/O error            |
//! |  2   | Usage / input error             |
//! |  3   | Output directory not found      |
//! |  4   | Configuration error             |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version land here too; they go to stdout and succeed.
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(2);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    let verbose = cli.global.verbose > 0;

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose, !cli.global.no_color),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Run + 6. Error handling ───────────────────────────────────────
    match run(cli, config, &output) {
        Ok(()) => {
            info!("assetopt completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, output.supports_color()),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    commands::optimize::execute(cli.optimize, config, output)
}

/// Translate a `CliError` into the user-facing line and an exit code.
///
/// This is the single place where structured errors become stderr output
/// and OS exit codes.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    // Colour only when stderr is a TTY (same logic as logging.rs).
    let msg = if color && std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
