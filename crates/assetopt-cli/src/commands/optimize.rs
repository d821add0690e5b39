//! The optimize run: the tool's one and only command.
//!
//! Responsibility: turn CLI arguments and config into `OptimizeOptions`, run
//! the core `OptimizeService` over the local filesystem, and display
//! progress. No transform logic lives here.

use tracing::{info, instrument, warn};

use assetopt_adapters::LocalFilesystem;
use assetopt_core::{
    application::{OptimizeOptions, OptimizeService, ProgressReporter},
    domain::{FileOutcome, OptimizeReport},
};

use crate::{
    cli::{OptimizeArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::{OutputManager, format_bytes},
};

/// Completion notification, printed once after every file is processed.
pub const COMPLETE_LINE: &str = "Asset optimization complete";

/// Execute the optimize run.
///
/// Dispatch sequence:
/// 1. Resolve the output directory (`--dir` > config > `<exe-dir>/../dist`)
/// 2. Build the asset filter from config
/// 3. Run `OptimizeService` with a console reporter
/// 4. Print the JSON report or the human summary
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: OptimizeArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    // 1. Resolve directory
    let dir = config.resolve_dist_dir(args.dir.as_deref())?;

    // 2. Filter
    let filter = config
        .asset_filter()
        .map_err(|e| CliError::Core(e.into()))?;

    let options = OptimizeOptions {
        filter,
        dry_run: args.dry_run,
    };

    info!(
        dir = %dir.display(),
        filter = %options.filter,
        dry_run = options.dry_run,
        "Optimizing assets"
    );

    // 3. Run
    let service = OptimizeService::new(Box::new(LocalFilesystem::new()), options);
    let reporter = ConsoleReporter::new(output, args.dry_run);
    let report = service.run(&dir, &reporter)?;

    // 4. Report
    match output.format() {
        OutputFormat::Json => {
            output
                .json(&report)
                .with_cli_context(|| "Failed to write JSON report")?;
        }
        OutputFormat::Human => {
            output
                .info(&summary(&report))
                .with_cli_context(|| "Failed to write summary")?;
        }
        OutputFormat::Plain | OutputFormat::Auto => {}
    }

    if report.dry_run && output.format() != OutputFormat::Json {
        output
            .info("Dry run: no files were written")
            .with_cli_context(|| "Failed to write summary")?;
    }

    Ok(())
}

/// One-line run summary for interactive terminals.
fn summary(report: &OptimizeReport) -> String {
    format!(
        "{} file(s) optimized, {} skipped, {} \u{2192} {} ({} saved)",
        report.optimized_count(),
        report.skipped,
        format_bytes(report.bytes_before()),
        format_bytes(report.bytes_after()),
        format_bytes(report.bytes_saved()),
    )
}

// ── Console reporter ──────────────────────────────────────────────────────────

/// Prints `Optimized <file>` per file and the completion line.
///
/// Silent in JSON mode, where the final report carries the same data.
struct ConsoleReporter<'a> {
    output: &'a OutputManager,
    dry_run: bool,
}

impl<'a> ConsoleReporter<'a> {
    fn new(output: &'a OutputManager, dry_run: bool) -> Self {
        Self { output, dry_run }
    }

    fn silent(&self) -> bool {
        self.output.is_quiet() || self.output.format() == OutputFormat::Json
    }

    fn emit(&self, line: &str) {
        if let Err(e) = self.output.print(line) {
            warn!(error = %e, "Failed to write progress line");
        }
    }
}

impl ProgressReporter for ConsoleReporter<'_> {
    fn file_optimized(&self, outcome: &FileOutcome) {
        if self.silent() {
            return;
        }
        let verb = if self.dry_run {
            "Would optimize"
        } else {
            "Optimized"
        };
        self.emit(&format!("{verb} {}", outcome.name));
    }

    fn finished(&self, _report: &OptimizeReport) {
        if self.silent() {
            return;
        }
        self.emit(COMPLETE_LINE);
    }
}
