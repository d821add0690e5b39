//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
///
/// Every argument is optional: a bare `assetopt` optimizes the `dist`
/// directory next to the executable's own directory.
#[derive(Debug, Parser)]
#[command(
    name    = "assetopt",
    bin_name = "assetopt",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Strip comments and whitespace from built JS and CSS assets",
    long_about = "assetopt rewrites every .js and .css file directly inside a build \
                  output directory, removing comments and collapsing whitespace. \
                  The comment stripper is textual: `//` inside strings or URLs is \
                  removed too.",
    after_help = "EXAMPLES:\n\
        \x20 assetopt                       # <exe-dir>/../dist\n\
        \x20 assetopt --dir ./dist\n\
        \x20 assetopt --dir ./dist --dry-run -v\n\
        \x20 assetopt --output-format json > report.json\n\n\
        ENVIRONMENT:\n\
        \x20 ASSETOPT_OPTIMIZER__DIST_DIR    Target directory when --dir is absent\n\
        \x20 ASSETOPT_OPTIMIZER__EXTENSIONS  Comma-separated suffixes (default: js,css)\n\
        \x20 NO_COLOR                        Any non-empty value disables colour\n\
        \x20 A .env file in the current directory is loaded first and can set these.",
)]
pub struct Cli {
    /// Logging and output flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to optimize and how.
    #[command(flatten)]
    pub optimize: OptimizeArgs,
}

/// Arguments for the optimize run.
#[derive(Debug, Args)]
pub struct OptimizeArgs {
    /// Override the build output directory.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Build output directory (default: <exe-dir>/../dist)"
    )]
    pub dir: Option<PathBuf>,

    /// Report what would change without writing any files.
    #[arg(long = "dry-run", help = "Show what would be optimized without writing")]
    pub dry_run: bool,
}
