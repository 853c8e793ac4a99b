mod commands;
mod load;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tokenlist_core::{Version, VersionUpgrade};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Token list diff and versioning toolkit.
#[derive(Parser)]
#[command(name = "tokenlist", version, about = "Token list diff and versioning toolkit")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log debug events to stderr (overridden by TOKENLIST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Reject lists that repeat a (chainId, address) pair
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show tokens added, removed and changed between two lists
    Diff {
        /// Path to the base token list (document or bare token array)
        base: PathBuf,
        /// Path to the updated token list (document or bare token array)
        update: PathBuf,
    },

    /// Compute the minimum version bump for publishing an updated list
    Bump {
        /// Path to the base token list
        base: PathBuf,
        /// Path to the updated token list
        update: PathBuf,
    },

    /// Verify that an updated list declares a high enough version
    Check {
        /// Path to the base token list document
        base: PathBuf,
        /// Path to the updated token list document
        update: PathBuf,
    },

    /// Compare two versions (e.g. 1.2.3)
    Compare {
        /// Base version
        base: Version,
        /// Candidate version
        candidate: Version,
    },

    /// Apply a bump (none, patch, minor, major) to a version
    Next {
        /// Version to bump
        version: Version,
        /// Bump to apply
        bump: VersionUpgrade,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let opts = commands::GlobalOpts {
        output: cli.output,
        quiet: cli.quiet,
        strict: cli.strict,
    };

    match cli.command {
        Commands::Diff { base, update } => commands::diff::cmd_diff(&base, &update, opts),
        Commands::Bump { base, update } => commands::bump::cmd_bump(&base, &update, opts),
        Commands::Check { base, update } => commands::check::cmd_check(&base, &update, opts),
        Commands::Compare { base, candidate } => {
            commands::compare::cmd_compare(&base, &candidate, opts)
        }
        Commands::Next { version, bump } => commands::next::cmd_next(version, bump, opts),
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    tracing::debug!(error = msg, "command failed");
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
