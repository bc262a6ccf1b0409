//! Invitations — render one text file per attendee from a template.
//!
//! # Usage
//!
//! ```text
//! invitations generate <input> [--template <file>] [--out-dir <dir>] [--dry-run]
//! invitations preview <input> [--template <file>] [--index <n>]
//! ```
//!
//! `<input>` is a JSON or YAML document with `template` and `attendees` keys.
//! Pass `-v` / `-vv` (or set `RUST_LOG`) for log output on stderr.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{generate::GenerateArgs, preview::PreviewArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "invitations",
    version,
    about = "Render personalised invitation files from a template and an attendee list",
    long_about = None,
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write `output_<N>.txt` for every attendee.
    Generate(GenerateArgs),

    /// Print the rendered invitation for a single attendee.
    Preview(PreviewArgs),
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format_target(false)
        .try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Generate(args) => args.run(),
        Commands::Preview(args) => args.run(),
    }
}
