//! `invitations generate <input>` — write one invitation file per attendee.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use invitations_writer::{generate_in, GenerateOptions};

use super::InputArgs;

/// Arguments for `invitations generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Directory that receives `output_<N>.txt` files (default: current directory).
    #[arg(long, short = 'o', value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let batch = self.input.load()?;

        let out_dir = self.out_dir.unwrap_or_else(|| PathBuf::from("."));
        if !out_dir.is_dir() {
            bail!("output directory '{}' does not exist", out_dir.display());
        }

        let options = GenerateOptions {
            dry_run: self.dry_run,
        };
        let stdout = std::io::stdout();
        let mut console = stdout.lock();
        let outcome = generate_in(
            &out_dir,
            &batch.template,
            &batch.attendees,
            &options,
            &mut console,
        );

        tracing::info!(
            "batch finished: {} written, {} failed",
            outcome.written(),
            outcome.failed()
        );
        Ok(())
    }
}
