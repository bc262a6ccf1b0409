//! Subcommand implementations.

pub mod generate;
pub mod preview;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use invitations_core::{load_batch, load_template_text, InvitationBatch};

/// Input document arguments shared by every subcommand.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// JSON or YAML document with `template` and `attendees` keys.
    pub input: PathBuf,

    /// Read the template from this file instead of the document's `template` key.
    #[arg(long, short = 't', value_name = "FILE")]
    pub template: Option<PathBuf>,
}

impl InputArgs {
    /// Load the batch document, applying the `--template` override.
    pub fn load(&self) -> Result<InvitationBatch> {
        let mut batch = load_batch(&self.input)
            .with_context(|| format!("cannot load input '{}'", self.input.display()))?;

        if let Some(path) = &self.template {
            let text = load_template_text(path)
                .with_context(|| format!("cannot load template '{}'", path.display()))?;
            batch.template = Value::String(text);
        }

        tracing::debug!(
            "loaded input {} (template override: {})",
            self.input.display(),
            self.template.is_some()
        );
        Ok(batch)
    }
}
