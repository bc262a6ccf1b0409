//! `invitations preview <input>` — print one rendered invitation to stdout.

use anyhow::{bail, Result};
use clap::Args;

use invitations_core::{validate, Validation};
use invitations_renderer::Renderer;

use super::InputArgs;

/// Arguments for `invitations preview`.
#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// 1-based position of the attendee to render.
    #[arg(long, short = 'n', default_value_t = 1)]
    pub index: usize,
}

impl PreviewArgs {
    pub fn run(self) -> Result<()> {
        if self.index == 0 {
            bail!("--index is 1-based; 0 is not a valid position");
        }

        let batch = self.input.load()?;
        let (template, attendees) = match validate(&batch.template, &batch.attendees) {
            Validation::Ready {
                template,
                attendees,
            } => (template, attendees),
            stop => {
                println!("{stop}");
                return Ok(());
            }
        };

        let Some(attendee) = attendees.get(self.index - 1) else {
            bail!(
                "no attendee at position {}; the input has {}",
                self.index,
                attendees.len()
            );
        };

        let rendered = Renderer::new(template).render(attendee);
        print!("{rendered}");
        if !rendered.ends_with('\n') {
            println!();
        }
        Ok(())
    }
}
