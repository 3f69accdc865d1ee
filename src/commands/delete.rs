/// Delete command — removes a note from the box after confirmation.
use std::io::IsTerminal;

use owo_colors::{OwoColorize, Stream::Stdout};

use crate::error::DeadDropError;

/// Run the delete flow.
///
/// Fetches the note first so the confirmation prompt can show its title.
/// Deleting is a pure storage operation on the ID — an encrypted note needs
/// no password to be deleted.
pub fn run_delete(cli: &crate::cli::Cli, args: &crate::cli::DeleteArgs) -> anyhow::Result<()> {
    let client = super::client_for(cli)?;

    // ── 1. Resolve note for display ───────────────────────────────────────
    let note = match client.get_note(&args.id) {
        Ok(note) => note,
        Err(e) => {
            if e.downcast_ref::<DeadDropError>()
                .is_some_and(|de| matches!(de, DeadDropError::NoteNotFound))
            {
                println!("No note with ID {}.", args.id);
                return Ok(());
            }
            return Err(e);
        }
    };

    // ── 2. Confirmation prompt ────────────────────────────────────────────
    let skip_confirm = args.yes || !std::io::stdin().is_terminal();
    if !skip_confirm {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!("Delete \"{}\"?", note.title))
            .default(false)
            .interact()
            .map_err(|e| anyhow::anyhow!("prompt failed: {}", e))?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    // ── 3. Delete ─────────────────────────────────────────────────────────
    client.delete_note(&args.id)?;
    println!(
        "{} ({})",
        "Deleted.".if_supports_color(Stdout, |t| t.green()),
        note.title
    );

    Ok(())
}
