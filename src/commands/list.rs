/// List command — displays the notes stored on the box.
use std::time::SystemTime;

use owo_colors::{OwoColorize, Stream::Stdout};

use crate::util::human_duration;

/// Render the note list as a table: ID, title, age, and a lock marker for
/// encrypted notes. Titles and timestamps are stored in the clear, so this
/// needs no passwords.
pub fn run_list(cli: &crate::cli::Cli) -> anyhow::Result<()> {
    use comfy_table::{Cell, Color, Table};

    // ── 1. Fetch metadata ─────────────────────────────────────────────────
    let client = super::client_for(cli)?;
    let notes = client.list_notes()?;

    if notes.is_empty() {
        println!(
            "{}",
            "No notes yet. Create one with `deaddrop create`."
                .if_supports_color(Stdout, |t| t.yellow())
        );
        return Ok(());
    }

    // ── 2. Build and render table ─────────────────────────────────────────
    let now_secs = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Age", ""]);

    for note in &notes {
        let age_secs = now_secs.saturating_sub(note.timestamp);
        let marker = if note.encrypted { "locked" } else { "" };

        table.add_row(vec![
            Cell::new(&note.id),
            Cell::new(&note.title),
            Cell::new(human_duration(age_secs)),
            if note.encrypted {
                Cell::new(marker).fg(Color::Yellow)
            } else {
                Cell::new(marker)
            },
        ]);
    }

    println!("{table}");

    Ok(())
}
