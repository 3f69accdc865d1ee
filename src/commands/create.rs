/// Create command — reads the note body, optionally seals it with a
/// password, and uploads it. The password and the plaintext of a sealed
/// body never leave this machine.
use std::io::{IsTerminal, Read};

use owo_colors::{OwoColorize, Stream::Stderr, Stream::Stdout};

use crate::note::CreateNoteRequest;

/// Run the create flow.
pub fn run_create(cli: &crate::cli::Cli, args: &crate::cli::CreateArgs) -> anyhow::Result<()> {
    // ── 1. Resolve server ─────────────────────────────────────────────────
    let client = super::client_for(cli)?;

    // ── 2. Resolve message body ───────────────────────────────────────────
    let message = match args.message {
        Some(ref message) => message.clone(),
        None => {
            if std::io::stdin().is_terminal() {
                eprintln!(
                    "{}",
                    "Reading message from stdin — end with Ctrl+D."
                        .if_supports_color(Stderr, |t| t.dimmed())
                );
            }
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| anyhow::anyhow!("failed to read message from stdin: {}", e))?;
            buf
        }
    };

    // ── 3. Seal if requested ──────────────────────────────────────────────
    // The server stores whatever lands in `message`; with --encrypt that is
    // the envelope and the encrypted flag rides along as clear metadata.
    let (message, encrypted) = if args.encrypt {
        if !std::io::stdin().is_terminal() {
            anyhow::bail!("--encrypt requires an interactive terminal for password entry");
        }
        let password = dialoguer::Password::new()
            .with_prompt("Password for this note")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .map_err(|e| anyhow::anyhow!("password prompt failed: {}", e))?;
        if password.is_empty() {
            anyhow::bail!("empty password — store the note without --encrypt instead");
        }

        (crate::crypto::seal(&message, &password)?, true)
    } else {
        (message, false)
    };

    // ── 4. Upload ─────────────────────────────────────────────────────────
    let id = client.create_note(&CreateNoteRequest {
        title: args.title.clone(),
        message,
        encrypted,
    })?;

    // ── 5. Output success ─────────────────────────────────────────────────
    if encrypted {
        println!(
            "{}",
            "Sealed locally — the box only ever sees the envelope."
                .if_supports_color(Stdout, |t| t.yellow())
        );
    }
    println!(
        "{} {}",
        "Created note".if_supports_color(Stdout, |t| t.green()),
        id.if_supports_color(Stdout, |t| t.cyan())
    );
    println!("  Read it back with:");
    println!(
        "  {}",
        format!("deaddrop show {}", id).if_supports_color(Stdout, |t| t.bold())
    );

    Ok(())
}
