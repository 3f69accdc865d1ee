/// Show command — fetches a note from the box and displays it. Encrypted
/// notes are opened locally: the password is prompted for, the envelope is
/// unsealed on this machine, and a wrong guess simply re-prompts (a failed
/// attempt never consumes the envelope; guessing cost lives in the KDF).
use std::io::IsTerminal;
use std::time::SystemTime;

use backon::{BlockingRetryable, ExponentialBuilder};
use owo_colors::{OwoColorize, Stream::Stderr, Stream::Stdout};

use crate::crypto::CryptoError;
use crate::error::DeadDropError;
use crate::util::human_duration;

fn try_copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => clipboard.set_text(text).is_ok(),
        Err(_) => false,
    }
}

/// Run the show flow.
pub fn run_show(cli: &crate::cli::Cli, args: &crate::cli::ShowArgs) -> anyhow::Result<()> {
    // ── 1. Fetch note with retry ──────────────────────────────────────────
    // Network hiccups on the appliance's AP are transient; a 404 is
    // permanent and must not be retried.
    let client = super::client_for(cli)?;
    let fetch = || client.get_note(&args.id);
    let note = fetch
        .retry(ExponentialBuilder::default().with_max_times(3))
        .when(|e: &anyhow::Error| {
            !e.downcast_ref::<DeadDropError>()
                .is_some_and(|de| matches!(de, DeadDropError::NoteNotFound))
        })
        .call()
        .map_err(|e| {
            if e.downcast_ref::<DeadDropError>()
                .is_some_and(|de| matches!(de, DeadDropError::NoteNotFound))
            {
                eprintln!(
                    "{}",
                    format!("Error: No note with ID {}.", args.id)
                        .if_supports_color(Stderr, |t| t.red())
                );
            }
            e
        })?;

    // ── 2. Unlock if encrypted ────────────────────────────────────────────
    let body = if note.encrypted {
        if !std::io::stdin().is_terminal() {
            anyhow::bail!("encrypted note requires an interactive terminal for password entry");
        }

        loop {
            let password = dialoguer::Password::new()
                .with_prompt(format!("Password for \"{}\"", note.title))
                .interact()
                .map_err(|e| anyhow::anyhow!("password prompt failed: {}", e))?;

            match crate::crypto::open(&note.message, &password) {
                Ok(plaintext) => break plaintext,
                Err(CryptoError::WrongPasswordOrCorrupted) => {
                    eprintln!(
                        "{}",
                        "Wrong password. Try again (Ctrl+C to abort)."
                            .if_supports_color(Stderr, |t| t.red())
                    );
                }
                Err(e) => {
                    // Format error: the stored blob is not an envelope at
                    // all. No password will ever open it — do not re-prompt.
                    eprintln!(
                        "{}",
                        "Error: This note's envelope is corrupted and cannot be opened."
                            .if_supports_color(Stderr, |t| t.red())
                    );
                    return Err(e.into());
                }
            }
        }
    } else {
        note.message.clone()
    };

    // ── 3. Display ────────────────────────────────────────────────────────
    let now_secs = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let age = human_duration(now_secs.saturating_sub(note.timestamp));

    println!(
        "{} {}",
        note.title.if_supports_color(Stdout, |t| t.cyan()),
        format!("({} ago)", age).if_supports_color(Stdout, |t| t.dimmed())
    );
    println!();
    println!("{}", body);

    // ── 4. Optional clipboard copy ────────────────────────────────────────
    if args.copy {
        println!();
        if try_copy_to_clipboard(&body) {
            println!("Copied to clipboard.");
        } else {
            println!("(Clipboard unavailable — copy manually)");
        }
    }

    Ok(())
}
