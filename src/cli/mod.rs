//! One-shot mode: fill the form from flags, submit, print.

mod flags;
pub mod prompts;

use std::io::{self, Write};

use log::info;
use rand::Rng;
use zeroize::Zeroizing;

use passform::AppError;

use crate::clipboard::Clipboard;

pub use flags::CliFlags;

pub fn run(flags: &CliFlags) -> Result<(), AppError> {
    let mut rng = rand::thread_rng();

    if !flags.board {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let count = generate_into(flags, &mut out, &mut rng)?;
        out.flush()?;
        info!("one-shot run done: {count} password(s)");
        return Ok(());
    }

    // Generate first so a rejected form never touches the clipboard.
    let mut passwords = Zeroizing::new(Vec::new());
    let count = generate_into(flags, &mut *passwords, &mut rng)?;

    match open_clipboard()? {
        Some(mut cb) => {
            let text = String::from_utf8_lossy(&passwords);
            cb.copy(text.trim_end_matches('\n'))?;
            prompts::clipboard_copied(count);
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(&passwords)?;
            out.flush()?;
        }
    }

    info!("one-shot run done: {count} password(s)");
    Ok(())
}

/// Submit the flag-filled form `--number` times, one password per line.
/// Returns how many were written. A rejected form writes nothing.
fn generate_into<W: Write, R: Rng + ?Sized>(
    flags: &CliFlags,
    out: &mut W,
    rng: &mut R,
) -> Result<u32, AppError> {
    let form = flags.form_state();
    let count = flags.number.unwrap_or(1);

    for _ in 0..count {
        let generated = form.submit(rng)?;
        writeln!(out, "{}", generated.password())?;
    }

    Ok(count)
}

/// `None` means print to stdout instead.
fn open_clipboard() -> Result<Option<Clipboard>, AppError> {
    match Clipboard::new() {
        Ok(cb) => Ok(Some(cb)),
        Err(e) if prompts::clipboard_fallback_prompt() => {
            prompts::warn(&format!("{e}; printing instead"));
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
