//! Interactive password form.

mod input;
mod screen;
mod text;

use std::io;

use crossterm::event::{Event, KeyEventKind, read};
use log::info;

use passform::AppError;

use crate::clipboard::Clipboard;
use crate::terminal::ScreenGuard;

pub use input::*;
pub use screen::*;
pub use text::*;

/// Run the form until the user quits.
pub fn run() -> Result<(), AppError> {
    let mut guard = ScreenGuard::new()?;
    let mut screen = Screen::new();
    let mut rng = rand::thread_rng();
    let mut clipboard: Option<Clipboard> = None;

    info!("form opened");

    loop {
        render(&screen).draw(&mut io::stdout().lock())?;

        let key = match read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        match screen.handle_key(key, &mut rng) {
            Action::None => {}
            Action::Copy => {
                if clipboard.is_none() {
                    match Clipboard::new() {
                        Ok(cb) => clipboard = Some(cb),
                        Err(e) => {
                            screen.copied(Err(e));
                            continue;
                        }
                    }
                }
                if let Some(cb) = clipboard.as_mut() {
                    let result = cb.copy(screen.state.password());
                    screen.copied(result);
                }
            }
            Action::Quit => break,
        }
    }

    guard.restore();
    info!("form closed");
    Ok(())
}
