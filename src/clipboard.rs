//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use log::error;
use zeroize::Zeroize;

use passform::AppError;

pub struct Clipboard {
    ctx: ClipboardContext,
}

impl Clipboard {
    pub fn new() -> Result<Self, AppError> {
        ClipboardContext::new()
            .map(|ctx| Self { ctx })
            .map_err(|e| clipboard_error(e.to_string()))
    }

    pub fn copy(&mut self, text: &str) -> Result<(), AppError> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| clipboard_error(e.to_string()))?;
        // Read back so the provider has taken ownership, then wipe our copy.
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

fn clipboard_error(msg: String) -> AppError {
    error!("clipboard: {msg}");
    AppError::Clipboard(msg)
}
