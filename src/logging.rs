//! Logger setup.
//!
//! `PASSFORM_LOG` sets the filter (logging is off by default). Logs go to the
//! `--log-file` / `PASSFORM_LOG_FILE` file when given. Without one they go to
//! stderr in one-shot mode and nowhere while the form owns the screen.

use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::cli::prompts;

pub fn init(log_file: Option<&Path>, stderr_ok: bool) {
    let mut builder = Builder::from_env(Env::default().filter_or("PASSFORM_LOG", "off"));
    builder.format_timestamp_secs().format_module_path(true);

    match log_file {
        Some(path) => match File::create(path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                prompts::warn(&format!("Cannot open log file {}: {e}", path.display()));
                return;
            }
        },
        None if stderr_ok => {
            builder.target(Target::Stderr);
        }
        None => return,
    }

    let _ = builder.try_init();
}
