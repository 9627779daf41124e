//! Shared terminal utilities.
//!
//! Frame building, ANSI styles and the raw mode / alternate screen guard.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
