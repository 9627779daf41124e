//! Password form: pick a length and character types, generate a password.
//!
//! The form itself is presentation-free; the `passform` binary drives it from
//! an interactive terminal screen or from command-line flags.

pub mod error;
pub mod form;
pub mod pass;

pub use error::{AppError, EmptyPoolError, FormError, ValidationError};
pub use form::{FormState, Generated, PasswordLength, validate};
pub use pass::{Category, CategorySet, assemble_pool, generate};
