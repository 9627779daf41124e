use std::path::PathBuf;

use clap::Parser;

use passform::{Category, FormState};

/// Password form: pick a length and character types, generate a password.
///
/// Without generation flags the interactive form opens. With them one
/// password (or `--number` passwords) is generated and printed.
#[derive(Debug, Parser)]
#[command(name = "passform", version, about)]
pub struct CliFlags {
    /// Characters per password (4-16)
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub length: Option<String>,

    /// Leave out lowercase letters (included by default)
    #[arg(long)]
    pub no_lower: bool,

    /// Include uppercase letters
    #[arg(short = 'U', long)]
    pub upper: bool,

    /// Include digits
    #[arg(short, long)]
    pub digits: bool,

    /// Include symbols (!@#$%^&*()_+)
    #[arg(short, long)]
    pub symbols: bool,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub number: Option<u32>,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long)]
    pub board: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file (filter with PASSFORM_LOG)
    #[arg(long, value_name = "FILE", env = "PASSFORM_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl CliFlags {
    /// Any generation flag switches from the interactive form to one-shot mode.
    pub fn is_one_shot(&self) -> bool {
        self.length.is_some()
            || self.no_lower
            || self.upper
            || self.digits
            || self.symbols
            || self.number.is_some()
            || self.board
    }

    /// The form as the flags fill it in, starting from a fresh form.
    pub fn form_state(&self) -> FormState {
        let mut state = FormState::new();
        state.categories = state
            .categories
            .with(Category::Lower, !self.no_lower)
            .with(Category::Upper, self.upper)
            .with(Category::Digits, self.digits)
            .with(Category::Symbols, self.symbols);
        state.with_length_input(self.length.clone().unwrap_or_default())
    }
}
