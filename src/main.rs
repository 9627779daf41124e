use clap::Parser;

mod cli;
mod clipboard;
mod exits;
mod logging;
mod terminal;
mod tui;

use cli::{CliFlags, prompts};

fn main() {
    exits::reset_terminal();
    exits::install_handlers();

    let flags = CliFlags::parse();
    setup(&flags);

    let result = if flags.is_one_shot() {
        cli::run(&flags)
    } else {
        tui::run()
    };

    if let Err(e) = result {
        log::error!("{e}");
        prompts::error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}

/// Quiet mode first: logger setup may already warn.
fn setup(flags: &CliFlags) {
    prompts::set_quiet(flags.quiet);
    logging::init(flags.log_file.as_deref(), flags.is_one_shot());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_is_set_before_logging() {
        let flags = CliFlags::try_parse_from([
            "passform",
            "-q",
            "-l",
            "8",
            "--log-file",
            "/nonexistent-dir/passform.log",
        ])
        .unwrap();
        setup(&flags);
        assert!(prompts::quiet());
    }
}
