//! Drawing the form into a frame.

use passform::Category;
use passform::form::{MAX_LENGTH, MIN_LENGTH};
use passform::pass::entropy_strength;

use crate::terminal::{BOLD, DIM, Frame, GREEN, INNER_WIDTH, RED, RESET, REVERSE};

use super::{Focus, Notice, Screen};

const LENGTH_LABEL: &str = "Password Length";
const FIELD_WIDTH: usize = 8;

pub fn help_line() -> &'static str {
    "Tab/↑↓ move • Space toggle • Enter generate • Ctrl+Y copy • Esc quit"
}

pub fn render(screen: &Screen) -> Frame {
    let mut frame = Frame::new();

    frame.box_top("Password Generator");
    frame.box_line("");
    length_field(&mut frame, screen);
    match screen.length_error() {
        Some(err) => frame.box_line(&format!("{RED}{err}{RESET}")),
        None => frame.box_line(""),
    }
    frame.box_line("");

    for category in Focus::toggles() {
        checkbox(&mut frame, screen, category);
    }

    frame.box_line("");
    buttons(&mut frame, screen);
    frame.box_bottom();

    match &screen.notice {
        Some(Notice::Error(msg)) => frame.text(&format!("{RED}{msg}{RESET}")),
        Some(Notice::Info(msg)) => frame.text(&format!("{GREEN}{msg}{RESET}")),
        None => frame.blank(),
    }
    frame.text(&format!("{DIM}{}{RESET}", help_line()));

    if let Some(result) = screen.state.result() {
        frame.blank();
        frame.box_top("Result");
        frame.box_line(&format!("{DIM}Ctrl+Y to copy{RESET}"));
        frame.box_line("");
        frame.box_line_center(&format!("{BOLD}{}{RESET}", result.password()));
        frame.box_line("");
        frame.rule();
        let bits = result.entropy_bits();
        frame.box_line(&format!(
            "{:.1} bits ({}) • {} chars from {}",
            bits,
            entropy_strength(bits),
            result.length(),
            result.pool_size()
        ));
        frame.box_bottom();
    }

    frame
}

fn length_field(frame: &mut Frame, screen: &Screen) {
    let input = &screen.state.length_input;
    let prefix = format!("{LENGTH_LABEL}  [ ");
    let field = format!("{:<width$}", input, width = FIELD_WIDTH);
    let hint = format!("{DIM}{MIN_LENGTH}-{MAX_LENGTH}{RESET}");

    let line = if screen.focus == Focus::Length {
        frame.cursor_in_next_line(prefix.chars().count() + screen.editor.cursor());
        format!("{BOLD}{prefix}{RESET}{field} ]  {hint}")
    } else {
        format!("{prefix}{field} ]  {hint}")
    };
    frame.box_line(&line);
}

fn checkbox(frame: &mut Frame, screen: &Screen, category: Category) {
    let mark = if screen.state.categories.contains(category) {
        "[x]"
    } else {
        "[ ]"
    };
    let label = category.label();
    let width = INNER_WIDTH - 4;

    if screen.focus == Focus::Toggle(category) {
        frame.box_line(&format!("{REVERSE}{label:<width$}{RESET} {mark}"));
    } else {
        frame.box_line(&format!("{label:<width$} {mark}"));
    }
}

fn buttons(frame: &mut Frame, screen: &Screen) {
    let generate = "[ Generate Password ]";
    let reset = "[ Reset Password ]";

    let generate = match (screen.focus == Focus::Generate, screen.state.can_submit()) {
        (true, true) => format!("{REVERSE}{generate}{RESET}"),
        (true, false) => format!("{REVERSE}{DIM}{generate}{RESET}"),
        (false, true) => generate.to_string(),
        (false, false) => format!("{DIM}{generate}{RESET}"),
    };
    let reset = if screen.focus == Focus::Reset {
        format!("{REVERSE}{reset}{RESET}")
    } else {
        reset.to_string()
    };

    frame.box_line_center(&format!("{generate}   {reset}"));
}
