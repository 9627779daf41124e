//! Frame building and ANSI helpers.
//!
//! The form is drawn while the terminal is in raw mode, so nothing here uses
//! `println!`: lines are collected into a `Frame` and written in one go with
//! explicit `\r\n` endings.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const REVERSE: &str = "\x1b[7m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;36m";

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 52;

/// Width of the text area inside `│ ` and ` │`.
pub const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// One full screen of output plus where the text cursor should end up.
#[derive(Debug, Default)]
pub struct Frame {
    lines: Vec<String>,
    cursor: Option<(u16, u16)>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Put the visible cursor at `col` characters into the content of the
    /// next `box_line`.
    pub fn cursor_in_next_line(&mut self, col: usize) {
        let row = self.lines.len() as u16;
        self.cursor = Some(((col + 2) as u16, row));
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn text(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    /// ┌─ Title ───────────────────────┐
    pub fn box_top(&mut self, title: &str) {
        if title.is_empty() {
            self.lines.push(format!("┌{}┐", "─".repeat(BOX_WIDTH - 2)));
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
            self.lines
                .push(format!("┌{}{}┐", title_part, "─".repeat(remaining)));
        }
    }

    /// │ content                       │
    pub fn box_line(&mut self, content: &str) {
        let padding = INNER_WIDTH.saturating_sub(console_width(content));
        self.lines
            .push(format!("│ {}{} │", content, " ".repeat(padding)));
    }

    /// │          content              │
    pub fn box_line_center(&mut self, content: &str) {
        let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.lines.push(format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ));
    }

    /// ├───────────────────────────────┤
    pub fn rule(&mut self) {
        self.lines.push(format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
    }

    /// └───────────────────────────────┘
    pub fn box_bottom(&mut self) {
        self.lines.push(format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
    }

    /// Clear the screen and draw the frame from the top-left corner.
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(b"\x1b[2J\x1b[H")?;
        for line in &self.lines {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\r\n")?;
        }
        match self.cursor {
            Some((col, row)) => queue!(out, MoveTo(col, row), Show)?,
            None => queue!(out, Hide)?,
        }
        out.flush()
    }
}

/// Display width, skipping ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_width_ignores_escapes() {
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(console_width("│ x │"), 5);
    }

    #[test]
    fn box_lines_have_fixed_width() {
        let mut frame = Frame::new();
        frame.box_top("Password Generator");
        frame.box_line(&format!("{REVERSE}[x]{RESET} Include lowercase"));
        frame.box_line_center("centered");
        frame.rule();
        frame.box_bottom();
        for line in frame.lines() {
            assert_eq!(console_width(line), BOX_WIDTH, "{line:?}");
        }
    }

    #[test]
    fn cursor_points_into_next_line() {
        let mut frame = Frame::new();
        frame.box_top("");
        frame.cursor_in_next_line(5);
        frame.box_line("abcdefgh");
        assert_eq!(frame.cursor(), Some((7, 1)));
    }

    #[test]
    fn draw_uses_crlf() {
        let mut frame = Frame::new();
        frame.text("one");
        frame.text("two");
        let mut out = Vec::new();
        frame.draw(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("one\r\ntwo\r\n"));
    }
}
