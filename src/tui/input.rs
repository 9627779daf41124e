//! Cursor editing for the numeric length field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Longest input the field accepts.
const MAX_INPUT: usize = 6;

/// Cursor state for the length field. The text itself lives in the form
/// state; the editor turns a key press into the next text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LengthEditor {
    /// 0-based, 0 = before the first digit.
    cursor: usize,
}

impl LengthEditor {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply an editing key. Returns the new text when the key was an edit
    /// (even if the text did not change), `None` for keys the field ignores.
    pub fn apply(&mut self, text: &str, key: &KeyEvent) -> Option<String> {
        let mut digits = text.to_string();
        self.cursor = self.cursor.min(digits.len());

        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                digits.clear();
                self.cursor = 0;
            }
            KeyCode::Char(c) if c.is_ascii_digit() && !has_command_modifier(key) => {
                if digits.len() < MAX_INPUT {
                    digits.insert(self.cursor, c);
                    self.cursor += 1;
                }
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    digits.remove(self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < digits.len() {
                    digits.remove(self.cursor);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(digits.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = digits.len(),
            _ => return None,
        }

        Some(digits)
    }
}

fn has_command_modifier(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn at_end(text: &str) -> LengthEditor {
        let mut editor = LengthEditor::default();
        editor.apply(text, &key(KeyCode::End));
        editor
    }

    fn type_keys(editor: &mut LengthEditor, text: &str, keys: &[KeyCode]) -> String {
        let mut text = text.to_string();
        for code in keys {
            if let Some(next) = editor.apply(&text, &key(*code)) {
                text = next;
            }
        }
        text
    }

    #[test]
    fn inserts_at_cursor() {
        let mut editor = LengthEditor::default();
        let text = type_keys(
            &mut editor,
            "",
            &[KeyCode::Char('6'), KeyCode::Home, KeyCode::Char('1')],
        );
        assert_eq!(text, "16");
        assert_eq!(editor.cursor(), 1);
    }

    #[test]
    fn backspace_and_delete() {
        let mut editor = at_end("123");
        let text = type_keys(
            &mut editor,
            "123",
            &[KeyCode::Backspace, KeyCode::Home, KeyCode::Delete],
        );
        assert_eq!(text, "2");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn ignores_letters_and_caps_length() {
        let mut editor = LengthEditor::default();
        assert_eq!(editor.apply("", &key(KeyCode::Char('a'))), None);
        let text = type_keys(&mut editor, "", &[KeyCode::Char('9'); 10]);
        assert_eq!(text, "999999");
    }

    #[test]
    fn ctrl_u_clears() {
        let mut editor = at_end("42");
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(editor.apply("42", &ctrl_u), Some(String::new()));
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut editor = at_end("7");
        assert_eq!(editor.apply("7", &key(KeyCode::Right)), Some("7".into()));
        assert_eq!(editor.cursor(), 1);
        editor.apply("7", &key(KeyCode::Left));
        editor.apply("7", &key(KeyCode::Left));
        assert_eq!(editor.cursor(), 0);
    }
}
