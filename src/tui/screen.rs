//! Form screen: focus, key handling and user-facing notices.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use rand::Rng;

use passform::{AppError, Category, EmptyPoolError, FormError, FormState, ValidationError};

use super::LengthEditor;

/// Focusable controls, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Length,
    Toggle(Category),
    Generate,
    Reset,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Length,
        Focus::Toggle(Category::Lower),
        Focus::Toggle(Category::Upper),
        Focus::Toggle(Category::Digits),
        Focus::Toggle(Category::Symbols),
        Focus::Generate,
        Focus::Reset,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    /// Checkboxes in the order they are drawn.
    pub fn toggles() -> impl Iterator<Item = Category> {
        Self::ORDER.into_iter().filter_map(|f| match f {
            Focus::Toggle(c) => Some(c),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Info(String),
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Copy,
    Quit,
}

#[derive(Debug)]
pub struct Screen {
    pub state: FormState,
    pub focus: Focus,
    pub editor: LengthEditor,
    /// Validation messages show once the field was edited or a submit tried.
    pub touched: bool,
    pub notice: Option<Notice>,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self {
            state: FormState::new(),
            focus: Focus::Length,
            editor: LengthEditor::default(),
            touched: false,
            notice: None,
        }
    }

    /// The message to show under the length field, if any.
    pub fn length_error(&self) -> Option<ValidationError> {
        if !self.touched {
            return None;
        }
        self.state.validation().err()
    }

    pub fn handle_key<R: Rng + ?Sized>(&mut self, key: KeyEvent, rng: &mut R) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return Action::Quit,
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('y') if ctrl => return self.copy_requested(),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                return Action::None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                return Action::None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Length => {
                if key.code == KeyCode::Enter {
                    self.submit(rng);
                } else if let Some(text) = self.editor.apply(&self.state.length_input, &key)
                    && text != self.state.length_input
                {
                    self.state = std::mem::take(&mut self.state).with_length_input(text);
                    self.touched = true;
                }
            }
            Focus::Toggle(category) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.state = std::mem::take(&mut self.state).toggle(category);
                    if !self.state.categories.is_empty() {
                        self.clear_empty_pool_notice();
                    }
                }
            }
            Focus::Generate => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit(rng);
                }
            }
            Focus::Reset => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.reset();
                }
            }
        }

        Action::None
    }

    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.touched = true;
        match self.state.submit(rng) {
            Ok(next) => {
                self.state = next;
                self.notice = None;
            }
            // Shown inline under the field.
            Err(FormError::Validation(_)) => self.notice = None,
            Err(e @ FormError::EmptyPool(_)) => self.notice = Some(Notice::Error(e.to_string())),
        }
    }

    pub fn reset(&mut self) {
        self.state = std::mem::take(&mut self.state).reset();
        self.editor = LengthEditor::default();
        self.touched = false;
        self.notice = None;
    }

    fn clear_empty_pool_notice(&mut self) {
        if let Some(Notice::Error(msg)) = &self.notice
            && *msg == EmptyPoolError.to_string()
        {
            self.notice = None;
        }
    }

    fn copy_requested(&mut self) -> Action {
        if self.state.has_generated() {
            Action::Copy
        } else {
            self.notice = Some(Notice::Error("Nothing to copy yet".to_string()));
            Action::None
        }
    }

    /// Record the outcome of a clipboard copy.
    pub fn copied(&mut self, result: Result<(), AppError>) {
        self.notice = Some(match result {
            Ok(()) => {
                debug!("password copied");
                Notice::Info("Copied to clipboard".to_string())
            }
            Err(e) => Notice::Error(e.to_string()),
        });
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn press(screen: &mut Screen, code: KeyCode) -> Action {
        let mut rng = StdRng::seed_from_u64(3);
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &mut rng)
    }

    fn ctrl(screen: &mut Screen, c: char) -> Action {
        let mut rng = StdRng::seed_from_u64(3);
        screen.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), &mut rng)
    }

    fn type_text(screen: &mut Screen, text: &str) {
        for c in text.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut screen = Screen::new();
        press(&mut screen, KeyCode::BackTab);
        assert_eq!(screen.focus, Focus::Reset);
        press(&mut screen, KeyCode::Tab);
        assert_eq!(screen.focus, Focus::Length);
        press(&mut screen, KeyCode::Down);
        assert_eq!(screen.focus, Focus::Toggle(Category::Lower));
    }

    #[test]
    fn typing_then_enter_generates() {
        let mut screen = Screen::new();
        type_text(&mut screen, "8");
        assert_eq!(screen.state.length_input, "8");
        assert!(screen.touched);
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.state.password().len(), 8);
        assert!(screen.notice.is_none());
    }

    #[test]
    fn error_only_after_touch() {
        let mut screen = Screen::new();
        assert_eq!(screen.length_error(), None);
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.length_error(), Some(ValidationError::Required));
        assert!(!screen.state.has_generated());

        type_text(&mut screen, "20");
        assert_eq!(screen.length_error(), Some(ValidationError::TooLong));
    }

    #[test]
    fn space_toggles_focused_checkbox() {
        let mut screen = Screen::new();
        press(&mut screen, KeyCode::Down);
        press(&mut screen, KeyCode::Down);
        press(&mut screen, KeyCode::Char(' '));
        assert!(screen.state.categories.upper);
        press(&mut screen, KeyCode::Up);
        press(&mut screen, KeyCode::Enter);
        assert!(!screen.state.categories.lower);
    }

    #[test]
    fn empty_pool_surfaces_notice() {
        let mut screen = Screen::new();
        type_text(&mut screen, "10");
        press(&mut screen, KeyCode::Down);
        press(&mut screen, KeyCode::Char(' '));
        screen.focus = Focus::Generate;
        press(&mut screen, KeyCode::Enter);
        assert_eq!(
            screen.notice,
            Some(Notice::Error("Select at least one character type".into()))
        );
        assert!(!screen.state.has_generated());
    }

    #[test]
    fn empty_pool_notice_clears_when_a_category_returns() {
        let mut screen = Screen::new();
        type_text(&mut screen, "8");
        press(&mut screen, KeyCode::Down);
        press(&mut screen, KeyCode::Char(' '));
        screen.focus = Focus::Generate;
        press(&mut screen, KeyCode::Enter);
        assert!(matches!(screen.notice, Some(Notice::Error(_))));

        screen.focus = Focus::Toggle(Category::Upper);
        press(&mut screen, KeyCode::Char(' '));
        assert_eq!(screen.notice, None);
    }

    #[test]
    fn copy_notice_survives_toggles() {
        let mut screen = Screen::new();
        type_text(&mut screen, "8");
        press(&mut screen, KeyCode::Enter);
        screen.copied(Ok(()));

        screen.focus = Focus::Toggle(Category::Digits);
        press(&mut screen, KeyCode::Char(' '));
        assert_eq!(screen.notice, Some(Notice::Info("Copied to clipboard".into())));
    }

    #[test]
    fn reset_button_restores_form() {
        let mut screen = Screen::new();
        type_text(&mut screen, "12");
        press(&mut screen, KeyCode::Enter);
        assert!(screen.state.has_generated());

        screen.focus = Focus::Reset;
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.state, FormState::default());
        assert!(!screen.touched);
        assert_eq!(screen.editor.cursor(), 0);
    }

    #[test]
    fn copy_needs_a_password() {
        let mut screen = Screen::new();
        assert_eq!(ctrl(&mut screen, 'y'), Action::None);
        assert!(matches!(screen.notice, Some(Notice::Error(_))));

        type_text(&mut screen, "5");
        press(&mut screen, KeyCode::Enter);
        assert_eq!(ctrl(&mut screen, 'y'), Action::Copy);

        screen.copied(Err(AppError::Clipboard("no display".into())));
        assert_eq!(
            screen.notice,
            Some(Notice::Error("Clipboard error: no display".into()))
        );
    }

    #[test]
    fn quit_keys() {
        let mut screen = Screen::new();
        assert_eq!(press(&mut screen, KeyCode::Esc), Action::Quit);
        assert_eq!(ctrl(&mut screen, 'q'), Action::Quit);
        assert_eq!(ctrl(&mut screen, 'c'), Action::Quit);
    }
}
