//! Form fields: single-line text inputs and boolean toggles.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single-line text input with a cursor and a character limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Cursor position in characters, `0..=len`.
    cursor: usize,
    char_limit: usize,
}

impl TextInput {
    pub fn new(char_limit: usize) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            char_limit,
        }
    }

    /// Pre-filled input, truncated to the limit, cursor at the end.
    pub fn with_value(char_limit: usize, value: &str) -> Self {
        let value: String = value.chars().take(char_limit).collect();
        let cursor = value.chars().count();
        Self {
            value,
            cursor,
            char_limit,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Insert at the cursor. Ignored once the limit is reached.
    pub fn insert(&mut self, c: char) {
        if self.len() >= self.char_limit {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len();
    }

    /// Apply an editing key. Returns `false` for keys that are not edits.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.insert(c)
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.home(),
            KeyCode::End => self.end(),
            _ => return false,
        }
        true
    }
}

/// What kind of value a field holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text {
        /// Shown greyed out while the input is empty.
        placeholder: String,
        char_limit: usize,
        initial: String,
    },
    Toggle {
        initial: bool,
    },
}

/// Describes one field of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Lookup key used by the workflows.
    pub key: &'static str,
    pub label: &'static str,
    /// How validation messages refer to the field.
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn text(key: &'static str, label: &'static str, name: &'static str, char_limit: usize) -> Self {
        Self {
            key,
            label,
            name,
            kind: FieldKind::Text {
                placeholder: String::new(),
                char_limit,
                initial: String::new(),
            },
            required: false,
        }
    }

    pub fn toggle(key: &'static str, label: &'static str, initial: bool) -> Self {
        Self {
            key,
            label,
            name: label,
            kind: FieldKind::Toggle { initial },
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, value: impl Into<String>) -> Self {
        if let FieldKind::Text { placeholder, .. } = &mut self.kind {
            *placeholder = value.into();
        }
        self
    }

    pub fn initial(mut self, value: impl Into<String>) -> Self {
        if let FieldKind::Text { initial, .. } = &mut self.kind {
            *initial = value.into();
        }
        self
    }

    /// Fresh state for this field.
    pub fn build(&self) -> Field {
        match &self.kind {
            FieldKind::Text {
                char_limit, initial, ..
            } => Field::Text(TextInput::with_value(*char_limit, initial)),
            FieldKind::Toggle { initial } => Field::Toggle(*initial),
        }
    }

    /// Placeholder text, empty for toggles.
    pub fn placeholder_text(&self) -> &str {
        match &self.kind {
            FieldKind::Text { placeholder, .. } => placeholder,
            FieldKind::Toggle { .. } => "",
        }
    }
}

/// Live state of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Text(TextInput),
    Toggle(bool),
}

impl Field {
    pub fn is_toggle(&self) -> bool {
        matches!(self, Self::Toggle(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(input) => Some(input.value()),
            Self::Toggle(_) => None,
        }
    }

    pub fn checked(&self) -> Option<bool> {
        match self {
            Self::Toggle(on) => Some(*on),
            Self::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn typed(limit: usize, text: &str) -> TextInput {
        let mut input = TextInput::new(limit);
        for c in text.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        input
    }

    #[test]
    fn typing_appends_and_moves_cursor() {
        let input = typed(30, "payments");
        assert_eq!(input.value(), "payments");
        assert_eq!(input.cursor(), 8);
    }

    #[test]
    fn char_limit_is_enforced() {
        let input = typed(5, "payments");
        assert_eq!(input.value(), "payme");
        assert_eq!(TextInput::with_value(3, "applicationset").value(), "app");
    }

    #[test]
    fn editing_in_the_middle() {
        let mut input = typed(30, "my-aps");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Char('p')));
        assert_eq!(input.value(), "my-apps");

        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.value(), "y-apps");

        input.handle_key(key(KeyCode::End));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "y-app");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn boundaries_are_inert() {
        let mut input = TextInput::new(10);
        input.handle_key(key(KeyCode::Backspace));
        input.handle_key(key(KeyCode::Delete));
        input.handle_key(key(KeyCode::Left));
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);

        input.handle_key(key(KeyCode::Right));
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn multibyte_characters_are_edited_per_char() {
        let mut input = typed(10, "café");
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "caf");
    }

    #[test]
    fn control_chords_are_not_edits() {
        let mut input = TextInput::new(10);
        let handled = input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!handled);
        assert_eq!(input.value(), "");
        assert!(!input.handle_key(key(KeyCode::Tab)));
    }

    #[test]
    fn specs_build_fresh_fields() {
        let spec = FieldSpec::text("resource_type", "Resource Type", "resource type", 30)
            .initial("applicationset");
        assert_eq!(spec.build().text(), Some("applicationset"));

        let toggle = FieldSpec::toggle("include_examples", "Include examples", false);
        assert_eq!(toggle.build().checked(), Some(false));
        assert!(toggle.build().is_toggle());
    }
}
