//! A form: ordered fields, one focused at a time.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::field::{Field, FieldSpec};

/// What a key press asks of the form's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSignal {
    /// Handled internally, nothing to do.
    Pending,
    /// Enter on a text field.
    Submit,
    /// Esc or Ctrl+C.
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Form {
    title: &'static str,
    help: &'static str,
    specs: Vec<FieldSpec>,
    fields: Vec<Field>,
    focus: usize,
    last_error: Option<String>,
}

impl Form {
    pub fn new(title: &'static str, help: &'static str, specs: Vec<FieldSpec>) -> Self {
        let fields = specs.iter().map(FieldSpec::build).collect();
        Self {
            title,
            help,
            specs,
            fields,
            focus: 0,
            last_error: None,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn help(&self) -> &'static str {
        self.help
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Field descriptors paired with their state, in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&FieldSpec, &Field)> {
        self.specs.iter().zip(&self.fields)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.specs.iter().position(|spec| spec.key == key)
    }

    /// Raw value of a text field; empty for unknown keys and toggles.
    pub fn text(&self, key: &str) -> &str {
        self.position(key)
            .and_then(|i| self.fields[i].text())
            .unwrap_or_default()
    }

    pub fn checked(&self, key: &str) -> bool {
        self.position(key)
            .and_then(|i| self.fields[i].checked())
            .unwrap_or(false)
    }

    /// First required text field that is blank after trimming.
    pub fn first_missing(&self) -> Option<&FieldSpec> {
        self.entries()
            .find(|(spec, field)| {
                spec.required && field.text().is_some_and(|value| value.trim().is_empty())
            })
            .map(|(spec, _)| spec)
    }

    fn toggle_focused(&mut self) {
        if let Some(Field::Toggle(on)) = self.fields.get_mut(self.focus) {
            *on = !*on;
            self.last_error = None;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormSignal {
        let focused_toggle = self.fields.get(self.focus).is_some_and(Field::is_toggle);

        match key.code {
            KeyCode::Esc => return FormSignal::Cancelled,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return FormSignal::Cancelled;
            }
            KeyCode::Tab | KeyCode::Down => self.next(),
            KeyCode::BackTab | KeyCode::Up => self.previous(),
            KeyCode::Enter | KeyCode::Char(' ') if focused_toggle => self.toggle_focused(),
            KeyCode::Enter => return FormSignal::Submit,
            _ => {
                if let Some(Field::Text(input)) = self.fields.get_mut(self.focus) {
                    if input.handle_key(key) {
                        self.last_error = None;
                    }
                }
            }
        }
        FormSignal::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn form() -> Form {
        Form::new(
            "Test",
            "help",
            vec![
                FieldSpec::text("name", "Name", "name", 10).required(),
                FieldSpec::text("path", "Path", "path", 20),
                FieldSpec::toggle("flag", "Flag", false),
            ],
        )
    }

    fn type_text(form: &mut Form, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = form();
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focus(), 2);
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus(), 0);
        form.handle_key(key(KeyCode::Down));
        form.handle_key(key(KeyCode::Down));
        form.handle_key(key(KeyCode::Up));
        assert_eq!(form.focus(), 1);
    }

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut form = form();
        type_text(&mut form, "abc");
        form.handle_key(key(KeyCode::Tab));
        type_text(&mut form, "gitops");
        assert_eq!(form.text("name"), "abc");
        assert_eq!(form.text("path"), "gitops");
        assert_eq!(form.text("missing"), "");
    }

    #[test]
    fn space_and_enter_flip_a_focused_toggle() {
        let mut form = form();
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.handle_key(key(KeyCode::Char(' '))), FormSignal::Pending);
        assert!(form.checked("flag"));
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormSignal::Pending);
        assert!(!form.checked("flag"));
    }

    #[test]
    fn flipping_a_toggle_leaves_text_fields_alone() {
        let mut form = form();
        type_text(&mut form, "abc");
        form.handle_key(key(KeyCode::BackTab));
        form.handle_key(key(KeyCode::Char(' ')));
        form.handle_key(key(KeyCode::Enter));

        assert_eq!(form.text("name"), "abc");
        assert_eq!(form.text("path"), "");
        assert!(!form.checked("flag"));
        assert_eq!(form.focus(), 2);
    }

    #[test]
    fn space_in_a_text_field_is_text() {
        let mut form = form();
        type_text(&mut form, "a b");
        assert_eq!(form.text("name"), "a b");
        assert!(!form.checked("flag"));
    }

    #[test]
    fn enter_on_text_submits_and_esc_cancels() {
        let mut form = form();
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormSignal::Submit);
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormSignal::Cancelled);
        assert_eq!(
            form.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            FormSignal::Cancelled
        );
    }

    #[test]
    fn editing_clears_the_last_error() {
        let mut form = form();
        form.set_error("name is required");
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.last_error(), Some("name is required"));
        form.handle_key(key(KeyCode::Char('x')));
        assert_eq!(form.last_error(), None);
    }

    #[test]
    fn first_missing_ignores_optional_fields() {
        let mut form = form();
        assert_eq!(form.first_missing().map(|s| s.key), Some("name"));
        type_text(&mut form, "  ");
        assert_eq!(form.first_missing().map(|s| s.key), Some("name"));
        type_text(&mut form, "x");
        assert!(form.first_missing().is_none());
    }
}
