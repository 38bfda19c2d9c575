//! The top-level menu.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

/// Menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    InitRepository,
    NewResource,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [Self::InitRepository, Self::NewResource, Self::Quit];

    pub fn title(self) -> &'static str {
        match self {
            Self::InitRepository => "Initialize Repository",
            Self::NewResource => "New Resource",
            Self::Quit => "Quit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::InitRepository => "Create a new ArgoCD repository structure",
            Self::NewResource => "Create a new ArgoCD resource (ApplicationSet, etc.)",
            Self::Quit => "Exit the application",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSignal {
    None,
    Open(MenuItem),
    Quit,
}

#[derive(Debug, Clone)]
pub struct Menu {
    state: ListState,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    /// Fresh menu with the first item selected.
    pub fn new() -> Self {
        Self {
            state: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn selected(&self) -> MenuItem {
        let index = self.state.selected().unwrap_or(0);
        MenuItem::ALL[index.min(MenuItem::ALL.len() - 1)]
    }

    pub fn state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    fn select(&mut self, index: usize) {
        self.state.select(Some(index.min(MenuItem::ALL.len() - 1)));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> MenuSignal {
        let current = self.state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => MenuSignal::Quit,
            KeyCode::Char('q') => MenuSignal::Quit,
            KeyCode::Up | KeyCode::Char('k') => {
                self.select(current.saturating_sub(1));
                MenuSignal::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select(current + 1);
                MenuSignal::None
            }
            KeyCode::Enter => MenuSignal::Open(self.selected()),
            _ => MenuSignal::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn starts_on_the_first_item() {
        let mut menu = Menu::new();
        assert_eq!(menu.selected(), MenuItem::InitRepository);
        assert_eq!(
            menu.handle_key(key(KeyCode::Enter)),
            MenuSignal::Open(MenuItem::InitRepository)
        );
    }

    #[test]
    fn navigation_clamps_at_the_ends() {
        let mut menu = Menu::new();
        menu.handle_key(key(KeyCode::Up));
        assert_eq!(menu.selected(), MenuItem::InitRepository);

        menu.handle_key(key(KeyCode::Down));
        menu.handle_key(key(KeyCode::Char('j')));
        menu.handle_key(key(KeyCode::Down));
        assert_eq!(menu.selected(), MenuItem::Quit);

        menu.handle_key(key(KeyCode::Char('k')));
        assert_eq!(menu.selected(), MenuItem::NewResource);
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut menu = Menu::new();
        assert_eq!(menu.handle_key(key(KeyCode::Char('q'))), MenuSignal::Quit);
        assert_eq!(
            menu.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            MenuSignal::Quit
        );
    }

    #[test]
    fn other_keys_are_inert() {
        let mut menu = Menu::new();
        assert_eq!(menu.handle_key(key(KeyCode::Char('x'))), MenuSignal::None);
        assert_eq!(menu.handle_key(key(KeyCode::Tab)), MenuSignal::None);
        assert_eq!(menu.selected(), MenuItem::InitRepository);
    }
}
