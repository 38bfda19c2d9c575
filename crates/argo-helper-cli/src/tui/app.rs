//! Screen state machine for the interactive session.

use crossterm::event::KeyEvent;
use tracing::debug;

use argo_helper_core::application::{PathResolver, ScaffoldUseCase};

use super::menu::{Menu, MenuItem, MenuSignal};
use super::form::FormSignal;
use super::workflows::{FormWorkflow, InitForm, NewResourceForm, submit};
use crate::config::Defaults;

/// Exactly one screen is active at a time.
#[derive(Debug, Clone)]
pub enum Screen {
    Menu(Menu),
    Init(InitForm),
    NewResource(NewResourceForm),
}

enum Transition {
    Stay,
    Quit,
    Open(MenuItem),
    /// Back to a fresh menu, optionally with something to tell the user.
    Menu(Option<String>),
}

pub struct App<'a> {
    use_case: &'a dyn ScaffoldUseCase,
    resolver: PathResolver,
    defaults: Defaults,
    screen: Screen,
    notice: Option<String>,
    should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new(use_case: &'a dyn ScaffoldUseCase, resolver: PathResolver, defaults: Defaults) -> Self {
        Self {
            use_case,
            resolver,
            defaults,
            screen: Screen::Menu(Menu::new()),
            notice: None,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Result of the last completed workflow.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let transition = match &mut self.screen {
            Screen::Menu(menu) => match menu.handle_key(key) {
                MenuSignal::None => Transition::Stay,
                MenuSignal::Quit => Transition::Quit,
                MenuSignal::Open(item) => Transition::Open(item),
            },
            Screen::Init(form) => drive(form, key, &self.resolver, self.use_case),
            Screen::NewResource(form) => drive(form, key, &self.resolver, self.use_case),
        };
        self.apply(transition);
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {}
            Transition::Quit | Transition::Open(MenuItem::Quit) => self.should_quit = true,
            Transition::Open(MenuItem::InitRepository) => {
                debug!("Opening init form");
                self.notice = None;
                self.screen = Screen::Init(InitForm::new(&self.defaults, &self.cwd_hint()));
            }
            Transition::Open(MenuItem::NewResource) => {
                debug!("Opening new-resource form");
                self.notice = None;
                self.screen = Screen::NewResource(NewResourceForm::new(&self.defaults));
            }
            Transition::Menu(notice) => {
                self.notice = notice;
                self.screen = Screen::Menu(Menu::new());
            }
        }
    }

    fn cwd_hint(&self) -> String {
        self.resolver
            .base()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}

fn drive<W: FormWorkflow>(
    workflow: &mut W,
    key: KeyEvent,
    resolver: &PathResolver,
    use_case: &dyn ScaffoldUseCase,
) -> Transition {
    match workflow.form_mut().handle_key(key) {
        FormSignal::Pending => Transition::Stay,
        FormSignal::Cancelled => Transition::Menu(None),
        FormSignal::Submit => match submit(workflow, resolver, use_case) {
            Some(notice) => Transition::Menu(Some(notice)),
            None => Transition::Stay,
        },
    }
}
