use std::rc::Rc;

use crate::{
    command_widget::{CommandBar, CommandBarEvent},
    commands::{parse_command, Command},
    config::Config,
    error::Result,
    links::LinkOpener,
    theme::{Theme, ThemeStore},
    types::Profile,
    views::{home::HomeView, projects::ProjectsView, Route, Transition, View},
};
use crossbeam::channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};
use ratatui::{
    prelude::*,
    widgets::Paragraph,
    Frame,
};
use tui_textarea::{Input, Key};

/// What every mounted screen is built from.
#[derive(Clone)]
pub(crate) struct Context {
    pub(crate) theme: ThemeStore,
    pub(crate) profile: Rc<Profile>,
    pub(crate) opener: Rc<dyn LinkOpener>,
}

/// The navigation stack. Home is always at the bottom.
pub(crate) struct Router {
    context: Context,
    stack: Vec<Box<dyn View>>,
}

impl Router {
    pub(crate) fn new(context: Context) -> Self {
        let home = Self::mount(&context, Route::Home);
        Router {
            context,
            stack: vec![home],
        }
    }

    fn mount(context: &Context, route: Route) -> Box<dyn View> {
        debug!("Mounting {route:?}");
        match route {
            Route::Home => Box::new(HomeView::new(
                context.theme.clone(),
                context.profile.clone(),
                context.opener.clone(),
            )),
            Route::Projects => Box::new(ProjectsView::new(context.theme.clone())),
        }
    }

    pub(crate) fn navigate(&mut self, route: Route) {
        if self.current() == route {
            return;
        }
        let view = Self::mount(&self.context, route);
        self.stack.push(view);
    }

    /// Pops the current screen. The root screen stays put.
    pub(crate) fn back(&mut self) {
        if self.stack.len() > 1 {
            if let Some(view) = self.stack.pop() {
                debug!("Unmounting {:?}", view.route());
            }
        }
    }

    pub(crate) fn current(&self) -> Route {
        self.top().route()
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }

    fn top(&self) -> &dyn View {
        // the stack is never empty
        self.stack[self.stack.len() - 1].as_ref()
    }

    fn top_mut(&mut self) -> &mut dyn View {
        let last = self.stack.len() - 1;
        self.stack[last].as_mut()
    }
}

pub(crate) struct App {
    router: Router,
    theme: ThemeStore,
    theme_changes: Receiver<Theme>,
    command_bar: CommandBar,
    status: Option<String>,
    dirty: bool,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(config: Config, opener: Rc<dyn LinkOpener>) -> Self {
        let theme = ThemeStore::new(config.initial_theme);
        let theme_changes = theme.subscribe();
        let context = Context {
            theme: theme.clone(),
            profile: Rc::new(config.profile),
            opener,
        };
        App {
            router: Router::new(context),
            theme,
            theme_changes,
            command_bar: CommandBar::default(),
            status: None,
            dirty: true,
            should_quit: false,
        }
    }

    pub(crate) fn run<B>(&mut self, term: &mut Terminal<B>) -> Result<()>
    where
        B: Backend,
    {
        info!("Starting on {:?} with {:?} theme", self.current(), self.theme.theme());
        while !self.should_quit() {
            if self.needs_redraw() {
                term.draw(|frame| self.draw(frame))?;
            }
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Press => {}
                Event::Resize(..) => self.dirty = true,
                event @ Event::Key(_) => self.handle_input(event.into()),
                _ => {}
            }
        }
        info!("Exiting");
        Ok(())
    }

    /// True when the screen is stale, either from input handled since the
    /// last draw or from a theme change.
    pub(crate) fn needs_redraw(&mut self) -> bool {
        let theme_changed = self.theme_changes.try_iter().count() > 0;
        std::mem::take(&mut self.dirty) || theme_changed
    }

    pub(crate) fn current(&self) -> Route {
        self.router.current()
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub(crate) fn handle_input(&mut self, input: Input) {
        if self.command_bar.is_active() {
            match self.command_bar.input(input) {
                CommandBarEvent::Editing | CommandBarEvent::Cancelled => self.dirty = true,
                CommandBarEvent::Submitted(line) => self.submit(&line),
            }
            return;
        }
        match input {
            Input {
                key: Key::Char('c') | Key::Char('q'),
                ctrl: true,
                ..
            } => self.should_quit = true,
            Input {
                key: Key::Char(':'),
                ..
            } => {
                self.command_bar.open();
                self.dirty = true;
            }
            input => {
                let transition = self.router.top_mut().handle_key(input);
                self.apply(transition);
            }
        }
    }

    fn submit(&mut self, line: &str) {
        self.dirty = true;
        match parse_command(line) {
            Ok(Command::Quit) => self.should_quit = true,
            Ok(command) => {
                debug!("Running {command:?}");
                let transition = self.router.top_mut().handle_command(command);
                self.apply(transition);
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => return,
            Transition::Redraw => {}
            Transition::Notice(message) => {
                self.status = Some(message);
            }
            Transition::Navigate(route) => {
                self.router.navigate(route);
                self.status = None;
            }
            Transition::Back => {
                self.router.back();
                self.status = None;
            }
            Transition::Quit => self.should_quit = true,
        }
        self.dirty = true;
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let palette = self.theme.palette();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(frame.size());

        let nested = self.router.depth() > 1;
        let view = self.router.top_mut();
        let header = if nested {
            format!(" < {}", view.title())
        } else {
            format!(" {}", view.title())
        };
        let hints = view.hints();
        frame.render_widget(Paragraph::new(header).style(palette.header_bar()), chunks[0]);
        view.draw(frame, chunks[1]);

        let line = self.status.as_deref().unwrap_or(hints);
        self.command_bar.render(frame, chunks[2], &palette, line);
    }
}
