use crate::{
    commands::Command,
    theme::ThemeStore,
    types::{find_project, ProjectId, PROJECTS},
    views::{centered, Route, Transition, View},
};
use log::debug;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use tui_textarea::{Input, Key};

/// The project list with an inline description of the selected entry.
/// Mounted fresh on every navigation, so nothing is selected at first.
pub(crate) struct ProjectsView {
    theme: ThemeStore,
    selected: Option<ProjectId>,
    cursor: ListState,
}

impl ProjectsView {
    pub(crate) fn new(theme: ThemeStore) -> Self {
        let mut cursor = ListState::default();
        cursor.select(Some(0));
        ProjectsView {
            theme,
            selected: None,
            cursor,
        }
    }

    #[cfg(test)]
    pub(crate) fn selected(&self) -> Option<ProjectId> {
        self.selected
    }

    /// Marks `id` as selected. Selecting the current entry again is a no-op.
    fn select(&mut self, id: ProjectId) -> Transition {
        let Some(index) = PROJECTS.iter().position(|p| p.id == id) else {
            return Transition::Notice(format!("No project with id {id}"));
        };
        self.cursor.select(Some(index));
        if self.selected != Some(id) {
            debug!("Selected project {id}");
            self.selected = Some(id);
        }
        Transition::Redraw
    }

    fn select_cursor(&mut self) -> Transition {
        match self.cursor.selected().and_then(|i| PROJECTS.get(i)) {
            Some(project) => self.select(project.id),
            None => Transition::Stay,
        }
    }

    fn move_cursor(&mut self, down: bool) -> Transition {
        let current = self.cursor.selected().unwrap_or(0);
        let next = if down {
            (current + 1).min(PROJECTS.len() - 1)
        } else {
            current.saturating_sub(1)
        };
        self.cursor.select(Some(next));
        Transition::Redraw
    }

    pub(crate) fn description(&self) -> Option<&'static str> {
        self.selected
            .and_then(find_project)
            .map(|p| p.description)
    }
}

impl View for ProjectsView {
    fn route(&self) -> Route {
        Route::Projects
    }

    fn title(&self) -> &'static str {
        "Projects"
    }

    fn hints(&self) -> &'static str {
        "1-3/enter select · ↑↓ move · b back · : command · q quit"
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.theme.palette();
        frame.render_widget(Block::default().style(palette.base()), area);

        let area = centered(area, 72);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(PROJECTS.len() as u16),
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new(Line::styled("My Projects", palette.heading()))
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = PROJECTS
            .iter()
            .map(|project| {
                let style = if self.selected == Some(project.id) {
                    palette.selected()
                } else {
                    palette.link()
                };
                ListItem::new(Line::styled(project.to_string(), style))
            })
            .collect();
        let list = List::new(items)
            .style(palette.base())
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[1], &mut self.cursor);

        if let Some(description) = self.description() {
            let description = Paragraph::new(description)
                .style(palette.base())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(palette.border())
                        .style(palette.base()),
                );
            frame.render_widget(description, chunks[3]);
        }
    }

    fn handle_key(&mut self, input: Input) -> Transition {
        match input {
            Input {
                key: Key::Char(c @ '1'..='9'),
                ctrl: false,
                ..
            } => match c.to_digit(10) {
                Some(id) => self.select(id),
                None => Transition::Stay,
            },
            Input { key: Key::Up, .. }
            | Input {
                key: Key::Char('k'),
                ctrl: false,
                ..
            } => self.move_cursor(false),
            Input { key: Key::Down, .. }
            | Input {
                key: Key::Char('j'),
                ctrl: false,
                ..
            } => self.move_cursor(true),
            Input {
                key: Key::Enter, ..
            } => self.select_cursor(),
            Input { key: Key::Esc, .. }
            | Input {
                key: Key::Backspace,
                ..
            }
            | Input {
                key: Key::Char('b'),
                ctrl: false,
                ..
            } => Transition::Back,
            Input {
                key: Key::Char('q'),
                ..
            } => Transition::Quit,
            _ => Transition::Stay,
        }
    }

    fn handle_command(&mut self, command: Command) -> Transition {
        match command {
            Command::Select(id) => self.select(id),
            Command::Back => Transition::Back,
            Command::Quit => Transition::Quit,
            Command::Projects => Transition::Stay,
            Command::Theme | Command::Mail | Command::Web => {
                Transition::Notice("go back to the home screen for that".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        theme::{Theme, DARK_BACKGROUND, LIGHT_BACKGROUND},
        views::testing::{background, key, press, render, text},
    };
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    fn projects() -> (ProjectsView, ThemeStore) {
        let store = ThemeStore::new(Theme::Light);
        (ProjectsView::new(store.clone()), store)
    }

    #[test]
    fn nothing_selected_on_mount() {
        let (mut view, _) = projects();
        assert_eq!(view.selected(), None);
        let screen = text(&render(&mut view));
        assert!(screen.contains("My Projects"));
        assert!(screen.contains("React Native Portfolio"));
        assert!(screen.contains("Mobile App Development"));
        assert!(screen.contains("Web Development"));
        for project in PROJECTS {
            assert!(!screen.contains(project.description));
        }
    }

    #[test]
    fn selecting_shows_that_description() {
        for project in PROJECTS {
            let (mut view, _) = projects();
            let digit = char::from_digit(project.id, 10).unwrap();
            assert_eq!(view.handle_key(press(digit)), Transition::Redraw);
            assert_eq!(view.description(), Some(project.description));
            assert!(text(&render(&mut view)).contains(project.description));
        }
    }

    #[test]
    fn second_selection_replaces_first() {
        let (mut view, _) = projects();
        view.handle_key(press('1'));
        view.handle_key(press('3'));
        assert_eq!(view.selected(), Some(3));
        let screen = text(&render(&mut view));
        assert!(screen.contains(PROJECTS[2].description));
        assert!(!screen.contains(PROJECTS[0].description));
    }

    #[test]
    fn selecting_twice_keeps_selection() {
        let (mut view, _) = projects();
        view.handle_command(Command::Select(2));
        view.handle_command(Command::Select(2));
        assert_eq!(view.selected(), Some(2));
    }

    #[test]
    fn unknown_id_leaves_selection() {
        let (mut view, _) = projects();
        view.handle_key(press('2'));
        assert!(matches!(view.handle_key(press('7')), Transition::Notice(_)));
        assert_eq!(view.selected(), Some(2));
    }

    #[test]
    fn cursor_selects_row() {
        let (mut view, _) = projects();
        view.handle_key(key(KeyCode::Down));
        view.handle_key(key(KeyCode::Down));
        view.handle_key(key(KeyCode::Down));
        view.handle_key(key(KeyCode::Enter));
        assert_eq!(view.selected(), Some(3));
        view.handle_key(key(KeyCode::Up));
        view.handle_key(key(KeyCode::Enter));
        assert_eq!(view.selected(), Some(2));
    }

    #[test]
    fn back_keys() {
        let (mut view, _) = projects();
        assert_eq!(view.handle_key(press('b')), Transition::Back);
        assert_eq!(view.handle_key(key(KeyCode::Esc)), Transition::Back);
        assert_eq!(view.handle_key(press('q')), Transition::Quit);
    }

    #[test]
    fn follows_theme_toggled_elsewhere() {
        let (mut view, store) = projects();
        assert_eq!(background(&render(&mut view)), LIGHT_BACKGROUND);
        store.toggle();
        assert_eq!(background(&render(&mut view)), DARK_BACKGROUND);
    }
}
