use std::rc::Rc;

use crate::{
    commands::Command,
    links::{launch, LinkOpener},
    theme::ThemeStore,
    types::Profile,
    views::{centered, Route, Transition, View},
};
use log::debug;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_textarea::{Input, Key};

const PICTURE_WIDTH: u16 = 14;
const PICTURE_HEIGHT: u16 = 5;

/// Profile, bio, skills, contact links and the dark mode switch.
pub(crate) struct HomeView {
    theme: ThemeStore,
    profile: Rc<Profile>,
    opener: Rc<dyn LinkOpener>,
}

impl HomeView {
    pub(crate) fn new(theme: ThemeStore, profile: Rc<Profile>, opener: Rc<dyn LinkOpener>) -> Self {
        HomeView {
            theme,
            profile,
            opener,
        }
    }

    fn toggle_dark_mode(&self) -> Transition {
        let theme = self.theme.toggle();
        debug!("Dark mode switched {}", if theme.is_dark() { "on" } else { "off" });
        // the store notifies the app, which redraws
        Transition::Stay
    }

    fn open_mail(&self) -> Transition {
        Transition::Notice(launch(self.opener.as_ref(), &self.profile.mail_target()))
    }

    fn open_website(&self) -> Transition {
        Transition::Notice(launch(self.opener.as_ref(), &self.profile.website))
    }

    fn details(&self) -> Vec<Line<'_>> {
        let palette = self.theme.palette();
        let profile = &self.profile;
        let switch = if self.theme.is_dark() { "[ on ]" } else { "[ off ]" };
        vec![
            Line::styled(profile.name.as_str(), palette.heading()),
            Line::default(),
            Line::styled(profile.bio.as_str(), palette.base()),
            Line::default(),
            Line::from(vec![
                Span::styled("Skills: ", palette.heading()),
                Span::styled(profile.skills.join(" · "), palette.base()),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("[m] ", palette.base()),
                Span::styled(profile.email.as_str(), palette.link()),
                Span::styled("   [w] ", palette.base()),
                Span::styled(profile.website.as_str(), palette.link()),
            ]),
            Line::default(),
            Line::styled(" View Projects [p] ", palette.header_bar()),
            Line::default(),
            Line::from(vec![
                Span::styled("Dark Mode ", palette.base()),
                Span::styled(switch, palette.link()),
                Span::styled(" [t]", palette.base()),
            ]),
        ]
    }
}

impl View for HomeView {
    fn route(&self) -> Route {
        Route::Home
    }

    fn title(&self) -> &'static str {
        "Home"
    }

    fn hints(&self) -> &'static str {
        "p projects · t dark mode · m mail · w website · : command · q quit"
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.theme.palette();
        frame.render_widget(Block::default().style(palette.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(PICTURE_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let picture = Paragraph::new(vec![
            Line::default(),
            Line::styled(self.profile.initials(), palette.heading()),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border())
                .style(palette.base()),
        );
        frame.render_widget(picture, centered(chunks[0], PICTURE_WIDTH));

        // asset name or URL of the picture the box stands in for
        let caption = Paragraph::new(Line::styled(self.profile.picture.as_str(), palette.border()))
            .alignment(Alignment::Center);
        frame.render_widget(caption, centered(chunks[1], 72));

        let details = Paragraph::new(self.details())
            .style(palette.base())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(details, centered(chunks[2], 72));
    }

    fn handle_key(&mut self, input: Input) -> Transition {
        match input {
            Input {
                key: Key::Char('t') | Key::Char(' '),
                ctrl: false,
                ..
            } => self.toggle_dark_mode(),
            Input {
                key: Key::Char('p') | Key::Enter,
                ctrl: false,
                ..
            } => Transition::Navigate(Route::Projects),
            Input {
                key: Key::Char('m'),
                ctrl: false,
                ..
            } => self.open_mail(),
            Input {
                key: Key::Char('w'),
                ctrl: false,
                ..
            } => self.open_website(),
            Input { key: Key::Esc, .. }
            | Input {
                key: Key::Char('q'),
                ..
            } => Transition::Quit,
            _ => Transition::Stay,
        }
    }

    fn handle_command(&mut self, command: Command) -> Transition {
        match command {
            Command::Projects => Transition::Navigate(Route::Projects),
            Command::Theme => self.toggle_dark_mode(),
            Command::Mail => self.open_mail(),
            Command::Web => self.open_website(),
            Command::Back => Transition::Back,
            Command::Quit => Transition::Quit,
            Command::Select(_) => {
                Transition::Notice("select is only available on the projects screen".to_string())
            }
        }
    }
}
