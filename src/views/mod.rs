pub(crate) mod home;
pub(crate) mod projects;

use crate::commands::Command;
use ratatui::{layout::Rect, Frame};
use tui_textarea::Input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    Projects,
}

/// What a screen asks of the router after handling an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Transition {
    /// Nothing this screen owns changed.
    Stay,
    /// Screen-local state changed and needs a redraw.
    Redraw,
    /// Show a message in the status line.
    Notice(String),
    Navigate(Route),
    Back,
    Quit,
}

/// A full-screen state on the navigation stack.
pub(crate) trait View {
    fn route(&self) -> Route;

    fn title(&self) -> &'static str;

    /// Key help shown in the status line when nothing else is.
    fn hints(&self) -> &'static str;

    fn draw(&mut self, frame: &mut Frame, area: Rect);

    fn handle_key(&mut self, input: Input) -> Transition;

    fn handle_command(&mut self, command: Command) -> Transition;
}

/// Horizontally centred strip of at most `width` columns.
pub(crate) fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};
    use tui_textarea::Input;

    use super::View;

    pub(crate) fn key(code: KeyCode) -> Input {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE)).into()
    }

    pub(crate) fn press(c: char) -> Input {
        key(KeyCode::Char(c))
    }

    pub(crate) fn render(view: &mut dyn View) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                view.draw(frame, area)
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    pub(crate) fn text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn background(buffer: &Buffer) -> Color {
        buffer.get(0, 0).bg
    }
}
