use crate::theme::Palette;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::{Input, Key, TextArea};

pub(crate) enum CommandBarEvent {
    Editing,
    Cancelled,
    Submitted(String),
}

/// The line at the bottom of every screen. Shows the status message or key
/// hints, or a command editor while the user is typing after `:`.
pub(crate) struct CommandBar {
    editor: TextArea<'static>,
    active: bool,
}

impl Default for CommandBar {
    fn default() -> Self {
        CommandBar {
            editor: new_editor(),
            active: false,
        }
    }
}

fn new_editor() -> TextArea<'static> {
    let mut editor = TextArea::default();
    editor.set_cursor_line_style(Style::default());
    editor.set_placeholder_text("Enter a command...");
    editor
}

impl CommandBar {
    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn open(&mut self) {
        self.editor = new_editor();
        self.active = true;
    }

    fn close(&mut self) {
        self.active = false;
        self.editor = new_editor();
    }

    pub(crate) fn input(&mut self, input: Input) -> CommandBarEvent {
        match input {
            Input { key: Key::Esc, .. } => {
                self.close();
                CommandBarEvent::Cancelled
            }
            Input {
                key: Key::Enter, ..
            } => {
                let line = self.editor.lines().first().cloned().unwrap_or_default();
                self.close();
                CommandBarEvent::Submitted(line)
            }
            input => {
                self.editor.input(input);
                CommandBarEvent::Editing
            }
        }
    }

    pub(crate) fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette, line: &str) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(palette.border())
            .style(palette.base());
        if self.active {
            self.editor.set_style(palette.base());
            self.editor.set_block(block.title(":"));
            frame.render_widget(self.editor.widget(), area);
        } else {
            frame.render_widget(Paragraph::new(line).style(palette.base()).block(block), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing::{key, press};
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    fn submit(bar: &mut CommandBar) -> Option<String> {
        match bar.input(key(KeyCode::Enter)) {
            CommandBarEvent::Submitted(line) => Some(line),
            _ => None,
        }
    }

    #[test]
    fn typed_line_is_submitted() {
        let mut bar = CommandBar::default();
        bar.open();
        for c in "select 2".chars() {
            bar.input(press(c));
        }
        assert_eq!(submit(&mut bar), Some("select 2".to_string()));
        assert!(!bar.is_active());
    }

    #[test]
    fn escape_discards_input() {
        let mut bar = CommandBar::default();
        bar.open();
        bar.input(press('q'));
        assert!(matches!(bar.input(key(KeyCode::Esc)), CommandBarEvent::Cancelled));
        bar.open();
        assert_eq!(submit(&mut bar), Some(String::new()));
    }
}
