//! Light and dark palettes, and the store that shares the current one
//! between every mounted screen.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crossbeam::channel::{unbounded, Receiver, Sender};
use log::debug;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub(crate) fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub(crate) fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl From<bool> for Theme {
    fn from(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

pub(crate) const LIGHT_BACKGROUND: Color = Color::Rgb(0xf8, 0xf9, 0xfa);
pub(crate) const LIGHT_TEXT: Color = Color::Rgb(0x33, 0x33, 0x33);
pub(crate) const DARK_BACKGROUND: Color = Color::Rgb(0x12, 0x12, 0x12);
pub(crate) const DARK_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub(crate) const ACCENT: Color = Color::Rgb(0x00, 0x7b, 0xff);
pub(crate) const BORDER: Color = Color::Rgb(0xdd, 0xdd, 0xdd);

/// Resolved styles for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) text: Color,
    pub(crate) accent: Color,
    pub(crate) border: Color,
}

impl Palette {
    pub(crate) fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    pub(crate) fn heading(&self) -> Style {
        self.base().add_modifier(Modifier::BOLD)
    }

    pub(crate) fn header_bar(&self) -> Style {
        Style::default().bg(self.accent).fg(Color::White)
    }

    pub(crate) fn link(&self) -> Style {
        self.base().fg(self.accent)
    }

    pub(crate) fn selected(&self) -> Style {
        self.link()
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub(crate) fn border(&self) -> Style {
        self.base().fg(self.border)
    }
}

pub(crate) fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            background: LIGHT_BACKGROUND,
            text: LIGHT_TEXT,
            accent: ACCENT,
            border: BORDER,
        },
        Theme::Dark => Palette {
            background: DARK_BACKGROUND,
            text: DARK_TEXT,
            accent: ACCENT,
            border: BORDER,
        },
    }
}

/// Shared handle to the current theme. Clones point at the same state, so a
/// toggle through any handle is seen by every screen holding one.
#[derive(Clone, Default)]
pub(crate) struct ThemeStore {
    inner: Rc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    theme: Cell<Theme>,
    subscribers: RefCell<Vec<Sender<Theme>>>,
}

impl ThemeStore {
    pub(crate) fn new(initial: Theme) -> Self {
        ThemeStore {
            inner: Rc::new(StoreInner {
                theme: Cell::new(initial),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub(crate) fn theme(&self) -> Theme {
        self.inner.theme.get()
    }

    pub(crate) fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    pub(crate) fn palette(&self) -> Palette {
        palette(self.theme())
    }

    /// Flips the theme and notifies subscribers. This is the only way the
    /// theme changes after startup.
    pub(crate) fn toggle(&self) -> Theme {
        let next = self.theme().toggled();
        self.inner.theme.set(next);
        let mut subscribers = self.inner.subscribers.borrow_mut();
        subscribers.retain(|tx| tx.send(next).is_ok());
        debug!(
            "Theme switched to {next:?}, {} subscriber(s) notified",
            subscribers.len()
        );
        next
    }

    pub(crate) fn subscribe(&self) -> Receiver<Theme> {
        let (tx, rx) = unbounded();
        self.inner.subscribers.borrow_mut().push(tx);
        rx
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }
}
