mod app;
mod command_widget;
mod commands;
mod config;
mod error;
mod links;
mod theme;
mod types;
mod views;
use crate::app::App;
use crate::config::Config;
use crate::error::Result;
use crate::links::SystemOpener;
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use log::{debug, error};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::{io::stdout, panic, rc::Rc};

fn main() -> Result<()> {
    env_logger::init();
    debug!("Loading config...");
    let config = Config::load()?;
    debug!("Loaded config for {}.", config.profile.name);
    restore_on_panic();

    guarded(setup_terminal, run(config), restore_terminal)
}

fn run(config: Config) -> impl FnOnce(()) -> Result<()> {
    move |()| {
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        let mut app = App::new(config, Rc::new(SystemOpener));
        app.run(&mut terminal)
    }
}

fn setup_terminal() -> Result<()> {
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn restore_on_panic() {
    let hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        hook(info);
    }));
}

/// Runs `body` on whatever `setup` produced. `restore` runs whether setup or
/// body failed; the first error wins.
fn guarded<T, S, B, R>(setup: S, body: B, restore: R) -> Result<()>
where
    S: FnOnce() -> Result<T>,
    B: FnOnce(T) -> Result<()>,
    R: FnOnce() -> Result<()>,
{
    let result = setup().and_then(body);
    let restored = restore();
    if let (Err(e), Err(_)) = (&restored, &result) {
        error!("Unable to restore the terminal: {e}");
    }
    result.and(restored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::Cell;

    fn fail(msg: &str) -> Error {
        Error::Config(msg.to_string())
    }

    #[test]
    fn restores_after_success() {
        let restored = Cell::new(false);
        let result = guarded(
            || Ok(2),
            |n| if n == 2 { Ok(()) } else { Err(fail("body")) },
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(result.is_ok());
        assert!(restored.get());
    }

    #[test]
    fn restores_when_setup_fails() {
        let restored = Cell::new(false);
        let ran = Cell::new(false);
        let result = guarded(
            || Err::<(), _>(fail("raw mode")),
            |()| {
                ran.set(true);
                Ok(())
            },
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(matches!(result, Err(Error::Config(msg)) if msg == "raw mode"));
        assert!(!ran.get());
        assert!(restored.get());
    }

    #[test]
    fn restores_when_body_fails() {
        let restored = Cell::new(false);
        let result = guarded(
            || Ok(()),
            |()| Err(fail("loop")),
            || {
                restored.set(true);
                Err(fail("restore"))
            },
        );
        assert!(matches!(result, Err(Error::Config(msg)) if msg == "loop"));
        assert!(restored.get());
    }

    #[test]
    fn restore_error_surfaces_on_success() {
        let result = guarded(|| Ok(()), |()| Ok(()), || Err(fail("restore")));
        assert!(matches!(result, Err(Error::Config(msg)) if msg == "restore"));
    }
}
