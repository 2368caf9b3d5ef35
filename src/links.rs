use crate::error::{Error, Result};
use log::{debug, error};

/// Hands a `mailto:` or web URL to whatever the system uses to open it.
pub(crate) trait LinkOpener {
    fn open(&self, target: &str) -> Result<()>;
}

pub(crate) struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, target: &str) -> Result<()> {
        debug!("Opening {target}");
        open::that_detached(target).map_err(|e| Error::Link(format!("{target}: {e}")))
    }
}

/// Opens `target` without letting a failure escape. Returns the message to
/// show in the status line.
pub(crate) fn launch(opener: &dyn LinkOpener, target: &str) -> String {
    match opener.open(target) {
        Ok(()) => format!("Opened {target}"),
        Err(e) => {
            error!("{e}");
            e.to_string()
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingOpener;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn launch_reports_success() {
        let opener = RecordingOpener::default();
        assert_eq!(launch(&opener, "https://example.com"), "Opened https://example.com");
        assert_eq!(*opener.opened.borrow(), vec!["https://example.com"]);
    }

    #[test]
    fn launch_swallows_failure() {
        let opener = RecordingOpener {
            fail: true,
            ..Default::default()
        };
        let msg = launch(&opener, "mailto:a@b.c");
        assert_eq!(msg, "Unable to open link: mailto:a@b.c: no handler");
    }
}
