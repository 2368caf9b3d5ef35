use std::{fmt::Display, io::Error as IOError};

use xdg::BaseDirectoriesError;

#[derive(Debug)]
pub(crate) enum Error {
    Io(IOError),
    Config(String),
    Link(String),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;

impl From<IOError> for Error {
    fn from(value: IOError) -> Self {
        Error::Io(value)
    }
}

impl From<BaseDirectoriesError> for Error {
    fn from(value: BaseDirectoriesError) -> Self {
        Error::Config(format!("Unable to locate XDG directories: {value}"))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Config(msg) => write!(f, "Configuration error: {msg}"),
            Error::Link(msg) => write!(f, "Unable to open link: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}
