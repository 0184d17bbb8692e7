// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Menu(MenuError),
}

/// Specific error types for menu document problems.
/// Used to tell a malformed menu apart from an unusable one.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuError {
    /// The menu contains no drinks; there is no valid selection to start from.
    Empty,

    /// Two drinks share the same identifier.
    DuplicateId(String),

    /// The menu document could not be parsed.
    Parse(String),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::Empty => write!(f, "menu has no drinks"),
            MenuError::DuplicateId(id) => write!(f, "duplicate drink id: {}", id),
            MenuError::Parse(msg) => write!(f, "invalid menu document: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Menu(e) => write!(f, "Menu Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MenuError> for Error {
    fn from(err: MenuError) -> Self {
        Error::Menu(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
