use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("{action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: invalid color {value:?} for {key}")]
    InvalidColor {
        line: usize,
        key: String,
        value: String,
    },

    #[error("theme file has no name= line")]
    MissingName,

    #[error("theme file is missing role {key}")]
    MissingRole { key: &'static str },
}

impl ThemeError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
