use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("line {line}: year {value:?} is not a number")]
    InvalidYear { line: usize, value: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;

// Readers carry no path; `load_from_file` fills it in.
impl From<std::io::Error> for GraphError {
    fn from(source: std::io::Error) -> Self {
        GraphError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl GraphError {
    pub(crate) fn with_path(self, path: PathBuf) -> Self {
        match self {
            GraphError::Io { source, .. } => GraphError::Io { source, path },
            other => other,
        }
    }
}
