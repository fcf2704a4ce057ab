use std::io;
use thiserror::Error;

/// All error types for pawk
#[derive(Error, Debug)]
pub enum Error {
    #[error("syntax error at offset {offset}: {message} in '{token}'")]
    Syntax {
        message: String,
        token: String,
        offset: usize,
    },

    #[error("{message}")]
    Usage { message: String },

    #[error("cannot run '{engine}': {source}")]
    Launch {
        engine: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn syntax(message: impl Into<String>, token: impl Into<String>, offset: usize) -> Self {
        Self::Syntax {
            message: message.into(),
            token: token.into(),
            offset,
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub fn launch(engine: impl Into<String>, source: io::Error) -> Self {
        Self::Launch {
            engine: engine.into(),
            source,
        }
    }

    /// Process exit code reported for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Launch { .. } => 127,
            Error::Syntax { .. } | Error::Usage { .. } | Error::Io(_) => 2,
        }
    }
}

/// Result type alias for pawk operations
pub type Result<T> = std::result::Result<T, Error>;
