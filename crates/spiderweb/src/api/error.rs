use std::fmt;

/// Reasons the animator could not be brought up.
#[derive(Debug)]
pub enum InitError {
    /// No element with the given id, or it is not a `<canvas>`.
    CanvasNotFound(String),
    /// The canvas exists but refused to hand out a 2D context.
    ContextUnavailable(String),
    /// The host environment is missing something the canvas needs
    /// (window, document, event registration).
    Environment(String),
    /// A config override failed to parse.
    Config(serde_json::Error),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::CanvasNotFound(id) => write!(f, "canvas '{}' not found", id),
            InitError::ContextUnavailable(id) => {
                write!(f, "canvas '{}' has no 2d rendering context", id)
            }
            InitError::Environment(what) => write!(f, "browser environment unavailable: {}", what),
            InitError::Config(err) => write!(f, "invalid field config: {}", err),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for InitError {
    fn from(err: serde_json::Error) -> Self {
        InitError::Config(err)
    }
}
