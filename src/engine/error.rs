use std::fmt;
use std::io;

/// Errors from running a search in the background
#[derive(Debug)]
pub enum EngineError {
    /// The worker thread could not be started
    Spawn(io::Error),
    /// The worker thread panicked before producing a result
    SearchPanicked,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Spawn(err) => write!(f, "Failed to spawn search thread: {err}"),
            EngineError::SearchPanicked => write!(f, "Search thread panicked"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Spawn(err) => Some(err),
            EngineError::SearchPanicked => None,
        }
    }
}

impl From<io::Error> for EngineError {
    fn from(err: io::Error) -> Self {
        EngineError::Spawn(err)
    }
}
