use std::fmt;

use pathviz_core::ModelError;

/// Errors returned by the session controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A replay is still running; launches and path clears must wait.
    InFlight,
    /// No goal node is selected.
    NoGoal,
    /// The requested edit is not valid for the structure.
    Model(ModelError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InFlight => write!(f, "a search replay is still in flight"),
            Self::NoGoal => write!(f, "no goal node selected"),
            Self::Model(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Model(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ModelError> for SessionError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}
