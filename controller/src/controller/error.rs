use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    MissingToken { expected: &'static str },
    UnexpectedMarker { expected: &'static str, found: String },
    InvalidDirection(String),
    InvalidInteger { field: &'static str, value: String },
    EmptyBody,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bad configuration of snake controller: ")?;
        match self {
            ConfigurationError::MissingToken { expected } => {
                write!(f, "missing {}", expected)
            }
            ConfigurationError::UnexpectedMarker { expected, found } => {
                write!(f, "expected marker '{}', found '{}'", expected, found)
            }
            ConfigurationError::InvalidDirection(found) => {
                write!(f, "invalid direction '{}', expected one of U, D, L, R", found)
            }
            ConfigurationError::InvalidInteger { field, value } => {
                write!(f, "invalid {} '{}'", field, value)
            }
            ConfigurationError::EmptyBody => write!(f, "snake length must be positive"),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// An event reached the controller that it has no handler for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexpectedEventError {
    pub kind: &'static str,
}

impl UnexpectedEventError {
    pub fn new(kind: &'static str) -> Self {
        Self { kind }
    }
}

impl fmt::Display for UnexpectedEventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unexpected event received: {}", self.kind)
    }
}

impl std::error::Error for UnexpectedEventError {}
