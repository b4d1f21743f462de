use thiserror::Error;

pub type DemoResult<T> = Result<T, DemoError>;

/// Errors reported by the registry, the lifecycle guard and demo initialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DemoError {
    #[error("no demo registered under '{0}'")]
    UnknownDemo(String),

    #[error("a demo named '{0}' is already registered")]
    DuplicateName(String),

    #[error("demo '{0}' was already initialized")]
    AlreadyInitialized(String),

    #[error("demo '{0}' has not been initialized")]
    NotInitialized(String),

    #[error("no demo is active")]
    NoActiveDemo,

    #[error("demo '{name}' failed to initialize: {reason}")]
    Init { name: String, reason: String },
}

impl DemoError {
    /// Shorthand for a concrete demo reporting a setup failure from `on_init`.
    pub fn init(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Init { name: name.into(), reason: reason.into() }
    }
}
