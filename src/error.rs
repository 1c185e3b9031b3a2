use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The factory has no widget mapping for an argument's declared kind.
    #[error("no widget mapping for argument '{arg}' of type {type_name}")]
    UnsupportedType { arg: String, type_name: String },
    /// A widget value could not be read back at accept time.
    #[error("could not resolve value for argument '{arg}': {reason}")]
    Resolution { arg: String, reason: String },
    /// The same argument name was declared more than once in one schema.
    #[error("duplicate argument name: '{0}'")]
    DuplicateArg(String),
    /// The windowing shell failed while presenting the dialog.
    #[cfg(feature = "native")]
    #[error("window host error: {0}")]
    Host(String),
}

impl Error {
    pub(crate) fn resolution(arg: &str, reason: impl Into<String>) -> Self {
        Self::Resolution { arg: arg.to_string(), reason: reason.into() }
    }
}

/// Result alias.
pub type Result<T, E = Error> = core::result::Result<T, E>;
