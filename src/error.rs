use crate::status::{self, Code};
use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// The failure value of an interaction.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A cloneable error, used where errors are kept as metadata.
pub type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// Diagnostic values attached to a [`ContextError`].
pub type Fields = HashMap<String, serde_json::Value>;

/// An error with contextual information: canonical status, application code and
/// structured fields.
///
/// With a status set, the message is `"<status message>: <value>"` (or just the
/// status message without a value); without one it is the value's own message.
#[derive(Debug, Default)]
pub struct ContextError {
    app_code: i64,
    status: Code,
    value: Option<BoxError>,
    context: Fields,
}

impl ContextError {
    /// Wraps an underlying error, no status attached yet.
    pub fn new(value: impl Into<BoxError>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// A contextual error that carries only a status.
    pub fn from_status(code: Code) -> Self {
        Self {
            status: code,
            ..Self::default()
        }
    }

    pub fn with_status(mut self, code: Code) -> Self {
        self.status = code;
        self
    }

    pub fn with_app_code(mut self, app_code: i64) -> Self {
        self.app_code = app_code;
        self
    }

    pub fn with_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.context = fields;
        self
    }

    /// Application level error code.
    pub fn app_code(&self) -> i64 {
        self.app_code
    }

    /// Structured context of the error.
    pub fn fields(&self) -> &Fields {
        &self.context
    }

    /// Status of the error, [`Code::Ok`] when none was set.
    pub fn status(&self) -> Code {
        self.status
    }

    /// Status of the error if one was set.
    pub fn status_code(&self) -> Option<Code> {
        (!self.status.is_ok()).then_some(self.status)
    }

    pub fn value(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.value.as_deref()
    }

    /// Unwraps into the parent error: the value wrapped with the status when one is
    /// set, the raw value otherwise.
    pub fn into_inner(self) -> Option<BoxError> {
        match self.status_code() {
            Some(code) => Some(status::wrap_option(self.value, code)),
            None => self.value,
        }
    }
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status_code(), &self.value) {
            (Some(code), Some(value)) => write!(f, "{}: {}", code.message(), value),
            (Some(code), None) => f.write_str(code.message()),
            (None, Some(value)) => write!(f, "{value}"),
            // Neither cause nor status: nothing was classified.
            (None, None) => f.write_str(Code::Unknown.message()),
        }
    }
}

impl StdError for ContextError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.value.as_deref().map(|value| value as &(dyn StdError + 'static))
    }
}

/// Failures of typed interactors receiving values of the wrong type.
#[derive(Debug, Error)]
pub enum PortError {
    #[error("invalid input type received, {expected} expected")]
    InvalidInput { expected: &'static str },

    #[error("invalid output type received, {expected} expected")]
    InvalidOutput { expected: &'static str },
}
