//! Error classification types for the assertion helpers
//!
//! A [`Known`] is a stable identity (code, message, namespace) that separates
//! classified errors from ad hoc ones. A [`KnownError`] pairs an identity with
//! formatted context and, optionally, the error that caused it.

use std::error::Error;
use std::fmt;

use super::report::PanicReport;

/// Boxed error used as the wrapped cause of a [`KnownError`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// A stable, named error identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct Known {
    /// Machine-readable code, unique within the namespace.
    pub code: &'static str,
    /// Human-readable message.
    pub message: &'static str,
    /// Namespace owning the code.
    pub namespace: &'static str,
}

impl Known {
    /// Creates a new identity.
    pub const fn new(code: &'static str, message: &'static str, namespace: &'static str) -> Self {
        Self {
            code,
            message,
            namespace,
        }
    }

    /// Returns true if both identities share code and namespace.
    pub fn matches(&self, other: &Known) -> bool {
        self.code == other.code && self.namespace == other.namespace
    }

    /// Wraps this identity with additional context and no cause.
    pub fn wrap(&self, context: impl Into<String>) -> KnownError {
        KnownError {
            known: *self,
            context: context.into(),
            cause: None,
        }
    }

    /// Wraps this identity with additional context around an existing error.
    pub fn wrap_err(&self, context: impl Into<String>, cause: impl Into<BoxError>) -> KnownError {
        KnownError {
            known: *self,
            context: context.into(),
            cause: Some(cause.into()),
        }
    }
}

/// A [`Known`] identity with context and an optional underlying cause.
///
/// The cause is exposed through [`Error::source`], so standard chain
/// traversal reaches the original error.
#[derive(Debug)]
pub struct KnownError {
    known: Known,
    context: String,
    cause: Option<BoxError>,
}

impl KnownError {
    /// The identity this error carries.
    pub fn known(&self) -> Known {
        self.known
    }

    /// Returns true if this error carries the given identity.
    pub fn is(&self, known: &Known) -> bool {
        self.known.matches(known)
    }

    /// The formatted context attached when the error was wrapped.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The wrapped cause, if any.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Consumes the error and returns the wrapped cause.
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }

    /// Iterates over this error followed by every error in its source chain.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        chain(self)
    }

    /// Builds a serializable report of this error and its causes.
    pub fn report(&self) -> PanicReport {
        PanicReport {
            code: self.known.code.to_string(),
            namespace: self.known.namespace.to_string(),
            message: self.known.message.to_string(),
            context: self.context.clone(),
            causes: self.chain().skip(1).map(|e| e.to_string()).collect(),
        }
    }
}

impl fmt::Display for KnownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.context.is_empty() {
            write!(f, "{}", self.known.message)
        } else {
            write!(f, "{}: {}", self.known.message, self.context)
        }
    }
}

impl Error for KnownError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

fn chain<'a>(err: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(err), |&e| e.source())
}

fn known_of(err: &(dyn Error + 'static)) -> Option<Known> {
    if let Some(known) = err.downcast_ref::<Known>() {
        return Some(*known);
    }
    err.downcast_ref::<KnownError>().map(KnownError::known)
}

/// Returns the first [`Known`] identity found in the error's source chain.
pub fn find_known(err: &(dyn Error + 'static)) -> Option<Known> {
    chain(err).find_map(known_of)
}

/// Returns true if the error, or any error in its source chain, is classified.
pub fn is_known(err: &(dyn Error + 'static)) -> bool {
    find_known(err).is_some()
}
