use strum::EnumMessage;
use strum_macros::{Display, EnumMessage};
use thiserror::Error;

/// The operation an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumMessage)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Operation {
    /// Universal quantification.
    ///
    /// True if the predicate holds for every element. An empty sequence
    /// is false.
    All,
    /// Existential quantification.
    ///
    /// True if the predicate holds for at least one element. An empty
    /// sequence is false.
    Some,
    /// Transformation.
    ///
    /// Collects the result of the transform for each element, in order.
    Map,
    /// Filtering.
    ///
    /// Collects the elements for which the predicate holds, in order.
    Select,
    /// Iteration.
    ///
    /// Invokes the action on each element for its side effects.
    Each,
}

impl Operation {
    /// A one line summary of what the operation does.
    pub fn summary(&self) -> &'static str {
        self.documentation_pieces().0
    }

    /// The rest of the documentation of the operation.
    pub fn note(&self) -> &'static str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&'static str, &'static str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first.trim(), second.trim())
        } else {
            ("", "")
        }
    }

    pub(crate) fn invalid_argument(self) -> Error {
        Error::InvalidArgument { operation: self }
    }

    pub(crate) fn callback_failure(self, message: impl Into<String>) -> Error {
        Error::CallbackFailure {
            operation: self,
            message: message.into(),
        }
    }
}

/// An error produced by one of the sequence operations.
///
/// When an operation returns an error it never returns a partial result
/// alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// The first argument was not a sequence.
    ///
    /// Only the [`dynamic`](crate::dynamic) operations can produce this; the
    /// typed operations rule it out at compile time.
    #[error("Enumerable Error: A sequence needs to be the first parameter of {operation}.")]
    InvalidArgument { operation: Operation },
    /// The callback failed, either by returning an error or by panicking.
    #[error("Enumerable Error: {message}")]
    CallbackFailure {
        operation: Operation,
        message: String,
    },
}

impl Error {
    /// The operation that failed.
    pub fn operation(&self) -> Operation {
        match self {
            Error::InvalidArgument { operation } => *operation,
            Error::CallbackFailure { operation, .. } => *operation,
        }
    }

    /// The human-readable message, without the `Enumerable Error` prefix.
    pub fn message(&self) -> String {
        match self {
            Error::InvalidArgument { operation } => {
                format!("A sequence needs to be the first parameter of {}.", operation)
            }
            Error::CallbackFailure { message, .. } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
