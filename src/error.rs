//! Error types for localized values and their configuration.

use std::fmt;

use thiserror::Error;

use crate::bundle::FallbackStep;

/// Mutating operation of the [`crate::Localizable`] capability.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mutation {
    /// Replacing the value's key.
    SetKey,
    /// Inserting or overwriting a per-locale entry.
    Set,
    /// Replacing the fallback bundle.
    SetBundle,
}

impl fmt::Display for Mutation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetKey => formatter.write_str("set_key"),
            Self::Set => formatter.write_str("set"),
            Self::SetBundle => formatter.write_str("set_bundle"),
        }
    }
}

/// Errors raised by localized values, views, and resolver configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LocalizableError {
    /// A mutator was called on a read-only view.
    #[error("`{operation}` is not supported on a read-only value")]
    UnsupportedOperation {
        /// The rejected operation.
        operation: Mutation,
    },

    /// A locale tag could not be parsed.
    #[error("invalid locale `{tag}`: {reason}")]
    InvalidLocale {
        /// The offending tag.
        tag: String,
        /// Parser message.
        reason: String,
    },

    /// A fallback order listed the same step twice.
    #[error("fallback step `{step}` listed more than once")]
    DuplicateFallbackStep {
        /// The repeated step.
        step: FallbackStep,
    },

    /// Resolver configuration could not be decoded.
    #[error("invalid resolver configuration: {reason}")]
    Config {
        /// Decoder message.
        reason: String,
    },
}

impl LocalizableError {
    /// Construct the error returned for a rejected mutation.
    #[must_use]
    pub const fn unsupported(operation: Mutation) -> Self {
        Self::UnsupportedOperation { operation }
    }
}
