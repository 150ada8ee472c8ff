//! Structured error handling for request validation.
//!
//! All validation failures are recoverable, caller-reported values: the
//! embedding layer turns them into 400-class responses and WARNING-level
//! audit entries. The only fatal condition in this crate is the digest
//! collaborator being unavailable, kept as a distinct variant so callers
//! can tell it apart from bad input.

use std::fmt::Display;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::field::{FieldKind, ValueKind};

/// Outcome of validating a request body against a schema.
///
/// One error per call: validation short-circuits on the first failing
/// field and never aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ValidationError {
    /// Payload absent or without a single field. Reported before any
    /// per-field check.
    #[error("empty request body")]
    EmptyBody,

    /// A required field carries no value.
    #[error("missing parameter `{0}`")]
    MissingField(&'static str),

    /// A field is present but its run-time kind does not match the
    /// declared one. Malformed identifiers and non-numeric "number"
    /// fields report through this variant as well.
    #[error("wrong type for `{field}`: expected {expected}, got {actual}")]
    TypeMismatch {
        field: &'static str,
        expected: FieldKind,
        actual: ValueKind,
    },
}

/// Failure while resolving a credential to its digest form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// A claimed pre-hashed secret did not survive the sanitization
    /// round-trip.
    #[error("not a valid hash")]
    InvalidHashFormat,

    /// The digest collaborator failed. Unlike every other error in this
    /// crate this is not a validation outcome.
    #[error("digest backend unavailable: {0}")]
    DigestUnavailable(String),
}

/// Extension trait for recording rejected outcomes at the boundary.
///
/// The core itself stays side-effect free; handlers chain this on the
/// results they are about to return so every rejection leaves a
/// WARNING-level trace naming its origin.
pub trait ReportExt<T> {
    /// Emit a `warn!` event for the error, then pass the result through.
    #[must_use]
    fn warn_rejected(self, location: &'static str) -> Self;
}

impl<T, E: Display> ReportExt<T> for Result<T, E> {
    fn warn_rejected(self, location: &'static str) -> Self {
        self.inspect_err(|e| warn!(location, reason = %e, "request rejected"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_field() {
        assert_eq!(ValidationError::EmptyBody.to_string(), "empty request body");
        assert_eq!(
            ValidationError::MissingField("area").to_string(),
            "missing parameter `area`"
        );
        let err = ValidationError::TypeMismatch {
            field: "area",
            expected: FieldKind::Identifier,
            actual: ValueKind::String,
        };
        assert_eq!(
            err.to_string(),
            "wrong type for `area`: expected identifier, got string"
        );
    }

    #[test]
    fn credential_errors_are_distinguishable() {
        assert_ne!(
            CredentialError::InvalidHashFormat,
            CredentialError::DigestUnavailable("down".to_string())
        );
    }

    #[test]
    fn warn_rejected_passes_the_result_through() {
        let ok: Result<u8, ValidationError> = Ok(7).warn_rejected("login");
        assert_eq!(ok, Ok(7));

        let err: Result<u8, ValidationError> =
            Err(ValidationError::EmptyBody).warn_rejected("login");
        assert_eq!(err, Err(ValidationError::EmptyBody));
    }

    #[test]
    fn errors_serialize_with_structured_fields() {
        let err = ValidationError::TypeMismatch {
            field: "area",
            expected: FieldKind::Identifier,
            actual: ValueKind::Number,
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["TypeMismatch"]["field"], "area");
        assert_eq!(json["TypeMismatch"]["expected"], "identifier");
        assert_eq!(json["TypeMismatch"]["actual"], "number");
    }
}
