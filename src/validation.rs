//! Schema-driven request parameter validation.
//!
//! A schema is an ordered slice of [`ParameterSpec`]; [`validate`] walks it
//! as a short-circuiting fold and reports the first violation only. The
//! check is pure: callers decide what to do with the outcome (typically a
//! 400 response plus [`ReportExt::warn_rejected`]).
//!
//! [`ReportExt::warn_rejected`]: crate::error::ReportExt::warn_rejected

use serde_json::Value;

use crate::error::ValidationError;
use crate::field::{FieldKind, ValueKind};
use crate::identifier;

/// Declaration of one expected request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub optional: bool,
}

impl ParameterSpec {
    /// A field that must be present.
    #[must_use]
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            optional: false,
        }
    }

    /// A field validated only when present.
    #[must_use]
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            optional: true,
        }
    }
}

/// Validate a request body against an ordered schema.
///
/// A zero-entry schema trivially validates. A body that is absent, not an
/// object, or without a single key fails with
/// [`ValidationError::EmptyBody`] — unless every schema entry is optional,
/// in which case there is nothing to miss. A field is absent when its key
/// is missing or its value is `null`; `0`, `false` and `""` are present
/// values.
///
/// # Errors
/// The first violation in schema order, never an aggregate.
pub fn validate(body: &Value, schema: &[ParameterSpec]) -> Result<(), ValidationError> {
    if schema.is_empty() {
        return Ok(());
    }

    let fields = body.as_object().filter(|fields| !fields.is_empty());
    let Some(fields) = fields else {
        if schema.iter().all(|spec| spec.optional) {
            return Ok(());
        }
        return Err(ValidationError::EmptyBody);
    };

    for spec in schema {
        match fields.get(spec.name).filter(|value| !value.is_null()) {
            None if spec.optional => {}
            None => return Err(ValidationError::MissingField(spec.name)),
            Some(value) => check_kind(spec, value)?,
        }
    }

    Ok(())
}

fn check_kind(spec: &ParameterSpec, value: &Value) -> Result<(), ValidationError> {
    let matches = match spec.kind {
        FieldKind::Identifier => value.as_str().is_some_and(identifier::is_object_id),
        FieldKind::Number => is_numeric(value),
        FieldKind::Text => value.is_string(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::Object => value.is_object(),
    };

    if matches {
        Ok(())
    } else {
        Err(ValidationError::TypeMismatch {
            field: spec.name,
            expected: spec.kind,
            actual: ValueKind::of(value),
        })
    }
}

/// Numbers arriving as text stay valid, so `"42"` passes a `Number` spec.
fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(text) => text.trim().parse::<i64>().is_ok(),
        _ => false,
    }
}

/// Business rules the schema cannot express.
///
/// These mirror the checks the password-change handlers apply after shape
/// validation succeeded.
pub mod domain {
    use thiserror::Error;

    use crate::sanitize;

    /// Maximum accepted password length.
    pub const MAX_PASSWORD_LEN: usize = 32;
    /// Pin codes are exactly four digits.
    pub const PIN_LEN: usize = 4;

    /// Violation of a domain rule.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum RuleError {
        #[error("bad new password (sanitization failed)")]
        PasswordNotClean,
        #[error("bad new password")]
        PasswordEmpty,
        #[error("new password is too long (max {MAX_PASSWORD_LEN})")]
        PasswordTooLong,
        #[error("invalid pin code")]
        BadPinCode,
    }

    /// Validate a new password and return its accepted form.
    ///
    /// # Errors
    /// Rejects passwords that do not survive sanitization, are empty, or
    /// exceed [`MAX_PASSWORD_LEN`] characters.
    pub fn validate_password(password: &str) -> Result<String, RuleError> {
        let clean = sanitize::sanitize(password);
        if clean != password.trim() {
            return Err(RuleError::PasswordNotClean);
        }
        if clean.is_empty() {
            return Err(RuleError::PasswordEmpty);
        }
        if clean.chars().count() > MAX_PASSWORD_LEN {
            return Err(RuleError::PasswordTooLong);
        }
        Ok(clean)
    }

    /// Validate a caller pin code.
    ///
    /// # Errors
    /// Rejects anything but exactly [`PIN_LEN`] decimal digits.
    pub fn validate_pin(pin: &str) -> Result<(), RuleError> {
        if pin.len() == PIN_LEN && pin.bytes().all(|b| b.is_ascii_digit()) {
            Ok(())
        } else {
            Err(RuleError::BadPinCode)
        }
    }

}
