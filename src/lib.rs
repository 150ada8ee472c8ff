//! Shared validation and normalization core for the call-campaign platform.
//!
//! Every route handler in the platform funnels through the same three pieces
//! of request plumbing, which live here so they can be tested in isolation:
//! - Schema-driven parameter validation with structured outcomes
//! - Credential digest resolution (plaintext or client-precomputed hashes)
//! - Phone number canonicalization for storage-key equality and display
//!
//! The crate is side-effect free: outcomes carry structured fields and the
//! embedding layer decides how to map them to responses and audit logs.

pub mod credential;
pub mod error;
pub mod field;
pub mod identifier;
pub mod labels;
pub mod phone;
pub mod sanitize;
pub mod validation;

pub use credential::{resolve, resolve_with, Digest, DigestBackend, Sha512Backend, DIGEST_LEN};
pub use error::{CredentialError, ReportExt, ValidationError};
pub use field::{FieldKind, ValueKind};
pub use validation::{validate, ParameterSpec};
