//! Credential digest resolution.
//!
//! Admin codes and pins are compared as fixed-length one-way digests,
//! never in clear. Clients may send either the plaintext secret or a
//! digest they computed themselves; [`resolve`] normalizes both cases to
//! a [`Digest`] the persistence layer can match with exact string
//! equality. The comparison itself never happens here.

use std::fmt;

use sha2::{Digest as _, Sha512};

use crate::error::CredentialError;
use crate::sanitize;

/// Length of a digest in hex characters (SHA-512).
pub const DIGEST_LEN: usize = 128;

/// A 128-hex-character credential digest.
///
/// Anything compared against a stored digest must already be in this
/// form; construction goes through [`resolve`] or a [`DigestBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest(String);

impl Digest {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One-way digest collaborator.
///
/// Stable (same input, same output) and collision-resistant; treated as a
/// black box so its unavailability stays representable.
pub trait DigestBackend {
    /// Digest an arbitrary input string to 128 hex characters.
    ///
    /// # Errors
    /// Returns [`CredentialError::DigestUnavailable`] if the backend
    /// cannot produce a digest. This is a fatal condition, not a
    /// validation failure.
    fn digest(&self, input: &str) -> Result<Digest, CredentialError>;
}

/// Default backend: SHA-512, hex-encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha512Backend;

impl DigestBackend for Sha512Backend {
    fn digest(&self, input: &str) -> Result<Digest, CredentialError> {
        Ok(Digest(hex::encode(Sha512::digest(input.as_bytes()))))
    }
}

/// Resolve a client-supplied secret to its digest form.
///
/// A secret claimed as pre-hashed is only taken at its word when it has
/// the exact digest length; everything else is digested as plaintext.
/// Claimed digests must survive [`sanitize`](crate::sanitize::sanitize)
/// byte-for-byte, which keeps query-operator payloads out of a field the
/// store expects to be plain hex.
///
/// # Errors
/// - [`CredentialError::InvalidHashFormat`] if a claimed digest fails the
///   sanitization round-trip.
/// - [`CredentialError::DigestUnavailable`] if the backend fails.
pub fn resolve(secret: &str, already_hashed: bool) -> Result<Digest, CredentialError> {
    resolve_with(&Sha512Backend, secret, already_hashed)
}

/// [`resolve`] against an explicit backend.
///
/// # Errors
/// Same as [`resolve`].
pub fn resolve_with(
    backend: &dyn DigestBackend,
    secret: &str,
    already_hashed: bool,
) -> Result<Digest, CredentialError> {
    if !already_hashed || secret.chars().count() != DIGEST_LEN {
        return backend.digest(secret);
    }
    if !sanitize::is_clean(secret) {
        return Err(CredentialError::InvalidHashFormat);
    }
    Ok(Digest(secret.to_owned()))
}
