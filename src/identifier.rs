//! Document-store identifier validation.
//!
//! Persistence lives behind a MongoDB-style document store whose primary
//! keys are 24-character hex strings. Handlers never build queries from an
//! identifier that did not pass this check.

/// Length of a document-store identifier in characters.
pub const OBJECT_ID_LEN: usize = 24;

/// Returns `true` if `candidate` has the accepted identifier syntax:
/// exactly 24 hex characters.
#[must_use]
pub fn is_object_id(candidate: &str) -> bool {
    candidate.len() == OBJECT_ID_LEN && candidate.bytes().all(|b| b.is_ascii_hexdigit())
}
