//! Display labels for call outcomes.
//!
//! The store keeps call status and satisfaction as raw codes; the
//! front-end renders the French labels. Unknown or absent codes all fall
//! back to the same "no info" label rather than erroring.

/// Status of a client inside a campaign, as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
    InProgress,
    ToRecall,
    Done,
    Deleted,
}

impl CallStatus {
    /// Parse the raw stored value.
    #[must_use]
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "In progress" => Some(Self::InProgress),
            "to recall" => Some(Self::ToRecall),
            "Done" => Some(Self::Done),
            "deleted" => Some(Self::Deleted),
            _ => None,
        }
    }
}

/// Display label for a call status.
#[must_use]
pub fn status_label(status: Option<CallStatus>) -> &'static str {
    match status {
        Some(CallStatus::InProgress) => "En cours",
        Some(CallStatus::ToRecall) => "Doit etre rappelé·e",
        Some(CallStatus::Done) => "Appelé·e",
        Some(CallStatus::Deleted) => "Supprimé·e",
        None => "Aucune info",
    }
}

/// Display label for a satisfaction code.
#[must_use]
pub fn satisfaction_label(code: Option<i64>) -> &'static str {
    match code {
        Some(0) => "A voté",
        Some(1) => "Pas interessé·e",
        Some(2) => "Interessé·e",
        Some(3) => "Pas de réponse",
        Some(4) => "A retirer",
        _ => "Aucune info",
    }
}
