//! Biography lookup provider interface.
//!
//! The resolver only ever sees this trait, so the Wikipedia client can be
//! swapped for a stub in tests.

use std::fmt;

/// A biography page returned for a search key.
///
/// Transient lookup result; only the summary survives into the output.
#[derive(Debug, Clone)]
pub struct BiographyCandidate {
    /// Canonical page title at the provider.
    pub title: String,
    /// Category names attached to the page.
    pub categories: Vec<String>,
    /// Introductory summary text.
    pub summary: String,
}

/// Why a lookup produced no candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No page exists for the key.
    NotFound,
    /// The key resolves to a disambiguation page rather than a person.
    Ambiguous,
    /// Network or malformed-response failure.
    Transport(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotFound => write!(f, "no page found"),
            LookupError::Ambiguous => write!(f, "key matched a disambiguation page"),
            LookupError::Transport(detail) => write!(f, "lookup request failed: {}", detail),
        }
    }
}

impl std::error::Error for LookupError {}

/// External knowledge-base lookup keyed by approximate name.
pub trait LookupProvider {
    /// Fetch the best biography page for `key`, single attempt.
    fn lookup(&self, key: &str) -> Result<BiographyCandidate, LookupError>;
}
