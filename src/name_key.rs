//! Search-key derivation from listing display names.
//!
//! The directory lists artists in "Last, First" order while Wikipedia titles
//! its biography pages "First Last", so the key has to be reordered before it
//! is worth querying.

use std::fmt;

/// A display name that yields no usable tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameKeyError {
    /// The display name was empty or contained only punctuation/whitespace.
    EmptyDisplayName,
}

impl fmt::Display for NameKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKeyError::EmptyDisplayName => {
                write!(f, "display name has no usable name tokens")
            }
        }
    }
}

impl std::error::Error for NameKeyError {}

/// Trim ASCII punctuation from both ends of a name token.
///
/// Interior punctuation (hyphenated names, apostrophes) and non-ASCII
/// characters are left alone. Matching the listing's trailing-comma
/// convention is the point, not full locale-aware normalization.
fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_ascii_punctuation())
}

/// Derive the lookup key for a raw display name.
///
/// Two or more tokens are read as "Last, First ..." and reordered to
/// `"First Last"`. A single token is used as-is. Either way the surname
/// token is stripped of surrounding punctuation.
pub fn derive_search_key(display_name: &str) -> Result<String, NameKeyError> {
    let tokens: Vec<&str> = display_name.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Err(NameKeyError::EmptyDisplayName),
        [only] => {
            let stripped = strip_punctuation(only);
            if stripped.is_empty() {
                return Err(NameKeyError::EmptyDisplayName);
            }
            Ok(stripped.to_string())
        }
        [last, first, ..] => {
            let last = strip_punctuation(last);
            let key = format!("{} {}", first, last);
            let key = key.trim();
            if key.is_empty() {
                return Err(NameKeyError::EmptyDisplayName);
            }
            Ok(key.to_string())
        }
    }
}
