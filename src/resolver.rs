//! Biography resolution and match acceptance.
//!
//! The listing's display names routinely diverge from Wikipedia's canonical
//! titles (alternate spellings, diacritics, suffixes), and a bare surname
//! search can land on an unrelated person with the same name. An exact title
//! match is the strong acceptance signal; an artist-looking category set is
//! the fallback signal for legitimate near-matches. Everything else, lookup
//! failures included, degrades to a fixed placeholder rather than failing
//! the run.

use log::debug;

use crate::classifier::categories_describe_artist;
use crate::lookup::LookupProvider;

/// Placeholder summary written when no biography could be verified.
pub const NO_ENTRY_SENTINEL: &str = "No Wikipedia Entry Available for this artist";

/// Resolve the summary for a search key, best effort.
///
/// Every failure mode collapses to [`NO_ENTRY_SENTINEL`]: a missing
/// biography is a degraded record, not an error. Single attempt, no retry.
pub fn resolve_summary(provider: &dyn LookupProvider, key: &str) -> String {
    let candidate = match provider.lookup(key) {
        Ok(candidate) => candidate,
        Err(error) => {
            debug!("lookup failed for '{}': {}", key, error);
            return NO_ENTRY_SENTINEL.to_string();
        }
    };

    let title_matches = candidate.title.eq_ignore_ascii_case(key);
    if title_matches || categories_describe_artist(&candidate.categories) {
        candidate.summary
    } else {
        debug!(
            "rejecting '{}' for key '{}': title mismatch and no artist category",
            candidate.title, key
        );
        NO_ENTRY_SENTINEL.to_string()
    }
}
