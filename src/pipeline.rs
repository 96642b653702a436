//! Sequential enrichment pipeline: one output row per listing entry.

use std::io;

use log::warn;

use crate::listing::RawNameEntry;
use crate::lookup::LookupProvider;
use crate::name_key::{derive_search_key, NameKeyError};
use crate::resolver::{resolve_summary, NO_ENTRY_SENTINEL};
use crate::sink::{CsvSink, OutputRecord};

/// Tally of a run, accumulated across listing pages.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Rows written to the sink.
    pub rows_written: usize,
    /// Rows whose summary is the not-found placeholder.
    pub sentinel_rows: usize,
    /// Entries skipped because no search key could be derived.
    pub skipped: Vec<(String, NameKeyError)>,
}

/// Process `entries` in order, writing one row each to `sink`.
///
/// A lookup failure degrades that row to the sentinel summary and the run
/// continues. An entry whose display name yields no search key is skipped
/// and recorded in the report; later entries are unaffected. Only sink
/// write failures abort.
pub fn process_entries<W: io::Write>(
    entries: &[RawNameEntry],
    provider: &dyn LookupProvider,
    sink: &mut CsvSink<W>,
    report: &mut RunReport,
) -> csv::Result<()> {
    for entry in entries {
        let key = match derive_search_key(&entry.display_name) {
            Ok(key) => key,
            Err(error) => {
                warn!(
                    "skipping listing entry '{}': {}",
                    entry.display_name, error
                );
                report
                    .skipped
                    .push((entry.display_name.clone(), error));
                continue;
            }
        };

        let summary = resolve_summary(provider, &key);
        if summary == NO_ENTRY_SENTINEL {
            report.sentinel_rows += 1;
        }

        sink.write_row(&OutputRecord {
            name: entry.display_name.clone(),
            link: entry.link.clone(),
            summary,
        })?;
        report.rows_written += 1;
    }
    Ok(())
}
