//! CSV record sink for the consolidated artist table.

use std::fs::File;
use std::io;
use std::path::Path;

/// Output column order, fixed.
pub const OUTPUT_COLUMNS: [&str; 3] = ["Name", "Link", "Wiki Summary"];

/// One finished row of the output table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub name: String,
    pub link: String,
    pub summary: String,
}

/// CSV writer with the fixed header. Write failures are fatal to the run
/// and propagate unchanged.
pub struct CsvSink<W: io::Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    /// Create (or truncate) the output file.
    pub fn create(path: &Path) -> csv::Result<Self> {
        Ok(CsvSink {
            writer: csv::Writer::from_path(path)?,
        })
    }
}

impl<W: io::Write> CsvSink<W> {
    pub fn from_writer(writer: W) -> Self {
        CsvSink {
            writer: csv::Writer::from_writer(writer),
        }
    }

    /// Write the `Name, Link, Wiki Summary` header row. Call once, first.
    pub fn write_header(&mut self) -> csv::Result<()> {
        self.writer.write_record(OUTPUT_COLUMNS)
    }

    pub fn write_row(&mut self, record: &OutputRecord) -> csv::Result<()> {
        self.writer
            .write_record([&record.name, &record.link, &record.summary])
    }

    /// Flush buffered rows to the underlying writer.
    pub fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Recover the underlying writer, flushing first.
    pub fn into_inner(self) -> Result<W, csv::IntoInnerError<csv::Writer<W>>> {
        self.writer.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::{CsvSink, OutputRecord};

    fn written(sink: CsvSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_header_and_rows_in_order() {
        let mut sink = CsvSink::from_writer(Vec::new());
        sink.write_header().unwrap();
        sink.write_row(&OutputRecord {
            name: "Picasso, Pablo".to_string(),
            link: "https://web.archive.org/a".to_string(),
            summary: "Pablo Picasso was...".to_string(),
        })
        .unwrap();

        let text = written(sink);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Name,Link,Wiki Summary"));
        assert_eq!(
            lines.next(),
            Some("\"Picasso, Pablo\",https://web.archive.org/a,Pablo Picasso was...")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut sink = CsvSink::from_writer(Vec::new());
        sink.write_row(&OutputRecord {
            name: "Gogh, Vincent van".to_string(),
            link: "/b".to_string(),
            summary: "painter, printmaker".to_string(),
        })
        .unwrap();
        let text = written(sink);
        assert_eq!(
            text.trim_end(),
            "\"Gogh, Vincent van\",/b,\"painter, printmaker\""
        );
    }
}
