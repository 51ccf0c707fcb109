//! Reading the emoji catalog.
//!
//! The catalog is a comma separated file with a header row. Only the third
//! column, holding the emoji itself, is consumed.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ErrorKind, ReaderBuilder, StringRecord};
use log::{debug, info, warn};

use crate::emoji::EmojiEntry;
use crate::error::RegistryError;

/// The catalog read when no path is given.
pub const DEFAULT_SOURCE: &str = "emojis.csv";

/// Maximum number of data rows taken from the catalog.
pub const ROW_LIMIT: usize = 420;

/// Zero-based index of the emoji column.
pub const EMOJI_COLUMN: usize = 2;

/// Open the catalog at `path` and read its entries.
pub fn load(path: &Path) -> Result<Vec<EmojiEntry>, RegistryError> {
    let file = File::open(path).map_err(|source| RegistryError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Reading emojis from {}", path.display());
    read_entries(file)
}

/// Read up to [`ROW_LIMIT`] entries from a catalog stream.
///
/// The first row is the header. Blank lines are rows without fields and
/// count toward the limit. Rows past the limit are never parsed. A catalog
/// with fewer rows is processed in full.
pub fn read_entries<R: Read>(mut input: R) -> Result<Vec<EmojiEntry>, RegistryError> {
    let mut raw = Vec::new();
    input
        .read_to_end(&mut raw)
        .map_err(|err| RegistryError::Csv(err.into()))?;

    let mut rows = Rows::new(&raw);
    if let Some(header) = rows.next() {
        header.map_err(RegistryError::Csv)?;
    }

    let mut entries = Vec::with_capacity(ROW_LIMIT);
    for (row, record) in rows.take(ROW_LIMIT).enumerate() {
        let record = record.map_err(|err| classify(row, err))?;
        let character = record
            .get(EMOJI_COLUMN)
            .ok_or(RegistryError::MalformedRow {
                row,
                fields: record.len(),
            })?;

        let entry = EmojiEntry::new(character);
        debug!(
            "Row {row}: {} -> {} ({} bytes, modifiable: {})",
            entry.character(),
            entry.hex_encoding(),
            entry.byte_length(),
            entry.modifiable()
        );
        entries.push(entry);
    }

    if entries.len() < ROW_LIMIT {
        warn!(
            "Emoji source ended after {} row(s), expected {ROW_LIMIT}",
            entries.len()
        );
    }
    info!("Loaded {} emoji(s)", entries.len());

    Ok(entries)
}

fn classify(row: usize, err: csv::Error) -> RegistryError {
    match err.kind() {
        ErrorKind::Utf8 { .. } => RegistryError::Encoding { row, source: err },
        _ => RegistryError::Csv(err),
    }
}

/// Line oriented view over the catalog records.
///
/// The csv reader skips empty lines. They are recovered from the raw bytes
/// between two records and yielded as empty records in their place.
struct Rows<'a> {
    input: &'a [u8],
    reader: csv::Reader<&'a [u8]>,
    /// Bytes consumed by the reader up to the end of the last record.
    consumed: usize,
    blank: usize,
    pending: Option<Result<StringRecord, csv::Error>>,
    done: bool,
}

impl<'a> Rows<'a> {
    fn new(input: &'a [u8]) -> Rows<'a> {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input);
        Rows {
            input,
            reader,
            consumed: if input.starts_with(UTF8_BOM) { UTF8_BOM.len() } else { 0 },
            blank: 0,
            pending: None,
            done: false,
        }
    }

    /// Count the empty lines at the start of `input[consumed..end]`.
    fn skipped_lines(&self, end: usize) -> usize {
        let mut gap = &self.input[self.consumed..end];
        // The LF of a CRLF terminator is consumed with the following record.
        if self.consumed > 0 && self.input[self.consumed - 1] == b'\r' {
            gap = gap.strip_prefix(b"\n").unwrap_or(gap);
        }
        let run = gap
            .iter()
            .take_while(|&&b| b == b'\r' || b == b'\n')
            .count();
        line_breaks(&gap[..run])
    }
}

impl Iterator for Rows<'_> {
    type Item = Result<StringRecord, csv::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.blank > 0 {
            self.blank -= 1;
            return Some(Ok(StringRecord::new()));
        }
        if let Some(pending) = self.pending.take() {
            return Some(pending);
        }
        if self.done {
            return None;
        }

        let mut record = StringRecord::new();
        let result = self.reader.read_record(&mut record);
        let end = match result {
            Ok(true) => self.reader.position().byte() as usize,
            _ => {
                self.done = true;
                self.input.len()
            }
        };
        self.blank = self.skipped_lines(end);
        self.consumed = end;
        self.pending = match result {
            Ok(true) => Some(Ok(record)),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        };
        self.next()
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Number of line breaks in a run of CR and LF bytes, CRLF counting once.
fn line_breaks(run: &[u8]) -> usize {
    run.iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' || run.get(i + 1) != Some(&b'\n'))
        .count()
}
