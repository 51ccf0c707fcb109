use std::io;
use std::path::PathBuf;

use derive_more::derive::{Display, Error};

/// Fatal conditions while building the registry.
///
/// Row numbers are zero-based and count data rows only, the header excluded.
#[derive(Debug, Display, Error)]
pub enum RegistryError {
    #[display("emoji source {} could not be opened: {source}", path.display())]
    SourceNotFound { path: PathBuf, source: io::Error },

    #[display("row {row} has {fields} field(s), the emoji column needs at least 3")]
    MalformedRow { row: usize, fields: usize },

    /// A data row holds bytes that are not UTF-8.
    #[display("row {row} is not valid UTF-8: {source}")]
    Encoding { row: usize, source: csv::Error },

    /// I/O failures and anything wrong with the header row.
    #[display("failed to read emoji source: {_0}")]
    Csv(#[error(source)] csv::Error),
}
