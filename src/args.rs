use std::path::{Path, PathBuf};

use clap::Parser;

use crate::source::DEFAULT_SOURCE;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Arguments {
    /// Emoji catalog, a CSV file with the emoji in the third column
    #[arg(value_name = "PATH", default_value = DEFAULT_SOURCE)]
    input: PathBuf,
}

/// CLI argument handler.
pub struct ArgHandler {
    data: Arguments,
}

impl ArgHandler {
    pub fn parse() -> ArgHandler {
        ArgHandler {
            data: Arguments::parse(),
        }
    }

    /// Get the catalog path.
    pub fn input(&self) -> &Path {
        &self.data.input
    }
}
