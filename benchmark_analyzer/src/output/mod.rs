//!
//! Benchmark analyzer output.
//!

pub mod csv;
pub mod json;
pub mod markdown;

use std::path::PathBuf;

use crate::error::Error;
use crate::model::summary::Summary;
use crate::output_format::OutputFormat;

use self::csv::Csv;
use self::json::Json;
use self::markdown::Markdown;

///
/// The rendered benchmark summary.
///
#[derive(Debug)]
pub struct Output {
    /// The file contents.
    pub content: String,
}

impl Output {
    ///
    /// Writes the rendered summary to a file, creating the parent directories.
    ///
    pub fn write_to_file(self, path: PathBuf) -> Result<(), Error> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|error| Error::Writing {
                error,
                path: path.clone(),
            })?;
        }
        std::fs::write(path.as_path(), self.content)
            .map_err(|error| Error::Writing { error, path })
    }
}

impl From<(&Summary, OutputFormat)> for Output {
    fn from((summary, output_format): (&Summary, OutputFormat)) -> Self {
        match output_format {
            OutputFormat::Json => Json::from(summary).into(),
            OutputFormat::Csv => Csv::from(summary).into(),
            OutputFormat::Markdown => Markdown::from(summary).into(),
        }
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Self {
            content: value.content,
        }
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Self {
            content: value.content,
        }
    }
}

impl From<Markdown> for Output {
    fn from(value: Markdown) -> Self {
        Self {
            content: value.content,
        }
    }
}
