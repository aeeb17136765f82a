//! Filepath: src/infra/table.rs
//! Tab-separated row rendering to stdout or a `.tab` file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("output file must end in .tab: {0}")]
    InvalidExtension(PathBuf),

    #[error("cannot write output to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output to stdout")]
    Stdout(#[source] io::Error),
}

/// Where rendered rows go. Resolve this before touching any input file so
/// a bad `--output` never leaves partial work behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Validates the `.tab` suffix (case-sensitive) without creating the
    /// file; creation is deferred until rows are actually written.
    pub fn resolve(output: Option<&Path>) -> Result<Self, TableError> {
        match output {
            None => Ok(Self::Stdout),
            Some(path) => {
                let has_tab_suffix = path
                    .to_str()
                    .is_some_and(|p| p.ends_with(".tab") && p.len() > ".tab".len());
                if has_tab_suffix {
                    Ok(Self::File(path.to_path_buf()))
                } else {
                    Err(TableError::InvalidExtension(path.to_path_buf()))
                }
            }
        }
    }

    /// Renders each row as one tab-separated line.
    pub fn write_rows<I, R, C>(&self, rows: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: AsRef<str>,
    {
        match self {
            Self::Stdout => {
                let stdout = io::stdout().lock();
                render(stdout, rows).map_err(TableError::Stdout)
            }
            Self::File(path) => {
                let file = File::create(path).map_err(|source| TableError::Write {
                    path: path.clone(),
                    source,
                })?;
                render(BufWriter::new(file), rows).map_err(|source| TableError::Write {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

fn render<W, I, R, C>(mut out: W, rows: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    for row in rows {
        let line = row.into_iter().map(|cell| cell.as_ref().to_string()).join("\t");
        writeln!(out, "{line}")?;
    }
    out.flush()
}
