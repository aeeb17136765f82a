//! Filepath: src/infra/io.rs
//! Line reading over plain or gzip-compressed OBO files.
//!
//! Compression is detected from the gzip magic bytes, not the file name,
//! so a mislabeled `.obo` that is actually gzipped still decodes. The
//! `.gz` extension only matters for input-path validation.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// A single raw input line with its 1-based position, for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OboLine {
    pub text: String,
    pub number: usize,
}

/// Lazy, single-pass line iterator over one input file.
///
/// Yields `Err` at most once on a mid-stream read/decompression failure
/// and then ends; callers treat that as fatal for this file and move on
/// to the next one.
pub struct LineReader {
    inner: Box<dyn BufRead>,
    next_number: usize,
    done: bool,
}

impl LineReader {
    pub fn open(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let mut reader = BufReader::new(file);

        // Peek the first bytes without consuming them
        let is_gzip = reader
            .fill_buf()
            .with_context(|| format!("failed to read {}", path.display()))?
            .starts_with(&GZIP_MAGIC);

        let inner: Box<dyn BufRead> = if is_gzip {
            Box::new(BufReader::new(GzDecoder::new(reader)))
        } else {
            Box::new(reader)
        };

        Ok(Self {
            inner,
            next_number: 1,
            done: false,
        })
    }
}

impl Iterator for LineReader {
    type Item = io::Result<OboLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = String::new();
        match self.inner.read_line(&mut buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                // Strip the trailing line terminator (LF or CRLF)
                if buf.ends_with('\n') {
                    buf.pop();
                    if buf.ends_with('\r') {
                        buf.pop();
                    }
                }
                let number = self.next_number;
                self.next_number += 1;
                Some(Ok(OboLine { text: buf, number }))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Accepts `.obo` and `.obo.gz`, case-insensitive.
pub fn has_obo_extension(path: &Path) -> bool {
    let lower = path.to_string_lossy().to_lowercase();
    lower.ends_with(".obo") || lower.ends_with(".obo.gz")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn collect_lines(path: &Path) -> Vec<String> {
        LineReader::open(path)
            .unwrap()
            .map(|l| l.unwrap().text)
            .collect()
    }

    #[test]
    fn reads_plain_text_lines_in_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tiny.obo");
        std::fs::write(&path, "[Term]\nid: GO:0000001\n").unwrap();

        assert_eq!(collect_lines(&path), vec!["[Term]", "id: GO:0000001"]);
    }

    #[test]
    fn strips_crlf_terminators() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("crlf.obo");
        std::fs::write(&path, "[Term]\r\nid: GO:0000001\r\n").unwrap();

        assert_eq!(collect_lines(&path), vec!["[Term]", "id: GO:0000001"]);
    }

    #[test]
    fn decodes_gzip_by_magic_bytes() {
        use flate2::Compression;
        use flate2::write::GzEncoder;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tiny.obo.gz");
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(b"[Term]\nid: GO:0000002\n").unwrap();
        std::fs::write(&path, enc.finish().unwrap()).unwrap();

        assert_eq!(collect_lines(&path), vec!["[Term]", "id: GO:0000002"]);
    }

    #[test]
    fn line_numbers_are_one_based() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("n.obo");
        std::fs::write(&path, "a\nb\nc\n").unwrap();

        let numbers: Vec<usize> = LineReader::open(&path)
            .unwrap()
            .map(|l| l.unwrap().number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn corrupt_gzip_yields_one_error_then_ends() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("corrupt.obo.gz");
        // Valid gzip magic followed by garbage the decoder chokes on
        let mut bytes = GZIP_MAGIC.to_vec();
        bytes.extend_from_slice(b"this is not a deflate stream");
        std::fs::write(&path, bytes).unwrap();

        let mut reader = LineReader::open(&path).unwrap();
        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
        assert!(reader.next().is_none());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(LineReader::open(Path::new("/no/such/file.obo")).is_err());
    }

    #[test]
    fn extension_check_accepts_obo_and_obo_gz() {
        assert!(has_obo_extension(&PathBuf::from("go.obo")));
        assert!(has_obo_extension(&PathBuf::from("go.OBO")));
        assert!(has_obo_extension(&PathBuf::from("go.obo.gz")));
        assert!(has_obo_extension(&PathBuf::from("go.Obo.Gz")));
        assert!(!has_obo_extension(&PathBuf::from("go.txt")));
        assert!(!has_obo_extension(&PathBuf::from("go.gz")));
    }
}
