//! Filepath: src/core/pipeline.rs
//! Drives files through reader → splitter → extractor → filter.
//!
//! Files are processed sequentially in argument order. A file that cannot
//! be opened or decoded is reported and skipped; the remaining files still
//! run, and the failure count flows into the process exit code.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::cli::AppContext;
use crate::core::filter::TermFilter;
use crate::core::stanza::StanzaSplitter;
use crate::core::term::{TermRecord, parse_term};
use crate::infra::io::{LineReader, has_obo_extension};

/// Streams every filtered `[Term]` record from `files` into `consume`.
///
/// Returns the number of files that failed. Records never outlive the call;
/// the consumer owns whatever it chooses to keep.
pub fn for_each_term<F>(
    files: &[PathBuf],
    filter: &TermFilter,
    ctx: &AppContext,
    mut consume: F,
) -> usize
where
    F: FnMut(TermRecord),
{
    let mut failed = 0usize;

    for path in files {
        match scan_file(path, filter, &mut consume) {
            Ok(terms) => debug!("{}: {terms} matching term(s)", path.display()),
            Err(e) => {
                failed += 1;
                debug!("skipping {}", path.display());
                report_file_error(ctx, &format!("Error: {e:#}"));
            }
        }
    }

    failed
}

fn scan_file<F>(path: &Path, filter: &TermFilter, consume: &mut F) -> Result<usize>
where
    F: FnMut(TermRecord),
{
    if !has_obo_extension(path) {
        bail!("invalid extension (expected .obo or .obo.gz): {}", path.display());
    }

    let source = path.display().to_string();
    let mut terms = 0usize;

    for stanza in StanzaSplitter::new(LineReader::open(path)?) {
        let stanza = stanza.with_context(|| format!("failed while reading {source}"))?;
        if !stanza.is_term() {
            continue;
        }
        if let Some(record) = parse_term(&stanza, &source)
            && filter.matches(&record)
        {
            terms += 1;
            consume(record);
        }
    }

    Ok(terms)
}

fn report_file_error(ctx: &AppContext, message: &str) {
    if ctx.quiet {
        return;
    }
    if ctx.no_color {
        eprintln!("{message}");
    } else {
        eprintln!("{}", message.red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::Config;
    use tempfile::TempDir;

    const SAMPLE: &str = "format-version: 1.2\n\n\
[Term]\nid: GO:0000001\nname: alpha\nnamespace: biological_process\nis_obsolete: true\n\n\
[Typedef]\nid: part_of\n\n\
[Term]\nid: GO:0000002\nname: beta\nnamespace: molecular_function\n";

    fn quiet_ctx() -> AppContext {
        AppContext {
            quiet: true,
            no_color: true,
        }
    }

    #[test]
    fn streams_term_stanzas_only() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sample.obo");
        std::fs::write(&path, SAMPLE).unwrap();

        let filter = TermFilter::default();
        let mut ids = Vec::new();
        let failed = for_each_term(&[path], &filter, &quiet_ctx(), |t| ids.push(t.id));

        assert_eq!(failed, 0);
        assert_eq!(ids, vec!["GO:0000001", "GO:0000002"]);
    }

    #[test]
    fn bad_file_is_skipped_and_counted() {
        let tmp = TempDir::new().unwrap();
        let good = tmp.path().join("good.obo");
        std::fs::write(&good, SAMPLE).unwrap();
        let missing = tmp.path().join("missing.obo");
        let wrong_ext = tmp.path().join("notes.txt");
        std::fs::write(&wrong_ext, "[Term]\nid: GO:9\n").unwrap();

        let filter = TermFilter::default();
        let mut seen = 0usize;
        let failed = for_each_term(
            &[missing, wrong_ext, good],
            &filter,
            &quiet_ctx(),
            |_| seen += 1,
        );

        assert_eq!(failed, 2);
        assert_eq!(seen, 2);
    }

    #[test]
    fn filter_is_applied_before_the_consumer() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sample.obo");
        std::fs::write(&path, SAMPLE).unwrap();

        let filter = TermFilter::new(
            &["molecular_function".to_string()],
            None,
            &Config::default(),
        )
        .unwrap();
        let mut ids = Vec::new();
        for_each_term(&[path], &filter, &quiet_ctx(), |t| ids.push(t.id));

        assert_eq!(ids, vec!["GO:0000002"]);
    }
}
