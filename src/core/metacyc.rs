//! Filepath: src/core/metacyc.rs
//! MetaCyc lookup mode: terms cross-referenced to a MetaCyc id.
//!
//! MetaCyc ids name reactions (`RXN`) or pathways (`PWY`); anything else
//! is rejected up front. Matching terms are reported with the xref line
//! that linked them.

use anyhow::{Result, bail};

use crate::cli::{AppContext, MetacycArgs};
use crate::core::filter::TermFilter;
use crate::core::pipeline::for_each_term;
use crate::core::term::TermRecord;
use crate::infra::config::load_config_or_default;
use crate::infra::table::Destination;

const METACYC_PREFIX: &str = "MetaCyc:";

pub fn validate_metacyc_id(id: &str) -> Result<()> {
    if !id.contains("RXN") && !id.contains("PWY") {
        bail!("MetaCyc id must contain 'RXN' or 'PWY', got {id:?}");
    }
    Ok(())
}

/// First `MetaCyc:` xref of `record` containing `id`, if any.
pub fn matching_xref<'a>(record: &'a TermRecord, id: &str) -> Option<&'a str> {
    record
        .xrefs
        .iter()
        .map(String::as_str)
        .find(|x| x.starts_with(METACYC_PREFIX) && x.contains(id))
}

fn row(record: &TermRecord, xref: &str) -> [String; 4] {
    [
        record.id.clone(),
        record.name.clone().unwrap_or_default(),
        record.namespace.clone().unwrap_or_default(),
        xref.to_string(),
    ]
}

pub fn run(args: MetacycArgs, ctx: &AppContext) -> Result<()> {
    validate_metacyc_id(&args.id)?;

    let config = load_config_or_default();
    let filter = TermFilter::new(
        &args.report.namespaces,
        args.report.name_pattern.as_deref(),
        &config,
    )?;
    let dest = Destination::resolve(args.report.output.as_deref())?;

    let mut rows: Vec<[String; 4]> = Vec::new();
    let failed = for_each_term(&args.report.files, &filter, ctx, |record| {
        if let Some(xref) = matching_xref(&record, &args.id) {
            rows.push(row(&record, xref));
        }
    });

    if rows.is_empty() && !ctx.quiet {
        eprintln!("No results found for MetaCyc id: {}", args.id);
    }
    dest.write_rows(&rows)?;

    if failed > 0 {
        bail!("{failed} input file(s) could not be processed");
    }
    Ok(())
}
