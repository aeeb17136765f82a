//! Filepath: src/core/consider.rs
//! Consider-table mode: one row per obsolete term with its alternatives.

use anyhow::{Result, bail};
use itertools::Itertools;

use crate::cli::{AppContext, ReportArgs};
use crate::core::filter::TermFilter;
use crate::core::pipeline::for_each_term;
use crate::core::term::TermRecord;
use crate::infra::config::load_config_or_default;
use crate::infra::table::Destination;

/// Projection of one obsolete term for the consider table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsiderRow {
    pub obsolete_id: String,
    /// `consider` ids then `alt_id` ids, comma-joined in stored order,
    /// or the literal `NA` when the term offers no alternatives.
    pub alternatives_csv: String,
    /// Empty when the term had no `is_a`/`part_of` parent.
    pub parent_id: String,
}

impl ConsiderRow {
    pub fn from_record(record: &TermRecord) -> Self {
        let alternatives_csv = if record.has_alternatives() {
            record
                .consider_ids
                .iter()
                .chain(&record.alt_ids)
                .join(",")
        } else {
            "NA".to_string()
        };

        Self {
            obsolete_id: record.id.clone(),
            alternatives_csv,
            parent_id: record.parent_id.clone().unwrap_or_default(),
        }
    }

    pub fn cells(&self) -> [&str; 3] {
        [&self.obsolete_id, &self.alternatives_csv, &self.parent_id]
    }
}

pub fn run(args: ReportArgs, ctx: &AppContext) -> Result<()> {
    let config = load_config_or_default();
    let filter = TermFilter::new(&args.namespaces, args.name_pattern.as_deref(), &config)?;
    // Validate the destination before any input file is touched
    let dest = Destination::resolve(args.output.as_deref())?;

    let mut rows: Vec<ConsiderRow> = Vec::new();
    let failed = for_each_term(&args.files, &filter, ctx, |record| {
        if record.is_obsolete {
            rows.push(ConsiderRow::from_record(&record));
        }
    });

    dest.write_rows(rows.iter().map(ConsiderRow::cells))?;

    if failed > 0 {
        bail!("{failed} input file(s) could not be processed");
    }
    Ok(())
}
