//! Filepath: src/core/stats.rs
//! Obsolete-stats mode: per-namespace obsolete/alternative counts.

use anyhow::{Result, bail};
use indexmap::IndexMap;

use crate::cli::{AppContext, ReportArgs};
use crate::core::filter::TermFilter;
use crate::core::pipeline::for_each_term;
use crate::core::term::TermRecord;
use crate::infra::config::load_config_or_default;
use crate::infra::table::Destination;

/// Synthetic bucket that every obsolete record counts toward.
pub const ALL_BUCKET: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamespaceStats {
    pub obsolete_total: u64,
    pub with_alternatives: u64,
}

/// Accumulator over the filtered record stream.
///
/// Buckets are keyed by namespace plus the synthetic [`ALL_BUCKET`]; counts
/// only ever grow while streaming. Records without a namespace count toward
/// `all` alone.
#[derive(Debug)]
pub struct StatsTable {
    buckets: IndexMap<String, NamespaceStats>,
}

impl StatsTable {
    pub fn new() -> Self {
        let mut buckets = IndexMap::new();
        // Present even when no input produced a single obsolete term
        buckets.insert(ALL_BUCKET.to_string(), NamespaceStats::default());
        Self { buckets }
    }

    pub fn record(&mut self, record: &TermRecord) {
        if !record.is_obsolete {
            return;
        }

        let has_alternatives = record.has_alternatives();
        self.bump(ALL_BUCKET, has_alternatives);
        if let Some(ns) = &record.namespace {
            self.bump(ns, has_alternatives);
        }
    }

    fn bump(&mut self, bucket: &str, has_alternatives: bool) {
        let stats = self.buckets.entry(bucket.to_string()).or_default();
        stats.obsolete_total += 1;
        if has_alternatives {
            stats.with_alternatives += 1;
        }
    }

    pub fn get(&self, bucket: &str) -> Option<&NamespaceStats> {
        self.buckets.get(bucket)
    }

    /// Header, the `all` bucket, then namespaces in sorted order so the
    /// same inputs always render byte-identical output.
    pub fn rows(&self) -> Vec<[String; 3]> {
        let mut rows = vec![[
            "namespace".to_string(),
            "obsolete_total".to_string(),
            "with_alternatives".to_string(),
        ]];

        let mut namespaces: Vec<&str> = self
            .buckets
            .keys()
            .map(String::as_str)
            .filter(|k| *k != ALL_BUCKET)
            .collect();
        namespaces.sort_unstable();

        for key in std::iter::once(ALL_BUCKET).chain(namespaces) {
            if let Some(stats) = self.buckets.get(key) {
                rows.push([
                    key.to_string(),
                    stats.obsolete_total.to_string(),
                    stats.with_alternatives.to_string(),
                ]);
            }
        }

        rows
    }
}

pub fn run(args: ReportArgs, ctx: &AppContext) -> Result<()> {
    let config = load_config_or_default();
    let filter = TermFilter::new(&args.namespaces, args.name_pattern.as_deref(), &config)?;
    let dest = Destination::resolve(args.output.as_deref())?;

    let mut table = StatsTable::new();
    let failed = for_each_term(&args.files, &filter, ctx, |record| table.record(&record));

    dest.write_rows(table.rows())?;

    if failed > 0 {
        bail!("{failed} input file(s) could not be processed");
    }
    Ok(())
}
