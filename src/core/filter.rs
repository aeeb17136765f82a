//! Filepath: src/core/filter.rs
//! Namespace and name-pattern filtering, compiled once per run.

use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use regex::Regex;

use crate::core::term::TermRecord;
use crate::infra::config::Config;

/// Record filter shared by every run mode.
///
/// Built once from CLI arguments and the configured namespace vocabulary,
/// then passed by reference into the pipeline. Never mutates records.
#[derive(Debug, Default)]
pub struct TermFilter {
    namespaces: HashSet<String>,
    name_pattern: Option<Regex>,
}

impl TermFilter {
    /// Validates namespaces against the configured vocabulary (lowercased
    /// first, the way the CLI has always accepted them) and compiles the
    /// name regex. Any rejection here is an argument error: nothing has
    /// been read or written yet.
    pub fn new(namespaces: &[String], name_pattern: Option<&str>, config: &Config) -> Result<Self> {
        let mut set = HashSet::new();
        for raw in namespaces {
            let ns = raw.to_lowercase();
            if !config.is_valid_namespace(&ns) {
                bail!(
                    "unknown namespace {raw:?} (valid: {})",
                    config.namespaces.join(", ")
                );
            }
            set.insert(ns);
        }

        let name_pattern = name_pattern
            .map(|p| Regex::new(p).with_context(|| format!("invalid --name-pattern {p:?}")))
            .transpose()?;

        Ok(Self {
            namespaces: set,
            name_pattern,
        })
    }

    /// Empty namespace set means "all namespaces"; an absent pattern means
    /// "all names". A record with no name fails a present pattern.
    pub fn matches(&self, record: &TermRecord) -> bool {
        let ns_ok = self.namespaces.is_empty()
            || record
                .namespace
                .as_ref()
                .is_some_and(|ns| self.namespaces.contains(ns));

        let name_ok = match &self.name_pattern {
            None => true,
            Some(pattern) => record
                .name
                .as_ref()
                .is_some_and(|name| pattern.is_match(name)),
        };

        ns_ok && name_ok
    }
}
