//! **gobo** - Fast Rust CLI for extracting obsolete-term reports from Gene Ontology OBO files
//!
//! Streams plain or gzip-compressed OBO files through a single-pass pipeline:
//! line reader → stanza splitter → field extractor → filter → aggregator →
//! tab-separated output. Constant memory per record; no state survives a run.

/// Command-line interface with clap integration
pub mod cli;

/// Shell completion generation
pub mod completion;

/// Core pipeline - stanza parsing, filtering, and the report modes
pub mod core {
    /// Groups raw lines into bracket-delimited OBO stanzas
    pub mod stanza;
    pub use stanza::{Stanza, StanzaSplitter};

    /// `[Term]` stanza field extraction
    pub mod term;
    pub use term::{TermRecord, parse_term};

    /// Namespace/name-pattern record filtering
    pub mod filter;
    pub use filter::TermFilter;

    /// Sequential per-file pipeline driver
    pub mod pipeline;
    pub use pipeline::for_each_term;

    /// Consider-table mode (obsolete terms and their alternatives)
    pub mod consider;
    pub use consider::{ConsiderRow, run as consider_run};

    /// Obsolete-stats mode (per-namespace counts)
    pub mod stats;
    pub use stats::{NamespaceStats, StatsTable, run as stats_run};

    /// MetaCyc cross-reference lookup mode
    pub mod metacyc;
    pub use metacyc::run as metacyc_run;
}

/// Infrastructure - Configuration, I/O, and output rendering
pub mod infra {
    /// Configuration management with TOML support
    pub mod config;
    pub use config::{Config, init as config_init, load_config, load_config_or_default};

    /// Line reading over plain or gzip-compressed files
    pub mod io;
    pub use io::{LineReader, OboLine, has_obo_extension};

    /// Tab-separated output to stdout or a `.tab` file
    pub mod table;
    pub use table::{Destination, TableError};
}

// Strategic re-exports for clean CLI interface
pub use cli::{AppContext, Cli, Commands};
pub use infra::{Config, load_config};
pub use self::core::{consider_run, metacyc_run, stats_run};

// Core types for external consumers
pub use self::core::{ConsiderRow, StatsTable, TermFilter, TermRecord};
