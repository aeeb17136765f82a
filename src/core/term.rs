//! Filepath: src/core/term.rs
//! Parses `[Term]` stanza bodies into structured records.

use tracing::debug;

use crate::core::stanza::Stanza;

/// One parsed `[Term]` stanza.
///
/// Repeatable fields (`alt_id`, `consider`, `xref`) keep encounter order
/// with exact duplicates removed, first occurrence winning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermRecord {
    pub id: String,
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub is_obsolete: bool,
    pub alt_ids: Vec<String>,
    pub consider_ids: Vec<String>,
    pub parent_id: Option<String>,
    pub xrefs: Vec<String>,
}

impl TermRecord {
    pub fn has_alternatives(&self) -> bool {
        !self.consider_ids.is_empty() || !self.alt_ids.is_empty()
    }
}

/// Splits a `key: value` line, trimming the value and stripping a trailing
/// `! comment`. Returns `None` for lines without a colon.
fn split_field(line: &str) -> Option<(&str, &str)> {
    let (key, rest) = line.split_once(':')?;
    let value = match rest.find('!') {
        Some(pos) => &rest[..pos],
        None => rest,
    };
    Some((key.trim(), value.trim()))
}

/// First whitespace-delimited token of a relation value, i.e. the target id
/// of `is_a: GO:0000001 ! name` or `part_of GO:0000002`.
fn first_token(value: &str) -> Option<&str> {
    value.split_whitespace().next()
}

fn push_unique(seq: &mut Vec<String>, value: &str) {
    if !seq.iter().any(|v| v == value) {
        seq.push(value.to_string());
    }
}

/// Builds a `TermRecord` from a `[Term]` stanza.
///
/// Lines without a colon and unrecognized keys are skipped; OBO producers
/// vary in strictness, so neither is fatal. Returns `None` when the stanza
/// has no `id`, which downstream code must be able to rely on.
pub fn parse_term(stanza: &Stanza, source: &str) -> Option<TermRecord> {
    let mut record = TermRecord::default();

    for line in &stanza.lines {
        let Some((key, value)) = split_field(&line.text) else {
            if !line.text.trim().is_empty() {
                debug!(
                    "{source}:{}: skipping malformed line {:?}",
                    line.number, line.text
                );
            }
            continue;
        };

        match key {
            "id" => record.id = value.to_string(),
            "name" => record.name = Some(value.to_string()),
            "namespace" => record.namespace = Some(value.to_string()),
            // Exact literal; "True", "TRUE" etc. do not count
            "is_obsolete" => record.is_obsolete = value == "true",
            "alt_id" => push_unique(&mut record.alt_ids, value),
            "consider" => push_unique(&mut record.consider_ids, value),
            "xref" => push_unique(&mut record.xrefs, value),
            "is_a" => {
                if record.parent_id.is_none() {
                    record.parent_id = first_token(value).map(str::to_string);
                }
            }
            "relationship" => {
                if record.parent_id.is_none()
                    && let Some(target) = value.strip_prefix("part_of")
                    && target.starts_with(char::is_whitespace)
                {
                    record.parent_id = first_token(target).map(str::to_string);
                }
            }
            _ => {} // forward-compatible: unknown keys ignored
        }
    }

    if record.id.is_empty() {
        debug!("{source}: dropping [Term] stanza without an id");
        return None;
    }
    Some(record)
}
