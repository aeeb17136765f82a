//! Filepath: src/core/stanza.rs
//! Groups raw lines into bracket-delimited OBO stanzas.
//!
//! A trimmed line of the form `[Name]` opens a stanza and flushes the
//! previous one. Everything before the first header (the OBO preamble with
//! `format-version:` etc.) is discarded. End of input flushes the final
//! open stanza.

use std::io;

use crate::infra::io::OboLine;

/// One bracket-delimited block: the header name plus its body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stanza {
    pub name: String,
    pub lines: Vec<OboLine>,
}

impl Stanza {
    fn new(name: String) -> Self {
        Self {
            name,
            lines: Vec::new(),
        }
    }

    pub fn is_term(&self) -> bool {
        self.name == "Term"
    }
}

/// Returns the header identifier when `line` is a stanza header.
fn header_name(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() || inner.contains(['[', ']']) {
        return None;
    }
    Some(inner)
}

/// Iterator adapter turning a line stream into a stanza stream.
///
/// Read errors from the underlying lines are passed through once and end
/// the stream; a partially assembled stanza is dropped in that case rather
/// than emitted half-parsed.
pub struct StanzaSplitter<I> {
    lines: I,
    current: Option<Stanza>,
    done: bool,
}

impl<I> StanzaSplitter<I>
where
    I: Iterator<Item = io::Result<OboLine>>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            current: None,
            done: false,
        }
    }
}

impl<I> Iterator for StanzaSplitter<I>
where
    I: Iterator<Item = io::Result<OboLine>>,
{
    type Item = io::Result<Stanza>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    if let Some(name) = header_name(&line.text) {
                        let next = Stanza::new(name.to_string());
                        // Flush the stanza that just ended, if any
                        if let Some(finished) = self.current.replace(next) {
                            return Some(Ok(finished));
                        }
                    } else if let Some(current) = self.current.as_mut() {
                        current.lines.push(line);
                    }
                    // Preamble lines fall through and are discarded
                }
                Some(Err(e)) => {
                    self.done = true;
                    self.current = None;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    return self.current.take().map(Ok);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &str) -> impl Iterator<Item = io::Result<OboLine>> + '_ {
        input.lines().enumerate().map(|(i, text)| {
            Ok(OboLine {
                text: text.to_string(),
                number: i + 1,
            })
        })
    }

    fn split(input: &str) -> Vec<Stanza> {
        StanzaSplitter::new(lines(input))
            .map(|s| s.unwrap())
            .collect()
    }

    #[test]
    fn discards_preamble_before_first_header() {
        let stanzas = split("format-version: 1.2\ndate: 01:01:2020\n\n[Term]\nid: GO:1\n");
        assert_eq!(stanzas.len(), 1);
        assert_eq!(stanzas[0].name, "Term");
        assert_eq!(stanzas[0].lines.len(), 1);
        assert_eq!(stanzas[0].lines[0].text, "id: GO:1");
    }

    #[test]
    fn splits_on_each_header_and_flushes_at_eof() {
        let stanzas = split("[Term]\nid: GO:1\n[Typedef]\nid: part_of\n[Term]\nid: GO:2\n");
        let names: Vec<&str> = stanzas.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Term", "Typedef", "Term"]);
        assert_eq!(stanzas[2].lines[0].text, "id: GO:2");
    }

    #[test]
    fn header_requires_balanced_brackets() {
        assert_eq!(header_name("[Term]"), Some("Term"));
        assert_eq!(header_name("  [Typedef]  "), Some("Typedef"));
        assert_eq!(header_name("[]"), None);
        assert_eq!(header_name("[Te]rm]"), None);
        assert_eq!(header_name("id: GO:1"), None);
        assert_eq!(header_name("plain text"), None);
    }

    #[test]
    fn empty_input_yields_no_stanzas() {
        assert!(split("").is_empty());
    }

    #[test]
    fn read_error_ends_the_stream() {
        let input: Vec<io::Result<OboLine>> = vec![
            Ok(OboLine {
                text: "[Term]".into(),
                number: 1,
            }),
            Err(io::Error::new(io::ErrorKind::InvalidData, "corrupt gzip")),
        ];
        let mut splitter = StanzaSplitter::new(input.into_iter());
        assert!(splitter.next().unwrap().is_err());
        assert!(splitter.next().is_none());
    }
}
