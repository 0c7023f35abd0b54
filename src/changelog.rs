//! Changelog document handling.
//!
//! The document is modeled as a sequence of lines so the existing byte layout
//! round-trips unchanged. New entries are inserted after the header block;
//! everything already present is left untouched.

use regex::Regex;
use std::fs;
use std::path::Path;

use crate::error::{ReleaseBumpError, Result};

/// One release entry: a version plus the ISO calendar date it was cut on.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangelogEntry {
    pub version: String,
    pub date: String,
}

impl ChangelogEntry {
    /// Create an entry for `version` dated `date` (YYYY-MM-DD).
    pub fn new(version: impl Into<String>, date: impl Into<String>) -> Self {
        ChangelogEntry {
            version: version.into(),
            date: date.into(),
        }
    }

    /// Render the markdown block for this entry, including its trailing
    /// blank line.
    pub fn render(&self) -> String {
        format!(
            "## [{version}] - {date}\n\n### Changes\n\n- Update version to {version}\n\n",
            version = self.version,
            date = self.date,
        )
    }
}

/// An ordered sequence of changelog lines, most-recent entry first.
#[derive(Debug, Clone, PartialEq)]
pub struct Changelog {
    lines: Vec<String>,
}

impl Changelog {
    /// Parse a document from its raw text.
    pub fn parse(content: &str) -> Self {
        Changelog {
            lines: content.split('\n').map(String::from).collect(),
        }
    }

    /// Synthesize the default document: header line, blank line, description,
    /// blank line.
    pub fn seed(header: &str, description: &str) -> Self {
        Changelog::parse(&format!("{}\n\n{}\n\n", header, description))
    }

    /// Reads the document at `path`.
    ///
    /// # Returns
    /// * `Ok(Some(Changelog))` - File exists and was read
    /// * `Ok(None)` - File does not exist (caller seeds a default)
    /// * `Err` - Any other read failure
    pub fn load(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(Changelog::parse(&content))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ReleaseBumpError::Io(e)),
        }
    }

    /// True if any line carries the header marker as a prefix.
    pub fn has_header(&self, marker: &str) -> bool {
        self.lines.iter().any(|line| line.starts_with(marker))
    }

    /// True if the document already has an entry titled with `version`.
    pub fn has_entry_for(&self, version: &str) -> bool {
        if let Ok(re) = Regex::new(r"^## \[([^\]]+)\]") {
            return self.lines.iter().any(|line| {
                re.captures(line)
                    .and_then(|captures| captures.get(1))
                    .map(|m| m.as_str() == version)
                    .unwrap_or(false)
            });
        }
        false
    }

    /// Insert a new entry block at the top of the entry list.
    ///
    /// With a header present the block lands one line past the end of the
    /// header block (header line plus any immediately-following non-blank
    /// lines). Without one, the block is prepended to the document with no
    /// separator adjustment.
    pub fn insert_entry(&mut self, entry: &ChangelogEntry, header_marker: &str) {
        let block = entry.render();
        match insertion_index(&self.lines, header_marker) {
            Some(index) => {
                let index = index.min(self.lines.len());
                for (offset, piece) in block.split('\n').enumerate() {
                    self.lines.insert(index + offset, piece.to_string());
                }
            }
            None => {
                let existing = self.lines.join("\n");
                self.lines = format!("{}{}", block, existing)
                    .split('\n')
                    .map(String::from)
                    .collect();
            }
        }
    }

    /// Reassemble the document text.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Write the document to `path`, overwriting it.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }
}

/// Finds where a new entry block goes in `lines`.
///
/// Scans top-to-bottom for the first line prefixed with `header_marker`, then
/// skips forward over the streak of non-blank lines. The insertion point is
/// one past the first blank-or-end position after that streak; it may exceed
/// the line count when the streak runs to end-of-file, in which case callers
/// clamp and append.
///
/// Returns `None` when no header line exists anywhere in the document.
pub fn insertion_index(lines: &[String], header_marker: &str) -> Option<usize> {
    let start = lines.iter().position(|line| line.starts_with(header_marker))?;

    let mut cursor = start;
    while cursor < lines.len() && !lines[cursor].trim().is_empty() {
        cursor += 1;
    }

    Some(cursor + 1)
}

/// Duplicate the document at `primary` to `secondary`, overwriting it
/// unconditionally. The copy is byte-for-byte identical.
pub fn duplicate(primary: &Path, secondary: &Path) -> Result<()> {
    fs::copy(primary, secondary)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "# Changelog";
    const DESCRIPTION: &str =
        "All notable changes to this project will be documented in this file.";

    fn entry() -> ChangelogEntry {
        ChangelogEntry::new("1.0.1", "2024-01-01")
    }

    #[test]
    fn test_entry_render() {
        assert_eq!(
            entry().render(),
            "## [1.0.1] - 2024-01-01\n\n### Changes\n\n- Update version to 1.0.1\n\n"
        );
    }

    #[test]
    fn test_seed_layout() {
        let doc = Changelog::seed(HEADER, DESCRIPTION);
        assert_eq!(
            doc.render(),
            "# Changelog\n\nAll notable changes to this project will be documented in this file.\n\n"
        );
        assert!(doc.has_header(HEADER));
    }

    #[test]
    fn test_insertion_index_after_header() {
        let lines: Vec<String> = ["# Changelog", "", "old content"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        // Header streak is the header line alone; insertion goes one past
        // the blank that ends it.
        assert_eq!(insertion_index(&lines, HEADER), Some(2));
    }

    #[test]
    fn test_insertion_index_skips_header_block() {
        let lines: Vec<String> = ["intro", "# Changelog", "subtitle line", "", "old"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(insertion_index(&lines, HEADER), Some(4));
    }

    #[test]
    fn test_insertion_index_no_header() {
        let lines: Vec<String> = ["just some text", ""].iter().map(|s| s.to_string()).collect();
        assert_eq!(insertion_index(&lines, HEADER), None);
    }

    #[test]
    fn test_insertion_index_header_streak_to_end() {
        let lines: Vec<String> = vec!["# Changelog".to_string()];
        // Past the end; insert_entry clamps and appends.
        assert_eq!(insertion_index(&lines, HEADER), Some(2));
    }

    #[test]
    fn test_insert_into_seeded_document() {
        let mut doc = Changelog::seed(HEADER, DESCRIPTION);
        doc.insert_entry(&entry(), HEADER);

        let content = doc.render();
        assert!(content.starts_with("# Changelog\n\n## [1.0.1] - 2024-01-01\n"));
        assert!(content.contains(DESCRIPTION));

        let header_pos = content.find("# Changelog").unwrap();
        let entry_pos = content.find("## [1.0.1]").unwrap();
        let description_pos = content.find(DESCRIPTION).unwrap();
        assert!(header_pos < entry_pos);
        assert!(entry_pos < description_pos);
    }

    #[test]
    fn test_insert_keeps_existing_entries_below() {
        let mut doc = Changelog::seed(HEADER, DESCRIPTION);
        doc.insert_entry(&ChangelogEntry::new("1.0.1", "2024-01-01"), HEADER);
        doc.insert_entry(&ChangelogEntry::new("1.0.2", "2024-02-01"), HEADER);

        let content = doc.render();
        let newer = content.find("## [1.0.2]").unwrap();
        let older = content.find("## [1.0.1]").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_insert_without_header_prepends() {
        let original = "some existing notes\nmore notes\n";
        let mut doc = Changelog::parse(original);
        doc.insert_entry(&entry(), HEADER);

        // No separator adjustment: entry block directly followed by the
        // original content.
        assert_eq!(doc.render(), format!("{}{}", entry().render(), original));
    }

    #[test]
    fn test_insert_header_without_trailing_blank_appends() {
        let mut doc = Changelog::parse("# Changelog");
        doc.insert_entry(&entry(), HEADER);

        let content = doc.render();
        assert!(content.starts_with("# Changelog\n## [1.0.1]"));
    }

    #[test]
    fn test_has_entry_for() {
        let mut doc = Changelog::seed(HEADER, DESCRIPTION);
        doc.insert_entry(&entry(), HEADER);

        assert!(doc.has_entry_for("1.0.1"));
        assert!(!doc.has_entry_for("1.0.2"));
    }

    #[test]
    fn test_parse_render_round_trip() {
        let content = "# Changelog\n\n## [0.9.0] - 2023-12-01\n\nbody\n";
        assert_eq!(Changelog::parse(content).render(), content);
    }
}
