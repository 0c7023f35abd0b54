use std::fmt;

/// Warnings that occur while preparing the changelog update.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Changelog file does not exist yet and will be created
    MissingChangelog { path: String },
    /// Document has no line matching the configured header marker
    MissingHeader { marker: String },
    /// An entry for this version is already present in the document
    DuplicateEntry { version: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MissingChangelog { path } => {
                write!(f, "Changelog not found at '{}', a new one will be created", path)
            }
            BoundaryWarning::MissingHeader { marker } => {
                write!(
                    f,
                    "No '{}' header found, new entry will be placed at the top of the file",
                    marker
                )
            }
            BoundaryWarning::DuplicateEntry { version } => {
                write!(
                    f,
                    "Changelog already contains an entry for version {}",
                    version
                )
            }
        }
    }
}
