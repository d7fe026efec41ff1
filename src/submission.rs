use std::fmt;

/// One artwork URL and its 1-based position in the submitted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkSubmission {
    pub index: usize,
    pub url: String,
}

impl ArtworkSubmission {
    pub fn new(index: usize, url: impl Into<String>) -> Self {
        Self {
            index,
            url: url.into(),
        }
    }

    /// Row label used in results, e.g. `Artwork 3`.
    pub fn label(&self) -> String {
        format!("Artwork {}", self.index)
    }
}

impl fmt::Display for ArtworkSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Artwork {} ({})", self.index, self.url)
    }
}

/// Splits comma-separated user input into numbered submissions.
///
/// Blank entries are dropped before numbering. Duplicates are kept and
/// numbered separately.
pub fn parse_submissions(input: &str) -> Vec<ArtworkSubmission> {
    input
        .split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .enumerate()
        .map(|(i, url)| ArtworkSubmission::new(i + 1, url))
        .collect()
}
