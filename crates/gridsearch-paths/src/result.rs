use gridsearch_core::Pos;

/// Outcome of one search run.
///
/// `path` runs from start to target inclusive when `found` is set, and is
/// empty otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub found: bool,
    pub path: Vec<Pos>,
}

impl SearchResult {
    /// The target could not be reached.
    pub fn not_found() -> Self {
        Self::default()
    }

    /// Wrap the route returned by one of the `*_path` searches.
    pub fn from_path(path: Option<Vec<Pos>>) -> Self {
        match path {
            Some(path) => Self { found: true, path },
            None => Self::not_found(),
        }
    }

    /// Number of steps along the path.
    pub fn edges(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl From<Option<Vec<Pos>>> for SearchResult {
    fn from(path: Option<Vec<Pos>>) -> Self {
        Self::from_path(path)
    }
}
