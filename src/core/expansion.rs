use std::collections::HashSet;

/// Set of directory ids currently shown expanded.
///
/// Membership is only meaningful for directories. [`toggle`](Self::toggle) is
/// the single mutation path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: HashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with the given ids already expanded.
    pub fn with_expanded<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            open: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Flip membership of `id`. Returns whether it is expanded afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.open.remove(id) {
            false
        } else {
            self.open.insert(id.to_string());
            true
        }
    }
}
