use crate::models::MovieDetail;

/// In-memory, append-only list of titles marked to watch.
///
/// Entries are `None` when the add action fired before any detail had
/// arrived. Duplicates are kept.
#[derive(Debug, Default, Clone)]
pub struct WatchList {
    entries: Vec<Option<MovieDetail>>,
}

impl WatchList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, detail: Option<MovieDetail>) {
        self.entries.push(detail);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Option<&MovieDetail>> {
        self.entries.get(index).map(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&MovieDetail>> {
        self.entries.iter().map(Option::as_ref)
    }

    pub fn entries(&self) -> &[Option<MovieDetail>] {
        &self.entries
    }
}
