use crate::models::MovieDetail;
use crate::request::{Generation, GenerationCounter, Settlement};
use crate::watchlist::WatchList;
use anyhow::Result;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub generation: Generation,
    pub imdb_id: String,
}

/// Owns the selected identifier, the detail fetched for it and the watch-list.
#[derive(Debug, Default)]
pub struct DetailController {
    selection: Selection,
    detail: Option<MovieDetail>,
    lookup_failed: bool,
    generations: GenerationCounter,
    watch_list: WatchList,
}

impl DetailController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected identifier, empty when nothing is selected.
    pub fn selected_id(&self) -> &str {
        match &self.selection {
            Selection::Selected(id) => id,
            Selection::Unselected => "",
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self.selection, Selection::Selected(_))
    }

    /// Detail for the current selection, once its lookup has settled.
    pub fn detail(&self) -> Option<&MovieDetail> {
        self.detail.as_ref()
    }

    /// True once the lookup for the current selection has failed.
    pub fn lookup_failed(&self) -> bool {
        self.lookup_failed
    }

    pub fn watch_list(&self) -> &WatchList {
        &self.watch_list
    }

    /// Selecting the already selected id deselects it.
    pub fn select_movie(&mut self, imdb_id: &str) -> Option<LookupRequest> {
        let next = if self.selected_id() == imdb_id || imdb_id.is_empty() {
            Selection::Unselected
        } else {
            Selection::Selected(imdb_id.to_string())
        };
        self.transition(next)
    }

    pub fn close_movie(&mut self) {
        // Unselected never issues a lookup.
        let _ = self.transition(Selection::Unselected);
    }

    pub fn add_to_watch(&mut self, detail: Option<MovieDetail>) {
        match &detail {
            Some(d) => info!(imdb_id = %d.imdb_id, title = %d.title, "Added to watch-list"),
            None => info!("Added empty entry to watch-list"),
        }
        self.watch_list.push(detail);
    }

    /// Adds whatever detail is currently held, which may be none yet.
    pub fn add_current_to_watch(&mut self) {
        self.add_to_watch(self.detail.clone());
    }

    pub fn settle(&mut self, generation: Generation, result: Result<MovieDetail>) -> Settlement {
        if !self.generations.is_current(generation) {
            debug!(
                generation,
                latest = self.generations.current(),
                "Discarding stale lookup response"
            );
            return Settlement::Discarded;
        }
        match result {
            Ok(detail) => {
                info!(imdb_id = %self.selected_id(), title = %detail.title, "Detail loaded");
                self.detail = Some(detail);
                Settlement::Applied
            }
            Err(e) => {
                warn!(imdb_id = %self.selected_id(), "Lookup failed: {:#}", e);
                self.lookup_failed = true;
                Settlement::Failed
            }
        }
    }

    fn transition(&mut self, next: Selection) -> Option<LookupRequest> {
        if next == self.selection {
            return None;
        }
        self.selection = next;
        self.detail = None;
        self.lookup_failed = false;
        // Bumped on every change so lookups for an abandoned selection are dropped.
        let generation = self.generations.next();
        match &self.selection {
            Selection::Selected(id) => Some(LookupRequest {
                generation,
                imdb_id: id.clone(),
            }),
            Selection::Unselected => None,
        }
    }
}
