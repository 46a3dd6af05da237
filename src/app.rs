use crate::detail::{DetailController, LookupRequest};
use crate::models::{MovieDetail, MovieSummary};
use crate::omdb::OmdbApi;
use crate::request::{Generation, Settlement};
use crate::search::{SearchController, SearchRequest};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::widgets::ListState;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// A settled fetch, sent back from its task to the event loop.
#[derive(Debug)]
pub enum AppMessage {
    SearchSettled {
        generation: Generation,
        result: Result<Vec<MovieSummary>>,
    },
    LookupSettled {
        generation: Generation,
        result: Result<MovieDetail>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Results,
}

/// Root coordinator: wires input to the controllers and runs their fetches.
pub struct App {
    provider: Arc<dyn OmdbApi>,
    tx: mpsc::UnboundedSender<AppMessage>,
    search: SearchController,
    detail: DetailController,
    highlight: ListState,
    focus: Focus,
    should_quit: bool,
}

impl App {
    pub fn new(provider: Arc<dyn OmdbApi>, tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self {
            provider,
            tx,
            search: SearchController::new(),
            detail: DetailController::new(),
            highlight: ListState::default(),
            focus: Focus::default(),
            should_quit: false,
        }
    }

    pub fn with_channel(
        provider: Arc<dyn OmdbApi>,
    ) -> (Self, mpsc::UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(provider, tx), rx)
    }

    /// Issues the search for the initial empty query.
    pub fn start(&mut self) {
        let req = self.search.start();
        self.dispatch_search(req);
    }

    pub fn search(&self) -> &SearchController {
        &self.search
    }

    pub fn detail(&self) -> &DetailController {
        &self.detail
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlight.selected()
    }

    pub fn highlight_state(&self) -> &ListState {
        &self.highlight
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        if let Some(req) = self.search.set_query(query) {
            self.dispatch_search(req);
        }
    }

    pub fn select_movie(&mut self, imdb_id: &str) {
        if let Some(req) = self.detail.select_movie(imdb_id) {
            self.dispatch_lookup(req);
        }
    }

    pub fn close_movie(&mut self) {
        self.detail.close_movie();
    }

    pub fn add_to_watch(&mut self, detail: Option<MovieDetail>) {
        self.detail.add_to_watch(detail);
    }

    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::SearchSettled { generation, result } => {
                if self.search.settle(generation, result) == Settlement::Applied {
                    self.reset_highlight();
                }
            }
            AppMessage::LookupSettled { generation, result } => {
                self.detail.settle(generation, result);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Results => self.handle_results_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            // Chords such as Ctrl+A or Alt+x do not type.
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                if let Some(req) = self.search.push_char(c) {
                    self.dispatch_search(req);
                }
            }
            KeyCode::Backspace => {
                if let Some(req) = self.search.pop_char() {
                    self.dispatch_search(req);
                }
            }
            KeyCode::Down | KeyCode::Tab | KeyCode::Enter => self.focus = Focus::Results,
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_highlight(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_highlight(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_highlighted(),
            KeyCode::Esc | KeyCode::Char('c') => self.close_movie(),
            KeyCode::Char('w') => self.detail.add_current_to_watch(),
            KeyCode::Char('/') | KeyCode::Tab => self.focus = Focus::Search,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn select_highlighted(&mut self) {
        let id = self
            .highlight
            .selected()
            .and_then(|i| self.search.results().get(i))
            .map(|m| m.imdb_id.clone());
        if let Some(id) = id {
            self.select_movie(&id);
        }
    }

    fn move_highlight(&mut self, delta: isize) {
        let len = self.search.results().len();
        if len == 0 {
            self.highlight.select(None);
            return;
        }
        let current = self.highlight.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.highlight.select(Some(next));
    }

    fn reset_highlight(&mut self) {
        if self.search.results().is_empty() {
            self.highlight = ListState::default();
        } else {
            self.highlight = ListState::default().with_selected(Some(0));
        }
    }

    fn dispatch_search(&self, req: SearchRequest) {
        debug!(generation = req.generation, term = %req.term, "Dispatching search");
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = provider.search(&req.term).await;
            let msg = AppMessage::SearchSettled {
                generation: req.generation,
                result,
            };
            if tx.send(msg).is_err() {
                warn!("Event loop gone, dropping search response");
            }
        });
    }

    fn dispatch_lookup(&self, req: LookupRequest) {
        debug!(generation = req.generation, imdb_id = %req.imdb_id, "Dispatching lookup");
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = provider.lookup(&req.imdb_id).await;
            let msg = AppMessage::LookupSettled {
                generation: req.generation,
                result,
            };
            if tx.send(msg).is_err() {
                warn!("Event loop gone, dropping lookup response");
            }
        });
    }
}
