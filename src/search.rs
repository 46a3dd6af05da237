use crate::models::MovieSummary;
use crate::request::{Generation, GenerationCounter, Settlement};
use anyhow::Result;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: Generation,
    pub term: String,
}

/// Owns the query string and the result set it produced.
#[derive(Debug, Default)]
pub struct SearchController {
    query: String,
    results: Vec<MovieSummary>,
    generations: GenerationCounter,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[MovieSummary] {
        &self.results
    }

    /// Request for the initial query value.
    pub fn start(&mut self) -> SearchRequest {
        self.issue()
    }

    /// Replaces the query. A request is issued only when the value changed.
    pub fn set_query(&mut self, query: impl Into<String>) -> Option<SearchRequest> {
        let query = query.into();
        if query == self.query {
            return None;
        }
        self.query = query;
        Some(self.issue())
    }

    pub fn push_char(&mut self, c: char) -> Option<SearchRequest> {
        let mut query = self.query.clone();
        query.push(c);
        self.set_query(query)
    }

    pub fn pop_char(&mut self) -> Option<SearchRequest> {
        let mut query = self.query.clone();
        query.pop()?;
        self.set_query(query)
    }

    pub fn settle(
        &mut self,
        generation: Generation,
        result: Result<Vec<MovieSummary>>,
    ) -> Settlement {
        if !self.generations.is_current(generation) {
            debug!(
                generation,
                latest = self.generations.current(),
                "Discarding stale search response"
            );
            return Settlement::Discarded;
        }
        match result {
            Ok(results) => {
                info!(query = %self.query, count = results.len(), "Search results updated");
                self.results = results;
                Settlement::Applied
            }
            Err(e) => {
                warn!(query = %self.query, "Search failed: {:#}", e);
                Settlement::Failed
            }
        }
    }

    fn issue(&mut self) -> SearchRequest {
        SearchRequest {
            generation: self.generations.next(),
            term: self.query.clone(),
        }
    }
}
