//! Mock provider implementation for testing.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use showmatch_core::ShowId;

use super::ShowSearchProvider;
use crate::errors::ShowSearchError;
use crate::types::{SearchHit, ShowRecord};

/// Mock provider that serves canned hits and records every query.
#[derive(Debug, Default)]
pub struct MockProvider {
    responses: HashMap<String, Vec<SearchHit>>,
    failing_query: Option<String>,
    queries: Mutex<Vec<String>>,
}

impl MockProvider {
    /// Creates a new mock provider for testing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `hits` for exactly `query`.
    pub fn with_response(mut self, query: &str, hits: Vec<SearchHit>) -> Self {
        self.responses.insert(query.to_string(), hits);
        self
    }

    /// Makes searches for `query` fail.
    pub fn failing_on(mut self, query: &str) -> Self {
        self.failing_query = Some(query.to_string());
        self
    }

    /// Queries received so far, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }

    /// Builds a hit with the fields used by resolution.
    pub fn hit(id: u32, name: &str, score: f64, premiered: Option<&str>) -> SearchHit {
        SearchHit {
            score,
            show: ShowRecord {
                id: ShowId(id),
                name: name.to_string(),
                url: None,
                show_type: None,
                language: None,
                genres: Vec::new(),
                status: None,
                runtime: None,
                premiered: premiered.map(String::from),
                network: None,
                web_channel: None,
                summary: None,
            },
        }
    }
}

#[async_trait]
impl ShowSearchProvider for MockProvider {
    async fn search_shows(&self, query: &str) -> Result<Vec<SearchHit>, ShowSearchError> {
        self.queries.lock().push(query.to_string());

        if self.failing_query.as_deref() == Some(query) {
            return Err(ShowSearchError::SearchFailed {
                query: query.to_string(),
                reason: "mock failure".to_string(),
            });
        }

        Ok(self.responses.get(query).cloned().unwrap_or_default())
    }

    async fn show_details(&self, id: ShowId) -> Result<ShowRecord, ShowSearchError> {
        self.responses
            .values()
            .flatten()
            .find(|hit| hit.show.id == id)
            .map(|hit| hit.show.clone())
            .ok_or(ShowSearchError::IdNotFound { id })
    }
}
