//! Provider serving search responses captured ahead of time.
//!
//! The catalog is a JSON document:
//!
//! ```json
//! {
//!   "searches": { "the office": [ {"score": 20.1, "show": {...}} ] },
//!   "shows": { "526": {...} }
//! }
//! ```
//!
//! Query keys match case-insensitively with whitespace collapsed. Every show
//! that appears in a search response can also be fetched by id.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use showmatch_core::ShowId;
use tracing::debug;

use super::ShowSearchProvider;
use crate::errors::ShowSearchError;
use crate::types::{SearchHit, ShowRecord};

#[derive(Debug, Default, Deserialize)]
struct Catalog {
    #[serde(default)]
    searches: HashMap<String, Vec<SearchHit>>,
    #[serde(default)]
    shows: HashMap<u32, ShowRecord>,
}

/// Show search provider backed by a recorded catalog.
#[derive(Debug, Default, Clone)]
pub struct RecordedProvider {
    searches: HashMap<String, Vec<SearchHit>>,
    shows: HashMap<ShowId, ShowRecord>,
}

impl RecordedProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// - `ShowSearchError::ParseError` - If the text is not a valid catalog
    pub fn from_json(json: &str) -> Result<Self, ShowSearchError> {
        let catalog: Catalog =
            serde_json::from_str(json).map_err(|e| ShowSearchError::ParseError {
                reason: format!("Invalid catalog: {e}"),
            })?;

        let mut provider = Self {
            searches: HashMap::new(),
            shows: catalog
                .shows
                .into_iter()
                .map(|(id, record)| (ShowId(id), record))
                .collect(),
        };
        for (query, hits) in catalog.searches {
            provider = provider.with_search(&query, hits);
        }

        debug!(
            searches = provider.searches.len(),
            shows = provider.shows.len(),
            "Loaded recorded catalog"
        );
        Ok(provider)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// - `ShowSearchError::ProviderError` - If the file cannot be read
    /// - `ShowSearchError::ParseError` - If the file is not a valid catalog
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ShowSearchError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            ShowSearchError::ProviderError {
                reason: format!("Cannot read catalog {}: {e}", path.display()),
            }
        })?;
        Self::from_json(&json)
    }

    /// Records the response for a query.
    pub fn with_search(mut self, query: &str, hits: Vec<SearchHit>) -> Self {
        for hit in &hits {
            self.shows
                .entry(hit.show.id)
                .or_insert_with(|| hit.show.clone());
        }
        self.searches.insert(normalize_query(query), hits);
        self
    }

    /// Records a show record for detail fetches.
    pub fn with_show(mut self, record: ShowRecord) -> Self {
        self.shows.insert(record.id, record);
        self
    }

    pub fn query_count(&self) -> usize {
        self.searches.len()
    }
}

#[async_trait]
impl ShowSearchProvider for RecordedProvider {
    async fn search_shows(&self, query: &str) -> Result<Vec<SearchHit>, ShowSearchError> {
        let key = normalize_query(query);
        let hits = self.searches.get(&key).cloned().unwrap_or_default();
        debug!(query = %key, hits = hits.len(), "Served recorded search");
        Ok(hits)
    }

    async fn show_details(&self, id: ShowId) -> Result<ShowRecord, ShowSearchError> {
        self.shows
            .get(&id)
            .cloned()
            .ok_or(ShowSearchError::IdNotFound { id })
    }
}

fn normalize_query(query: &str) -> String {
    query
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
