//! Provider implementations for show search functionality.

use std::sync::Arc;

use async_trait::async_trait;
use showmatch_core::ShowId;

use crate::errors::ShowSearchError;
use crate::types::{SearchHit, ShowRecord};

#[cfg(test)]
pub mod mock;
pub mod recorded;

#[cfg(test)]
pub use mock::MockProvider;
pub use recorded::RecordedProvider;

/// Trait for show search providers.
///
/// Implementations supply the two collaborators of a show lookup: the
/// scored search used for disambiguation and the detail fetch by id.
#[async_trait]
pub trait ShowSearchProvider: Send + Sync + std::fmt::Debug {
    /// Search for shows by free-text query.
    ///
    /// An unknown query yields an empty list, not an error.
    ///
    /// # Errors
    /// - `ShowSearchError::SearchFailed` - Search operation failed
    /// - `ShowSearchError::ProviderError` - Provider-specific error
    async fn search_shows(&self, query: &str) -> Result<Vec<SearchHit>, ShowSearchError>;

    /// Fetch the full show record for an id.
    ///
    /// # Errors
    /// - `ShowSearchError::IdNotFound` - No show with this id
    /// - `ShowSearchError::ProviderError` - Provider-specific error
    async fn show_details(&self, id: ShowId) -> Result<ShowRecord, ShowSearchError>;
}

#[async_trait]
impl<P: ShowSearchProvider + ?Sized> ShowSearchProvider for Arc<P> {
    async fn search_shows(&self, query: &str) -> Result<Vec<SearchHit>, ShowSearchError> {
        (**self).search_shows(query).await
    }

    async fn show_details(&self, id: ShowId) -> Result<ShowRecord, ShowSearchError> {
        (**self).show_details(id).await
    }
}
