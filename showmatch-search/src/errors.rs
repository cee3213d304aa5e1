//! Error types for show lookups.

use showmatch_core::ShowId;
use thiserror::Error;

/// Errors that can occur while looking up a show.
#[derive(Debug, Error)]
pub enum ShowSearchError {
    /// Search operation failed with the specified query and reason.
    #[error("Search failed for query '{query}': {reason}")]
    SearchFailed {
        /// The search query that failed
        query: String,
        /// The reason for the failure
        reason: String,
    },

    /// No show matched the query.
    #[error("Show '{query}' not found")]
    ShowNotFound {
        /// The show name that was searched
        query: String,
    },

    /// No show exists with the given id.
    #[error("Show id {id} not found")]
    IdNotFound {
        /// The id that was requested
        id: ShowId,
    },

    /// The lookup request did not carry enough information.
    #[error("Missing parameters: {reason}")]
    MissingParameters {
        /// What was missing
        reason: String,
    },

    /// Failed to parse search results or response data.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },

    /// Search provider returned an error or is unavailable.
    #[error("Provider error: {reason}")]
    ProviderError {
        /// The reason for the provider error
        reason: String,
    },
}

impl ShowSearchError {
    /// Checks if this error means the requested show does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ShowSearchError::ShowNotFound { .. } | ShowSearchError::IdNotFound { .. }
        )
    }
}
