//! Showmatch Search - show lookup over a search collaborator
//!
//! Wire shapes for the show-search endpoint, the provider seam that supplies
//! search results and show records, and the lookup service that resolves a
//! free-text or qualified show name to a single show.

pub mod errors;
pub mod providers;
pub mod service;
pub mod types;

// Re-export main types
pub use errors::ShowSearchError;
pub use providers::{RecordedProvider, ShowSearchProvider};
pub use service::ShowLookup;
pub use types::{ChannelRecord, CountryRecord, SearchHit, ShowRecord};

/// Convenience type alias for Results with ShowSearchError.
pub type Result<T> = std::result::Result<T, ShowSearchError>;
