//! Showmatch Core - show name disambiguation
//!
//! Turns a free-text show query and a scored list of search candidates into
//! a single show id. The query decomposer separates trailing qualifier words
//! from the show name; the candidate resolver ranks candidates by relevance,
//! name and qualifier matches with a deterministic tie-break.
//!
//! Nothing here performs I/O. Searching is delegated to a caller-supplied
//! function, synchronous or asynchronous.

pub mod candidate;
pub mod config;
pub mod decompose;
pub mod qualifiers;
pub mod resolve;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use candidate::{Candidate, Channel, Premiere, ShowId};
pub use config::{DecomposerConfig, ResolverConfig, ShowmatchConfig};
pub use decompose::{Decomposition, QueryDecomposer};
pub use qualifiers::{QualifierSet, ShowQualifiers};
pub use resolve::{CandidateResolver, Resolution, ResolutionPath};

/// Errors raised by the disambiguation core.
#[derive(Debug, thiserror::Error)]
pub enum ShowmatchError {
    #[error("No candidates to choose from")]
    NoCandidates,
}

impl ShowmatchError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            ShowmatchError::NoCandidates => "No matching show found".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowmatchError>;
