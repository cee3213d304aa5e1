//! Show lookup service
//!
//! Resolves a free-text or qualified show name to a single show record by
//! combining the query decomposer, a search provider and the candidate
//! resolver.

use showmatch_core::{
    Candidate, CandidateResolver, Decomposition, QualifierSet, QueryDecomposer, Resolution,
    ShowId, ShowQualifiers, ShowmatchConfig, ShowmatchError,
};
use tracing::{debug, info};

use crate::errors::ShowSearchError;
use crate::providers::ShowSearchProvider;
use crate::types::ShowRecord;

/// Show lookup over a search provider.
#[derive(Debug)]
pub struct ShowLookup {
    provider: Box<dyn ShowSearchProvider>,
    decomposer: QueryDecomposer,
    resolver: CandidateResolver,
}

impl ShowLookup {
    /// Creates a lookup service with default configuration.
    pub fn new(provider: Box<dyn ShowSearchProvider>) -> Self {
        Self::with_config(provider, ShowmatchConfig::default())
    }

    pub fn with_config(provider: Box<dyn ShowSearchProvider>, config: ShowmatchConfig) -> Self {
        Self {
            provider,
            decomposer: QueryDecomposer::new(config.decomposer),
            resolver: CandidateResolver::new(config.resolver),
        }
    }

    /// Runs one search and converts the hits to candidates.
    ///
    /// # Errors
    /// - `ShowSearchError::SearchFailed` - Provider search failed
    /// - `ShowSearchError::ProviderError` - Provider unavailable
    pub async fn search_candidates(&self, query: &str) -> Result<Vec<Candidate>, ShowSearchError> {
        let hits = self.provider.search_shows(query).await?;
        debug!(query, hits = hits.len(), "Search completed");
        Ok(hits.iter().map(Candidate::from).collect())
    }

    /// Splits free text into a show name and trailing qualifiers.
    ///
    /// # Errors
    /// - `ShowSearchError::MissingParameters` - Text is blank
    /// - `ShowSearchError::SearchFailed` - A retry search failed
    pub async fn decompose(&self, text: &str) -> Result<Decomposition, ShowSearchError> {
        require_name(text)?;
        self.decomposer
            .decompose_async(text, |query| async move {
                self.search_candidates(&query).await
            })
            .await
    }

    /// Resolves free text such as `the office us` to a show id.
    ///
    /// # Errors
    /// - `ShowSearchError::MissingParameters` - Text is blank
    /// - `ShowSearchError::ShowNotFound` - No search produced candidates
    /// - `ShowSearchError::SearchFailed` - Provider search failed
    pub async fn resolve_text(&self, text: &str) -> Result<Resolution, ShowSearchError> {
        let decomposition = self.decompose(text).await?;
        let candidates = match decomposition.matches {
            Some(candidates) => candidates,
            None => self.search_candidates(&decomposition.show_name).await?,
        };

        self.pick(
            &decomposition.show_name,
            &candidates,
            &decomposition.qualifiers,
        )
    }

    /// Resolves a show name with structured qualifiers to a show id.
    ///
    /// # Errors
    /// - `ShowSearchError::MissingParameters` - Name is blank
    /// - `ShowSearchError::ShowNotFound` - Search produced no candidates
    /// - `ShowSearchError::SearchFailed` - Provider search failed
    pub async fn resolve_with(
        &self,
        name: &str,
        qualifiers: &ShowQualifiers,
    ) -> Result<Resolution, ShowSearchError> {
        let name = require_name(name)?;
        let candidates = self.search_candidates(name).await?;
        self.pick(name, &candidates, &qualifiers.to_set())
    }

    /// Looks up the show best matching free text.
    ///
    /// # Errors
    /// - `ShowSearchError::ShowNotFound` - No show matched
    /// - `ShowSearchError::IdNotFound` - Chosen show has no detail record
    /// - Any error from [`ShowLookup::resolve_text`]
    pub async fn find_show(&self, text: &str) -> Result<ShowRecord, ShowSearchError> {
        let resolution = self.resolve_text(text).await?;
        self.show_by_id(resolution.id).await
    }

    /// Looks up the show best matching a name and structured qualifiers.
    ///
    /// # Errors
    /// - `ShowSearchError::ShowNotFound` - No show matched
    /// - `ShowSearchError::IdNotFound` - Chosen show has no detail record
    /// - Any error from [`ShowLookup::resolve_with`]
    pub async fn find_show_with(
        &self,
        name: &str,
        qualifiers: &ShowQualifiers,
    ) -> Result<ShowRecord, ShowSearchError> {
        let resolution = self.resolve_with(name, qualifiers).await?;
        self.show_by_id(resolution.id).await
    }

    /// Fetches a show record by id.
    ///
    /// # Errors
    /// - `ShowSearchError::IdNotFound` - No show with this id
    pub async fn show_by_id(&self, id: ShowId) -> Result<ShowRecord, ShowSearchError> {
        self.provider.show_details(id).await
    }

    fn pick(
        &self,
        name: &str,
        candidates: &[Candidate],
        qualifiers: &QualifierSet,
    ) -> Result<Resolution, ShowSearchError> {
        let resolution = self
            .resolver
            .resolve_detailed(candidates, Some(name), qualifiers)
            .map_err(|e| match e {
                ShowmatchError::NoCandidates => ShowSearchError::ShowNotFound {
                    query: name.to_string(),
                },
            })?;

        info!(
            name,
            qualifiers = %qualifiers,
            id = %resolution.id,
            path = ?resolution.path,
            "Resolved show"
        );
        Ok(resolution)
    }
}

fn require_name(name: &str) -> Result<&str, ShowSearchError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ShowSearchError::MissingParameters {
            reason: "a show name is required".to_string(),
        });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use showmatch_core::ResolutionPath;

    use super::*;
    use crate::providers::MockProvider;
    use crate::types::{ChannelRecord, CountryRecord, SearchHit};

    fn with_network(mut hit: SearchHit, name: &str, code: &str) -> SearchHit {
        hit.show.network = Some(ChannelRecord {
            id: None,
            name: name.to_string(),
            country: Some(CountryRecord {
                name: None,
                code: code.to_string(),
                timezone: None,
            }),
        });
        hit
    }

    fn office_hits() -> Vec<SearchHit> {
        vec![
            with_network(
                MockProvider::hit(530, "The Office", 20.0, Some("2001-07-09")),
                "BBC Two",
                "GB",
            ),
            with_network(
                MockProvider::hit(526, "The Office", 20.0, Some("2005-03-24")),
                "NBC",
                "US",
            ),
        ]
    }

    fn lookup(provider: MockProvider) -> ShowLookup {
        ShowLookup::with_config(Box::new(provider), ShowmatchConfig::quiet())
    }

    fn lookup_shared(provider: Arc<MockProvider>) -> ShowLookup {
        ShowLookup::with_config(Box::new(provider), ShowmatchConfig::quiet())
    }

    #[tokio::test]
    async fn test_resolve_text_uses_trailing_qualifier() {
        let service = lookup(MockProvider::new().with_response("the office", office_hits()));

        let resolution = service.resolve_text("the office us").await.unwrap();
        assert_eq!(resolution.id, ShowId(526));
        assert_eq!(resolution.path, ResolutionPath::QualifierMatch);

        let record = service.find_show("the office gb").await.unwrap();
        assert_eq!(record.id, ShowId(530));
    }

    #[tokio::test]
    async fn test_decomposition_result_is_reused() {
        let provider = Arc::new(MockProvider::new().with_response("the office", office_hits()));
        let service = lookup_shared(Arc::clone(&provider));

        service.resolve_text("the office us").await.unwrap();

        assert_eq!(provider.queries(), vec!["the office us", "the office"]);
    }

    #[tokio::test]
    async fn test_unresolved_decomposition_searches_remaining_name() {
        let provider = Arc::new(MockProvider::new());
        let service = lookup_shared(Arc::clone(&provider));

        let error = service.resolve_text("Lost Hawaii").await.unwrap_err();

        assert!(error.is_not_found());
        assert_eq!(provider.queries(), vec!["Lost Hawaii", "Lost", "Lost"]);
    }

    #[tokio::test]
    async fn test_single_word_searches_once() {
        let service = lookup(MockProvider::new().with_response(
            "archer",
            vec![
                MockProvider::hit(315, "Archer", 30.0, Some("2009-09-17")),
                MockProvider::hit(9000, "Archer's Gold", 2.0, None),
            ],
        ));

        let resolution = service.resolve_text("archer").await.unwrap();
        assert_eq!(resolution.id, ShowId(315));
        assert_eq!(resolution.path, ResolutionPath::DominantScore);
    }

    #[tokio::test]
    async fn test_structured_qualifiers() {
        let service = lookup(MockProvider::new().with_response("the office", office_hits()));

        let qualifiers = ShowQualifiers {
            year: Some(2001),
            ..Default::default()
        };
        let record = service
            .find_show_with("the office", &qualifiers)
            .await
            .unwrap();
        assert_eq!(record.id, ShowId(530));

        let record = service
            .find_show_with("The Office", &ShowQualifiers::default())
            .await
            .unwrap();
        assert_eq!(record.id, ShowId(526));
    }

    #[tokio::test]
    async fn test_unknown_show_is_not_found() {
        let service = lookup(MockProvider::new());

        let error = service.find_show("no such show").await.unwrap_err();
        assert!(matches!(
            &error,
            ShowSearchError::ShowNotFound { query } if query == "no"
        ));
        assert!(error.is_not_found());

        let error = service
            .find_show_with("nothing", &ShowQualifiers::default())
            .await
            .unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let service = lookup(MockProvider::new());

        let error = service.find_show("   ").await.unwrap_err();
        assert!(matches!(error, ShowSearchError::MissingParameters { .. }));

        let error = service
            .resolve_with("", &ShowQualifiers::default())
            .await
            .unwrap_err();
        assert!(matches!(error, ShowSearchError::MissingParameters { .. }));
    }

    #[tokio::test]
    async fn test_search_failure_propagates() {
        let service = lookup(
            MockProvider::new()
                .with_response("the office", office_hits())
                .failing_on("the office us"),
        );

        let error = service.resolve_text("the office us").await.unwrap_err();
        assert!(matches!(error, ShowSearchError::SearchFailed { .. }));
    }

    #[tokio::test]
    async fn test_show_by_id_passthrough() {
        let service = lookup(MockProvider::new().with_response("the office", office_hits()));

        let record = service.show_by_id(ShowId(526)).await.unwrap();
        assert_eq!(record.name, "The Office");

        let error = service.show_by_id(ShowId(1)).await.unwrap_err();
        assert!(matches!(error, ShowSearchError::IdNotFound { .. }));
    }
}
