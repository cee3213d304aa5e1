//! Free-text query decomposition.
//!
//! Splits a phrase such as `the office us` into the show name the search
//! service recognises (`the office`) and the trailing words it did not
//! (`us`), which become qualifiers for candidate resolution. Words are
//! dropped from the end one at a time until a search returns results.

use std::future::Future;

use tracing::{debug, info};

use crate::candidate::Candidate;
use crate::config::DecomposerConfig;
use crate::qualifiers::QualifierSet;

/// Result of splitting a free-text query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decomposition {
    /// Words retained as the show name, joined by single spaces
    pub show_name: String,
    /// Dropped words as a qualifier set
    pub qualifiers: QualifierSet,
    /// Dropped words, lower-cased, in the order they were dropped
    pub popped_words: Vec<String>,
    /// Search results for `show_name`, when a search produced any
    pub matches: Option<Vec<Candidate>>,
}

impl Decomposition {
    fn unchanged(text: &str) -> Self {
        Self {
            show_name: text.trim().to_string(),
            ..Default::default()
        }
    }
}

/// Strips trailing qualifier words from a query by retrying a search with
/// progressively fewer words.
#[derive(Debug, Clone, Default)]
pub struct QueryDecomposer {
    config: DecomposerConfig,
}

impl QueryDecomposer {
    pub fn new(config: DecomposerConfig) -> Self {
        Self { config }
    }

    /// Decomposes `text` using a synchronous search function.
    ///
    /// Single-word queries are returned unchanged without calling `search`.
    /// An empty search result triggers a retry; a search error aborts.
    ///
    /// # Errors
    ///
    /// - `E` - Whatever error `search` returns, unchanged
    pub fn decompose<F, E>(&self, text: &str, mut search: F) -> Result<Decomposition, E>
    where
        F: FnMut(&str) -> Result<Vec<Candidate>, E>,
    {
        let Some(mut words) = WordStack::split(text) else {
            return Ok(Decomposition::unchanged(text));
        };

        loop {
            let candidates = search(&words.query())?;
            if !candidates.is_empty() {
                return Ok(words.finish(Some(candidates)));
            }
            if !words.drop_last(&self.config) {
                return Ok(words.finish(None));
            }
        }
    }

    /// Decomposes `text` using an asynchronous search function.
    ///
    /// Same contract as [`QueryDecomposer::decompose`]; each search call is
    /// awaited before deciding whether to retry.
    ///
    /// # Errors
    ///
    /// - `E` - Whatever error `search` resolves to, unchanged
    pub async fn decompose_async<F, Fut, E>(
        &self,
        text: &str,
        mut search: F,
    ) -> Result<Decomposition, E>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = Result<Vec<Candidate>, E>>,
    {
        let Some(mut words) = WordStack::split(text) else {
            return Ok(Decomposition::unchanged(text));
        };

        loop {
            let candidates = search(words.query()).await?;
            if !candidates.is_empty() {
                return Ok(words.finish(Some(candidates)));
            }
            if !words.drop_last(&self.config) {
                return Ok(words.finish(None));
            }
        }
    }
}

/// Remaining and dropped words of a query being decomposed.
struct WordStack {
    words: Vec<String>,
    popped: Vec<String>,
    attempts: usize,
}

impl WordStack {
    /// Returns None for queries without inner whitespace.
    fn split(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if !trimmed.contains(char::is_whitespace) {
            return None;
        }

        Some(Self {
            words: trimmed.split_whitespace().map(String::from).collect(),
            popped: Vec::new(),
            attempts: 0,
        })
    }

    fn query(&mut self) -> String {
        self.attempts += 1;
        self.words.join(" ")
    }

    /// Moves the last word to the popped list. The first word always stays.
    fn drop_last(&mut self, config: &DecomposerConfig) -> bool {
        if self.words.len() <= 1 {
            return false;
        }
        if config
            .max_attempts
            .is_some_and(|max_attempts| self.attempts >= max_attempts)
        {
            debug!(
                attempts = self.attempts,
                "Decomposition attempt limit reached"
            );
            return false;
        }

        let Some(word) = self.words.pop() else {
            return false;
        };
        let word = word.to_lowercase();
        let remaining = self.words.join(" ");

        if config.retry_notice {
            info!(dropped = %word, query = %remaining, "No shows found, retrying with fewer words");
        } else {
            debug!(dropped = %word, query = %remaining, "No shows found, retrying with fewer words");
        }

        self.popped.push(word);
        true
    }

    fn finish(self, matches: Option<Vec<Candidate>>) -> Decomposition {
        Decomposition {
            show_name: self.words.join(" "),
            qualifiers: self.popped.iter().collect(),
            popped_words: self.popped,
            matches,
        }
    }
}
