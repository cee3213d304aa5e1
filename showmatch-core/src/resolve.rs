//! Candidate resolution.
//!
//! Picks the single most likely show from a scored candidate list. Rules
//! are applied in priority order:
//!
//! 1. A strictly dominant relevance score with a distinct name wins outright.
//! 2. Candidates are narrowed to those whose name equals the requested name.
//! 3. With qualifiers, the candidate matching the most qualifiers wins; ties
//!    go to the newest premiere.
//! 4. Without qualifiers, the newest same-named candidate wins, else the
//!    highest relevance score.
//!
//! Ties never fail. When several shows remain equally likely a warning is
//! logged and the earliest-listed of the newest candidates is returned.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::candidate::{Candidate, Premiere, ShowId};
use crate::config::ResolverConfig;
use crate::qualifiers::QualifierSet;
use crate::{Result, ShowmatchError};

/// Logged when resolution has to guess between equally likely shows.
pub const MULTIPLE_SHOWS_MATCHED: &str = "Multiple shows matched this search, try providing more \
     information such as premiere year, country code (us, au, gb, etc.), network or language. \
     Otherwise the show with the most recent premiere date will be chosen";

/// Rule that decided a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPath {
    /// Top relevance score strictly exceeded the runner-up with a different name
    DominantScore,
    /// Exactly one candidate matched the most qualifiers
    QualifierMatch,
    /// Several candidates matched the most qualifiers; newest premiere chosen
    QualifierTie,
    /// Exactly one candidate carried the requested name
    SingleNameMatch,
    /// Several candidates carried the requested name; newest premiere chosen
    NewestPremiere,
    /// Nothing narrowed the list; highest relevance score chosen
    HighestScore,
}

impl ResolutionPath {
    /// Returns true if the winner was picked among equally likely shows.
    pub fn is_ambiguous(self) -> bool {
        matches!(self, Self::QualifierTie | Self::NewestPremiere)
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub id: ShowId,
    pub path: ResolutionPath,
}

/// Selects a single show id from scored search candidates.
///
/// Resolution is a pure function of its inputs: the candidate list is only
/// borrowed and never reordered in place.
#[derive(Debug, Clone, Default)]
pub struct CandidateResolver {
    config: ResolverConfig,
}

impl CandidateResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Returns the id of the most likely candidate.
    ///
    /// # Errors
    ///
    /// - `ShowmatchError::NoCandidates` - If `candidates` is empty
    pub fn resolve(
        &self,
        candidates: &[Candidate],
        exact_name: Option<&str>,
        qualifiers: &QualifierSet,
    ) -> Result<ShowId> {
        self.resolve_detailed(candidates, exact_name, qualifiers)
            .map(|resolution| resolution.id)
    }

    /// Returns the most likely candidate together with the rule that chose it.
    ///
    /// # Errors
    ///
    /// - `ShowmatchError::NoCandidates` - If `candidates` is empty
    pub fn resolve_detailed(
        &self,
        candidates: &[Candidate],
        exact_name: Option<&str>,
        qualifiers: &QualifierSet,
    ) -> Result<Resolution> {
        let ranked = rank_by_score(candidates);
        let Some(&top) = ranked.first() else {
            return Err(ShowmatchError::NoCandidates);
        };

        if self.config.dominant_score_shortcut
            && let Some(&runner_up) = ranked.get(1)
            && top.score > runner_up.score
            && top.name != runner_up.name
        {
            debug!(id = %top.id, score = top.score, "Top candidate dominates by relevance score");
            return Ok(Resolution {
                id: top.id,
                path: ResolutionPath::DominantScore,
            });
        }

        let pool: Vec<&Candidate> = match exact_name {
            Some(name) => candidates.iter().filter(|c| c.has_name(name)).collect(),
            None => candidates.iter().collect(),
        };

        if pool.is_empty() {
            debug!(name = exact_name, "No candidate carries the requested name");
            return Ok(Resolution {
                id: top.id,
                path: ResolutionPath::HighestScore,
            });
        }

        if !qualifiers.is_empty() {
            return Ok(self.resolve_by_qualifiers(&pool, qualifiers));
        }

        if exact_name.is_none() {
            return Ok(Resolution {
                id: top.id,
                path: ResolutionPath::HighestScore,
            });
        }

        if let [only] = pool.as_slice() {
            return Ok(Resolution {
                id: only.id,
                path: ResolutionPath::SingleNameMatch,
            });
        }

        self.notify_ambiguity(pool.len());
        Ok(Resolution {
            id: newest(&pool).id,
            path: ResolutionPath::NewestPremiere,
        })
    }

    fn resolve_by_qualifiers(&self, pool: &[&Candidate], qualifiers: &QualifierSet) -> Resolution {
        let scored: Vec<(&Candidate, usize)> = pool
            .iter()
            .map(|&candidate| (candidate, qualifiers.match_count(candidate)))
            .collect();

        let best = scored.iter().map(|&(_, score)| score).max().unwrap_or(0);
        let leaders: Vec<&Candidate> = scored
            .iter()
            .filter(|&&(_, score)| score == best)
            .map(|&(candidate, _)| candidate)
            .collect();

        debug!(
            qualifiers = %qualifiers,
            best_score = best,
            leaders = leaders.len(),
            "Scored candidates against qualifiers"
        );

        if let [only] = leaders.as_slice() {
            return Resolution {
                id: only.id,
                path: ResolutionPath::QualifierMatch,
            };
        }

        self.notify_ambiguity(leaders.len());
        Resolution {
            id: newest(&leaders).id,
            path: ResolutionPath::QualifierTie,
        }
    }

    fn notify_ambiguity(&self, tied: usize) {
        if self.config.ambiguity_notice {
            warn!(tied, "{MULTIPLE_SHOWS_MATCHED}");
        } else {
            debug!(tied, "Multiple shows matched, choosing the newest");
        }
    }
}

/// Candidates ordered by descending relevance score, ties in input order.
fn rank_by_score(candidates: &[Candidate]) -> Vec<&Candidate> {
    let mut ranked: Vec<&Candidate> = candidates.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// First candidate with the latest premiere. Undated candidates rank oldest.
fn newest<'a>(pool: &[&'a Candidate]) -> &'a Candidate {
    let mut best = pool[0];
    for &candidate in &pool[1..] {
        if compare_premieres(candidate.premiered.as_ref(), best.premiered.as_ref())
            == Ordering::Greater
        {
            best = candidate;
        }
    }
    best
}

fn compare_premieres(a: Option<&Premiere>, b: Option<&Premiere>) -> Ordering {
    let a = a.filter(|premiere| !premiere.as_str().is_empty());
    let b = b.filter(|premiere| !premiere.as_str().is_empty());
    a.cmp(&b)
}
