//! Candidate records produced by a show search.
//!
//! A candidate is one scored search hit, reduced to the fields that matter
//! for disambiguation. Candidates are never mutated once built.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a show in the remote metadata service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowId(pub u32);

impl ShowId {
    /// Creates a show identifier from its numeric value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value of this identifier.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ShowId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Premiere date as reported by the service.
///
/// Dates are `YYYY-MM-DD` but partial values (`YYYY`, `YYYY-MM`) occur.
/// Ordering compares the raw strings, which matches chronological order for
/// zero-padded ISO dates of any precision.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Premiere(String);

impl Premiere {
    /// Wraps a raw premiere date string.
    pub fn new(date: impl Into<String>) -> Self {
        Self(date.into().trim().to_string())
    }

    /// Returns the raw date string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the premiere year, the first four characters of the date.
    pub fn year(&self) -> &str {
        match self.0.char_indices().nth(4) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl fmt::Display for Premiere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Broadcast network or web platform that carries a show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub country_code: Option<String>,
}

impl Channel {
    /// Creates a channel with a country code.
    pub fn new(name: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country_code: Some(country_code.into()),
        }
    }

    /// Creates a channel without a country, as most web platforms are.
    pub fn worldwide(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country_code: None,
        }
    }
}

/// One scored search result for a prospective show match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Show identifier
    pub id: ShowId,
    /// Show name exactly as the service spells it
    pub name: String,
    /// Relevance score from the search endpoint, unrelated to qualifiers
    pub score: f64,
    /// Premiere date, possibly partial
    pub premiered: Option<Premiere>,
    /// Broadcast network
    pub network: Option<Channel>,
    /// Streaming platform
    pub web_channel: Option<Channel>,
    /// Primary language
    pub language: Option<String>,
}

impl Candidate {
    /// Creates a candidate with only the mandatory fields.
    pub fn new(id: u32, name: impl Into<String>, score: f64) -> Self {
        Self {
            id: ShowId(id),
            name: name.into(),
            score,
            premiered: None,
            network: None,
            web_channel: None,
            language: None,
        }
    }

    pub fn with_premiered(mut self, date: impl Into<String>) -> Self {
        self.premiered = Some(Premiere::new(date));
        self
    }

    pub fn with_network(mut self, network: Channel) -> Self {
        self.network = Some(network);
        self
    }

    pub fn with_web_channel(mut self, web_channel: Channel) -> Self {
        self.web_channel = Some(web_channel);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Country code of the network, falling back to the web platform.
    pub fn country_code(&self) -> Option<&str> {
        self.network
            .as_ref()
            .and_then(|network| network.country_code.as_deref())
            .or_else(|| {
                self.web_channel
                    .as_ref()
                    .and_then(|channel| channel.country_code.as_deref())
            })
    }

    /// Returns true if this candidate's name equals `name`, ignoring case.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    /// Lower-cased attribute values a qualifier can match.
    ///
    /// Contains the premiere year, country code, network name, platform name
    /// and language. Absent fields contribute nothing.
    pub fn attributes(&self) -> BTreeSet<String> {
        [
            self.premiered.as_ref().map(Premiere::year),
            self.country_code(),
            self.network.as_ref().map(|network| network.name.as_str()),
            self.web_channel.as_ref().map(|channel| channel.name.as_str()),
            self.language.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
        .collect()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id={}", self.name, self.id)?;
        if let Some(premiered) = &self.premiered {
            write!(f, ", year={}", premiered.year())?;
        }
        if let Some(channel) = &self.web_channel {
            write!(f, ", web_channel={}", channel.name)?;
        } else if let Some(network) = &self.network {
            write!(f, ", network={}", network.name)?;
        }
        write!(f, ")")
    }
}
