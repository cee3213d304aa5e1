//! Wire shapes of the show-search endpoint.
//!
//! A search returns `[{"score": 17.3, "show": {...}}, ...]`. Only the show
//! fields used for disambiguation and display are mapped; unknown fields
//! are ignored.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use showmatch_core::{Candidate, Channel, Premiere, ShowId};

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<.*?>").expect("HTML tag pattern is valid")
});

/// One scored entry returned by the show-search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub score: f64,
    pub show: ShowRecord,
}

/// Show record as returned by the search and show-detail endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowRecord {
    /// Show identifier
    pub id: ShowId,
    /// Show name
    pub name: String,
    /// Canonical page of the show
    pub url: Option<String>,
    /// Scripted, Reality, Animation, ...
    #[serde(rename = "type")]
    pub show_type: Option<String>,
    /// Primary language
    pub language: Option<String>,
    /// Genre list
    #[serde(default)]
    pub genres: Vec<String>,
    /// Running, Ended, To Be Determined, ...
    pub status: Option<String>,
    /// Episode runtime in minutes
    pub runtime: Option<u32>,
    /// Premiere date, `YYYY-MM-DD`
    pub premiered: Option<String>,
    /// Broadcast network
    pub network: Option<ChannelRecord>,
    /// Streaming platform
    pub web_channel: Option<ChannelRecord>,
    /// Summary with HTML markup
    pub summary: Option<String>,
}

/// Network or web channel as embedded in a show record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub id: Option<u32>,
    pub name: String,
    pub country: Option<CountryRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: Option<String>,
    pub code: String,
    pub timezone: Option<String>,
}

impl ChannelRecord {
    fn to_channel(&self) -> Channel {
        Channel {
            name: self.name.clone(),
            country_code: self.country.as_ref().map(|country| country.code.clone()),
        }
    }
}

impl ShowRecord {
    /// Premiere year, if the premiere date is known.
    pub fn year(&self) -> Option<&str> {
        self.premiered
            .as_deref()
            .filter(|date| !date.is_empty())
            .map(|date| date.get(..4).unwrap_or(date))
    }

    /// Summary with HTML tags removed.
    pub fn plain_summary(&self) -> Option<String> {
        self.summary
            .as_deref()
            .filter(|summary| !summary.is_empty())
            .map(|summary| HTML_TAG.replace_all(summary, "").into_owned())
    }

    /// Converts this record into a resolution candidate with the given score.
    pub fn to_candidate(&self, score: f64) -> Candidate {
        Candidate {
            id: self.id,
            name: self.name.clone(),
            score,
            premiered: self.premiered.as_deref().map(Premiere::new),
            network: self.network.as_ref().map(ChannelRecord::to_channel),
            web_channel: self.web_channel.as_ref().map(ChannelRecord::to_channel),
            language: self.language.clone(),
        }
    }
}

impl fmt::Display for ShowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id={}", self.name, self.id)?;
        if let Some(year) = self.year() {
            write!(f, ", year={year}")?;
        }
        if let Some(channel) = &self.web_channel {
            write!(f, ", web_channel={}", channel.name)?;
        } else if let Some(network) = &self.network {
            write!(f, ", network={}", network.name)?;
        }
        write!(f, ")")
    }
}

impl From<&SearchHit> for Candidate {
    fn from(hit: &SearchHit) -> Self {
        hit.show.to_candidate(hit.score)
    }
}

impl From<SearchHit> for Candidate {
    fn from(hit: SearchHit) -> Self {
        Candidate::from(&hit)
    }
}
