//! Qualifier sets used to disambiguate same-named shows.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;

/// Unordered set of lower-cased qualifier values such as `2015`, `us`,
/// `netflix` or `english`.
///
/// Empty and whitespace-only values are discarded on insertion, so a missing
/// candidate attribute can never be matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifierSet(BTreeSet<String>);

impl QualifierSet {
    /// Creates an empty qualifier set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a qualifier, normalising it to trimmed lower case.
    ///
    /// Returns false if the value was empty or already present.
    pub fn insert(&mut self, qualifier: &str) -> bool {
        let normalized = qualifier.trim().to_lowercase();
        if normalized.is_empty() {
            return false;
        }
        self.0.insert(normalized)
    }

    pub fn contains(&self, qualifier: &str) -> bool {
        self.0.contains(&qualifier.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of qualifiers matched by the candidate's attributes.
    pub fn match_count(&self, candidate: &Candidate) -> usize {
        candidate
            .attributes()
            .iter()
            .filter(|attribute| self.0.contains(*attribute))
            .count()
    }
}

impl<S: AsRef<str>> FromIterator<S> for QualifierSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for qualifier in iter {
            set.insert(qualifier.as_ref());
        }
        set
    }
}

impl fmt::Display for QualifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "[{}]", joined.join(", "))
    }
}

/// Structured qualifiers supplied directly by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowQualifiers {
    /// Premiere year
    pub year: Option<u16>,
    /// TV network, such as ABC or NBC
    pub network: Option<String>,
    /// Show language
    pub language: Option<String>,
    /// Country code of the network or platform
    pub country: Option<String>,
    /// Streaming platform, such as Netflix
    pub web_channel: Option<String>,
}

impl ShowQualifiers {
    pub fn is_empty(&self) -> bool {
        self.to_set().is_empty()
    }

    /// Flattens the supplied fields into a qualifier set.
    pub fn to_set(&self) -> QualifierSet {
        let year = self.year.map(|year| year.to_string());
        [
            year.as_deref(),
            self.network.as_deref(),
            self.language.as_deref(),
            self.country.as_deref(),
            self.web_channel.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Channel;

    #[test]
    fn test_insert_normalises_and_drops_empty_values() {
        let mut set = QualifierSet::new();
        assert!(set.insert(" US "));
        assert!(!set.insert("us"));
        assert!(!set.insert(""));
        assert!(!set.insert("   "));
        assert_eq!(set.len(), 1);
        assert!(set.contains("Us"));
    }

    #[test]
    fn test_match_count_counts_intersection() {
        let candidate = Candidate::new(1, "Utopia", 10.0)
            .with_premiered("2014-11-06")
            .with_network(Channel::new("ABC", "AU"))
            .with_language("English");

        let set: QualifierSet = ["au", "abc"].into_iter().collect();
        assert_eq!(set.match_count(&candidate), 2);

        let set: QualifierSet = ["gb", "channel 4", "2014"].into_iter().collect();
        assert_eq!(set.match_count(&candidate), 1);

        assert_eq!(QualifierSet::new().match_count(&candidate), 0);
    }

    #[test]
    fn test_structured_qualifiers_flatten_to_set() {
        let qualifiers = ShowQualifiers {
            year: Some(1967),
            network: Some("NBC".to_string()),
            language: None,
            country: Some("".to_string()),
            web_channel: Some("Netflix".to_string()),
        };

        let set = qualifiers.to_set();
        assert_eq!(set.len(), 3);
        assert!(set.contains("1967"));
        assert!(set.contains("nbc"));
        assert!(set.contains("netflix"));
        assert!(!qualifiers.is_empty());
        assert!(ShowQualifiers::default().is_empty());
    }

    #[test]
    fn test_display_lists_sorted_values() {
        let set: QualifierSet = ["us", "2015"].into_iter().collect();
        assert_eq!(set.to_string(), "[2015, us]");
    }
}
