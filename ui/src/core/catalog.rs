//! Topic catalog: the fixed set of topics and their three quotes each.
//!
//! The table lives in `assets/data/quotes.json` and is compiled into the
//! binary. It is decoded once on first access and never mutated afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

/// Number of quotes stored per topic.
pub const QUOTES_PER_TOPIC: usize = 3;

const EMBEDDED_CATALOG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/quotes.json"
));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Topic {
    Coding,
    Football,
    Cricket,
    Gaming,
}

impl Topic {
    /// All topics in selector order.
    pub const ALL: [Topic; 4] = [Topic::Coding, Topic::Football, Topic::Cricket, Topic::Gaming];

    /// Canonical name; also the catalog key and the selector option value.
    pub fn name(self) -> &'static str {
        match self {
            Topic::Coding => "Coding",
            Topic::Football => "Football",
            Topic::Cricket => "Cricket",
            Topic::Gaming => "Gaming",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Topic::Coding => "💻",
            Topic::Football => "⚽",
            Topic::Cricket => "🏏",
            Topic::Gaming => "🎮",
        }
    }

    /// Selector label, e.g. `🏏 Cricket`.
    pub fn label(self) -> String {
        format!("{} {}", self.emoji(), self.name())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown topic `{0}`")]
pub struct UnknownTopic(pub String);

impl FromStr for Topic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|topic| topic.name() == s)
            .ok_or_else(|| UnknownTopic(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("quote catalog is malformed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("quote catalog has no entry for {0}")]
    MissingTopic(Topic),
}

/// Immutable topic → quotes table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<Topic, [String; QUOTES_PER_TOPIC]>,
}

impl Catalog {
    /// Decode a catalog from JSON (`{"Coding": ["..", "..", ".."], ...}`).
    ///
    /// Entries with a number of quotes other than three fail to decode, and
    /// every [`Topic`] must be present.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let entries: BTreeMap<Topic, [String; QUOTES_PER_TOPIC]> = serde_json::from_str(raw)?;
        if let Some(missing) = Topic::ALL.into_iter().find(|t| !entries.contains_key(t)) {
            return Err(CatalogError::MissingTopic(missing));
        }
        Ok(Self { entries })
    }

    pub fn quotes(&self, topic: Topic) -> &[String; QUOTES_PER_TOPIC] {
        // Presence of every topic is checked in `from_json`.
        &self.entries[&topic]
    }

    pub fn topics(&self) -> impl Iterator<Item = Topic> + '_ {
        self.entries.keys().copied()
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let catalog = Catalog::from_json(EMBEDDED_CATALOG).expect("embedded quote catalog is valid");
    tracing::debug!(topics = catalog.entries.len(), "quote catalog loaded");
    catalog
});

/// The embedded catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// String-keyed lookup; `None` for names outside the catalog.
pub fn quotes_for(name: &str) -> Option<&'static [String; QUOTES_PER_TOPIC]> {
    name.parse::<Topic>().ok().map(|topic| catalog().quotes(topic))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_covers_every_topic() {
        let cat = catalog();
        assert_eq!(cat.topics().count(), Topic::ALL.len());
        for topic in Topic::ALL {
            let quotes = cat.quotes(topic);
            assert!(quotes.iter().all(|q| !q.trim().is_empty()), "{topic} has a blank quote");
            assert!(
                quotes[0] != quotes[1] && quotes[1] != quotes[2] && quotes[0] != quotes[2],
                "{topic} repeats a quote"
            );
        }
    }

    #[test]
    fn cricket_quotes_keep_stored_order() {
        let quotes = quotes_for("Cricket").unwrap();
        assert_eq!(
            quotes,
            &[
                "You don't play for the crowd; you play for the country.".to_string(),
                "Enjoy the game and chase your dreams. Dreams do come true!".to_string(),
                "Every morning I wake up, I believe I can score runs for Pakistan.".to_string(),
            ]
        );
    }

    #[test]
    fn lookup_is_exact_on_name() {
        assert!(quotes_for("Coding").is_some());
        assert!(quotes_for("coding").is_none());
        assert!(quotes_for("Tennis").is_none());
        assert!(quotes_for("").is_none());
    }

    #[test]
    fn topic_names_round_trip_through_from_str() {
        for topic in Topic::ALL {
            assert_eq!(topic.name().parse::<Topic>(), Ok(topic));
        }
        assert_eq!(
            "Chess".parse::<Topic>(),
            Err(UnknownTopic("Chess".to_string()))
        );
    }

    #[test]
    fn missing_topic_is_rejected() {
        let raw = r#"{
            "Coding": ["a", "b", "c"],
            "Football": ["a", "b", "c"],
            "Cricket": ["a", "b", "c"]
        }"#;
        match Catalog::from_json(raw) {
            Err(CatalogError::MissingTopic(Topic::Gaming)) => {}
            other => panic!("expected missing Gaming, got {other:?}"),
        }
    }

    #[test]
    fn wrong_quote_count_is_rejected() {
        let raw = r#"{
            "Coding": ["a", "b"],
            "Football": ["a", "b", "c"],
            "Cricket": ["a", "b", "c"],
            "Gaming": ["a", "b", "c"]
        }"#;
        assert!(matches!(Catalog::from_json(raw), Err(CatalogError::Decode(_))));
    }

    #[test]
    fn labels_carry_emoji_and_name() {
        assert_eq!(Topic::Cricket.label(), "🏏 Cricket");
        assert_eq!(Topic::Gaming.to_string(), "Gaming");
    }
}
