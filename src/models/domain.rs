use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};

/// Season a monument is best visited in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    All,
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Time-of-day window a monument is best visited in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

/// A monument (point of interest) in the catalog
///
/// Immutable after catalog load. `events` holds the names of festivals
/// associated with this monument, joined against [`Event::name`] by
/// string equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monument {
    pub id: u32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location: String,
    #[serde(rename = "type")]
    pub category: String,
    pub popularity: f64,
    pub indoor: bool,
    pub best_season: Season,
    pub best_time: TimeOfDay,
    #[serde(default)]
    pub events: Vec<String>,
    pub description: String,
    pub image_url: String,
}

/// A dated festival or celebration
///
/// The date range is inclusive on both ends. `related_category` is
/// informational only and plays no part in scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    #[serde(rename = "related_type")]
    pub related_category: String,
}

/// Per-request visitor context the engine scores against
///
/// `at` is the evaluation instant (wall-clock, no timezone) used for
/// event relevance and time-of-day scoring. It is always explicit so
/// ranking stays deterministic; the HTTP layer fills in "now" when the
/// client does not.
#[derive(Debug, Clone)]
pub struct VisitorContext {
    pub latitude: f64,
    pub longitude: f64,
    pub preferred_category: String,
    pub at: chrono::NaiveDateTime,
}

/// One ranked catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMonument {
    pub name: String,
    pub score: f64,
}

/// Complete ranking over the catalog, descending by score
///
/// Ties keep catalog order. Serializes as a JSON object whose keys
/// appear in rank order, matching the `/getRecommendations` contract.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingResult {
    entries: Vec<ScoredMonument>,
}

impl RankingResult {
    pub fn new(entries: Vec<ScoredMonument>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ScoredMonument] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score of a monument by name, if present in the ranking
    pub fn score_of(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.score)
    }

    /// Zero-based rank of a monument by name
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}

impl Serialize for RankingResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.score)?;
        }
        map.end()
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub distance: f64,
    pub category: f64,
    pub popularity: f64,
    pub event: f64,
    pub time_of_day: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            distance: 0.40,
            category: 0.20,
            popularity: 0.15,
            event: 0.20,
            time_of_day: 0.05,
        }
    }
}
