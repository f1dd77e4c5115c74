use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Event, Monument};

/// Seed catalog compiled into the binary: the Kathmandu Valley monuments
/// and festival calendar the service ships with.
const SEED_JSON: &str = include_str!("seed.json");

/// Errors that can occur when loading or validating a catalog
///
/// All of these are load-time failures. The ranking engine only ever
/// sees a catalog that passed validation.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate monument id {0}")]
    DuplicateMonumentId(u32),

    #[error("Duplicate monument name '{0}'")]
    DuplicateMonumentName(String),

    #[error("Monument '{name}' has invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        name: String,
        latitude: f64,
        longitude: f64,
    },

    #[error("Monument '{name}' has popularity {popularity} outside 0..=1")]
    InvalidPopularity { name: String, popularity: f64 },

    #[error("Duplicate event name '{0}'")]
    DuplicateEventName(String),

    #[error("Event '{name}' ends before it starts ({start_date} > {end_date})")]
    InvertedEventWindow {
        name: String,
        start_date: chrono::NaiveDate,
        end_date: chrono::NaiveDate,
    },

    #[error("Monument '{monument}' references unknown event '{event}'")]
    DanglingEventReference { monument: String, event: String },
}

/// On-disk catalog shape
#[derive(Debug, Deserialize)]
struct CatalogFile {
    monuments: Vec<Monument>,
    #[serde(default)]
    events: Vec<Event>,
}

/// Validated, immutable monument catalog
///
/// Construction is the seam to the catalog provider: whatever produced
/// the monument and event lists (embedded seed, JSON file, a future
/// remote store) hands them to [`Catalog::from_parts`], which validates
/// once and then serves read-only views. Safe to share across worker
/// threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    monuments: Vec<Monument>,
    events: Vec<Event>,
    events_by_name: HashMap<String, Event>,
}

impl Catalog {
    /// Build a catalog from provider output, failing fast on malformed data
    pub fn from_parts(monuments: Vec<Monument>, events: Vec<Event>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();

        for monument in &monuments {
            if !ids.insert(monument.id) {
                return Err(CatalogError::DuplicateMonumentId(monument.id));
            }
            if !names.insert(monument.name.clone()) {
                return Err(CatalogError::DuplicateMonumentName(monument.name.clone()));
            }

            let lat_ok = monument.latitude.is_finite() && monument.latitude.abs() <= 90.0;
            let lon_ok = monument.longitude.is_finite() && monument.longitude.abs() <= 180.0;
            if !lat_ok || !lon_ok {
                return Err(CatalogError::InvalidCoordinates {
                    name: monument.name.clone(),
                    latitude: monument.latitude,
                    longitude: monument.longitude,
                });
            }

            if !monument.popularity.is_finite()
                || monument.popularity < 0.0
                || monument.popularity > 1.0
            {
                return Err(CatalogError::InvalidPopularity {
                    name: monument.name.clone(),
                    popularity: monument.popularity,
                });
            }
        }

        let mut events_by_name = HashMap::with_capacity(events.len());
        for event in &events {
            if event.end_date < event.start_date {
                return Err(CatalogError::InvertedEventWindow {
                    name: event.name.clone(),
                    start_date: event.start_date,
                    end_date: event.end_date,
                });
            }
            if events_by_name
                .insert(event.name.clone(), event.clone())
                .is_some()
            {
                return Err(CatalogError::DuplicateEventName(event.name.clone()));
            }
        }

        for monument in &monuments {
            for event_name in &monument.events {
                if !events_by_name.contains_key(event_name) {
                    return Err(CatalogError::DanglingEventReference {
                        monument: monument.name.clone(),
                        event: event_name.clone(),
                    });
                }
            }
        }

        Ok(Self {
            monuments,
            events,
            events_by_name,
        })
    }

    /// The seed catalog compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(SEED_JSON)
    }

    /// Load a catalog from a JSON file with the same schema as the seed
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::from_parts(file.monuments, file.events)
    }

    pub fn monuments(&self) -> &[Monument] {
        &self.monuments
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn events_by_name(&self) -> &HashMap<String, Event> {
        &self.events_by_name
    }

    pub fn len(&self) -> usize {
        self.monuments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monuments.is_empty()
    }
}
