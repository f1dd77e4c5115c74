//! Yatra Algo - Monument recommendation service for the Yatra travel guide
//!
//! This library provides the recommendation engine used by the Yatra
//! travel guide app. It ranks the monument catalog for a visitor by a
//! weighted blend of proximity, category affinity, popularity, festival
//! relevance, and time-of-day fit.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::catalog::{Catalog, CatalogError};
pub use crate::core::{distance::geodesic_distance_km, Ranker};
pub use crate::models::{
    Event, Monument, RankingResult, RecommendationsRequest, ScoredMonument, ScoringWeights,
    VisitorContext,
};
