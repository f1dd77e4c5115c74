// Core algorithm exports
pub mod distance;
pub mod ranker;
pub mod scoring;

pub use distance::{distance_scores, geodesic_distance_km};
pub use ranker::Ranker;
pub use scoring::{
    category_match_score, event_relevance_score, popularity_score, single_event_score,
    time_of_day_score,
};
