// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Event, Monument, RankingResult, ScoredMonument, ScoringWeights, Season, TimeOfDay,
    VisitorContext,
};
pub use requests::RecommendationsRequest;
pub use responses::{ErrorResponse, HealthResponse};
