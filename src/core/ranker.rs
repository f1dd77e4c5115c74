use chrono::Timelike;

use crate::catalog::Catalog;
use crate::core::{
    distance::distance_scores,
    scoring::{category_match_score, event_relevance_score, popularity_score, time_of_day_score},
};
use crate::models::{RankingResult, ScoredMonument, ScoringWeights, VisitorContext};

/// Ranking orchestrator for the recommendation engine
///
/// Scoring formula per monument:
/// score = (
///     distance_score * 0.40 +     # catalog-relative proximity
///     category_score * 0.20 +     # exact preferred-category match
///     popularity * 0.15 +         # stored 0-1 value
///     event_score * 0.20 +        # best associated festival window
///     time_of_day_score * 0.05    # morning/afternoon/evening fit
/// )
///
/// The ranking is always complete: every catalog entry appears in the
/// result, low scorers included. Ties keep catalog order.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
}

impl Ranker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Rank the whole catalog for one visitor
    ///
    /// Deterministic: identical catalog and context always produce the
    /// identical ordering and scores. Reads nothing besides its
    /// arguments, so concurrent calls over a shared catalog need no
    /// locking.
    pub fn rank(&self, catalog: &Catalog, visitor: &VisitorContext) -> RankingResult {
        let monuments = catalog.monuments();
        let distance = distance_scores(visitor.latitude, visitor.longitude, monuments);

        let date = visitor.at.date();
        let hour = visitor.at.hour();

        let mut entries: Vec<ScoredMonument> = monuments
            .iter()
            .zip(distance)
            .map(|(monument, distance_score)| {
                let category_score =
                    category_match_score(&monument.category, &visitor.preferred_category);
                let event_score =
                    event_relevance_score(monument, catalog.events_by_name(), date);
                let time_score = time_of_day_score(monument.best_time, hour);

                let score = distance_score * self.weights.distance
                    + category_score * self.weights.category
                    + popularity_score(monument) * self.weights.popularity
                    + event_score * self.weights.event
                    + time_score * self.weights.time_of_day;

                ScoredMonument {
                    name: monument.name.clone(),
                    score,
                }
            })
            .collect();

        // Stable sort: equal scores keep catalog order
        entries.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        RankingResult::new(entries)
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
