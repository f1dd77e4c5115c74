use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::catalog::Catalog;
use crate::core::Ranker;
use crate::models::{ErrorResponse, HealthResponse, RecommendationsRequest, VisitorContext};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub ranker: Ranker,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/getMonuments", web::get().to(get_monuments))
        .route("/getRecommendations", web::post().to(get_recommendations));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        monuments: state.catalog.len(),
        events: state.catalog.events().len(),
    })
}

/// Catalog listing endpoint
///
/// GET /getMonuments
///
/// Returns every monument with its details, including the image URLs the
/// client resolves against its asset host.
async fn get_monuments(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.monuments())
}

/// Recommendation endpoint
///
/// POST /getRecommendations
///
/// Request body (all fields optional):
/// ```json
/// {
///   "latitude": 27.7104,
///   "longitude": 85.3487,
///   "preferred_category": "Hindu Temple",
///   "at": "2025-10-12T09:30:00"
/// }
/// ```
///
/// Responds with the complete ranked name-to-score mapping, best first.
async fn get_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendations request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let at = req
        .at
        .unwrap_or_else(|| chrono::Local::now().naive_local());

    let visitor = VisitorContext {
        latitude: req.latitude,
        longitude: req.longitude,
        preferred_category: req.preferred_category.clone(),
        at,
    };

    tracing::info!(
        "Ranking {} monuments for visitor at ({}, {}), category '{}'",
        state.catalog.len(),
        visitor.latitude,
        visitor.longitude,
        visitor.preferred_category
    );

    let ranking = state.ranker.rank(&state.catalog, &visitor);

    tracing::debug!("Top entry: {:?}", ranking.entries().first());

    HttpResponse::Ok().json(ranking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    fn test_state() -> AppState {
        AppState {
            catalog: Arc::new(Catalog::embedded().unwrap()),
            ranker: Ranker::with_default_weights(),
        }
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.monuments, 19);
    }

    #[actix_web::test]
    async fn test_get_monuments_lists_whole_catalog() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/getMonuments").to_request();
        let body: Vec<crate::models::Monument> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.len(), 19);
        assert!(body.iter().any(|m| m.name == "Pashupatinath Temple"));
    }

    #[actix_web::test]
    async fn test_get_recommendations_with_defaults() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/getRecommendations")
            .set_json(serde_json::json!({}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let map = body.as_object().unwrap();
        assert_eq!(map.len(), 19);
    }

    #[actix_web::test]
    async fn test_get_recommendations_pinned_instant_ranks_temples_first() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        // Visitor at the Pashupatinath forecourt, morning, temple fan
        let req = test::TestRequest::post()
            .uri("/getRecommendations")
            .set_json(serde_json::json!({
                "latitude": 27.7104,
                "longitude": 85.3487,
                "preferred_category": "Hindu Temple",
                "at": "2025-06-02T09:00:00"
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let map = body.as_object().unwrap();
        assert_eq!(map.len(), 19);
        // preserve_order keeps wire order, so the first key is the top rank
        let (first, _) = map.iter().next().unwrap();
        assert_eq!(first, "Pashupatinath Temple");
    }

    #[actix_web::test]
    async fn test_get_recommendations_rejects_bad_latitude() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/getRecommendations")
            .set_json(serde_json::json!({"latitude": 120.0}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }
}
