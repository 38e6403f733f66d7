use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use validator::Validate;

use crate::config::Settings;
use crate::core::{rank_pairs_with_stats, score_breakdown, PairingError, RankOutcome};
use crate::models::{
    ErrorResponse, FilterConfig, HealthResponse, Hero, HeroId, PairView, RankPairsRequest,
    RankPairsResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub roster: Arc<Vec<Hero>>,
}

/// Configure all pair-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/pairs/rank", web::post().to(rank_pairs));
}

fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        roster_size: state.roster.len(),
    })
}

/// Rank pairs endpoint
///
/// POST /api/v1/pairs/rank
///
/// Request body:
/// ```json
/// {
///   "heroes": [{"id": "1", "mainClass": 0, "subClass": 1, "...": "..."}],
///   "filters": {
///     "heroId": "string",
///     "cooldown": true,
///     "mainClass": false,
///     "ability": {"type": "basic", "matchesRequired": 2}
///   },
///   "limit": 250
/// }
/// ```
async fn rank_pairs(
    state: web::Data<AppState>,
    req: web::Json<RankPairsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_pairs request: field_errors={:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let req = req.into_inner();
    let limit = state.settings.effective_limit(req.limit);

    let filters = match FilterConfig::try_from(req.filters) {
        Ok(filters) => filters,
        Err(e) => {
            tracing::info!("Rejected filter configuration: {}", e);
            return error_response(StatusCode::BAD_REQUEST, "Invalid filters", e.to_string());
        }
    };

    let heroes = match req.heroes {
        Some(heroes) => Arc::new(heroes),
        None => state.roster.clone(),
    };

    tracing::info!("Ranking pairs for {} heroes, limit: {}", heroes.len(), limit);

    let now = chrono::Utc::now().timestamp();
    let cancel = Arc::new(AtomicBool::new(false));

    let job = {
        let heroes = heroes.clone();
        let cancel = cancel.clone();
        web::block(move || rank_pairs_with_stats(heroes.iter(), &filters, now, &cancel))
    };

    let result = match state.settings.ranking.timeout_secs {
        Some(secs) => match tokio::time::timeout(Duration::from_secs(secs), job).await {
            Ok(result) => result,
            Err(_) => {
                cancel.store(true, Ordering::Relaxed);
                tracing::warn!("Ranking {} heroes timed out after {}s", heroes.len(), secs);
                return error_response(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Ranking timed out",
                    format!("Ranking did not finish within {} seconds", secs),
                );
            }
        },
        None => job.await,
    };

    let outcome = match result {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(e @ (PairingError::InvalidInput(_) | PairingError::InvalidFilterConfig(_)))) => {
            tracing::info!("Rejected ranking input: {}", e);
            return error_response(StatusCode::BAD_REQUEST, "Invalid input", e.to_string());
        }
        Ok(Err(PairingError::Cancelled)) => {
            return error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "Ranking cancelled",
                PairingError::Cancelled.to_string(),
            );
        }
        Err(e) => {
            tracing::error!("Ranking task failed: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Ranking failed",
                e.to_string(),
            );
        }
    };

    let response = build_response(&heroes, outcome, limit);

    tracing::info!(
        "Returning {} pairs (from {} admitted, {} heroes)",
        response.pairs.len(),
        response.total_pairs,
        response.hero_count
    );

    HttpResponse::Ok().json(response)
}

/// Resolve the top `limit` pairs back to their hero records
fn build_response(heroes: &[Hero], outcome: RankOutcome, limit: usize) -> RankPairsResponse {
    let by_id: HashMap<&HeroId, &Hero> = heroes.iter().map(|h| (&h.id, h)).collect();
    let total_pairs = outcome.pairs.len();

    let pairs = outcome
        .pairs
        .iter()
        .take(limit)
        .filter_map(|m| {
            let a = by_id.get(&m.hero_a)?;
            let b = by_id.get(&m.hero_b)?;
            Some(PairView {
                hero_a: (*a).clone(),
                hero_b: (*b).clone(),
                score: m.score,
                breakdown: score_breakdown(a, b),
            })
        })
        .collect();

    RankPairsResponse {
        pairs,
        total_pairs,
        hero_count: heroes.len(),
        stats: outcome.stats,
    }
}
