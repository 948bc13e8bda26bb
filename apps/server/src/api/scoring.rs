use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use league_core::diversification::{deviation_to_modifier, DiversificationResult};
use league_core::scoring::{
    DiversificationRequest, MatchupRequest, MatchupResult, PortfolioScore, PortfolioScoreRequest,
};
use rust_decimal::Decimal;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{ModifierRequest, ModifierResponse},
};

#[utoipa::path(
    post,
    path = "/api/v1/diversification",
    responses(
        (status = 200, description = "Per-bucket breakdown, worst bucket and modifier"),
        (status = 400, description = "Invalid target allocation"),
    )
)]
pub async fn calculate_diversification(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DiversificationRequest>,
) -> ApiResult<Json<DiversificationResult>> {
    let result = state.scoring_service.calculate_diversification(&request)?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/v1/diversification/modifier",
    request_body = ModifierRequest,
    responses(
        (status = 200, body = ModifierResponse),
        (status = 400, description = "Negative deviation"),
    )
)]
pub async fn modifier_for_deviation(
    Json(request): Json<ModifierRequest>,
) -> ApiResult<Json<ModifierResponse>> {
    if request.deviation < Decimal::ZERO {
        return Err(ApiError::BadRequest(format!(
            "Deviation must not be negative, got {}",
            request.deviation
        )));
    }
    Ok(Json(ModifierResponse {
        deviation: request.deviation,
        modifier: deviation_to_modifier(request.deviation),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/scores",
    responses(
        (status = 200, description = "Game score for a portfolio's weekly growth"),
        (status = 400, description = "Invalid target allocation"),
    )
)]
pub async fn score_portfolio(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PortfolioScoreRequest>,
) -> ApiResult<Json<PortfolioScore>> {
    let score = state.scoring_service.score_portfolio(&request)?;
    Ok(Json(score))
}

#[utoipa::path(
    post,
    path = "/api/v1/matchups",
    responses(
        (status = 200, description = "Both game scores and the matchup outcome"),
        (status = 400, description = "Invalid target allocation"),
    )
)]
pub async fn score_matchup(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MatchupRequest>,
) -> ApiResult<Json<MatchupResult>> {
    let result = state.scoring_service.score_matchup(&request)?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/diversification", post(calculate_diversification))
        .route("/diversification/modifier", post(modifier_for_deviation))
        .route("/scores", post(score_portfolio))
        .route("/matchups", post(score_matchup))
}
