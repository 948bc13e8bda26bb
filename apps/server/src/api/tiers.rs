use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use league_core::diversification::AllocationTier;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Settings, Tier},
};

#[utoipa::path(get, path = "/api/v1/tiers", responses((status = 200, body = [Tier])))]
pub async fn list_tiers() -> Json<Vec<Tier>> {
    Json(AllocationTier::all().into_iter().map(Tier::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/v1/tiers/{tier}",
    params(("tier" = String, Path, description = "cautious, moderate or aggressive")),
    responses(
        (status = 200, body = Tier),
        (status = 400, description = "Unknown tier"),
    )
)]
pub async fn get_tier(Path(tier): Path<String>) -> ApiResult<Json<Tier>> {
    let tier = tier.parse::<AllocationTier>()?;
    Ok(Json(Tier::from(tier)))
}

#[utoipa::path(get, path = "/api/v1/settings", responses((status = 200, body = Settings)))]
pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<Settings> {
    Json(state.scoring_service.settings().into())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tiers", get(list_tiers))
        .route("/tiers/{tier}", get(get_tier))
        .route("/settings", get(get_settings))
}
