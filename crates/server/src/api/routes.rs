use std::{collections::HashMap, sync::Arc};

use crate::{dto::RouteOptionDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::{error, info};
use yatra::{prelude::*, service};

pub async fn routes(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RouteOptionDto>>, StatusCode> {
    let (from, to) = pair(&params)?;
    let resolution = state
        .service
        .resolve(from, to)
        .await
        .map_err(status_from)?;
    info!(
        "{} alternatives for {} ({:?})",
        resolution.alternatives.len(),
        resolution.key,
        resolution.direction
    );
    Ok(Json(
        resolution
            .alternatives
            .iter()
            .map(RouteOptionDto::from)
            .collect(),
    ))
}

pub async fn route(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<RouteOptionDto>, StatusCode> {
    let (from, to) = pair(&params)?;
    let alternative = state
        .service
        .find_route(from, to)
        .await
        .map_err(status_from)?;
    Ok(Json(RouteOptionDto::from(&alternative)))
}

pub async fn available(State(state): State<Arc<AppState>>) -> Json<Vec<RoutePair>> {
    Json(state.service.available_routes())
}

fn pair(params: &HashMap<String, String>) -> Result<(&str, &str), StatusCode> {
    let from = params
        .get("from")
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .ok_or(StatusCode::BAD_REQUEST)?;
    let to = params
        .get("to")
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .ok_or(StatusCode::BAD_REQUEST)?;
    Ok((from, to))
}

fn status_from(err: service::Error) -> StatusCode {
    match err {
        service::Error::NotFound { .. } => StatusCode::NOT_FOUND,
        service::Error::TimedOut(_) => {
            error!("{err}");
            StatusCode::GATEWAY_TIMEOUT
        }
        service::Error::Superseded => StatusCode::CONFLICT,
    }
}
