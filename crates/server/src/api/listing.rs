use std::{collections::HashMap, sync::Arc};

use crate::{dto::ListingDto, state::AppState};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use yatra::prelude::*;

pub async fn listing(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ListingDto>>, StatusCode> {
    let service = match params.get("service").map(|value| value.as_str()) {
        None | Some("all") => None,
        Some(value) => Some(
            value
                .parse::<ServiceType>()
                .map_err(|_| StatusCode::BAD_REQUEST)?,
        ),
    };
    let filter = ListingFilter {
        term: params.get("q").cloned(),
        service,
        operator: params
            .get("operator")
            .filter(|value| value.as_str() != "all")
            .cloned(),
    };
    let catalog = state.catalog.read().await;
    Ok(Json(
        catalog
            .filter(&filter)
            .into_iter()
            .map(ListingDto::from)
            .collect(),
    ))
}

pub async fn toggle_favorite(
    Path(id): Path<u32>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<bool>, StatusCode> {
    let mut catalog = state.catalog.write().await;
    catalog
        .toggle_favorite(id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
