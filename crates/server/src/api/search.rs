use std::{collections::HashMap, sync::Arc};

use crate::{dto::PlaceDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

pub async fn places(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlaceDto>>, StatusCode> {
    if let Some(query) = params.get("q") {
        let count: usize = match params.get("count") {
            Some(value) => match value.parse() {
                Ok(value) => value,
                Err(_) => return Err(StatusCode::BAD_REQUEST),
            },
            None => 5,
        };
        let result: Vec<_> = state
            .service
            .table()
            .search_places(query)
            .into_iter()
            .take(count)
            .map(PlaceDto::from)
            .collect();
        Ok(Json(result))
    } else {
        Err(StatusCode::BAD_REQUEST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yatra::{prelude::*, service::Config};

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new(
            RouteService::builtin(Config::immediate()),
            Catalog::builtin(),
        ))
    }

    fn query(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
        Query(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    #[tokio::test]
    async fn places_suggests_partial_name() {
        let Json(result) = places(query(&[("q", "karim")]), State(state()))
            .await
            .unwrap();
        assert_eq!(result[0].name, "Karimnagar");
    }

    #[tokio::test]
    async fn places_respects_count() {
        let Json(result) = places(query(&[("q", "r"), ("count", "2")]), State(state()))
            .await
            .unwrap();
        assert!(result.len() <= 2);
    }

    #[tokio::test]
    async fn places_rejects_bad_count() {
        let result = places(query(&[("q", "eluru"), ("count", "many")]), State(state())).await;
        assert_eq!(result.unwrap_err(), StatusCode::BAD_REQUEST);
    }
}
