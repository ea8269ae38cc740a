use axum::{extract::State, Json};
use bytes::Bytes;
use tracing::{info, instrument};

use crate::{
    dto::MsgResponse, error::AppError, planets::dto::CreatePlanetRequest,
    planets::repo_types::Planet, state::AppState,
};

/// POST /planet { planet_name, population }
///
/// The body is parsed by hand so a missing key falls through to the generic
/// 500 path instead of axum's 422 rejection.
#[instrument(skip(state, body))]
pub async fn create_planet(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MsgResponse>, AppError> {
    let payload: CreatePlanetRequest = serde_json::from_slice(&body)?;

    let planet = Planet::insert(&state.db, &payload.planet_name, payload.population).await?;

    info!(planet_id = planet.id, planet = %planet, "planet inserted");
    Ok(Json(MsgResponse::new(format!(
        "Planet inserted with id {}",
        planet.id
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::send;
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn create_planet_reports_new_id_and_persists_fields() {
        let state = AppState::fake().await;
        let resp = send(
            &state,
            Method::POST,
            "/planet",
            Some(r#"{"planet_name": "Alderaan", "population": 2000000}"#),
        )
        .await;

        assert_eq!(resp.status, StatusCode::OK);
        let msg = resp.json()["msg"].as_str().unwrap().to_owned();
        let id: i64 = msg
            .strip_prefix("Planet inserted with id ")
            .expect("message prefix")
            .parse()
            .unwrap();
        assert!(id > 0);

        let stored = Planet::find_by_id(&state.db, id).await.unwrap().unwrap();
        assert_eq!(stored.planet_name, "Alderaan");
        assert_eq!(stored.population, 2_000_000);
    }

    #[tokio::test]
    async fn population_of_a_trillion_is_accepted() {
        let state = AppState::fake().await;
        let resp = send(
            &state,
            Method::POST,
            "/planet",
            Some(r#"{"planet_name": "Coruscant", "population": 1000000000000}"#),
        )
        .await;
        assert_eq!(resp.status, StatusCode::OK);

        let msg = resp.json()["msg"].as_str().unwrap().to_owned();
        let id: i64 = msg["Planet inserted with id ".len()..].parse().unwrap();
        let stored = Planet::find_by_id(&state.db, id).await.unwrap().unwrap();
        assert_eq!(stored.population, 1_000_000_000_000);
    }

    #[tokio::test]
    async fn duplicate_planet_name_is_a_server_error() {
        let state = AppState::fake().await;
        let body = r#"{"planet_name": "Endor", "population": 30000000}"#;

        let first = send(&state, Method::POST, "/planet", Some(body)).await;
        assert_eq!(first.status, StatusCode::OK);

        let second = send(&state, Method::POST, "/planet", Some(body)).await;
        assert_eq!(second.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn missing_key_is_a_server_error_not_a_validation_error() {
        let state = AppState::fake().await;
        let resp = send(
            &state,
            Method::POST,
            "/planet",
            Some(r#"{"planet_name": "Kashyyyk"}"#),
        )
        .await;
        assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);

        let resp = send(&state, Method::POST, "/planet", Some("not json")).await;
        assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn trailing_slash_is_accepted() {
        let state = AppState::fake().await;
        let resp = send(
            &state,
            Method::POST,
            "/planet/",
            Some(r#"{"planet_name": "Bespin", "population": 6000000}"#),
        )
        .await;
        assert_eq!(resp.status, StatusCode::OK);
    }
}
