use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use crate::{
    dto::MsgResponse, error::AppError, favorites::repo_types::FavoritePlanet, state::AppState,
};

/// POST /favorite/user/:user_id/planet/:planet_id
#[instrument(skip(state))]
pub async fn add_favorite(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i64, i64)>,
) -> Result<Json<MsgResponse>, AppError> {
    let favorite = FavoritePlanet::insert(&state.db, user_id, planet_id, state.started_on).await?;

    info!(user_id, planet_id, "favorite added");
    Ok(Json(MsgResponse::new(format!(
        "Favorited planet  success {}",
        favorite.insertion_date
    ))))
}

/// DELETE /favorite/user/:user_id/planet/:planet_id
///
/// An absent row is not a 404: it surfaces as an unhandled error.
#[instrument(skip(state))]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i64, i64)>,
) -> Result<Json<MsgResponse>, AppError> {
    let favorite = FavoritePlanet::find(&state.db, user_id, planet_id)
        .await?
        .ok_or(AppError::MissingRow("favorite_planet"))?;
    favorite.delete(&state.db).await?;

    info!(user_id, planet_id, "favorite removed");
    Ok(Json(MsgResponse::new("Favorito eliminado correctamente")))
}
