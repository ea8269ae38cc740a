pub mod handlers;
pub mod repo;
pub mod repo_types;

use crate::routes::RouteEntry;

pub use repo_types::{FavoriteDetails, FavoritePlanet};

pub fn routes() -> Vec<RouteEntry> {
    vec![RouteEntry::new("/favorite/user/:user_id/planet/:planet_id")
        .post(handlers::add_favorite)
        .delete(handlers::remove_favorite)]
}
