mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;

use crate::routes::RouteEntry;

pub use repo_types::Planet;

pub fn routes() -> Vec<RouteEntry> {
    vec![RouteEntry::new("/planet").post(handlers::create_planet)]
}
