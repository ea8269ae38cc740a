pub mod handlers;
pub mod repo;
pub mod repo_types;

use crate::routes::RouteEntry;

pub use repo_types::User;

pub fn routes() -> Vec<RouteEntry> {
    vec![RouteEntry::new("/user").get(handlers::hello_user)]
}
