pub mod handlers;
pub mod sitemap;

use crate::routes::RouteEntry;

pub fn routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/").get(handlers::get_sitemap),
        RouteEntry::new("/search").get(handlers::get_search_form),
        RouteEntry::new("/word-size/:word").get(handlers::get_word_size),
    ]
}
