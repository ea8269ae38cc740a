//! Route registration. Every handler is mounted through a [`RouteEntry`], which
//! records the methods it serves; the sitemap renders that record.

use axum::{
    handler::Handler,
    http::Method,
    routing::{self, MethodRouter},
    Router,
};

use crate::state::AppState;
use crate::{favorites, planets, site, users};

pub struct RouteEntry {
    path: &'static str,
    methods: Vec<Method>,
    router: MethodRouter<AppState>,
}

/// What the sitemap knows about a mounted route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    pub path: &'static str,
    pub methods: Vec<Method>,
}

impl RouteEntry {
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            methods: Vec::new(),
            router: MethodRouter::new(),
        }
    }

    pub fn get<H, T>(self, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.mount(Method::GET, routing::get(handler))
    }

    pub fn post<H, T>(self, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.mount(Method::POST, routing::post(handler))
    }

    pub fn delete<H, T>(self, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.mount(Method::DELETE, routing::delete(handler))
    }

    fn mount(mut self, method: Method, router: MethodRouter<AppState>) -> Self {
        self.methods.push(method);
        self.router = self.router.merge(router);
        self
    }

    pub fn info(&self) -> RouteInfo {
        RouteInfo {
            path: self.path,
            methods: self.methods.clone(),
        }
    }
}

/// All routes served by the application, in sitemap order.
pub fn table() -> Vec<RouteEntry> {
    [
        site::routes(),
        planets::routes(),
        users::routes(),
        favorites::routes(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Mounts `entries` on a router and returns it with the listing of what was mounted.
pub fn build(entries: Vec<RouteEntry>) -> (Router<AppState>, Vec<RouteInfo>) {
    let mut listing = Vec::with_capacity(entries.len());
    let router = entries.into_iter().fold(Router::new(), |router, entry| {
        listing.push(entry.info());
        router.route(entry.path, entry.router)
    });
    (router, listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{site::sitemap, test_support::get_from};
    use axum::{http::StatusCode, Extension};
    use std::sync::Arc;

    #[test]
    fn listing_follows_what_is_mounted() {
        let (_, listing) = build(table());
        let favorite = listing
            .iter()
            .find(|r| r.path == "/favorite/user/:user_id/planet/:planet_id")
            .expect("favorite route listed");
        assert_eq!(favorite.methods, [Method::POST, Method::DELETE]);

        let paths: Vec<_> = listing.iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            [
                "/",
                "/search",
                "/word-size/:word",
                "/planet",
                "/user",
                "/favorite/user/:user_id/planet/:planet_id",
            ]
        );
    }

    #[tokio::test]
    async fn a_newly_mounted_route_is_served_and_listed() {
        let mut entries = table();
        entries.push(RouteEntry::new("/moons").get(|| async { "Endor" }));
        let (router, listing) = build(entries);

        assert!(sitemap::render(&listing).contains("<a href=\"/moons\">/moons</a> [GET]"));

        let state = AppState::fake().await;
        let app = router
            .layer(Extension(Arc::new(listing)))
            .with_state(state);
        let resp = get_from(app, "/moons").await;
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body, "Endor");
    }
}
