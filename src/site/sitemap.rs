//! Renders the `/` landing page from the routes that were actually mounted.

use crate::routes::RouteInfo;
use axum::http::Method;

/// GET routes without path parameters can be followed as plain links.
fn is_linkable(route: &RouteInfo) -> bool {
    route.methods.contains(&Method::GET) && !route.path.contains(':')
}

pub fn render(routes: &[RouteInfo]) -> String {
    let items: String = routes
        .iter()
        .map(|r| {
            let methods = r
                .methods
                .iter()
                .map(Method::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            if is_linkable(r) {
                format!("<li><a href=\"{0}\">{0}</a> [{1}]</li>", r.path, methods)
            } else {
                format!("<li>{} [{}]</li>", r.path, methods)
            }
        })
        .collect();

    format!(
        "<div style=\"text-align: center;\">\
         <h1>Welcome to your API!!</h1>\
         <p>Remember to specify a real endpoint path like:</p>\
         <ul style=\"text-align: left;\">{items}</ul>\
         </div>"
    )
}
