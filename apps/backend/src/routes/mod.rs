//! HTTP surface of the archive.
//!
//! Every endpoint is listed once in [`route_table`]; [`configure`] registers
//! that table on an actix app. All routes are read-only `GET`s.

use actix_web::{web, HttpResponse, Route};
use serde::Serialize;

use crate::extractors::ResponseFormat;
use crate::render::HtmlView;

pub mod decks;
pub mod games;
pub mod health;
pub mod rounds;
pub mod sessions;
pub mod users;

/// One entry of the route table.
#[derive(Clone, Copy)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    handler: fn() -> Route,
}

impl RouteDescriptor {
    fn new(path: &'static str, name: &'static str, handler: fn() -> Route) -> Self {
        Self {
            path,
            name,
            handler,
        }
    }

    pub fn route(&self) -> Route {
        (self.handler)()
    }
}

/// The complete list of endpoints served by the archive.
pub fn route_table() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::new("/health", "health", || web::get().to(health::health)),
        RouteDescriptor::new("/deck/{id}", "deck", || web::get().to(decks::get_deck)),
        RouteDescriptor::new("/deck/{id}/download", "deck_download", || {
            web::get().to(decks::download_deck)
        }),
        RouteDescriptor::new("/round/{id}", "round", || web::get().to(rounds::get_round)),
        RouteDescriptor::new("/game/{id}", "game", || web::get().to(games::get_game)),
        RouteDescriptor::new("/session/{id}", "session", || {
            web::get().to(sessions::get_session)
        }),
        RouteDescriptor::new("/user/{id}", "user", || web::get().to(users::get_user)),
    ]
}

/// Register every route of [`route_table`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    for descriptor in route_table() {
        cfg.route(descriptor.path, descriptor.route());
    }
}

/// Renders a view as HTML or JSON according to the negotiated format.
pub(crate) fn respond<T>(format: ResponseFormat, view: &T) -> HttpResponse
where
    T: Serialize + HtmlView,
{
    match format {
        ResponseFormat::Html => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(view.render_html()),
        ResponseFormat::Json => HttpResponse::Ok().json(view),
    }
}
