use axum::Router;

use crate::state::AppState;

mod dto;
mod error;
pub(crate) mod extractors;
pub mod handlers;
mod jwt;
mod model;
mod password;
pub mod service;
pub mod store;
#[cfg(test)]
pub(crate) mod testing;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::user_routes())
        .merge(handlers::me_routes())
}
