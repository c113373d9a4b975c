//! HTTP front end for the deck registry.
//!
//! Routes:
//! - `POST /deck?shuffle=&cards=` creates a deck
//! - `GET /deck/open?deck_id=` returns a snapshot
//! - `GET /deck/draw?deck_id=&count=` draws a hand
//!
//! Every failure is answered with HTTP 400 and `{errorCode, error}`.

mod api;
pub mod config;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use card_deck_core::DeckRegistry;

pub use api::ApiError;

pub type SharedState = Arc<DeckRegistry>;

/// Builds the router around an existing registry.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/deck", post(api::create_deck))
        .route("/deck/open", get(api::open_deck))
        .route("/deck/draw", get(api::draw_cards))
        .with_state(state)
}
