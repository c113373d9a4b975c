use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use card_deck_core::{CardCodeError, DeckCreated, DeckError, DeckOpened, ErrorBody, HandDrawn};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::SharedState;

// --- Query parameters ---
// The query string is read as raw key/value pairs so that missing, empty,
// malformed and repeated values all reach the handler and get reported
// with their own codes. A repeated key keeps its first value.

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    fn first(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Like [`QueryParams::first`], but an empty value counts as missing.
    fn required(&self, key: &str) -> Option<&str> {
        self.first(key).filter(|v| !v.is_empty())
    }
}

/// A rejected request. Each variant maps to a fixed `errorCode`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid query param value for 'shuffle': {0}")]
    InvalidShuffle(String),
    #[error("error in deck creation: {0}")]
    DeckCreation(#[from] CardCodeError),
    #[error("'deck_id' query param not provided")]
    MissingDeckId,
    #[error("Error in opening deck: {0}")]
    OpenDeck(DeckError),
    #[error("'count' query param not provided")]
    MissingCount,
    #[error("count '{0}' is not an integer")]
    CountNotInteger(String),
    #[error("count must be greater than zero")]
    CountNotPositive,
    // Malformed id, unknown deck, empty deck and short deck all share one
    // code on the wire; the message keeps the precise cause.
    #[error("Error in drawing a hand from deck: {0}")]
    DrawCards(DeckError),
}

impl ApiError {
    pub fn code(&self) -> u8 {
        match self {
            ApiError::InvalidShuffle(_) => 1,
            ApiError::DeckCreation(_) => 2,
            ApiError::MissingDeckId => 3,
            ApiError::OpenDeck(_) => 4,
            ApiError::MissingCount => 5,
            ApiError::CountNotInteger(_) | ApiError::CountNotPositive => 6,
            ApiError::DrawCards(_) => 7,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("rejected request (errorCode {}): {}", self.code(), self);
        let body = ErrorBody {
            error_code: self.code(),
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// `POST /deck`
pub(crate) async fn create_deck(
    State(registry): State<SharedState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<DeckCreated>, ApiError> {
    let shuffle = match params.first("shuffle") {
        None => false,
        Some(value) => parse_bool(value).ok_or_else(|| ApiError::InvalidShuffle(value.to_string()))?,
    };

    let deck = registry.create_deck(shuffle, params.first("cards"))?;
    info!("created deck {} ({} cards, shuffled: {})", deck.id, deck.remaining(), deck.shuffled);
    Ok(Json(DeckCreated::from(&deck)))
}

/// `GET /deck/open`
pub(crate) async fn open_deck(
    State(registry): State<SharedState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<DeckOpened>, ApiError> {
    let deck_id = params.required("deck_id").ok_or(ApiError::MissingDeckId)?;
    let deck = registry.open_deck(deck_id).map_err(ApiError::OpenDeck)?;
    Ok(Json(DeckOpened::from(deck)))
}

/// `GET /deck/draw`
pub(crate) async fn draw_cards(
    State(registry): State<SharedState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<HandDrawn>, ApiError> {
    let deck_id = params.required("deck_id").ok_or(ApiError::MissingDeckId)?;
    let count = params.required("count").ok_or(ApiError::MissingCount)?;
    let count = match count.parse::<i32>() {
        Ok(n) if n > 0 => n as usize,
        Ok(_) => return Err(ApiError::CountNotPositive),
        Err(_) => return Err(ApiError::CountNotInteger(count.to_string())),
    };

    let hand = registry.draw_cards(deck_id, count).map_err(ApiError::DrawCards)?;
    info!("drew {} cards from deck {}", hand.len(), deck_id);
    Ok(Json(HandDrawn::from(hand)))
}

/// Accepts the usual spellings of a boolean query flag.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
