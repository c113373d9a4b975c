//! # Card deck core
//!
//! Card and deck model, card-code validation, and the in-memory registry
//! that creates decks, serves snapshots and hands out draws. The wire
//! messages live here too so that a server and any client agree on them.
//! Nothing in this crate knows about HTTP.

mod card;
mod deck;
mod error;
mod message;
mod registry;

pub use card::*;

pub use deck::*;

pub use error::*;

pub use message::*;

pub use registry::*;
