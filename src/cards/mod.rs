//! Cards and deck construction.
//!
//! ## Key Types
//!
//! - `CardIndex`: Position of a card in the dealt deck
//! - `PairId`: Shared by the two cards of a pair
//! - `FacePair`: The two faces a pair shows
//! - `Card`: A dealt card
//!
//! Decks are dealt by `deal_pairs` from a level's face pairs or from
//! [`number_pairs`] for free play.

pub mod card;
pub mod deck;

pub use card::{Card, CardIndex, FacePair, PairId};
pub(crate) use deck::deal_pairs;
pub use deck::{number_pairs, pair_count};
