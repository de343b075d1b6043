//! Cards on the board.
//!
//! A `Card` is created fresh every deal and lives only as long as that
//! deal. Its `CardIndex` is its position in the shuffled deck, which is
//! also the id the presentation layer reports on a click.

use serde::{Deserialize, Serialize};

/// Position of a card in the dealt deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardIndex(pub u32);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index as a `usize` for slice access.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier shared by the two cards of a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// The two faces of a pair, e.g. `("3", "III")` or `("😄", "Happy")`.
///
/// Both faces may be identical (the numbers level). Serialized as a
/// two-element array.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct FacePair {
    pub first: String,
    pub second: String,
}

impl FacePair {
    /// Create a face pair.
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// A pair showing the same face twice.
    #[must_use]
    pub fn twin(face: impl Into<String>) -> Self {
        let face = face.into();
        Self {
            first: face.clone(),
            second: face,
        }
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for FacePair {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl From<FacePair> for (String, String) {
    fn from(pair: FacePair) -> Self {
        (pair.first, pair.second)
    }
}

/// A dealt card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Position in the deck.
    pub index: CardIndex,

    /// Pair this card belongs to.
    pub pair: PairId,

    /// Face shown when revealed.
    pub face: String,
}

impl Card {
    /// Does this card form a pair with `other`?
    ///
    /// A card never pairs with itself.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.index != other.index && self.pair == other.pair
    }

    /// True when the face is a short glyph (emoji, digit) rather than a word.
    ///
    /// Renderers use this to pick a larger font for glyphs.
    #[must_use]
    pub fn is_glyph(&self) -> bool {
        self.face.encode_utf16().count() <= 2
    }
}
