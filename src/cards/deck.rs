//! Deck construction.
//!
//! Two generators exist:
//!
//! - `deal_pairs`: the leveled deck. Takes the first `pair_count` face
//!   pairs of a level and deals both faces of each.
//! - [`number_pairs`]: the free-play board. Pair `i` shows the number
//!   `i + 1` on both cards.
//!
//! Both shuffle with a uniform Fisher–Yates pass driven by [`GameRng`],
//! then number the cards by their final position.

use im::Vector;

use super::card::{Card, CardIndex, FacePair, PairId};
use crate::core::GameRng;

/// Number of pairs a square grid holds. Odd grids leave one cell empty.
#[must_use]
pub const fn pair_count(grid_size: u32) -> usize {
    (grid_size as usize * grid_size as usize) / 2
}

/// Deal a shuffled deck from the first `pair_count` entries of `pairs`.
///
/// Pair `i` becomes `PairId(i)`; its first face is dealt before its second
/// so the unshuffled order is deterministic. A short `pairs` slice deals
/// only what it holds; level definitions are validated before they reach
/// here.
#[must_use]
pub(crate) fn deal_pairs(pairs: &[FacePair], pair_count: usize, rng: &mut GameRng) -> Vector<Card> {
    let mut faces: Vec<(PairId, &str)> = pairs
        .iter()
        .take(pair_count)
        .enumerate()
        .flat_map(|(i, pair)| {
            let id = PairId::new(i as u32);
            [(id, pair.first.as_str()), (id, pair.second.as_str())]
        })
        .collect();

    rng.shuffle(&mut faces);

    faces
        .into_iter()
        .enumerate()
        .map(|(position, (pair, face))| Card {
            index: CardIndex::new(position as u32),
            pair,
            face: face.to_string(),
        })
        .collect()
}

/// Face pairs for the free-play number board: `1,1`, `2,2`, ...
#[must_use]
pub fn number_pairs(pair_count: usize) -> Vec<FacePair> {
    (1..=pair_count).map(|n| FacePair::twin(n.to_string())).collect()
}
