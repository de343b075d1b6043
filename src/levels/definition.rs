//! Level definitions - static level data.

use serde::{Deserialize, Serialize};

use crate::cards::{pair_count, FacePair};
use crate::core::EngineError;

/// Level identifier. Levels are numbered from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LevelId(pub u32);

impl LevelId {
    /// Create a new level ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The level after this one; `None` past `u32::MAX`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl std::fmt::Display for LevelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level({})", self.0)
    }
}

/// Static level definition.
///
/// Immutable once built. Construction checks that the grid is even and
/// that there are enough face pairs to fill it, so dealing a level never
/// fails.
///
/// ## Example
///
/// ```
/// use memory_maze::levels::{LevelDefinition, LevelId};
///
/// let level = LevelDefinition::new(
///     LevelId::new(1),
///     2,
///     "Numbers",
///     vec![("1", "1").into(), ("2", "2").into()],
/// )
/// .unwrap();
///
/// assert_eq!(level.pair_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LevelData")]
pub struct LevelDefinition {
    pub(super) id: LevelId,
    pub(super) grid_size: u32,
    pub(super) title: String,
    pub(super) how_to_play: String,
    pub(super) pairs: Vec<FacePair>,
}

impl LevelDefinition {
    /// Create and validate a level definition.
    pub fn new(
        id: LevelId,
        grid_size: u32,
        title: impl Into<String>,
        pairs: Vec<FacePair>,
    ) -> Result<Self, EngineError> {
        let level = Self {
            id,
            grid_size,
            title: title.into(),
            how_to_play: String::new(),
            pairs,
        };
        level.validate()?;
        Ok(level)
    }

    /// Set the instructions line shown with the level.
    #[must_use]
    pub fn with_how_to_play(mut self, text: impl Into<String>) -> Self {
        self.how_to_play = text.into();
        self
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.grid_size < 2 || self.grid_size % 2 != 0 {
            return Err(EngineError::InvalidDefinition(format!(
                "{}: grid size must be even and at least 2, got {}",
                self.id, self.grid_size
            )));
        }
        let needed = pair_count(self.grid_size);
        if self.pairs.len() < needed {
            return Err(EngineError::InvalidDefinition(format!(
                "{}: grid {}x{} needs {} pairs, source has {}",
                self.id,
                self.grid_size,
                self.grid_size,
                needed,
                self.pairs.len()
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn id(&self) -> LevelId {
        self.id
    }

    /// Side length of the square grid.
    #[must_use]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn how_to_play(&self) -> &str {
        &self.how_to_play
    }

    /// Full face-pair source. Only the first [`pair_count`](Self::pair_count)
    /// entries are dealt.
    #[must_use]
    pub fn pairs(&self) -> &[FacePair] {
        &self.pairs
    }

    /// Number of pairs dealt for this level.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        pair_count(self.grid_size)
    }

    /// Number of cards dealt for this level.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count() * 2
    }
}

/// Unvalidated level data as it appears in JSON.
#[derive(Deserialize)]
pub(super) struct LevelData {
    id: LevelId,
    grid_size: u32,
    title: String,
    #[serde(default)]
    how_to_play: String,
    pairs: Vec<FacePair>,
}

impl TryFrom<LevelData> for LevelDefinition {
    type Error = EngineError;

    fn try_from(data: LevelData) -> Result<Self, Self::Error> {
        Ok(LevelDefinition::new(data.id, data.grid_size, data.title, data.pairs)?
            .with_how_to_play(data.how_to_play))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roman() -> Vec<FacePair> {
        ["I", "II", "III", "IV", "V", "VI", "VII", "VIII"]
            .iter()
            .enumerate()
            .map(|(i, r)| FacePair::new((i + 1).to_string(), *r))
            .collect()
    }

    #[test]
    fn test_level_id() {
        let id = LevelId::new(3);
        assert_eq!(id.raw(), 3);
        assert_eq!(id.next(), Some(LevelId::new(4)));
        assert_eq!(LevelId::new(u32::MAX).next(), None);
        assert_eq!(format!("{}", id), "Level(3)");
    }

    #[test]
    fn test_valid_level() {
        let level = LevelDefinition::new(LevelId::new(2), 4, "Roman Numerals", roman())
            .unwrap()
            .with_how_to_play("Match numbers with Roman numerals.");

        assert_eq!(level.id(), LevelId::new(2));
        assert_eq!(level.pair_count(), 8);
        assert_eq!(level.card_count(), 16);
        assert_eq!(level.how_to_play(), "Match numbers with Roman numerals.");
    }

    #[test]
    fn test_odd_grid_rejected() {
        let err = LevelDefinition::new(LevelId::new(1), 3, "Odd", roman()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidDefinition(_)));
    }

    #[test]
    fn test_zero_grid_rejected() {
        assert!(LevelDefinition::new(LevelId::new(1), 0, "Empty", vec![]).is_err());
    }

    #[test]
    fn test_short_pair_source_rejected() {
        let mut pairs = roman();
        pairs.pop();
        let err = LevelDefinition::new(LevelId::new(2), 4, "Short", pairs).unwrap_err();
        assert!(err.to_string().contains("needs 8 pairs, source has 7"));
    }

    #[test]
    fn test_longer_source_allowed() {
        let level = LevelDefinition::new(LevelId::new(1), 2, "Numbers", roman()).unwrap();
        assert_eq!(level.pairs().len(), 8);
        assert_eq!(level.pair_count(), 2);
    }

    #[test]
    fn test_json_validates() {
        let json = r#"{
            "id": 1,
            "grid_size": 2,
            "title": "Numbers",
            "pairs": [["1", "1"], ["2", "2"]]
        }"#;
        let level: LevelDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(level.title(), "Numbers");
        assert_eq!(level.how_to_play(), "");

        let bad = r#"{ "id": 1, "grid_size": 2, "title": "Short", "pairs": [["1", "1"]] }"#;
        assert!(serde_json::from_str::<LevelDefinition>(bad).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let level = LevelDefinition::new(LevelId::new(2), 4, "Roman Numerals", roman()).unwrap();
        let json = serde_json::to_string(&level).unwrap();
        let restored: LevelDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(level, restored);
    }
}
