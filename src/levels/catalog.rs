//! Level catalog.
//!
//! The `LevelCatalog` holds the playable levels in order and provides
//! lookup by `LevelId`. [`LevelCatalog::builtin`] is the classic five
//! level ladder; custom ladders can be built directly or loaded from JSON.

use rustc_hash::FxHashMap;

use super::definition::{LevelData, LevelDefinition, LevelId};
use crate::cards::FacePair;
use crate::core::EngineError;

/// Ordered, validated set of levels.
///
/// ## Example
///
/// ```
/// use memory_maze::levels::{LevelCatalog, LevelId};
///
/// let catalog = LevelCatalog::builtin();
/// let first = catalog.first();
///
/// assert_eq!(first.id(), LevelId::new(1));
/// assert_eq!(catalog.get(LevelId::new(5)).unwrap().grid_size(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct LevelCatalog {
    levels: Vec<LevelDefinition>,
    index: FxHashMap<LevelId, usize>,
}

impl LevelCatalog {
    /// Build a catalog. Levels must be non-empty with strictly ascending ids.
    pub fn new(levels: Vec<LevelDefinition>) -> Result<Self, EngineError> {
        if levels.is_empty() {
            return Err(EngineError::InvalidDefinition("catalog has no levels".to_string()));
        }

        let mut index = FxHashMap::default();
        for (position, level) in levels.iter().enumerate() {
            if position > 0 && levels[position - 1].id() >= level.id() {
                return Err(EngineError::InvalidDefinition(format!(
                    "level ids must be strictly ascending: {} follows {}",
                    level.id(),
                    levels[position - 1].id()
                )));
            }
            index.insert(level.id(), position);
        }

        Ok(Self { levels, index })
    }

    /// Parse a catalog from a JSON array of level objects.
    ///
    /// Malformed JSON is [`EngineError::Json`]; well-formed levels that fail
    /// validation are [`EngineError::InvalidDefinition`].
    pub fn from_json(text: &str) -> Result<Self, EngineError> {
        let data: Vec<LevelData> = serde_json::from_str(text)?;
        let levels = data
            .into_iter()
            .map(LevelDefinition::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(levels)
    }

    /// The classic ladder: Numbers, Roman Numerals, Emotions, Planets, Shapes.
    #[must_use]
    pub fn builtin() -> Self {
        let levels = vec![
            builtin_level(1, 2, "Numbers", "Match identical numbers.", NUMBERS),
            builtin_level(2, 4, "Roman Numerals", "Match numbers with Roman numerals.", ROMAN),
            builtin_level(3, 6, "Emotions", "Match emotion emojis with their names.", EMOTIONS),
            builtin_level(4, 8, "Planets", "Match planets and space objects.", PLANETS),
            builtin_level(5, 10, "Shapes", "Match shapes with their names.", SHAPES),
        ];
        let index = levels.iter().enumerate().map(|(i, l)| (l.id(), i)).collect();
        Self { levels, index }
    }

    /// Get a level by ID.
    #[must_use]
    pub fn get(&self, id: LevelId) -> Option<&LevelDefinition> {
        self.index.get(&id).map(|&i| &self.levels[i])
    }

    /// Get a level by ID or an `InvalidLevel` error.
    pub fn require(&self, id: LevelId) -> Result<&LevelDefinition, EngineError> {
        self.get(id).ok_or_else(|| EngineError::unknown_level(id))
    }

    /// Check if a level ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: LevelId) -> bool {
        self.index.contains_key(&id)
    }

    /// The first (lowest id) level.
    #[must_use]
    pub fn first(&self) -> &LevelDefinition {
        &self.levels[0]
    }

    /// Number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false; a catalog holds at least one level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate over levels in order.
    pub fn iter(&self) -> impl Iterator<Item = &LevelDefinition> {
        self.levels.iter()
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_level(
    id: u32,
    grid_size: u32,
    title: &str,
    how_to_play: &str,
    faces: &[(&str, &str)],
) -> LevelDefinition {
    LevelDefinition {
        id: LevelId::new(id),
        grid_size,
        title: title.to_string(),
        how_to_play: how_to_play.to_string(),
        pairs: faces.iter().map(|&(a, b)| FacePair::new(a, b)).collect(),
    }
}

const NUMBERS: &[(&str, &str)] = &[("1", "1"), ("2", "2")];

const ROMAN: &[(&str, &str)] = &[
    ("1", "I"), ("2", "II"), ("3", "III"), ("4", "IV"),
    ("5", "V"), ("6", "VI"), ("7", "VII"), ("8", "VIII"),
];

const EMOTIONS: &[(&str, &str)] = &[
    ("😄", "Happy"), ("😢", "Sad"), ("😍", "Love"), ("😡", "Angry"),
    ("🤔", "Thinking"), ("😴", "Sleepy"), ("😎", "Cool"), ("🥳", "Excited"),
    ("😐", "Neutral"), ("😭", "Crying"), ("😌", "Relaxed"), ("😤", "Frustrated"),
    ("😜", "Playful"), ("😃", "Joy"), ("😟", "Worried"), ("😬", "Nervous"),
    ("😞", "Down"), ("😱", "Fear"),
];

const PLANETS: &[(&str, &str)] = &[
    ("☀️", "Sun"), ("🌍", "Earth"), ("🌕", "Moon"), ("🔴", "Mars"),
    ("🟠", "Jupiter"), ("🪐", "Saturn"), ("🔵", "Uranus"), ("🟣", "Neptune"),
    ("☄️", "Comet"), ("🌠", "Meteor"), ("🪨", "Asteroid"), ("🚀", "Rocket"),
    ("🛰️", "Satellite"), ("🌌", "Galaxy"), ("⭐", "Star"), ("🌋", "Volcano"),
    ("🌙", "Crescent Moon"), ("🛸", "UFO"),
    ("🌑", "New Moon"), ("🌒", "Waxing Moon"), ("🌓", "Half Moon"), ("🌔", "Gibbous Moon"),
    ("🌕", "Full Moon"), ("💫", "Shooting Star"), ("🪐", "Ringed Planet"),
    ("🌟", "Bright Star"), ("🌠", "Falling Star"), ("🧭", "Orbit"),
    ("🕳", "Black Hole"), ("🧊", "Ice Planet"), ("🌡", "Atmosphere"), ("🌀", "Storm"),
];

const SHAPES: &[(&str, &str)] = &[
    ("🔺", "Triangle"), ("⬛", "Square"), ("⚪", "Circle"), ("⭐", "Star"),
    ("🔶", "Diamond"), ("⬟", "Hexagon"), ("⬠", "Octagon"), ("⬢", "Polygon"),
    ("🟥", "Red Square"), ("🟦", "Blue Square"), ("🟩", "Green Square"), ("🟨", "Yellow Square"),
    ("🔵", "Blue Circle"), ("🔴", "Red Circle"), ("🟢", "Green Circle"), ("🟡", "Yellow Circle"),
    ("🟪", "Purple Square"), ("🟫", "Brown Square"), ("⬜", "White Square"), ("🔲", "Hollow Square"),
    ("🔷", "Blue Diamond"), ("🔸", "Small Diamond"), ("💠", "Crystal Diamond"),
    ("➕", "Plus"), ("➖", "Minus"), ("✖️", "Multiply"), ("➗", "Divide"),
    ("⬆️", "Up Arrow"), ("⬇️", "Down Arrow"), ("⬅️", "Left Arrow"), ("➡️", "Right Arrow"),
    ("⚫", "Black Circle"), ("⚪️", "White Circle"),
    ("🔘", "Radio Button"), ("🔻", "Inverted Triangle"),
    ("💎", "Gem"), ("📐", "Angle"), ("📏", "Line"), ("🧩", "Puzzle Shape"),
    ("🎯", "Target"), ("⭕", "Ring"), ("🛑", "Stop"), ("🔳", "Filled Square"),
    ("🟠", "Orange Circle"), ("🔺", "Solid Triangle"),
    ("🟧", "Orange Square"), ("🟣", "Purple Circle"), ("🟤", "Brown Circle"),
    ("🔹", "Small Blue Diamond"), ("🔼", "Up Triangle"),
];
