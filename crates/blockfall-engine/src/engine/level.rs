use serde::{Deserialize, Serialize};

use crate::LevelTableError;

/// One row of the level table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Score at which this level starts.
    pub score: u64,
    /// Gravity interval associated with the level.
    ///
    /// Only consumed for pacing when [`GravityPacing::LevelScaled`](super::GravityPacing)
    /// is selected.
    pub tick_interval: u32,
}

impl Level {
    #[must_use]
    pub const fn new(score: u64, tick_interval: u32) -> Self {
        Self {
            score,
            tick_interval,
        }
    }
}

/// Default progression: seven levels up to a score of 100 000.
pub const DEFAULT_LEVELS: [Level; 7] = [
    Level::new(0, 1_200_000),
    Level::new(1_500, 900_000),
    Level::new(8_000, 700_000),
    Level::new(20_000, 500_000),
    Level::new(40_000, 400_000),
    Level::new(75_000, 300_000),
    Level::new(100_000, 200_000),
];

/// Result of a level lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelInfo {
    /// 1-based level number.
    pub level: usize,
    pub tick_interval: u32,
}

/// Ordered `(threshold, interval)` table mapping a score to a level.
///
/// Thresholds strictly increase and the first one is 0, so every score maps
/// to some level and the mapping never decreases as the score grows.
///
/// # Example
///
/// ```
/// use blockfall_engine::LevelTable;
///
/// let table = LevelTable::default();
/// assert_eq!(table.level_for(0).level, 1);
/// assert_eq!(table.level_for(8_000).level, 3);
/// assert_eq!(table.level_for(1_000_000).level, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTable {
    levels: Vec<Level>,
}

impl Default for LevelTable {
    fn default() -> Self {
        Self {
            levels: DEFAULT_LEVELS.to_vec(),
        }
    }
}

impl LevelTable {
    pub fn new(levels: Vec<Level>) -> Result<Self, LevelTableError> {
        let first = levels.first().ok_or(LevelTableError::Empty)?;
        if first.score != 0 {
            return Err(LevelTableError::FirstThresholdNotZero { score: first.score });
        }
        for pair in levels.windows(2) {
            if pair[1].score <= pair[0].score {
                return Err(LevelTableError::ThresholdNotIncreasing {
                    previous: pair[0].score,
                    next: pair[1].score,
                });
            }
        }
        if let Some(idx) = levels.iter().position(|level| level.tick_interval == 0) {
            return Err(LevelTableError::ZeroTickInterval { level: idx + 1 });
        }
        Ok(Self { levels })
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Returns the highest level whose threshold `score` has reached.
    #[must_use]
    pub fn level_for(&self, score: u64) -> LevelInfo {
        let reached = self
            .levels
            .iter()
            .take_while(|level| score >= level.score)
            .count()
            .max(1);
        LevelInfo {
            level: reached,
            tick_interval: self.levels[reached - 1].tick_interval,
        }
    }

    /// Tick interval of the first level, the reference for scaled pacing.
    #[must_use]
    pub fn base_tick_interval(&self) -> u32 {
        self.levels[0].tick_interval
    }
}
