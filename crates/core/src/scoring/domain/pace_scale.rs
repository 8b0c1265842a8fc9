use super::level::CefrLevel;

/// Fixed words-per-minute ceilings mapping pace to a CEFR level.
#[derive(Clone, Debug)]
pub struct PaceScale {
    ceilings: Vec<(CefrLevel, f64)>,
}

impl PaceScale {
    /// `ceilings` must be in ascending level order (A1 first).
    pub fn new(ceilings: Vec<(CefrLevel, f64)>) -> Self {
        Self { ceilings }
    }

    /// First level whose ceiling is at or above the pace; a pace beyond
    /// every ceiling is still C2 (the scale has no tier above it).
    pub fn level_for(&self, pace_wpm: f64) -> CefrLevel {
        for &(level, ceiling) in &self.ceilings {
            if pace_wpm <= ceiling {
                return level;
            }
        }
        CefrLevel::C2
    }
}
