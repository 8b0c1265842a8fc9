use std::fmt;

use serde::Serialize;

/// CEFR proficiency level, plus an `Extreme` ceiling tier sitting above C2.
///
/// `Extreme` marks the top of the reference curves (roughly "fast rapper"
/// territory), not a real proficiency label; it renders as "Native".
/// Ordinal order is `A1 < A2 < B1 < B2 < C1 < C2 < Extreme`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
    Extreme,
}

impl CefrLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
            CefrLevel::C2 => "C2",
            CefrLevel::Extreme => "Native",
        }
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier output: the low/high endpoints of the estimated level range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelRange {
    pub low: CefrLevel,
    pub high: CefrLevel,
}

impl LevelRange {
    /// Build a range from two independently-derived levels in either order.
    pub fn spanning(a: CefrLevel, b: CefrLevel) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }
}

impl fmt::Display for LevelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_order() {
        assert!(CefrLevel::A1 < CefrLevel::A2);
        assert!(CefrLevel::B2 < CefrLevel::C1);
        assert!(CefrLevel::C2 < CefrLevel::Extreme);
    }

    #[test]
    fn test_extreme_displays_as_native() {
        assert_eq!(CefrLevel::Extreme.to_string(), "Native");
        assert_eq!(CefrLevel::B1.to_string(), "B1");
    }

    #[test]
    fn test_range_orders_endpoints() {
        let range = LevelRange::spanning(CefrLevel::C1, CefrLevel::A2);
        assert_eq!(range.low, CefrLevel::A2);
        assert_eq!(range.high, CefrLevel::C1);
    }

    #[test]
    fn test_range_display() {
        assert_eq!(
            LevelRange::spanning(CefrLevel::B1, CefrLevel::B1).to_string(),
            "B1 - B1"
        );
        assert_eq!(
            LevelRange::spanning(CefrLevel::Extreme, CefrLevel::A1).to_string(),
            "A1 - Native"
        );
    }
}
