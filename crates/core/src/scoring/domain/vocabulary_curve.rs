use super::level::CefrLevel;
use crate::shared::spline::CubicSpline;

/// Expected-vocabulary-by-duration reference curve.
///
/// A cubic spline through the native-speaker control points, scaled by a
/// per-level factor to give each CEFR level its own expected curve.
/// Evaluation minutes are clamped to the control-point domain.
#[derive(Clone, Debug)]
pub struct VocabularyCurve {
    spline: CubicSpline,
    scale_factors: Vec<(CefrLevel, f64)>,
}

impl VocabularyCurve {
    /// `scale_factors` must be in ascending level order. Returns `None`
    /// when the control points do not form a valid curve (mismatched
    /// lengths or non-increasing minutes).
    pub fn new(
        minutes: &[f64],
        words: &[f64],
        scale_factors: Vec<(CefrLevel, f64)>,
    ) -> Option<Self> {
        Some(Self {
            spline: CubicSpline::new(minutes, words)?,
            scale_factors,
        })
    }

    /// Expected native-speaker vocabulary after `minutes` of speaking.
    pub fn expected_words(&self, minutes: f64) -> f64 {
        self.spline.evaluate_clamped(minutes)
    }

    /// First level whose scaled expected vocabulary is at or above the
    /// observed size; a vocabulary beyond even the extreme tier falls
    /// back to C2 (the extreme tier is a ceiling marker, not a level).
    pub fn level_for(&self, vocabulary_size: usize, minutes: f64) -> CefrLevel {
        let native = self.expected_words(minutes);
        for &(level, scale) in &self.scale_factors {
            if vocabulary_size as f64 <= native * scale {
                return level;
            }
        }
        CefrLevel::C2
    }
}
