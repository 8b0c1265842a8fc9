pub mod classifier;
pub mod level;
pub mod pace_scale;
pub mod vocabulary_curve;
