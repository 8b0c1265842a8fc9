pub mod aggregator;
pub mod summary;
pub mod word_frequency;
