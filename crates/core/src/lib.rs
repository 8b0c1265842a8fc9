//! Core transcript-to-fluency-metrics pipeline.
//!
//! Raw captioning text goes through the sanitizer, segment parser,
//! metrics aggregator, and proficiency classifier; presentation layers
//! consume the resulting [`pipeline::analyze_transcript_use_case::FluencyReport`].

pub mod metrics;
pub mod pipeline;
pub mod scoring;
pub mod shared;
pub mod transcript;
