pub mod error;
pub mod parser;
pub mod sanitizer;
pub mod segment;
pub mod text_cleaner;
pub mod timestamp;
