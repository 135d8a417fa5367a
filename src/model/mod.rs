// Aggregates the split model files
pub mod item;
pub mod parser;

// Re-export so callers can keep using `crate::model::Event`
pub use item::Event;
