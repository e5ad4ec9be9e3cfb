pub mod analysis;

pub use analysis::{Category, ProcessorKind, Sentiment};
