pub mod language_client;

pub use language_client::{LanguageClient, TextAnalysisClient};
