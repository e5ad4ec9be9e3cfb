pub mod classifier_processor;
pub mod csv_sink;
pub mod field_processor;
pub mod sentiment_processor;

pub use classifier_processor::ClassifierProcessor;
pub use csv_sink::{CsvSink, OutputPaths, ERRORS_HEADER};
pub use field_processor::{build_processors, results_header, FieldProcessor};
pub use sentiment_processor::SentimentProcessor;
