//! 情感分析处理器

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::clients::TextAnalysisClient;
use crate::error::AnalysisError;
use crate::services::FieldProcessor;

const FIELD_NAMES: [&str; 2] = ["Score", "Magnitude"];
const FIELD_DESCRIPTIONS: [&str; 2] = [
    "Overall emotional leaning of the text, from -1.0 (negative) to 1.0 (positive)",
    "Overall strength of emotion regardless of leaning, from 0.0 upwards",
];

/// 情感分析处理器
///
/// 输出两列：`score` 和 `magnitude`
pub struct SentimentProcessor {
    client: Arc<dyn TextAnalysisClient>,
}

impl SentimentProcessor {
    pub fn new(client: Arc<dyn TextAnalysisClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FieldProcessor for SentimentProcessor {
    fn name(&self) -> &'static str {
        "sentiment"
    }

    fn field_names(&self) -> &[&'static str] {
        &FIELD_NAMES
    }

    fn field_descriptions(&self) -> &[&'static str] {
        &FIELD_DESCRIPTIONS
    }

    async fn process(&self, text: &str) -> Result<Vec<String>, AnalysisError> {
        let sentiment = self.client.analyze_sentiment(text).await?;
        debug!(
            "情感分析: score={} magnitude={}",
            sentiment.score, sentiment.magnitude
        );
        Ok(vec![
            sentiment.score.to_string(),
            sentiment.magnitude.to_string(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Sentiment};

    struct FixedSentiment(Result<Sentiment, &'static str>);

    #[async_trait]
    impl TextAnalysisClient for FixedSentiment {
        async fn analyze_sentiment(&self, _text: &str) -> Result<Sentiment, AnalysisError> {
            self.0.map_err(|message| AnalysisError::InvalidInput {
                status: "INVALID_ARGUMENT".to_string(),
                message: message.to_string(),
            })
        }

        async fn classify_text(&self, _text: &str) -> Result<Vec<Category>, AnalysisError> {
            unreachable!("情感处理器不应调用分类接口")
        }
    }

    #[tokio::test]
    async fn test_sentiment_fields() {
        let processor = SentimentProcessor::new(Arc::new(FixedSentiment(Ok(Sentiment {
            score: 0.8,
            magnitude: 1.2,
        }))));
        let fields = processor.process("I love this!").await.unwrap();
        assert_eq!(fields, vec!["0.8", "1.2"]);
    }

    #[tokio::test]
    async fn test_negative_and_whole_numbers() {
        let processor = SentimentProcessor::new(Arc::new(FixedSentiment(Ok(Sentiment {
            score: -0.5,
            magnitude: 3.0,
        }))));
        let fields = processor.process("meh").await.unwrap();
        assert_eq!(fields, vec!["-0.5", "3"]);
    }

    #[tokio::test]
    async fn test_rejection_passes_through() {
        let processor = SentimentProcessor::new(Arc::new(FixedSentiment(Err("empty"))));
        let err = processor.process("").await.unwrap_err();
        assert!(err.is_invalid_input());
    }
}
