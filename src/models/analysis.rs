//! 文本分析结果模型
//!
//! 与远端服务的 JSON 响应一一对应，只做反序列化，不含业务逻辑

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// 整体情感分析结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// 情感倾向，范围 -1.0（负面）到 1.0（正面）
    #[serde(default)]
    pub score: f64,
    /// 情感强度，范围 0.0 到 +∞
    #[serde(default)]
    pub magnitude: f64,
}

/// 文本分类结果中的一个类别
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// 类别名称，例如 `/Arts & Entertainment/Music`
    pub name: String,
    /// 置信度，范围 0.0 到 1.0
    #[serde(default)]
    pub confidence: f64,
}

/// analyzeSentiment 响应体
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SentimentResponse {
    pub document_sentiment: Sentiment,
}

/// classifyText 响应体
#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyResponse {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// 服务端错误响应体
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorStatus {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

/// 可配置的处理器种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorKind {
    /// 情感分析
    Sentiment,
    /// 文本分类
    #[serde(alias = "classify")]
    Classifier,
}

impl ProcessorKind {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            ProcessorKind::Sentiment => "sentiment",
            ProcessorKind::Classifier => "classifier",
        }
    }

    /// 解析逗号分隔的处理器列表，例如 `sentiment,classifier`
    pub fn parse_list(value: &str) -> Result<Vec<Self>, ConfigError> {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::from_str)
            .collect()
    }
}

impl FromStr for ProcessorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sentiment" => Ok(ProcessorKind::Sentiment),
            "classifier" | "classify" => Ok(ProcessorKind::Classifier),
            other => Err(ConfigError::UnknownProcessor {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentiment_response() {
        let body = r#"{
            "documentSentiment": {"magnitude": 1.2, "score": 0.8},
            "language": "en",
            "sentences": []
        }"#;
        let parsed: SentimentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.document_sentiment.score, 0.8);
        assert_eq!(parsed.document_sentiment.magnitude, 1.2);
    }

    #[test]
    fn test_parse_classify_response_without_categories() {
        let parsed: ClassifyResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.categories.is_empty());
    }

    #[test]
    fn test_parse_error_response() {
        let body = r#"{"error": {"code": 400, "message": "The document is empty.", "status": "INVALID_ARGUMENT"}}"#;
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.code, 400);
        assert_eq!(parsed.error.status, "INVALID_ARGUMENT");
    }

    #[test]
    fn test_processor_kind_parse_list() {
        let kinds = ProcessorKind::parse_list(" Sentiment , classify ,").unwrap();
        assert_eq!(kinds, vec![ProcessorKind::Sentiment, ProcessorKind::Classifier]);

        let err = ProcessorKind::parse_list("sentiment,entities").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProcessor { name } if name == "entities"));
    }
}
