//! 字段处理器 - 业务能力层
//!
//! 每个处理器声明自己贡献的 CSV 列，并把一行文本转换成这些列的值

use async_trait::async_trait;
use std::sync::Arc;

use crate::clients::TextAnalysisClient;
use crate::error::{AnalysisError, ConfigError};
use crate::models::ProcessorKind;
use crate::services::{ClassifierProcessor, SentimentProcessor};

/// 字段处理器
///
/// 职责：
/// - 声明列名和列说明
/// - 对单行文本调用一次分析服务
/// - 只处理单行，不关心批次、配额和输出文件
#[async_trait]
pub trait FieldProcessor: Send + Sync {
    /// 处理器名称（用于日志）
    fn name(&self) -> &'static str;

    /// 写入结果文件表头的列名
    fn field_names(&self) -> &[&'static str];

    /// 每一列的说明，与 `field_names` 一一对应
    fn field_descriptions(&self) -> &[&'static str];

    /// 处理一行文本，返回该处理器贡献的字段
    async fn process(&self, text: &str) -> Result<Vec<String>, AnalysisError>;
}

/// 按配置顺序创建处理器
///
/// 所有处理器共享同一个客户端
pub fn build_processors(
    kinds: &[ProcessorKind],
    client: Arc<dyn TextAnalysisClient>,
) -> Result<Vec<Box<dyn FieldProcessor>>, ConfigError> {
    if kinds.is_empty() {
        return Err(ConfigError::NoProcessors);
    }

    let mut processors: Vec<Box<dyn FieldProcessor>> = Vec::with_capacity(kinds.len());
    for (idx, kind) in kinds.iter().enumerate() {
        if kinds[..idx].contains(kind) {
            return Err(ConfigError::DuplicateProcessor {
                name: kind.name().to_string(),
            });
        }
        let processor: Box<dyn FieldProcessor> = match kind {
            ProcessorKind::Sentiment => Box::new(SentimentProcessor::new(client.clone())),
            ProcessorKind::Classifier => Box::new(ClassifierProcessor::new(client.clone())),
        };
        processors.push(processor);
    }
    Ok(processors)
}

/// 结果文件表头：`Input` + 各处理器列名
pub fn results_header(processors: &[Box<dyn FieldProcessor>]) -> Vec<String> {
    std::iter::once("Input")
        .chain(processors.iter().flat_map(|p| p.field_names().iter().copied()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Sentiment};

    struct NoopClient;

    #[async_trait]
    impl TextAnalysisClient for NoopClient {
        async fn analyze_sentiment(&self, _text: &str) -> Result<Sentiment, AnalysisError> {
            Ok(Sentiment {
                score: 0.0,
                magnitude: 0.0,
            })
        }

        async fn classify_text(&self, _text: &str) -> Result<Vec<Category>, AnalysisError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_build_processors_keeps_order() {
        let processors = build_processors(
            &[ProcessorKind::Classifier, ProcessorKind::Sentiment],
            Arc::new(NoopClient),
        )
        .unwrap();

        let names: Vec<_> = processors.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["classifier", "sentiment"]);
        assert_eq!(
            results_header(&processors),
            vec!["Input", "Categories", "Confidences", "Score", "Magnitude"]
        );
    }

    #[test]
    fn test_build_processors_rejects_empty_and_duplicates() {
        assert!(matches!(
            build_processors(&[], Arc::new(NoopClient)),
            Err(ConfigError::NoProcessors)
        ));
        assert!(matches!(
            build_processors(
                &[ProcessorKind::Sentiment, ProcessorKind::Sentiment],
                Arc::new(NoopClient)
            ),
            Err(ConfigError::DuplicateProcessor { .. })
        ));
    }

    #[test]
    fn test_descriptions_match_field_names() {
        let processors = build_processors(
            &[ProcessorKind::Sentiment, ProcessorKind::Classifier],
            Arc::new(NoopClient),
        )
        .unwrap();
        for p in &processors {
            assert_eq!(p.field_names().len(), p.field_descriptions().len());
        }
    }
}
