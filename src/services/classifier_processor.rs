//! 文本分类处理器

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::clients::TextAnalysisClient;
use crate::error::AnalysisError;
use crate::services::FieldProcessor;

const FIELD_NAMES: [&str; 2] = ["Categories", "Confidences"];
const FIELD_DESCRIPTIONS: [&str; 2] = [
    "Content categories detected in the text, one column per category",
    "Confidence of each category above, in the same order, from 0.0 to 1.0",
];

/// 文本分类处理器
///
/// 输出的列数不固定：先是所有类别名称，再是对应的置信度，顺序与服务返回一致
pub struct ClassifierProcessor {
    client: Arc<dyn TextAnalysisClient>,
}

impl ClassifierProcessor {
    pub fn new(client: Arc<dyn TextAnalysisClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FieldProcessor for ClassifierProcessor {
    fn name(&self) -> &'static str {
        "classifier"
    }

    fn field_names(&self) -> &[&'static str] {
        &FIELD_NAMES
    }

    fn field_descriptions(&self) -> &[&'static str] {
        &FIELD_DESCRIPTIONS
    }

    async fn process(&self, text: &str) -> Result<Vec<String>, AnalysisError> {
        let categories = self.client.classify_text(text).await?;
        debug!("文本分类: {} 个类别", categories.len());

        let names = categories.iter().map(|c| c.name.clone());
        let confidences = categories.iter().map(|c| c.confidence.to_string());
        Ok(names.chain(confidences).collect())
    }
}
