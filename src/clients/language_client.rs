/// 文本分析 API 客户端
///
/// 封装所有与远端文本分析服务（Natural Language REST API）相关的调用逻辑
use crate::config::Config;
use crate::error::{AnalysisError, ConfigError};
use crate::models::analysis::{ClassifyResponse, ErrorResponse, SentimentResponse};
use crate::models::{Category, Sentiment};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

const SENTIMENT_ENDPOINT: &str = "documents:analyzeSentiment";
const CLASSIFY_ENDPOINT: &str = "documents:classifyText";

/// 服务拒绝输入时返回的状态
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";

/// 文本分析能力
///
/// 批处理只依赖这个 trait，测试中可以替换成固定返回值的实现
#[async_trait]
pub trait TextAnalysisClient: Send + Sync {
    /// 分析整段文本的情感
    async fn analyze_sentiment(&self, text: &str) -> Result<Sentiment, AnalysisError>;

    /// 对文本进行内容分类，类别顺序与服务返回顺序一致
    async fn classify_text(&self, text: &str) -> Result<Vec<Category>, AnalysisError>;
}

/// 凭据
#[derive(Clone)]
enum Credentials {
    ApiKey(String),
    Bearer(String),
}

/// 文本分析 API 客户端
pub struct LanguageClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    language: Option<String>,
}

impl LanguageClient {
    /// 创建新的客户端
    ///
    /// 同时配置了 API Key 和访问令牌时优先使用 API Key
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let credentials = match (&config.api_key, &config.access_token) {
            (Some(key), _) if !key.trim().is_empty() => Credentials::ApiKey(key.trim().to_string()),
            (_, Some(token)) if !token.trim().is_empty() => {
                Credentials::Bearer(token.trim().to_string())
            }
            _ => return Err(ConfigError::MissingCredentials),
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            credentials,
            language: config.language.clone(),
        })
    }

    /// 构建请求中的 document 对象
    fn document(&self, text: &str) -> Value {
        let mut document = json!({
            "type": "PLAIN_TEXT",
            "content": text,
        });
        if let Some(language) = &self.language {
            document["language"] = json!(language);
        }
        document
    }

    /// 发送 POST 请求并解析响应
    async fn post<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> Result<T, AnalysisError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("正在调用文本分析 API: {}", endpoint);

        let mut request = self.http.post(&url).json(&body);
        request = match &self.credentials {
            Credentials::ApiKey(key) => request.query(&[("key", key)]),
            Credentials::Bearer(token) => request.bearer_auth(token),
        };

        let response = request
            .send()
            .await
            .map_err(|e| AnalysisError::request_failed(endpoint, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AnalysisError::request_failed(endpoint, e))?;

        if !status.is_success() {
            let err = error_from_response(status, &text);
            warn!("文本分析 API 返回错误 ({}): {}", endpoint, err);
            return Err(err);
        }

        debug!("文本分析 API 调用成功: {}", endpoint);
        serde_json::from_str(&text).map_err(|e| AnalysisError::decode_failed(endpoint, e))
    }
}

#[async_trait]
impl TextAnalysisClient for LanguageClient {
    async fn analyze_sentiment(&self, text: &str) -> Result<Sentiment, AnalysisError> {
        let body = json!({
            "document": self.document(text),
            "encodingType": "UTF8",
        });
        let response: SentimentResponse = self.post(SENTIMENT_ENDPOINT, body).await?;
        Ok(response.document_sentiment)
    }

    async fn classify_text(&self, text: &str) -> Result<Vec<Category>, AnalysisError> {
        let body = json!({ "document": self.document(text) });
        let response: ClassifyResponse = self.post(CLASSIFY_ENDPOINT, body).await?;
        Ok(response.categories)
    }
}

/// 把非 2xx 响应转换为错误
///
/// 状态为 `INVALID_ARGUMENT` 的是输入问题，可以逐行跳过；其余都是服务问题。
/// 响应体无法解析时退回 HTTP 状态，400 仍视为输入无效。
pub(crate) fn error_from_response(status: StatusCode, body: &str) -> AnalysisError {
    let parsed = serde_json::from_str::<ErrorResponse>(body).ok();

    let (status_text, message) = match parsed {
        Some(ErrorResponse { error }) if !error.status.is_empty() => (error.status, error.message),
        Some(ErrorResponse { error }) => (canonical_status(status), error.message),
        None => (canonical_status(status), body.trim().to_string()),
    };

    let invalid = status_text == INVALID_ARGUMENT
        || (status == StatusCode::BAD_REQUEST && status_text == canonical_status(status));

    if invalid {
        AnalysisError::InvalidInput {
            status: status_text,
            message,
        }
    } else {
        AnalysisError::Service {
            code: status.as_u16(),
            status: status_text,
            message,
        }
    }
}

/// `Bad Request` → `BAD_REQUEST`
fn canonical_status(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(|reason| reason.to_ascii_uppercase().replace([' ', '-'], "_"))
        .unwrap_or_else(|| status.as_u16().to_string())
}
