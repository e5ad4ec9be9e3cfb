use crate::error::ConfigError;
use crate::models::ProcessorKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// 默认配置文件名（位于工作目录）
pub const DEFAULT_CONFIG_FILE: &str = "sentiment_batch.toml";

/// 程序配置
///
/// 加载顺序：默认值 → TOML 配置文件（可选）→ 环境变量
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    // --- 文本分析服务 ---
    /// API Key（以 `?key=` 方式传递）
    pub api_key: Option<String>,
    /// OAuth 访问令牌（以 Bearer 方式传递）
    pub access_token: Option<String>,
    pub api_base_url: String,
    /// 文档语言代码，不设置时由服务自动识别
    pub language: Option<String>,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    // --- 批处理 ---
    /// 本次运行最多处理的行数，<= 0 表示不处理任何行
    pub quota: i64,
    /// 按顺序执行的处理器
    pub processors: Vec<ProcessorKind>,
    /// 结果文件输出目录
    pub output_dir: String,
    /// 非输入类的服务错误是否也只记录到错误文件而不中止
    pub continue_on_service_error: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            access_token: None,
            api_base_url: "https://language.googleapis.com/v1".to_string(),
            language: None,
            request_timeout_secs: 30,
            quota: 1000,
            processors: vec![ProcessorKind::Sentiment, ProcessorKind::Classifier],
            output_dir: ".".to_string(),
            continue_on_service_error: false,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 加载完整配置：配置文件（若存在）+ 环境变量覆盖
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var("SENTIMENT_BATCH_CONFIG").ok();
        let path = explicit
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let base = if explicit.is_some() || path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        base.with_env(|name| std::env::var(name).ok())
    }

    /// 只从环境变量加载（其余取默认值）
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env(|name| std::env::var(name).ok())
    }

    /// 从 TOML 文件加载，缺失的字段取默认值
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadFailed {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::TomlParseFailed { source, .. } => ConfigError::TomlParseFailed {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: String::new(),
            source,
        })
    }

    /// 用环境变量覆盖当前配置
    ///
    /// `lookup` 通常是 `std::env::var`，测试中可以传入任意映射
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LANGUAGE_API_KEY") {
            self.api_key = Some(v);
        }
        if let Some(v) = lookup("LANGUAGE_API_TOKEN") {
            self.access_token = Some(v);
        }
        if let Some(v) = lookup("LANGUAGE_API_BASE_URL") {
            self.api_base_url = v;
        }
        if let Some(v) = lookup("LANGUAGE_CODE") {
            self.language = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "u64")? {
            self.request_timeout_secs = v;
        }
        if let Some(v) = parse_var(&lookup, "QUOTA", "i64")? {
            self.quota = v;
        }
        if let Some(v) = lookup("PROCESSORS") {
            self.processors = ProcessorKind::parse_list(&v)?;
        }
        if let Some(v) = lookup("OUTPUT_DIR") {
            self.output_dir = v;
        }
        if let Some(v) = parse_var(&lookup, "CONTINUE_ON_SERVICE_ERROR", "bool")? {
            self.continue_on_service_error = v;
        }
        if let Some(v) = parse_var(&lookup, "VERBOSE_LOGGING", "bool")? {
            self.verbose_logging = v;
        }
        Ok(self)
    }

    /// 校验服务凭据
    ///
    /// 处理器列表的校验在 `build_processors` 中完成
    pub fn validate(&self) -> Result<(), ConfigError> {
        let has_key = self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty());
        let has_token = self
            .access_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        if !has_key && !has_token {
            return Err(ConfigError::MissingCredentials);
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, var_name: &str, expected_type: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var_name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config = Config::default()
            .with_env(env_of(&[
                ("LANGUAGE_API_KEY", "abc"),
                ("QUOTA", "10"),
                ("PROCESSORS", "classifier"),
                ("CONTINUE_ON_SERVICE_ERROR", "true"),
            ]))
            .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.quota, 10);
        assert_eq!(config.processors, vec![ProcessorKind::Classifier]);
        assert!(config.continue_on_service_error);
        assert_eq!(config.output_dir, ".");
    }

    #[test]
    fn test_env_parse_failure() {
        let err = Config::default()
            .with_env(env_of(&[("QUOTA", "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvVarParseFailed { var_name, .. } if var_name == "QUOTA"));
    }

    #[test]
    fn test_toml_partial_file() {
        let config = Config::from_toml_str(
            r#"
            api_key = "from-file"
            quota = 5
            processors = ["sentiment"]
            "#,
        )
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.quota, 5);
        assert_eq!(config.processors, vec![ProcessorKind::Sentiment]);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_validate_requires_credentials() {
        let config = Config::default();
        assert!(matches!(config.validate(), Err(ConfigError::MissingCredentials)));

        let config = Config {
            access_token: Some("token".to_string()),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
