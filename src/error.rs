use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入文件不存在（启动阶段的致命错误）
    #[error("输入文件不存在: {path}")]
    InputNotFound { path: String },
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 文本分析服务错误（非逐行可恢复的那一类）
    #[error("分析服务错误: {0}")]
    Analysis(#[from] AnalysisError),
    /// 文件操作错误
    #[error("文件错误 ({path}): {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// CSV 写入错误
    #[error("CSV写入失败: {0}")]
    Csv(#[from] csv::Error),
}

/// 文本分析服务错误
///
/// `InvalidInput` 是唯一被当作"逐行可恢复"的错误，其余默认会中止整个批次。
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// 服务拒绝了输入文本（例如空字符串、不支持的语言）
    #[error("输入无效 ({status}): {message}")]
    InvalidInput { status: String, message: String },
    /// 服务返回了其他错误状态
    #[error("服务返回错误 (HTTP {code}, {status}): {message}")]
    Service {
        code: u16,
        status: String,
        message: String,
    },
    /// 网络请求失败
    #[error("请求失败 ({endpoint}): {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 响应体无法解析
    #[error("响应解析失败 ({endpoint}): {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AnalysisError {
    /// 是否为逐行可恢复的输入错误
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AnalysisError::InvalidInput { .. })
    }

    /// 写入错误文件的状态码
    pub fn status_code(&self) -> &str {
        match self {
            AnalysisError::InvalidInput { status, .. } | AnalysisError::Service { status, .. } => {
                status
            }
            AnalysisError::Request { .. } => "REQUEST_FAILED",
            AnalysisError::Decode { .. } => "BAD_RESPONSE",
        }
    }

    /// 写入错误文件的错误信息
    pub fn message(&self) -> String {
        match self {
            AnalysisError::InvalidInput { message, .. } | AnalysisError::Service { message, .. } => {
                message.clone()
            }
            AnalysisError::Request { source, .. } => source.to_string(),
            AnalysisError::Decode { source, .. } => source.to_string(),
        }
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置文件读取失败
    #[error("无法读取配置文件 {path}: {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 未知的处理器名称
    #[error("未知的处理器: {name}（可选: sentiment, classifier）")]
    UnknownProcessor { name: String },
    /// 处理器重复
    #[error("处理器重复配置: {name}")]
    DuplicateProcessor { name: String },
    /// 没有配置任何处理器
    #[error("至少需要配置一个处理器")]
    NoProcessors,
    /// 缺少服务凭据
    #[error("缺少服务凭据: 请设置 LANGUAGE_API_KEY 或 LANGUAGE_API_TOKEN")]
    MissingCredentials,
    /// HTTP 客户端构建失败
    #[error("HTTP客户端创建失败: {0}")]
    HttpClient(#[source] reqwest::Error),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件操作错误
    pub fn file(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File {
            path: path.into(),
            source,
        }
    }

    /// 创建输入文件不存在错误
    pub fn input_not_found(path: impl Into<String>) -> Self {
        AppError::InputNotFound { path: path.into() }
    }
}

impl AnalysisError {
    /// 创建请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AnalysisError::Request {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// 创建响应解析失败错误
    pub fn decode_failed(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        AnalysisError::Decode {
            endpoint: endpoint.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
