//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **启动检查**：展开 `~`，确认输入是存在的普通文件，校验凭据，创建处理器
//! 2. **资源管理**：输入流、结果文件、错误文件在 `run` 内打开，任何退出路径都会关闭
//! 3. **向下委托**：逐行处理交给 `BatchRunner`
//!
//! 输出文件只在输入文件检查通过后才创建。

use chrono::Local;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;

use crate::clients::{LanguageClient, TextAnalysisClient};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::orchestrator::batch_runner::{BatchRunner, RunSummary};
use crate::orchestrator::reporter::TracingReporter;
use crate::services::{build_processors, CsvSink, FieldProcessor, OutputPaths};
use crate::utils::{expand_home, logging};

/// 一次运行的结果
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub summary: RunSummary,
    pub paths: OutputPaths,
}

/// 应用主结构
pub struct App {
    config: Config,
    input_path: PathBuf,
    processors: Vec<Box<dyn FieldProcessor>>,
}

impl App {
    /// 初始化应用
    ///
    /// 检查顺序：输入文件 → 凭据 → HTTP 客户端 → 处理器列表
    pub fn initialize(config: Config, raw_input: &str) -> AppResult<Self> {
        let input_path = resolve_input(raw_input)?;
        config.validate()?;
        let client = LanguageClient::new(&config)?;
        Self::with_client(config, input_path, Arc::new(client))
    }

    /// 使用外部提供的客户端初始化（不校验凭据）
    pub fn with_client(
        config: Config,
        input_path: impl AsRef<Path>,
        client: Arc<dyn TextAnalysisClient>,
    ) -> AppResult<Self> {
        let input_path = existing_input(input_path.as_ref())?;
        let processors = build_processors(&config.processors, client)?;
        Ok(Self {
            config,
            input_path,
            processors,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> AppResult<RunOutcome> {
        logging::log_startup(&self.input_path, self.config.quota, &self.processors);
        logging::log_field_legend(&self.processors);

        let input = tokio::fs::File::open(&self.input_path)
            .await
            .map_err(|e| AppError::file(self.input_path.display().to_string(), e))?;

        tokio::fs::create_dir_all(&self.config.output_dir)
            .await
            .map_err(|e| AppError::file(self.config.output_dir.clone(), e))?;
        let paths = OutputPaths::timestamped(&self.config.output_dir, Local::now());
        let mut results = CsvSink::create(&paths.results)?;
        let mut errors = CsvSink::create(&paths.errors)?;
        info!("📁 输出文件: {} / {}", paths.results.display(), paths.errors.display());

        let reporter = TracingReporter;
        let summary = BatchRunner::new(&self.processors, &reporter, self.config.quota)
            .continue_on_service_error(self.config.continue_on_service_error)
            .input_name(self.input_path.display().to_string())
            .run(BufReader::new(input), &mut results, &mut errors)
            .await?;

        results.flush()?;
        errors.flush()?;

        logging::print_final_stats(&summary, &paths);

        Ok(RunOutcome { summary, paths })
    }
}

/// 展开 `~` 并确认输入是一个存在的普通文件
pub fn resolve_input(raw_input: &str) -> AppResult<PathBuf> {
    existing_input(&expand_home(raw_input))
}

fn existing_input(path: &Path) -> AppResult<PathBuf> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(AppError::input_not_found(path.display().to_string()))
    }
}
