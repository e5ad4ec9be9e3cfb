//! # Sentiment Batch
//!
//! 逐行读取文本文件，调用远端文本分析服务，把每行的结果（或错误）写入 CSV
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 与远端服务交互，只暴露能力
//! - `TextAnalysisClient` - 情感分析 / 文本分类接口
//! - `LanguageClient` - 基于 reqwest 的 HTTP 实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 只处理单行文本
//! - `FieldProcessor` - 情感处理器 / 分类处理器
//! - `CsvSink` - 写结果文件和错误文件
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_runner` - 配额内逐行处理、结果分流、统计
//! - `orchestrator/app` - 启动检查与资源管理
//!
//! ## 模块结构

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use clients::{LanguageClient, TextAnalysisClient};
pub use config::Config;
pub use error::{AnalysisError, AppError, AppResult, ConfigError};
pub use models::{Category, ProcessorKind, Sentiment};
pub use orchestrator::{App, BatchRunner, ProgressReporter, RunOutcome, RunSummary};
pub use services::{CsvSink, FieldProcessor, OutputPaths};
