//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 启动检查（输入文件、配置、凭据）
//! - 打开并持有三个文件资源
//! - 输出最终统计
//!
//! ### `batch_runner` - 批量行处理器
//! - 配额内逐行读取
//! - 按顺序调用处理器，结果分流到两个 CSV
//! - 成功/错误计数
//!
//! ### `reporter` - 进度报告
//! - `ProgressReporter` 接口，默认实现写 tracing 日志
//!
//! ## 层次关系
//!
//! ```text
//! app (启动检查 + 资源)
//!     ↓
//! batch_runner (处理 Vec<line>)
//!     ↓
//! services::FieldProcessor (处理单行)
//!     ↓
//! clients::TextAnalysisClient (远端服务)
//! ```

pub mod app;
pub mod batch_runner;
pub mod reporter;

// 重新导出主要类型
pub use app::{resolve_input, App, RunOutcome};
pub use batch_runner::{BatchRunner, RunSummary};
pub use reporter::{ProgressReporter, TracingReporter};
