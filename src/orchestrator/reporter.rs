//! 进度报告
//!
//! 批处理循环只通过 `ProgressReporter` 输出进度，不直接打印

use tracing::{info, warn};

use crate::error::AnalysisError;
use crate::orchestrator::batch_runner::RunSummary;
use crate::utils::logging::truncate_text;

/// 日志中预览输入文本的最大字符数
const PREVIEW_CHARS: usize = 60;

/// 进度报告接口
pub trait ProgressReporter: Send + Sync {
    /// 一行处理成功
    fn line_succeeded(&self, line_number: usize, input: &str, fields: &[String]);

    /// 一行被写入错误文件
    fn line_failed(&self, line_number: usize, input: &str, error: &AnalysisError);

    /// 循环结束（只在正常结束时调用）
    fn run_finished(&self, summary: &RunSummary);
}

/// 基于 tracing 的进度报告
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn line_succeeded(&self, line_number: usize, input: &str, fields: &[String]) {
        info!(
            "[第 {} 行] ✓ {} → {}",
            line_number,
            truncate_text(input, PREVIEW_CHARS),
            fields.join(",")
        );
    }

    fn line_failed(&self, line_number: usize, input: &str, error: &AnalysisError) {
        warn!(
            "[第 {} 行] ⚠️ {} → {}: {}",
            line_number,
            truncate_text(input, PREVIEW_CHARS),
            error.status_code(),
            error.message()
        );
    }

    fn run_finished(&self, summary: &RunSummary) {
        info!(
            "处理结束: 成功 {} 行，错误 {} 行，共 {} 行",
            summary.processed,
            summary.errored,
            summary.total()
        );
    }
}
