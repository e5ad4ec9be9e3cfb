/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::orchestrator::RunSummary;
use crate::services::{FieldProcessor, OutputPaths};

/// 初始化全局日志
///
/// 优先使用 `RUST_LOG`；未设置时根据 `verbose` 选择 debug 或 info。
/// 重复调用不会报错（测试中会多次初始化）。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `input_path`: 输入文件路径
/// - `quota`: 本次最多处理的行数
/// - `processors`: 已启用的处理器
pub fn log_startup(input_path: &Path, quota: i64, processors: &[Box<dyn FieldProcessor>]) {
    let names: Vec<_> = processors.iter().map(|p| p.name()).collect();
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 逐行文本分析模式");
    info!("📄 输入文件: {}", input_path.display());
    info!("📊 行数配额: {}", quota);
    info!("🧩 处理器: {}", names.join(", "));
    info!("{}", "=".repeat(60));
}

/// 输出结果文件的列说明
pub fn log_field_legend(processors: &[Box<dyn FieldProcessor>]) {
    info!("📋 结果列说明:");
    for processor in processors {
        for (name, description) in processor
            .field_names()
            .iter()
            .zip(processor.field_descriptions())
        {
            info!("  {:<12} {}", name, description);
        }
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `summary`: 处理统计
/// - `paths`: 输出文件路径
pub fn print_final_stats(summary: &RunSummary, paths: &OutputPaths) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", summary.processed, summary.total());
    info!("❌ 错误: {}", summary.errored);
    info!("{}", "=".repeat(60));
    info!("结果已保存至: {}", paths.results.display());
    info!("错误已保存至: {}", paths.errors.display());
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefgh", 3), "abc...");
        assert_eq!(truncate_text("情感分析结果", 2), "情感...");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
