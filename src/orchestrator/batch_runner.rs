//! 批量行处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **写表头**：结果文件和错误文件的表头总是先写入
//! 2. **配额控制**：最多读取 `quota` 行，超出部分不会被读取
//! 3. **流程调度**：每行按配置顺序依次执行所有处理器
//! 4. **结果分流**：全部成功写结果文件，任一失败写错误文件
//! 5. **统计**：成功/错误计数，结束后统一报告
//!
//! 严格顺序执行：一行处理完才读取下一行。

use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::error::{AnalysisError, AppError, AppResult};
use crate::orchestrator::reporter::ProgressReporter;
use crate::services::{results_header, CsvSink, FieldProcessor, ERRORS_HEADER};

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// 写入结果文件的行数
    pub processed: usize,
    /// 写入错误文件的行数
    pub errored: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.processed + self.errored
    }
}

/// 批量行处理器
pub struct BatchRunner<'a> {
    processors: &'a [Box<dyn FieldProcessor>],
    reporter: &'a dyn ProgressReporter,
    quota: i64,
    continue_on_service_error: bool,
    input_name: String,
}

impl<'a> BatchRunner<'a> {
    /// 创建处理器，`quota <= 0` 时不会读取任何行
    pub fn new(
        processors: &'a [Box<dyn FieldProcessor>],
        reporter: &'a dyn ProgressReporter,
        quota: i64,
    ) -> Self {
        Self {
            processors,
            reporter,
            quota,
            continue_on_service_error: false,
            input_name: "<input>".to_string(),
        }
    }

    /// 非输入类的服务错误是否也写入错误文件并继续
    pub fn continue_on_service_error(mut self, enabled: bool) -> Self {
        self.continue_on_service_error = enabled;
        self
    }

    /// 输入来源名称，读取失败时写入错误信息
    pub fn input_name(mut self, name: impl Into<String>) -> Self {
        self.input_name = name.into();
        self
    }

    /// 运行主循环
    ///
    /// 输入无效的行写入错误文件后继续；其他服务错误默认直接返回，中止本次运行，
    /// 已写入的行保留在文件中。
    pub async fn run<R, A, B>(
        &self,
        input: R,
        results: &mut CsvSink<A>,
        errors: &mut CsvSink<B>,
    ) -> AppResult<RunSummary>
    where
        R: AsyncBufRead + Unpin,
        A: Write,
        B: Write,
    {
        results.write_header(results_header(self.processors))?;
        errors.write_header(ERRORS_HEADER)?;

        let limit = usize::try_from(self.quota).unwrap_or(0);
        let mut summary = RunSummary::default();
        let mut lines = input.lines();

        while summary.total() < limit {
            let line = match lines
                .next_line()
                .await
                .map_err(|e| AppError::file(self.input_name.clone(), e))?
            {
                Some(line) => line,
                None => break,
            };
            let line_number = summary.total() + 1;
            debug!("[第 {} 行] 开始处理", line_number);

            match self.process_line(&line).await {
                Ok(fields) => {
                    results.write_row(&line, &fields)?;
                    summary.processed += 1;
                    self.reporter.line_succeeded(line_number, &line, &fields);
                }
                Err(err) if err.is_invalid_input() || self.continue_on_service_error => {
                    errors.write_row(&line, &[err.status_code().to_string(), err.message()])?;
                    summary.errored += 1;
                    self.reporter.line_failed(line_number, &line, &err);
                }
                Err(err) => return Err(err.into()),
            }
        }

        self.reporter.run_finished(&summary);
        Ok(summary)
    }

    /// 依次执行所有处理器，任一失败即放弃本行（已得到的字段丢弃）
    async fn process_line(&self, text: &str) -> Result<Vec<String>, AnalysisError> {
        let mut fields = Vec::new();
        for processor in self.processors {
            let part = processor.process(text).await?;
            debug!("处理器 {} 返回 {} 个字段", processor.name(), part.len());
            fields.extend(part);
        }
        Ok(fields)
    }
}
