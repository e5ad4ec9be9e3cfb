//! CSV 写入服务 - 业务能力层
//!
//! 只负责"写结果文件 / 错误文件"能力，不关心流程

use chrono::{DateTime, TimeZone};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// 错误文件表头
pub const ERRORS_HEADER: [&str; 3] = ["Input", " Status Code", " Error message"];

/// 本次运行的两个输出文件路径
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub results: PathBuf,
    pub errors: PathBuf,
}

impl OutputPaths {
    /// 根据时间戳生成 `results_<ts>.csv` 和 `errors_<ts>.csv`
    pub fn timestamped<Tz>(dir: impl AsRef<Path>, now: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let stamp = now.format("%Y%m%d_%H%M%S").to_string();
        let dir = dir.as_ref();
        Self {
            results: dir.join(format!("results_{stamp}.csv")),
            errors: dir.join(format!("errors_{stamp}.csv")),
        }
    }
}

/// CSV 写入器
///
/// 职责：
/// - 写表头和数据行
/// - 允许每行列数不同（分类结果的列数随类别数量变化）
/// - 不关心行来自哪个处理器
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    /// 创建（覆盖）输出文件
    pub fn create(path: &Path) -> AppResult<Self> {
        let file = File::create(path).map_err(|e| AppError::file(path.display().to_string(), e))?;
        debug!("创建输出文件: {}", path.display());
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(inner: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_writer(inner);
        Self { writer }
    }

    /// 写表头
    pub fn write_header<I, S>(&mut self, header: I) -> AppResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        self.writer.write_record(header)?;
        Ok(())
    }

    /// 写一行数据：输入文本 + 各字段
    pub fn write_row<S: AsRef<[u8]>>(&mut self, input: &str, fields: &[S]) -> AppResult<()> {
        self.writer.write_field(input)?;
        for field in fields {
            self.writer.write_field(field)?;
        }
        self.writer.write_record(None::<&[u8]>)?;
        Ok(())
    }

    pub fn flush(&mut self) -> AppResult<()> {
        self.writer
            .flush()
            .map_err(|e| AppError::file("<csv output>", e))
    }

    /// 取回底层写入目标（会先 flush）
    pub fn into_inner(self) -> AppResult<W> {
        self.writer.into_inner().map_err(|e| {
            let source = std::io::Error::new(e.error().kind(), e.error().to_string());
            AppError::file("<csv output>", source)
        })
    }
}
