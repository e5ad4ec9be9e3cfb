use clap::Parser;

/// 逐行调用文本分析服务，把结果写入 CSV
#[derive(Debug, Parser)]
#[command(name = "sentiment_batch", version)]
pub struct Cli {
    /// 输入文件路径，每行一条文本（支持 `~` 开头）
    #[arg(value_name = "INPUT")]
    pub input: String,
}
