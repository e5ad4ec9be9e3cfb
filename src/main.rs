use anyhow::Result;
use clap::Parser;
use sentiment_batch::cli::Cli;
use sentiment_batch::orchestrator::resolve_input;
use sentiment_batch::utils::logging;
use sentiment_batch::{App, Config};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // 输入文件不存在：先于配置加载检查，不创建任何输出文件，直接退出
    let input_path = match resolve_input(&cli.input) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("❌ {}", e);
            return Ok(ExitCode::from(1));
        }
    };

    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 致命错误由 anyhow 在退出时统一输出
    App::initialize(config, &input_path.display().to_string())?
        .run()
        .await?;

    Ok(ExitCode::SUCCESS)
}
