// apps/hd_cli/src/main.rs

//! HYDRAD 配置生成命令行界面
//!
//! 从 JSON 配置生成 HYDRAD 的头文件和配置文件。
//!
//! # 架构层级
//!
//! 本模块属于 **Layer 4: Application**，只负责参数解析、日志和文件路径；
//! 渲染逻辑全部在 `hd_configure` 中。

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// HYDRAD 配置生成工具
#[derive(Parser)]
#[command(name = "hd_cli")]
#[command(author = "HYDRAD Tools Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate HYDRAD headers and configuration files", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 生成完整的 HYDRAD 配置目录树
    Generate(commands::generate::GenerateArgs),
    /// 输出单个产物
    Render(commands::render::RenderArgs),
    /// 验证配置
    Validate(commands::validate::ValidateArgs),
    /// 显示产物与单位信息
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 日志写到 stderr，stdout 留给 render 输出的产物
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args),
        Commands::Render(args) => commands::render::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Info(args) => commands::info::execute(args),
    }
}
