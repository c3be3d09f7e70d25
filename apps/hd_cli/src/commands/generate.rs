// apps/hd_cli/src/commands/generate.rs

//! 生成命令
//!
//! 渲染全部产物并写入 HYDRAD 目录树。

use anyhow::{Context, Result};
use clap::Args;
use hd_configure::{Configure, HydradTree};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use super::load_config;

/// 生成参数
#[derive(Args)]
pub struct GenerateArgs {
    /// 配置文件路径 (JSON)
    #[arg(short, long)]
    pub config: PathBuf,

    /// HYDRAD 根目录
    #[arg(short, long, default_value = "HYDRAD_clean")]
    pub output: PathBuf,

    /// 所有产物使用启动时的生成时间
    #[arg(long)]
    pub freeze_date: bool,
}

/// 执行生成命令
pub fn execute(args: GenerateArgs) -> Result<()> {
    info!("=== HYDRAD 配置生成 ===");
    let start = Instant::now();

    let config = load_config(&args.config)?;
    let configure = Configure::new(config, args.freeze_date);
    let tree = HydradTree::new(&args.output);

    let written = tree
        .write(&configure)
        .with_context(|| format!("无法生成 HYDRAD 配置: {}", args.output.display()))?;

    for path in &written {
        println!("  ✓ {}", path.display());
    }
    info!(
        "写出 {} 个文件到 {}，耗时 {:.2?}",
        written.len(),
        tree.root().display(),
        start.elapsed()
    );
    Ok(())
}
