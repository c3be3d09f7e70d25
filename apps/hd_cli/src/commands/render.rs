// apps/hd_cli/src/commands/render.rs

//! 渲染单个产物到标准输出

use anyhow::{bail, Context, Result};
use clap::Args;
use hd_configure::{Artifact, Configure};
use std::path::PathBuf;
use tracing::info;

use super::load_config;

/// 渲染参数
#[derive(Args)]
pub struct RenderArgs {
    /// 配置文件路径 (JSON)
    #[arg(short, long)]
    pub config: PathBuf,

    /// 产物名称，例如 hydrad_header、heating_cfg
    pub artifact: Artifact,

    /// 固定生成时间
    #[arg(long)]
    pub freeze_date: bool,
}

/// 执行渲染命令
pub fn execute(args: RenderArgs) -> Result<()> {
    info!("渲染 {}: {}", args.artifact, args.config.display());

    let configure = Configure::new(load_config(&args.config)?, args.freeze_date);
    let text = configure
        .render(args.artifact)
        .with_context(|| format!("无法渲染 {}", args.artifact))?;

    match text {
        Some(text) => {
            println!("{text}");
            Ok(())
        }
        None => bail!("{} 未配置，配置文件中没有对应的数据", args.artifact),
    }
}
