// apps/hd_cli/src/commands/mod.rs

//! 子命令

pub mod generate;
pub mod info;
pub mod render;
pub mod validate;

use anyhow::{Context, Result};
use hd_config::HydradConfig;
use std::path::Path;

/// 读取 JSON 配置，错误信息附带文件路径
pub fn load_config(path: &Path) -> Result<HydradConfig> {
    HydradConfig::from_file(path)
        .with_context(|| format!("无法加载配置文件: {}", path.display()))
}
