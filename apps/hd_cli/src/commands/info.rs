// apps/hd_cli/src/commands/info.rs

//! 信息显示命令
//!
//! 列出产物及其在 HYDRAD 目录树中的路径，以及支持的单位写法。

use anyhow::Result;
use clap::Args;
use hd_configure::{Artifact, DATE_FORMAT, TOOL_NAME};
use tracing::info;

/// 信息显示参数
#[derive(Args)]
pub struct InfoArgs {
    /// 只显示产物列表
    #[arg(long)]
    pub artifacts: bool,

    /// 只显示单位说明
    #[arg(long)]
    pub units: bool,
}

/// 执行信息命令
pub fn execute(args: InfoArgs) -> Result<()> {
    info!("=== {} 信息 ===", TOOL_NAME);

    let all = !args.artifacts && !args.units;
    if args.artifacts || all {
        print_artifacts();
    }
    if args.units || all {
        if all {
            println!();
        }
        print_units();
    }
    Ok(())
}

fn print_artifacts() {
    println!("=== 产物 ===");
    for artifact in Artifact::ALL {
        let note = if artifact.is_optional() { " (可选)" } else { "" };
        println!(
            "  {:<30} {}{}",
            artifact.name(),
            artifact.relative_path(),
            note
        );
    }
    println!("\n生成时间格式: {DATE_FORMAT}");
}

fn print_units() {
    println!("=== 单位 ===");
    println!("  物理量写作 \"<数值> <单位>\"，例如 \"0.01 s\"、\"45 Mm\"、\"1e12 cm-3\"");
    println!("  也可写作 {{\"value\": 0.01, \"unit\": \"s\"}}；纯数值视为无量纲");
    println!("  SI 前缀单位: m s g K J W eV Hz");
    println!("  其他单位: cm erg dyn min h hr d day yr AU R_sun");
    println!("  乘法: 空格或 *，除法: /，括号: ( )");
    println!("  幂: ^n、**n 或紧跟的整数 (cm3、cm-3)");
}
