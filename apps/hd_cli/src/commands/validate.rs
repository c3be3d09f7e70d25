// apps/hd_cli/src/commands/validate.rs

//! 配置验证命令
//!
//! 逐个渲染全部产物并收集问题：渲染失败记为错误，
//! 能渲染但可能不是本意的配置记为警告。

use anyhow::{bail, Result};
use clap::Args;
use hd_config::HydradConfig;
use hd_configure::{Artifact, Configure};
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

use super::load_config;

/// 验证参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 配置文件路径 (JSON)
    #[arg(short, long)]
    pub config: PathBuf,

    /// 严格模式（警告也视为错误）
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

/// 单条验证问题
#[derive(Debug)]
struct Finding {
    severity: Severity,
    message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.severity {
            Severity::Error => "✗",
            Severity::Warning => "⚠",
        };
        write!(f, "  {mark} {}", self.message)
    }
}

/// 验证报告
#[derive(Debug, Default)]
struct Report {
    findings: Vec<Finding>,
}

impl Report {
    fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.findings.push(Finding {
            severity,
            message: message.into(),
        });
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    /// 严格模式下警告也导致失败
    fn passes(&self, strict: bool) -> bool {
        self.findings
            .iter()
            .all(|f| f.severity == Severity::Warning && !strict)
    }
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("验证配置文件: {}", args.config.display());

    let config = load_config(&args.config)?;
    let mut report = Report::default();
    check_artifacts(&config, &mut report);
    check_warnings(&config, &mut report);

    for finding in &report.findings {
        println!("{finding}");
    }
    finish(&report, args.strict)
}

fn check_artifacts(config: &HydradConfig, report: &mut Report) {
    let configure = Configure::new(config.clone(), true);
    for artifact in Artifact::ALL {
        match configure.render(artifact) {
            Ok(Some(_)) => println!("  ✓ {artifact}"),
            Ok(None) => println!("  - {artifact} (未配置)"),
            Err(e) => report.push(Severity::Error, format!("{artifact}: {e}")),
        }
    }
}

fn check_warnings(config: &HydradConfig, report: &mut Report) {
    let general = &config.general;
    let poly_fits = [
        ("poly_fit_gravity", &general.poly_fit_gravity),
        ("poly_fit_magnetic_field", &general.poly_fit_magnetic_field),
    ];
    for (key, coefficients) in poly_fits {
        if coefficients.as_ref().is_some_and(|c| c.is_empty()) {
            report.push(Severity::Warning, format!("general.{key} 没有系数"));
        }
    }
    if general.poly_fit_gravity.is_some() && !config.initial_conditions.isothermal {
        report.push(
            Severity::Warning,
            "general.poly_fit_gravity 只在等温初始条件下使用",
        );
    }
    if config.heating.events.is_empty() {
        report.push(Severity::Warning, "heating.events 为空，没有加热事件");
    }
}

fn finish(report: &Report, strict: bool) -> Result<()> {
    let errors = report.count(Severity::Error);
    let warnings = report.count(Severity::Warning);
    if report.passes(strict) {
        info!("验证通过 ({} 个警告)", warnings);
        return Ok(());
    }
    warn!("验证失败 ({} 个错误, {} 个警告)", errors, warnings);
    bail!("验证失败：发现 {} 个错误，{} 个警告", errors, warnings)
}
