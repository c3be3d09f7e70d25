// crates/hd_configure/src/render.rs

//! 文本产物的行构建器
//!
//! 每个产物都是一组有序的行槽位。可选开关关闭时槽位保留为空行，
//! 因此不同配置下各产物的行结构保持一致，切换一个开关只改变它自己那一行。

use hd_config::ConfigResult;
use std::fmt;

/// 生成工具名称（写入每个产物的生成说明）
pub const TOOL_NAME: &str = "hydrad_tools";

/// 版权行
pub const COPYRIGHT: &str = "(c) Dr. Stephen J. Bradshaw";

/// 行构建器
#[derive(Debug, Default)]
pub(crate) struct Lines {
    lines: Vec<String>,
}

impl Lines {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 头文件横幅
    pub(crate) fn header(subject: &str, date: &str) -> Self {
        let mut lines = Self::new();
        lines
            .line("// ****")
            .line("// *")
            .line(format!("// * #defines for configuring the {subject}"))
            .line("// *")
            .line(format!("// * {COPYRIGHT}"))
            .line("// *")
            .line(format!("// * Source code generated by {TOOL_NAME} on {date}"))
            .line("// *")
            .line("// ****");
        lines
    }

    pub(crate) fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(text.into());
        self
    }

    pub(crate) fn blank(&mut self) -> &mut Self {
        self.line(String::new())
    }

    /// 槽位：有内容时写入，否则留空行
    pub(crate) fn slot(&mut self, text: Option<String>) -> &mut Self {
        self.line(text.unwrap_or_default())
    }

    /// `#define NAME` 开关
    pub(crate) fn flag(&mut self, name: &str, on: bool) -> &mut Self {
        self.slot(on.then(|| format!("#define {name}")))
    }

    pub(crate) fn define(&mut self, name: &str, value: impl fmt::Display) -> &mut Self {
        self.line(format!("#define {name} {value}"))
    }

    pub(crate) fn include(&mut self, path: &str) -> &mut Self {
        self.line(format!("#include \"{path}\""))
    }

    /// `// **** Name ****` ... `// **** End of Name ****`
    pub(crate) fn section(
        &mut self,
        name: &str,
        body: impl FnOnce(&mut Lines) -> ConfigResult<()>,
    ) -> ConfigResult<&mut Self> {
        self.line(format!("// **** {name} ****"));
        body(self)?;
        self.line(format!("// **** End of {name} ****"));
        Ok(self)
    }

    /// 配置文件末尾的生成说明
    pub(crate) fn notice(&mut self, date: &str) -> &mut Self {
        self.line(format!("Configuration file generated by {TOOL_NAME} on {date}"))
    }

    pub(crate) fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// 以空格连接浮点数
pub(crate) fn join_floats(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| hd_config::format_float(*v))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_keeps_line() {
        let mut lines = Lines::new();
        lines.line("a").flag("X", false).line("b");
        assert_eq!(lines.finish(), "a\n\nb");
    }

    #[test]
    fn test_section_wraps_body() {
        let mut lines = Lines::new();
        lines
            .section("Solver", |s| {
                s.define("EPSILON", 0.01);
                Ok(())
            })
            .unwrap();
        assert_eq!(
            lines.finish(),
            "// **** Solver ****\n#define EPSILON 0.01\n// **** End of Solver ****"
        );
    }

    #[test]
    fn test_join_floats() {
        assert_eq!(join_floats(&[0.0, 1e300, 0.1]), "0.0 1e+300 0.1");
    }
}
