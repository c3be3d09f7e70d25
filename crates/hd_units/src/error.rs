// crates/hd_units/src/error.rs

//! 单位错误类型

use thiserror::Error;

use crate::dimension::Dimension;

/// 单位层结果类型
pub type UnitResult<T> = Result<T, UnitError>;

/// 单位错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// 未知单位符号
    #[error("未知单位: '{0}'")]
    UnknownUnit(String),

    /// 单位表达式语法错误
    #[error("单位表达式 '{expr}' 语法错误: {reason}")]
    Syntax {
        /// 原始表达式
        expr: String,
        /// 错误原因
        reason: String,
    },

    /// 数值部分无法解析
    #[error("无法解析物理量数值: '{0}'")]
    InvalidNumber(String),

    /// 量纲不匹配
    #[error("无法将 '{from}' [{from_dimension}] 转换为 '{to}' [{to_dimension}]")]
    Mismatch {
        /// 源单位表达式
        from: String,
        /// 目标单位表达式
        to: String,
        /// 源量纲
        from_dimension: Dimension,
        /// 目标量纲
        to_dimension: Dimension,
    },
}

impl UnitError {
    /// 语法错误便捷构造
    pub fn syntax(expr: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Syntax {
            expr: expr.into(),
            reason: reason.into(),
        }
    }
}
