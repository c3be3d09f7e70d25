// crates/hd_config/src/element.rs

//! 元素引用
//!
//! 辐射模型的元素列表允许混写名称、符号和原子序数，
//! 例如 `["iron", "He", 1]`。解析到周期表在渲染时进行。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 元素引用（名称/符号或原子序数）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementRef {
    /// 原子序数
    Number(u32),
    /// 元素名称或符号
    Name(String),
}

impl From<u32> for ElementRef {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for ElementRef {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(s) => f.write_str(s),
        }
    }
}
