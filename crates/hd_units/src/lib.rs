// crates/hd_units/src/lib.rs

//! HYDRAD 物理量层 (Layer 1)
//!
//! 提供带单位的物理量、单位表达式解析和量纲检查的单位换算。
//! HYDRAD 的所有输入文件都使用 CGS 单位，因此本层以 CGS 为基准。
//!
//! # 模块概览
//!
//! - [`dimension`]: 量纲指数（长度、质量、时间、温度）
//! - [`unit`]: 单位与单位表达式解析（`"erg / (cm3 s)"`、`"cm^-3"` 等）
//! - [`quantity`]: 数值 + 单位，支持 serde
//! - [`error`]: 单位错误类型
//!
//! # 示例
//!
//! ```
//! use hd_units::{Quantity, Unit};
//!
//! let q: Quantity = "10 ms".parse().unwrap();
//! assert_eq!(q.to(&Unit::second()).unwrap(), 0.01);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dimension;
pub mod error;
pub mod quantity;
pub mod unit;

/// 层级标识
pub const LAYER: u8 = 1;

// 重导出核心类型
pub use dimension::Dimension;
pub use error::{UnitError, UnitResult};
pub use quantity::Quantity;
pub use unit::Unit;
