// crates/hd_config/src/lib.rs

//! HYDRAD Config Layer (Layer 2)
//!
//! 配置层，提供 HYDRAD 配置的强类型模型、JSON 加载和错误类型。
//!
//! # 模块概览
//!
//! - [`hydrad_config`]: HydradConfig 顶层配置（六个配置段）
//! - [`sections`]: general / initial_conditions / grid / solver / radiation
//! - [`heating`]: 加热模型与加热事件
//! - [`element`]: 元素引用
//! - [`number`]: 无量纲数值与输出格式
//! - [`section`]: 惰性读取必需项
//! - [`error`]: 配置错误类型
//!
//! # 层级架构
//!
//! ```text
//! Layer 4: hd_cli        ─> uses HydradConfig, Configure
//! Layer 3: hd_configure  ─> Configure, HydradTree
//! Layer 2: hd_config     ─> HydradConfig, ConfigError (本层)
//! Layer 1: hd_units      ─> Quantity, Unit
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod element;
pub mod error;
pub mod heating;
pub mod hydrad_config;
pub mod number;
pub mod section;
pub mod sections;

/// 层级标识
pub const LAYER: u8 = 2;

// 重导出核心类型
pub use element::ElementRef;
pub use error::{ConfigError, ConfigResult};
pub use heating::{BackgroundHeating, HeatingConfig, HeatingEvent, HeatingProfile};
pub use hydrad_config::HydradConfig;
pub use number::{format_float, Number};
pub use section::Section;
pub use sections::{
    GeneralConfig, GridConfig, InitialConditionsConfig, RadiationConfig, SolverConfig,
};

pub use hd_units::{Quantity, Unit};
