// crates/hd_configure/src/lib.rs

//! HYDRAD Configure Layer (Layer 3)
//!
//! 把 [`HydradConfig`](hd_config::HydradConfig) 渲染为 HYDRAD 读取的
//! C 头文件和文本配置文件。
//!
//! # 模块概览
//!
//! - [`configure`]: Configure 渲染器（每个产物一个方法）
//! - [`artifact`]: 产物清单与目录树中的路径
//! - [`elements`]: 周期表与元素解析
//! - [`tree`]: 写出 HYDRAD 目录树
//!
//! # 示例
//!
//! ```
//! use hd_configure::Configure;
//! use hd_config::HydradConfig;
//!
//! let config = HydradConfig::from_json_str(
//!     r#"{"general": {"minimum_collisional_coupling_timescale": "10 ms"}}"#,
//! ).unwrap();
//! let configure = Configure::new(config, true);
//! let header = configure.collisions_header().unwrap();
//! assert!(header.contains("#define MINIMUM_COLLISIONAL_COUPLING_TIME_SCALE 0.01"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod artifact;
pub mod configure;
pub mod elements;
mod render;
mod templates;
pub mod tree;

/// 层级标识
pub const LAYER: u8 = 3;

pub use artifact::{Artifact, UnknownArtifact};
pub use configure::{Configure, DATE_FORMAT};
pub use elements::Element;
pub use render::{COPYRIGHT, TOOL_NAME};
pub use templates::hydrad::DEFAULT_AMR_FILE;
pub use templates::initial_conditions::DEFAULT_PROFILE_PATH;
pub use tree::HydradTree;
