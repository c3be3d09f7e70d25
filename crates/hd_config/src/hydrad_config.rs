// crates/hd_config/src/hydrad_config.rs

//! HydradConfig - 完整的 HYDRAD 配置
//!
//! 六个顶层配置段，对应 HYDRAD 的各个子模型。从 JSON 加载：
//!
//! ```json
//! {
//!   "general": {"minimum_collisional_coupling_timescale": "0.01 s"},
//!   "heating": {"heat_electrons": true, "events": []}
//! }
//! ```
//!
//! 缺失的段和键使用缺省值；必需项在读取对应产物时才检查。

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::heating::HeatingConfig;
use crate::sections::{
    GeneralConfig, GridConfig, InitialConditionsConfig, RadiationConfig, SolverConfig,
};

/// HYDRAD 配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HydradConfig {
    /// 通用配置
    #[serde(default)]
    pub general: GeneralConfig,

    /// 初始条件
    #[serde(default)]
    pub initial_conditions: InitialConditionsConfig,

    /// 网格
    #[serde(default)]
    pub grid: GridConfig,

    /// 求解器
    #[serde(default)]
    pub solver: SolverConfig,

    /// 辐射模型
    #[serde(default)]
    pub radiation: RadiationConfig,

    /// 加热模型
    #[serde(default)]
    pub heating: HeatingConfig,
}

impl HydradConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("读取配置文件: {}", path.display());
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// 从 JSON 字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 序列化为格式化 JSON
    pub fn to_json_string(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 保存为 JSON 文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        std::fs::write(path.as_ref(), self.to_json_string()?)?;
        Ok(())
    }
}
