// crates/hd_config/src/section.rs

//! 配置段的惰性读取
//!
//! 必需项在结构体中是 `Option<_>`，只有真正需要时才检查是否存在，
//! 因此一个未被使用的残缺配置段不会报错。

use hd_units::{Quantity, Unit};

use crate::error::{ConfigError, ConfigResult};

/// 配置段
pub trait Section {
    /// 段名（与配置文件顶层键一致）
    const NAME: &'static str;

    /// 读取必需项
    fn require<'a, T>(&self, value: &'a Option<T>, key: &str) -> ConfigResult<&'a T> {
        require(value, Self::NAME, key)
    }

    /// 读取必需物理量并换算到 `unit`
    fn require_in(&self, value: &Option<Quantity>, key: &str, unit: &Unit) -> ConfigResult<f64> {
        require_in(value, Self::NAME, key, unit)
    }
}

/// 读取必需项
pub fn require<'a, T>(value: &'a Option<T>, section: &str, key: &str) -> ConfigResult<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| ConfigError::missing(section, key))
}

/// 读取必需物理量并换算
pub fn require_in(
    value: &Option<Quantity>,
    section: &str,
    key: &str,
    unit: &Unit,
) -> ConfigResult<f64> {
    convert(require(value, section, key)?, section, key, unit)
}

/// 换算物理量，量纲不符时报告配置键
pub fn convert(quantity: &Quantity, section: &str, key: &str, unit: &Unit) -> ConfigResult<f64> {
    quantity
        .to(unit)
        .map_err(|err| ConfigError::from_unit_error(section, key, err))
}
