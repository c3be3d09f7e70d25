// crates/hd_config/src/error.rs

//! 配置层错误类型
//!
//! 所有错误都在读取产物时同步产生，不做重试。

use hd_units::UnitError;

/// 配置层结果类型
pub type ConfigResult<T> = Result<T, ConfigError>;

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 解析错误
    #[error("解析错误: {0}")]
    Parse(String),

    /// 缺少必需的配置项
    #[error("缺少必需的配置项: {section}.{key}")]
    MissingOption {
        /// 配置段
        section: String,
        /// 配置键
        key: String,
    },

    /// 物理量量纲与期望不符
    #[error("单位不匹配 '{section}.{key}': 期望 [{expected}], 实际 '{found}'")]
    UnitMismatch {
        /// 配置段
        section: String,
        /// 配置键
        key: String,
        /// 期望的单位
        expected: String,
        /// 实际提供的单位
        found: String,
    },

    /// 无法识别的元素符号、名称或原子序数
    #[error("无效的元素: '{0}'")]
    InvalidElementSymbol(String),

    /// 无效值
    #[error("无效值 '{key}': {value} - {reason}")]
    InvalidValue {
        /// 配置键
        key: String,
        /// 配置值
        value: String,
        /// 原因
        reason: String,
    },
}

impl ConfigError {
    /// 缺失配置项
    pub fn missing(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingOption {
            section: section.into(),
            key: key.into(),
        }
    }

    /// 为单位错误附加配置键
    pub fn from_unit_error(section: &str, key: &str, err: UnitError) -> Self {
        match err {
            UnitError::Mismatch {
                from, to_dimension, ..
            } => Self::UnitMismatch {
                section: section.to_string(),
                key: key.to_string(),
                expected: to_dimension.to_string(),
                found: from,
            },
            other => Self::InvalidValue {
                key: format!("{section}.{key}"),
                value: String::new(),
                reason: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hd_units::{Quantity, Unit};

    #[test]
    fn test_missing_option_display() {
        let err = ConfigError::missing("general", "total_time");
        assert_eq!(err.to_string(), "缺少必需的配置项: general.total_time");
    }

    #[test]
    fn test_unit_mismatch_from_unit_error() {
        let unit_err = Quantity::parse("5 cm")
            .unwrap()
            .to(&Unit::second())
            .unwrap_err();
        let err = ConfigError::from_unit_error("general", "total_time", unit_err);
        match err {
            ConfigError::UnitMismatch {
                section,
                key,
                expected,
                found,
            } => {
                assert_eq!(section, "general");
                assert_eq!(key, "total_time");
                assert_eq!(expected, "s");
                assert_eq!(found, "cm");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
