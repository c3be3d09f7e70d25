// crates/hd_config/src/heating.rs

//! 加热模型配置
//!
//! 每个加热事件在空间上是以 `location` 为中心、`scale_height` 为标高的分布，
//! 在时间上是上升-平台-衰减的梯形包络。

use hd_units::{Quantity, Unit};
use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::section::{convert, require, Section};

/// 加热模型配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatingConfig {
    /// 背景加热
    pub background_heating: BackgroundHeating,
    /// 加热电子（否则加热离子）
    pub heat_electrons: bool,
    /// 束流加热
    pub beam_heating: bool,
    /// 阿尔芬波加热
    pub alfven_wave_heating: bool,
    /// 加热事件
    pub events: Vec<HeatingEvent>,
}

impl Section for HeatingConfig {
    const NAME: &'static str = "heating";
}

/// 背景加热：关闭，或给出空间分布
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BackgroundRepr", into = "BackgroundRepr")]
pub enum BackgroundHeating {
    /// 无背景加热
    #[default]
    Disabled,
    /// 恒定背景加热
    Enabled(HeatingProfile),
}

/// 背景加热的空间分布
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatingProfile {
    /// 位置 [长度]
    pub location: Option<Quantity>,
    /// 标高 [长度]
    pub scale_height: Option<Quantity>,
    /// 加热率 [erg cm^-3 s^-1]
    pub rate: Option<Quantity>,
}

impl HeatingProfile {
    /// 换算为 (location [cm], scale_height [cm], rate [erg cm^-3 s^-1])
    pub fn to_cgs(&self) -> ConfigResult<[f64; 3]> {
        let section = HeatingConfig::NAME;
        let field = |value: &Option<Quantity>, name: &str, unit: &Unit| -> ConfigResult<f64> {
            let key = format!("background_heating.{name}");
            convert(require(value, section, &key)?, section, &key, unit)
        };
        Ok([
            field(&self.location, "location", &Unit::centimeter())?,
            field(&self.scale_height, "scale_height", &Unit::centimeter())?,
            field(&self.rate, "rate", &Unit::heating_rate())?,
        ])
    }
}

/// 单个加热事件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatingEvent {
    /// 开始时间 [时间]
    pub time_start: Option<Quantity>,
    /// 上升时长 [时间]
    pub rise_duration: Option<Quantity>,
    /// 衰减时长 [时间]
    pub decay_duration: Option<Quantity>,
    /// 总时长 [时间]
    pub total_duration: Option<Quantity>,
    /// 位置 [长度]
    pub location: Option<Quantity>,
    /// 标高 [长度]
    pub scale_height: Option<Quantity>,
    /// 峰值加热率 [erg cm^-3 s^-1]
    pub rate: Option<Quantity>,
}

impl HeatingEvent {
    /// 换算为 HYDRAD 事件行的七个数值
    ///
    /// 顺序: location, scale_height, rate, time_start, rise_duration,
    /// decay_duration, total_duration。`index` 用于错误信息中的键名。
    pub fn to_cgs(&self, index: usize) -> ConfigResult<[f64; 7]> {
        let section = HeatingConfig::NAME;
        let field = |value: &Option<Quantity>, name: &str, unit: &Unit| -> ConfigResult<f64> {
            let key = format!("events[{index}].{name}");
            convert(require(value, section, &key)?, section, &key, unit)
        };
        let cm = Unit::centimeter();
        let s = Unit::second();
        Ok([
            field(&self.location, "location", &cm)?,
            field(&self.scale_height, "scale_height", &cm)?,
            field(&self.rate, "rate", &Unit::heating_rate())?,
            field(&self.time_start, "time_start", &s)?,
            field(&self.rise_duration, "rise_duration", &s)?,
            field(&self.decay_duration, "decay_duration", &s)?,
            field(&self.total_duration, "total_duration", &s)?,
        ])
    }
}

/// serde 中间表示：`false` 或分布记录
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum BackgroundRepr {
    Flag(bool),
    Profile(HeatingProfile),
}

impl TryFrom<BackgroundRepr> for BackgroundHeating {
    type Error = String;

    fn try_from(repr: BackgroundRepr) -> Result<Self, Self::Error> {
        match repr {
            BackgroundRepr::Flag(false) => Ok(Self::Disabled),
            BackgroundRepr::Flag(true) => Err(
                "background_heating = true 需要给出 location、scale_height 和 rate".to_string(),
            ),
            BackgroundRepr::Profile(profile) => Ok(Self::Enabled(profile)),
        }
    }
}

impl From<BackgroundHeating> for BackgroundRepr {
    fn from(bg: BackgroundHeating) -> Self {
        match bg {
            BackgroundHeating::Disabled => Self::Flag(false),
            BackgroundHeating::Enabled(profile) => Self::Profile(profile),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn q(text: &str) -> Option<Quantity> {
        Some(Quantity::parse(text).unwrap())
    }

    #[test]
    fn test_event_order_and_units() {
        let event = HeatingEvent {
            time_start: q("0 s"),
            rise_duration: q("100 s"),
            decay_duration: q("100 s"),
            total_duration: q("200 s"),
            location: q("0 cm"),
            scale_height: q("1e300 cm"),
            rate: q("0.1 erg / (cm3 s)"),
        };
        assert_eq!(
            event.to_cgs(0).unwrap(),
            [0.0, 1e300, 0.1, 0.0, 100.0, 100.0, 200.0]
        );
    }

    #[test]
    fn test_event_missing_field_names_index() {
        let event = HeatingEvent::default();
        match event.to_cgs(3).unwrap_err() {
            ConfigError::MissingOption { section, key } => {
                assert_eq!(section, "heating");
                assert_eq!(key, "events[3].location");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_event_wrong_dimension() {
        let event = HeatingEvent {
            time_start: q("5 cm"),
            rise_duration: q("100 s"),
            decay_duration: q("100 s"),
            total_duration: q("200 s"),
            location: q("0 cm"),
            scale_height: q("1 Mm"),
            rate: q("0.1 erg / (cm3 s)"),
        };
        assert!(matches!(
            event.to_cgs(0),
            Err(ConfigError::UnitMismatch { ref key, .. }) if key == "events[0].time_start"
        ));
    }

    #[test]
    fn test_background_heating_shapes() {
        let off: HeatingConfig =
            serde_json::from_str(r#"{"background_heating": false}"#).unwrap();
        assert_eq!(off.background_heating, BackgroundHeating::Disabled);

        let on: HeatingConfig = serde_json::from_str(
            r#"{"background_heating": {"location": "1 Mm", "scale_height": "2 Mm", "rate": "1e-6 erg / (cm3 s)"}}"#,
        )
        .unwrap();
        match on.background_heating {
            BackgroundHeating::Enabled(profile) => {
                assert_eq!(profile.to_cgs().unwrap(), [1e8, 2e8, 1e-6]);
            }
            BackgroundHeating::Disabled => panic!("expected enabled background heating"),
        }

        assert!(serde_json::from_str::<HeatingConfig>(r#"{"background_heating": true}"#).is_err());
    }
}
