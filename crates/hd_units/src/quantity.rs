// crates/hd_units/src/quantity.rs

//! 带单位的物理量
//!
//! 配置文件中的物理量有三种写法：
//!
//! ```json
//! "0.01 s"
//! {"value": 0.01, "unit": "s"}
//! 0.01
//! ```
//!
//! 裸数值被视为无量纲量，换算到有量纲单位时会报告量纲不匹配。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{UnitError, UnitResult};
use crate::unit::Unit;

/// 物理量 = 数值 × 单位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QuantityRepr", into = "QuantityRepr")]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    /// 由数值和单位构造
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// 无量纲量
    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, Unit::dimensionless())
    }

    /// 由数值和单位表达式构造
    ///
    /// ```
    /// use hd_units::Quantity;
    ///
    /// let rate = Quantity::with_unit(0.1, "erg/(cm^3 s)").unwrap();
    /// assert_eq!(rate.value(), 0.1);
    /// ```
    pub fn with_unit(value: f64, unit: &str) -> UnitResult<Self> {
        Ok(Self::new(value, Unit::parse(unit)?))
    }

    /// 解析 `"<数值> <单位表达式>"`
    pub fn parse(text: &str) -> UnitResult<Self> {
        let text = text.trim();
        let (number, unit) = match text.split_once(char::is_whitespace) {
            Some((number, unit)) => (number, unit),
            None => (text, ""),
        };
        let value = number
            .parse::<f64>()
            .map_err(|_| UnitError::InvalidNumber(text.to_string()))?;
        Ok(Self::new(value, Unit::parse(unit)?))
    }

    /// 原始数值（未换算）
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// 单位
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// 换算到目标单位并返回数值
    pub fn to(&self, unit: &Unit) -> UnitResult<f64> {
        let factor = self.unit.conversion_factor(unit)?;
        // 同系数时原样返回，避免引入舍入
        if factor == 1.0 {
            Ok(self.value)
        } else {
            Ok(self.value * factor)
        }
    }

    /// 换算到单位表达式
    pub fn value_in(&self, unit: &str) -> UnitResult<f64> {
        self.to(&Unit::parse(unit)?)
    }
}

impl FromStr for Quantity {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.expr().is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

/// serde 中间表示
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum QuantityRepr {
    Bare(f64),
    Text(String),
    Explicit {
        value: f64,
        #[serde(default)]
        unit: String,
    },
}

impl TryFrom<QuantityRepr> for Quantity {
    type Error = UnitError;

    fn try_from(repr: QuantityRepr) -> Result<Self, Self::Error> {
        match repr {
            QuantityRepr::Bare(value) => Ok(Quantity::dimensionless(value)),
            QuantityRepr::Text(text) => Quantity::parse(&text),
            QuantityRepr::Explicit { value, unit } => Quantity::with_unit(value, &unit),
        }
    }
}

impl From<Quantity> for QuantityRepr {
    fn from(q: Quantity) -> Self {
        if q.unit.expr().is_empty() {
            QuantityRepr::Bare(q.value)
        } else {
            QuantityRepr::Explicit {
                value: q.value,
                unit: q.unit.expr().to_string(),
            }
        }
    }
}
