// crates/hd_config/src/number.rs

//! 无量纲数值与 HYDRAD 输出格式
//!
//! HYDRAD 输入文件的数值书写习惯：
//!
//! - 整数保持整数形式（`12`）
//! - 浮点数取最短往返表示，整数值补 `.0`（`100.0`、`0.01`）
//! - 指数 < -4 或 >= 16 时使用科学计数法，指数带符号且至少两位（`1e+300`、`1.5e-05`）

use serde::{Deserialize, Serialize};
use std::fmt;

/// 保留整数/浮点身份的无量纲数值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// 整数
    Int(i64),
    /// 浮点数
    Float(f64),
}

impl Number {
    /// 转为 f64
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// `1 + self`，整数保持整数；整数溢出时改用浮点
    pub fn one_plus(self) -> Number {
        match self {
            Self::Int(v) => v
                .checked_add(1)
                .map(Self::Int)
                .unwrap_or(Self::Float(1.0 + v as f64)),
            Self::Float(v) => Self::Float(1.0 + v),
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => f.write_str(&format_float(v)),
        }
    }
}

/// 按 HYDRAD 输入文件习惯格式化浮点数
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` 给出最短往返的有效数字
    let sci = format!("{x:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..16).contains(&exp) {
        let fixed = format!("{x}");
        if fixed.contains('.') {
            fixed
        } else {
            format!("{fixed}.0")
        }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_range() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(0.01), "0.01");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(100.0), "100.0");
        assert_eq!(format_float(1.05), "1.05");
        assert_eq!(format_float(20000.0), "20000.0");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(-8.0), "-8.0");
    }

    #[test]
    fn test_scientific_range() {
        assert_eq!(format_float(1e300), "1e+300");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e-5), "1.5e-05");
        assert_eq!(format_float(-2.5e20), "-2.5e+20");
        assert_eq!(format_float(1e-10), "1e-10");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_number_keeps_identity() {
        let int: Number = serde_json::from_str("12").unwrap();
        let float: Number = serde_json::from_str("12.0").unwrap();
        assert_eq!(int, Number::Int(12));
        assert_eq!(float, Number::Float(12.0));
        assert_eq!(int.to_string(), "12");
        assert_eq!(float.to_string(), "12.0");
    }

    #[test]
    fn test_one_plus() {
        assert_eq!(Number::Float(0.05).one_plus().to_string(), "1.05");
        assert_eq!(Number::Int(0).one_plus().to_string(), "1");
        assert_eq!(Number::Float(0.1).one_plus().to_string(), "1.1");
    }

    #[test]
    fn test_one_plus_at_integer_limit() {
        assert_eq!(
            Number::Int(i64::MAX).one_plus(),
            Number::Float(1.0 + i64::MAX as f64)
        );
        assert_eq!(
            Number::Int(i64::MAX).one_plus().to_string(),
            "9.223372036854776e+18"
        );
        assert_eq!(Number::Int(i64::MIN).one_plus(), Number::Int(i64::MIN + 1));
    }
}
