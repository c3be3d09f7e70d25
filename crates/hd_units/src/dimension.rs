// crates/hd_units/src/dimension.rs

//! 量纲指数
//!
//! 以 CGS 基本量（长度、质量、时间、温度）的整数指数描述量纲。
//! 两个单位可以互相换算当且仅当量纲相同。

use std::fmt;

/// 量纲（各基本量的指数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    /// 长度指数
    pub length: i8,
    /// 质量指数
    pub mass: i8,
    /// 时间指数
    pub time: i8,
    /// 温度指数
    pub temperature: i8,
}

impl Dimension {
    /// 无量纲
    pub const NONE: Self = Self::new(0, 0, 0, 0);
    /// 长度
    pub const LENGTH: Self = Self::new(1, 0, 0, 0);
    /// 质量
    pub const MASS: Self = Self::new(0, 1, 0, 0);
    /// 时间
    pub const TIME: Self = Self::new(0, 0, 1, 0);
    /// 温度
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 1);
    /// 能量 (g cm^2 s^-2)
    pub const ENERGY: Self = Self::new(2, 1, -2, 0);
    /// 功率 (g cm^2 s^-3)
    pub const POWER: Self = Self::new(2, 1, -3, 0);
    /// 力 (g cm s^-2)
    pub const FORCE: Self = Self::new(1, 1, -2, 0);

    /// 由各指数构造
    pub const fn new(length: i8, mass: i8, time: i8, temperature: i8) -> Self {
        Self {
            length,
            mass,
            time,
            temperature,
        }
    }

    /// 是否无量纲
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        *self == Self::NONE
    }

    /// 量纲相乘（指数相加），溢出时返回 `None`
    pub fn checked_mul(self, rhs: Dimension) -> Option<Self> {
        self.zip_with(rhs, i8::checked_add)
    }

    /// 量纲相除（指数相减），溢出时返回 `None`
    pub fn checked_div(self, rhs: Dimension) -> Option<Self> {
        self.zip_with(rhs, i8::checked_sub)
    }

    /// 整数次幂，指数超出 `i8` 范围时返回 `None`
    pub fn checked_powi(self, n: i32) -> Option<Self> {
        let n = i8::try_from(n).ok()?;
        Some(Self::new(
            self.length.checked_mul(n)?,
            self.mass.checked_mul(n)?,
            self.time.checked_mul(n)?,
            self.temperature.checked_mul(n)?,
        ))
    }

    fn zip_with(self, rhs: Dimension, op: fn(i8, i8) -> Option<i8>) -> Option<Self> {
        Some(Self::new(
            op(self.length, rhs.length)?,
            op(self.mass, rhs.mass)?,
            op(self.time, rhs.time)?,
            op(self.temperature, rhs.temperature)?,
        ))
    }
}

impl fmt::Display for Dimension {
    /// 以 CGS 基本单位书写，例如 `g cm^-1 s^-3`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "dimensionless");
        }
        let parts = [
            ("g", self.mass),
            ("cm", self.length),
            ("s", self.time),
            ("K", self.temperature),
        ];
        let mut first = true;
        for (symbol, exp) in parts {
            if exp == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            if exp == 1 {
                write!(f, "{symbol}")?;
            } else {
                write!(f, "{symbol}^{exp}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heating_rate_dimension() {
        // erg cm^-3 s^-1
        let rate = Dimension::LENGTH
            .checked_powi(3)
            .and_then(|volume| Dimension::ENERGY.checked_div(volume))
            .and_then(|d| d.checked_div(Dimension::TIME))
            .unwrap();
        assert_eq!(rate, Dimension::new(-1, 1, -3, 0));
        assert_eq!(rate.to_string(), "g cm^-1 s^-3");
    }

    #[test]
    fn test_dimensionless_display() {
        assert!(Dimension::NONE.is_dimensionless());
        assert_eq!(Dimension::NONE.to_string(), "dimensionless");
        let ratio = Dimension::TIME.checked_div(Dimension::TIME).unwrap();
        assert_eq!(ratio.to_string(), "dimensionless");
    }

    #[test]
    fn test_exponent_overflow_is_reported() {
        assert_eq!(Dimension::LENGTH.checked_powi(253), None);
        assert_eq!(Dimension::LENGTH.checked_powi(-129), None);
        let big = Dimension::LENGTH.checked_powi(100).unwrap();
        assert_eq!(big.checked_powi(2), None);
        assert_eq!(big.checked_mul(big), None);
        assert_eq!(big.checked_div(Dimension::LENGTH.checked_powi(-100).unwrap()), None);
        assert_eq!(
            Dimension::LENGTH.checked_powi(-3),
            Some(Dimension::new(-3, 0, 0, 0))
        );
    }
}
