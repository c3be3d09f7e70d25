// crates/hd_units/src/unit.rs

//! 单位与单位表达式解析
//!
//! 单位由 CGS 换算系数和量纲组成。表达式语法：
//!
//! - 乘法：空格或 `*`（`erg cm-3 s-1`、`g*cm`）
//! - 除法：`/`，从左到右结合（`erg/cm^3/s`）
//! - 括号：`erg / (cm3 s)`
//! - 幂：`^n`、`**n` 或紧跟符号的整数（`cm-3`、`cm3`）
//! - SI 前缀：`ms`、`Mm`、`keV`、`MK` 等

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::dimension::Dimension;
use crate::error::{UnitError, UnitResult};

/// 不允许加前缀的具名单位 (符号, CGS 系数, 量纲)
const NAMED_UNITS: &[(&str, f64, Dimension)] = &[
    ("cm", 1.0, Dimension::LENGTH),
    ("erg", 1.0, Dimension::ENERGY),
    ("dyn", 1.0, Dimension::FORCE),
    ("min", 60.0, Dimension::TIME),
    ("h", 3_600.0, Dimension::TIME),
    ("hr", 3_600.0, Dimension::TIME),
    ("d", 86_400.0, Dimension::TIME),
    ("day", 86_400.0, Dimension::TIME),
    ("yr", 31_557_600.0, Dimension::TIME),
    ("AU", 1.495_978_707e13, Dimension::LENGTH),
    ("R_sun", 6.957e10, Dimension::LENGTH),
    ("Rsun", 6.957e10, Dimension::LENGTH),
];

/// 可加 SI 前缀的单位
const PREFIXABLE_UNITS: &[(&str, f64, Dimension)] = &[
    ("m", 100.0, Dimension::LENGTH),
    ("s", 1.0, Dimension::TIME),
    ("g", 1.0, Dimension::MASS),
    ("K", 1.0, Dimension::TEMPERATURE),
    ("J", 1.0e7, Dimension::ENERGY),
    ("W", 1.0e7, Dimension::POWER),
    ("eV", 1.602_176_634e-12, Dimension::ENERGY),
    ("Hz", 1.0, Dimension::new(0, 0, -1, 0)),
];

/// SI 前缀，`da` 必须排在 `d` 之前
const PREFIXES: &[(&str, f64)] = &[
    ("da", 1e1),
    ("Y", 1e24),
    ("Z", 1e21),
    ("E", 1e18),
    ("P", 1e15),
    ("T", 1e12),
    ("G", 1e9),
    ("M", 1e6),
    ("k", 1e3),
    ("h", 1e2),
    ("d", 1e-1),
    ("c", 1e-2),
    ("m", 1e-3),
    ("u", 1e-6),
    ("µ", 1e-6),
    ("n", 1e-9),
    ("p", 1e-12),
    ("f", 1e-15),
    ("a", 1e-18),
];

/// 物理单位
///
/// `scale` 为该单位对应的 CGS 基本单位数值，例如 `ms` 的 scale 为 `1e-3`。
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    scale: f64,
    dimension: Dimension,
    expr: String,
}

impl Unit {
    /// 由表达式、系数和量纲构造
    pub fn new(expr: impl Into<String>, scale: f64, dimension: Dimension) -> Self {
        Self {
            scale,
            dimension,
            expr: expr.into(),
        }
    }

    /// 无量纲单位
    pub fn dimensionless() -> Self {
        Self::new("", 1.0, Dimension::NONE)
    }

    /// 秒
    pub fn second() -> Self {
        Self::new("s", 1.0, Dimension::TIME)
    }

    /// 厘米
    pub fn centimeter() -> Self {
        Self::new("cm", 1.0, Dimension::LENGTH)
    }

    /// 开尔文
    pub fn kelvin() -> Self {
        Self::new("K", 1.0, Dimension::TEMPERATURE)
    }

    /// 数密度 cm^-3
    pub fn per_cubic_centimeter() -> Self {
        Self::new("cm^-3", 1.0, Dimension::new(-3, 0, 0, 0))
    }

    /// 体加热率 erg cm^-3 s^-1
    pub fn heating_rate() -> Self {
        Self::new(
            "erg cm^-3 s^-1",
            1.0,
            Dimension::new(-1, 1, -3, 0),
        )
    }

    /// 解析单位表达式
    pub fn parse(expr: &str) -> UnitResult<Self> {
        let trimmed = expr.trim();
        if trimmed.is_empty() {
            return Ok(Self::dimensionless());
        }
        let tokens = tokenize(trimmed)?;
        let mut parser = Parser {
            expr: trimmed,
            tokens,
            pos: 0,
        };
        let unit = parser.parse_expr()?;
        if let Some(token) = parser.peek() {
            return Err(UnitError::syntax(
                trimmed,
                format!("多余的符号 {token:?}"),
            ));
        }
        Ok(Self::new(trimmed, unit.scale, unit.dimension))
    }

    /// CGS 换算系数
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// 量纲
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// 原始表达式
    pub fn expr(&self) -> &str {
        &self.expr
    }

    /// 是否无量纲
    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    /// 量纲是否相同
    pub fn is_convertible_to(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// 换算到 `to` 的乘法系数
    pub fn conversion_factor(&self, to: &Unit) -> UnitResult<f64> {
        if !self.is_convertible_to(to) {
            return Err(UnitError::Mismatch {
                from: self.display_expr().to_string(),
                to: to.display_expr().to_string(),
                from_dimension: self.dimension,
                to_dimension: to.dimension,
            });
        }
        Ok(self.scale / to.scale)
    }

    /// 整数次幂，量纲指数溢出时返回 `None`
    pub fn checked_powi(&self, n: i32) -> Option<Self> {
        let expr = if self.expr.contains(' ') {
            format!("({})^{n}", self.expr)
        } else {
            format!("{}^{n}", self.expr)
        };
        Some(Self::new(expr, self.scale.powi(n), self.dimension.checked_powi(n)?))
    }

    /// 单位相乘，量纲指数溢出时返回 `None`
    pub fn checked_mul(&self, rhs: &Unit) -> Option<Self> {
        Some(Self::new(
            format!("{} {}", self.expr, rhs.expr),
            self.scale * rhs.scale,
            self.dimension.checked_mul(rhs.dimension)?,
        ))
    }

    /// 单位相除，量纲指数溢出时返回 `None`
    pub fn checked_div(&self, rhs: &Unit) -> Option<Self> {
        let expr = if rhs.expr.contains(' ') {
            format!("{} / ({})", self.expr, rhs.expr)
        } else {
            format!("{} / {}", self.expr, rhs.expr)
        };
        Some(Self::new(
            expr,
            self.scale / rhs.scale,
            self.dimension.checked_div(rhs.dimension)?,
        ))
    }

    fn display_expr(&self) -> &str {
        if self.expr.is_empty() {
            "dimensionless"
        } else {
            &self.expr
        }
    }

    fn scalar(value: f64) -> Self {
        Self::new(format!("{value}"), value, Dimension::NONE)
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.expr)
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let expr = String::deserialize(deserializer)?;
        Unit::parse(&expr).map_err(serde::de::Error::custom)
    }
}

/// 查找单个单位符号
fn lookup(symbol: &str) -> UnitResult<Unit> {
    if let Some(&(_, scale, dimension)) = NAMED_UNITS.iter().find(|(s, ..)| *s == symbol) {
        return Ok(Unit::new(symbol, scale, dimension));
    }
    if let Some(&(_, scale, dimension)) = PREFIXABLE_UNITS.iter().find(|(s, ..)| *s == symbol) {
        return Ok(Unit::new(symbol, scale, dimension));
    }
    for &(prefix, factor) in PREFIXES {
        let Some(rest) = symbol.strip_prefix(prefix) else {
            continue;
        };
        if let Some(&(_, scale, dimension)) = PREFIXABLE_UNITS.iter().find(|(s, ..)| *s == rest) {
            return Ok(Unit::new(symbol, factor * scale, dimension));
        }
    }
    Err(UnitError::UnknownUnit(symbol.to_string()))
}

// ============================================================
// 词法与语法分析
// ============================================================

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    /// `attached` 表示整数紧跟在符号或右括号之后（作为幂）
    Int { value: i32, attached: bool },
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

fn tokenize(expr: &str) -> UnitResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();
    let mut after_space = false;

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            after_space = true;
            continue;
        }
        match c {
            '*' => {
                chars.next();
                if chars.peek() == Some(&'*') {
                    chars.next();
                    tokens.push(Token::Caret);
                } else {
                    tokens.push(Token::Star);
                }
            }
            '.' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '^' => {
                chars.next();
                tokens.push(Token::Caret);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            c if c.is_ascii_digit() || c == '-' || c == '+' => {
                let attached = !after_space
                    && matches!(tokens.last(), Some(Token::Ident(_)) | Some(Token::RParen));
                let mut text = String::new();
                text.push(c);
                chars.next();
                while let Some(&d) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    text.push(d);
                    chars.next();
                }
                let value = text
                    .parse::<i32>()
                    .map_err(|_| UnitError::syntax(expr, format!("无效整数 '{text}'")))?;
                tokens.push(Token::Int { value, attached });
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut name = String::new();
                while let Some(&d) = chars.peek() {
                    if !(d.is_alphabetic() || d == '_') {
                        break;
                    }
                    name.push(d);
                    chars.next();
                }
                tokens.push(Token::Ident(name));
            }
            other => {
                return Err(UnitError::syntax(expr, format!("非法字符 '{other}'")));
            }
        }
        after_space = false;
    }
    Ok(tokens)
}

struct Parser<'a> {
    expr: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn within_range(&self, unit: Option<Unit>) -> UnitResult<Unit> {
        unit.ok_or_else(|| UnitError::syntax(self.expr, "量纲指数超出范围 [-128, 127]"))
    }

    fn parse_expr(&mut self) -> UnitResult<Unit> {
        let mut unit = self.parse_factor()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    let rhs = self.parse_factor()?;
                    unit = self.within_range(unit.checked_mul(&rhs))?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    let rhs = self.parse_factor()?;
                    unit = self.within_range(unit.checked_div(&rhs))?;
                }
                // 隐式乘法
                Some(Token::Ident(_))
                | Some(Token::LParen)
                | Some(Token::Int {
                    attached: false, ..
                }) => {
                    let rhs = self.parse_factor()?;
                    unit = self.within_range(unit.checked_mul(&rhs))?;
                }
                _ => break,
            }
        }
        Ok(unit)
    }

    fn parse_factor(&mut self) -> UnitResult<Unit> {
        let base = self.parse_atom()?;
        match self.peek() {
            Some(Token::Caret) => {
                self.pos += 1;
                match self.next() {
                    Some(Token::Int { value, .. }) => self.within_range(base.checked_powi(value)),
                    _ => Err(UnitError::syntax(self.expr, "幂运算符后缺少整数指数")),
                }
            }
            Some(&Token::Int {
                value,
                attached: true,
            }) => {
                self.pos += 1;
                self.within_range(base.checked_powi(value))
            }
            _ => Ok(base),
        }
    }

    fn parse_atom(&mut self) -> UnitResult<Unit> {
        match self.next() {
            Some(Token::Ident(name)) => lookup(&name),
            Some(Token::LParen) => {
                let unit = self.parse_expr()?;
                match self.next() {
                    Some(Token::RParen) => Ok(unit),
                    _ => Err(UnitError::syntax(self.expr, "缺少右括号")),
                }
            }
            Some(Token::Int { value, .. }) => Ok(Unit::scalar(value as f64)),
            Some(other) => Err(UnitError::syntax(
                self.expr,
                format!("意外的符号 {other:?}"),
            )),
            None => Err(UnitError::syntax(self.expr, "表达式意外结束")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-12 * b.abs().max(1.0), "{a} != {b}");
    }

    #[test]
    fn test_prefixed_units() {
        assert_close(Unit::parse("ms").unwrap().scale(), 1e-3);
        assert_close(Unit::parse("km").unwrap().scale(), 1e5);
        assert_close(Unit::parse("Mm").unwrap().scale(), 1e8);
        assert_close(Unit::parse("MK").unwrap().scale(), 1e6);
        assert_eq!(Unit::parse("cm").unwrap().scale(), 1.0);
        assert_eq!(Unit::parse("MK").unwrap().dimension(), Dimension::TEMPERATURE);
    }

    #[test]
    fn test_named_units_take_precedence_over_prefixes() {
        // h 是小时而不是百
        assert_eq!(Unit::parse("h").unwrap().dimension(), Dimension::TIME);
        assert_close(Unit::parse("h").unwrap().scale(), 3600.0);
        assert_close(Unit::parse("min").unwrap().scale(), 60.0);
        assert_close(Unit::parse("day").unwrap().scale(), 86_400.0);
    }

    #[test]
    fn test_heating_rate_spellings() {
        let expected = Unit::heating_rate();
        for expr in [
            "erg / (cm3 s)",
            "erg/cm^3/s",
            "erg cm-3 s-1",
            "erg cm**-3 s**-1",
            "erg*cm^-3*s^-1",
        ] {
            let unit = Unit::parse(expr).unwrap();
            assert_eq!(unit.dimension(), expected.dimension(), "{expr}");
            assert_close(unit.scale(), 1.0);
        }
        // J m^-3 s^-1 = 1e7 erg / 1e6 cm^3 / s
        let si = Unit::parse("J m-3 s-1").unwrap();
        assert_close(si.conversion_factor(&expected).unwrap(), 10.0);
    }

    #[test]
    fn test_number_density() {
        let unit = Unit::parse("cm^-3").unwrap();
        assert!(unit.is_convertible_to(&Unit::per_cubic_centimeter()));
        let per_m3 = Unit::parse("1/m3").unwrap();
        assert_close(
            per_m3.conversion_factor(&Unit::per_cubic_centimeter()).unwrap(),
            1e-6,
        );
    }

    #[test]
    fn test_empty_is_dimensionless() {
        assert!(Unit::parse("").unwrap().is_dimensionless());
        assert!(Unit::parse("  ").unwrap().is_dimensionless());
    }

    #[test]
    fn test_mismatch() {
        let err = Unit::parse("cm")
            .unwrap()
            .conversion_factor(&Unit::second())
            .unwrap_err();
        assert!(matches!(err, UnitError::Mismatch { .. }));
        assert!(err.to_string().contains("cm"));
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(Unit::parse("furlong"), Err(UnitError::UnknownUnit(_))));
        assert!(matches!(Unit::parse("cm^"), Err(UnitError::Syntax { .. })));
        assert!(matches!(Unit::parse("(cm s"), Err(UnitError::Syntax { .. })));
        assert!(matches!(Unit::parse("cm # s"), Err(UnitError::Syntax { .. })));
    }

    #[test]
    fn test_exponent_overflow() {
        for expr in ["(cm^100)^2", "cm^200", "cm^253", "cm^100 cm^100", "cm^-100 / cm^100"] {
            assert!(
                matches!(Unit::parse(expr), Err(UnitError::Syntax { .. })),
                "{expr}"
            );
        }
        assert_eq!(
            Unit::parse("cm^127").unwrap().dimension(),
            Dimension::new(127, 0, 0, 0)
        );
    }

    #[test]
    fn test_serde_as_string() {
        let unit: Unit = serde_json::from_str("\"erg / (cm3 s)\"").unwrap();
        assert_eq!(unit.expr(), "erg / (cm3 s)");
        assert_eq!(serde_json::to_string(&unit).unwrap(), "\"erg / (cm3 s)\"");
        assert!(serde_json::from_str::<Unit>("\"parsec_ish\"").is_err());
    }
}
