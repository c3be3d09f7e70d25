// crates/hd_configure/src/templates/poly_fit.rs

use hd_config::format_float;

use crate::render::Lines;

/// 多项式拟合系数文件：系数个数，然后每行一个系数（低阶在前）
pub(crate) fn data_file(coefficients: &[f64], date: &str) -> String {
    let mut lines = Lines::new();
    lines.line(coefficients.len().to_string());
    for c in coefficients {
        lines.line(format_float(*c));
    }
    lines.blank().notice(date);
    lines.finish()
}
