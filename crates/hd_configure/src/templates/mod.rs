// crates/hd_configure/src/templates/mod.rs

//! HYDRAD 产物模板
//!
//! 每个模板是 (配置, 生成时间) 的纯函数。所有必需项在拼接任何一行之前
//! 读取完毕，出错时不产生部分输出。

/// 读取配置段中的必需项，键名取字段名
///
/// 子模块在宏定义之后声明，按文本作用域可见。
///
/// `required!(general, total_time, Unit::second())` 换算到给定单位，
/// `required!(grid, maximum_cells)` 返回原值的引用。
macro_rules! required {
    ($section:expr, $field:ident) => {
        $section.require(&$section.$field, stringify!($field))
    };
    ($section:expr, $field:ident, $unit:expr) => {
        $section.require_in(&$section.$field, stringify!($field), &$unit)
    };
}

pub(crate) mod collisions;
pub(crate) mod heating;
pub(crate) mod hydrad;
pub(crate) mod initial_conditions;
pub(crate) mod poly_fit;
pub(crate) mod radiation;

/// HYDRAD 源码中各子模型头文件的相对路径
pub(crate) const HEATING_CONFIG_H: &str = "../../Heating_Model/source/config.h";
pub(crate) const RADIATION_CONFIG_H: &str = "../../Radiation_Model/source/config.h";
