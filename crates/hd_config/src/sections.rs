// crates/hd_config/src/sections.rs

//! general / initial_conditions / grid / solver / radiation 配置段
//!
//! 布尔开关缺省为 `false`，列表缺省为空，其余数值项缺省为 `None`
//! （读取时报告 `MissingOption`）。

use hd_units::Quantity;
use serde::{Deserialize, Serialize};

use crate::element::ElementRef;
use crate::number::Number;
use crate::section::Section;

/// 通用配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 最短碰撞耦合时间尺度 [时间]
    pub minimum_collisional_coupling_timescale: Option<Quantity>,
    /// 强制单流体
    pub force_single_fluid: bool,
    /// 初始 AMR 文件路径
    pub initial_amr_file: Option<String>,
    /// 重力多项式拟合系数（低阶在前）
    pub poly_fit_gravity: Option<Vec<f64>>,
    /// 磁场多项式拟合系数（低阶在前）
    pub poly_fit_magnetic_field: Option<Vec<f64>>,
    /// 模拟总时长 [时间]
    pub total_time: Option<Quantity>,
    /// 输出间隔 [时间]
    pub output_interval: Option<Quantity>,
    /// 输出物理量文件
    pub write_file_physical: bool,
    /// 输出离子布居文件
    pub write_file_ion_populations: bool,
    /// 输出氢能级布居文件
    pub write_file_hydrogen_level_populations: bool,
    /// 输出时间尺度文件
    pub write_file_timescales: bool,
    /// 输出方程各项文件
    pub write_file_equation_terms: bool,
    /// 每 N 步输出一次
    pub output_every_n_time_steps: Option<Number>,
    /// 热流限制系数
    pub heat_flux_limiting_coefficient: Option<Number>,
    /// 热流时间步限制 [时间]
    pub heat_flux_timestep_limit: Option<Quantity>,
    /// 使用动理学模型
    pub use_kinetic_model: bool,
}

impl Section for GeneralConfig {
    const NAME: &'static str = "general";
}

/// 初始条件（流体静力学模型）配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConditionsConfig {
    /// 输出剖面路径
    pub profile_path: Option<String>,
    /// 足点密度 [cm^-3]
    pub footpoint_density: Option<Quantity>,
    /// 足点高度 [长度]
    pub footpoint_height: Option<Quantity>,
    /// 足点温度 [温度]
    pub footpoint_temperature: Option<Quantity>,
    /// 加热位置 [长度]
    pub heating_location: Option<Quantity>,
    /// 加热标高 [长度]
    pub heating_scale_height: Option<Quantity>,
    /// 等温模式
    pub isothermal: bool,
    /// 加热率搜索下界 [erg cm^-3 s^-1]
    pub heating_range_lower_bound: Option<Quantity>,
    /// 加热率搜索上界 [erg cm^-3 s^-1]
    pub heating_range_upper_bound: Option<Quantity>,
    /// 搜索步长
    pub heating_range_step_size: Option<Number>,
    /// 细调次数
    pub heating_range_fine_tuning: Option<Number>,
}

impl Section for InitialConditionsConfig {
    const NAME: &'static str = "initial_conditions";
}

/// 网格配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// 最大加密层级
    pub maximum_refinement_level: Option<Number>,
    /// 自适应网格
    pub adapt: bool,
    /// 每 N 步自适应一次
    pub adapt_every_n_time_steps: Option<Number>,
    /// 按密度加密
    pub refine_on_density: bool,
    /// 按电子能量加密
    pub refine_on_electron_energy: bool,
    /// 按氢能量加密
    pub refine_on_hydrogen_energy: bool,
    /// 最小相对差
    pub minimum_fractional_difference: Option<Number>,
    /// 最大相对差
    pub maximum_fractional_difference: Option<Number>,
    /// 线性限制
    pub linear_restriction: bool,
    /// 强制守恒
    pub enforce_conservation: bool,
    /// 最少单元数
    pub minimum_cells: Option<Number>,
    /// 最多单元数
    pub maximum_cells: Option<Number>,
    /// 最小网格间距 [长度]
    pub minimum_delta_s: Option<Quantity>,
    /// 相邻单元最大变化（输出为 `1 + 值`）
    pub maximum_variation: Option<Number>,
}

impl Section for GridConfig {
    const NAME: &'static str = "grid";
}

/// 求解器配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// 辐射安全系数
    pub safety_radiation: Option<Number>,
    /// 热传导安全系数
    pub safety_conduction: Option<Number>,
    /// 对流安全系数
    pub safety_advection: Option<Number>,
    /// 粘性安全系数
    pub safety_viscosity: Option<Number>,
    /// 相对粘性时间尺度
    pub relative_viscous_timescale: Option<Number>,
    /// 时间步增长上限（输出为 `1 + 值`）
    pub timestep_increase_limit: Option<Number>,
    /// 最低辐射温度 [温度]
    pub minimum_radiation_temperature: Option<Quantity>,
    /// 零值温度区间 [温度]
    pub zero_over_temperature_interval: Option<Quantity>,
    /// 最低温度 [温度]
    pub minimum_temperature: Option<Quantity>,
    /// 初始条件求解器容差
    pub epsilon: Option<Number>,
}

impl Section for SolverConfig {
    const NAME: &'static str = "solver";
}

/// 辐射模型配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiationConfig {
    /// 使用幂律辐射损失（为 false 时启用非平衡辐射）
    pub use_power_law_radiative_losses: bool,
    /// 密度相关速率
    pub density_dependent_rates: bool,
    /// 光学厚辐射
    pub optically_thick_radiation: bool,
    /// 非局部热动平衡色球
    pub nlte_chromosphere: bool,
    /// 最大光学薄密度 [cm^-3]
    pub maximum_optically_thin_density: Option<Quantity>,
    /// 原子过程安全系数
    pub safety_atomic: Option<Number>,
    /// 离子丰度截断
    pub cutoff_ion_fraction: Option<Number>,
    /// 密度求解容差
    pub epsilon_d: Option<Number>,
    /// 速率求解容差
    pub epsilon_r: Option<Number>,
    /// 温度范围数据集
    pub ranges_dataset: Option<String>,
    /// 发射率数据集
    pub emissivity_dataset: Option<String>,
    /// 丰度数据集
    pub abundance_dataset: Option<String>,
    /// 速率数据集
    pub rates_dataset: Option<String>,
    /// 平衡电离元素
    pub elements_equilibrium: Vec<ElementRef>,
    /// 非平衡电离元素
    pub elements_nonequilibrium: Vec<ElementRef>,
}

impl Section for RadiationConfig {
    const NAME: &'static str = "radiation";
}
