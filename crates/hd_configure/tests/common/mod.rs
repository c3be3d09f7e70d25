// crates/hd_configure/tests/common/mod.rs

//! 集成测试共用的配置

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use hd_config::HydradConfig;
use serde_json::json;

/// 固定的生成时间
pub fn fixed_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
}

/// `fixed_date()` 的文本形式
pub const FIXED_DATE: &str = "2024-01-02_03.04.05 UTC";

/// 最小配置：只有碰撞与加热头文件所需的项
pub fn minimal_config() -> HydradConfig {
    HydradConfig::from_json_str(
        r#"{
            "general": {
                "minimum_collisional_coupling_timescale": "0.01 s",
                "force_single_fluid": false
            },
            "initial_conditions": {},
            "grid": {},
            "solver": {},
            "radiation": {},
            "heating": {
                "background_heating": false,
                "heat_electrons": true
            }
        }"#,
    )
    .unwrap()
}

/// 所有产物都能渲染的完整配置
pub fn full_config() -> HydradConfig {
    serde_json::from_value(json!({
        "general": {
            "minimum_collisional_coupling_timescale": "0.01 s",
            "total_time": "5000 s",
            "output_interval": "10 s",
            "output_every_n_time_steps": 1000,
            "poly_fit_gravity": [-2.7e4, 0.5, 1e-9],
            "poly_fit_magnetic_field": [1.0, 2.0]
        },
        "initial_conditions": {
            "footpoint_density": "1e12 cm-3",
            "footpoint_height": "5e8 cm",
            "footpoint_temperature": "2e4 K",
            "heating_location": "45 Mm",
            "heating_scale_height": "1e300 cm",
            "isothermal": false,
            "heating_range_lower_bound": "1e-8 erg cm-3 s-1",
            "heating_range_upper_bound": "1e2 erg cm-3 s-1",
            "heating_range_step_size": 0.01,
            "heating_range_fine_tuning": 10000
        },
        "grid": {
            "maximum_refinement_level": 12,
            "adapt": true,
            "adapt_every_n_time_steps": 10,
            "minimum_fractional_difference": 0.1,
            "maximum_fractional_difference": 0.2,
            "minimum_cells": 150,
            "maximum_cells": 30000,
            "minimum_delta_s": "1 cm",
            "maximum_variation": 0.1
        },
        "solver": {
            "safety_radiation": 0.1,
            "safety_conduction": 1.0,
            "safety_advection": 1.0,
            "safety_viscosity": 1.0,
            "relative_viscous_timescale": 0.5,
            "timestep_increase_limit": 0.05,
            "minimum_radiation_temperature": "2e4 K",
            "zero_over_temperature_interval": "500 K",
            "minimum_temperature": "1e4 K",
            "epsilon": 0.01
        },
        "radiation": {
            "maximum_optically_thin_density": "1e12 cm-3",
            "safety_atomic": 1.0,
            "cutoff_ion_fraction": 1e-15,
            "epsilon_d": 0.1,
            "epsilon_r": 10.0,
            "ranges_dataset": "ranges",
            "emissivity_dataset": "chianti_v7",
            "abundance_dataset": "asplund",
            "rates_dataset": "chianti_v7",
            "elements_equilibrium": ["iron", "He", 1],
            "elements_nonequilibrium": ["O", "oxygen", 26]
        },
        "heating": {
            "background_heating": false,
            "heat_electrons": true,
            "events": [{
                "time_start": "0 s",
                "rise_duration": "100 s",
                "decay_duration": "100 s",
                "total_duration": "200 s",
                "location": "0 cm",
                "scale_height": "1e300 cm",
                "rate": "0.1 erg / (cm3 s)"
            }]
        }
    }))
    .unwrap()
}

/// 完整配置，但所有可选开关和可选 `#define` 均关闭
pub fn flags_off_config() -> HydradConfig {
    let mut config = full_config();
    config.general.poly_fit_gravity = None;
    config.general.poly_fit_magnetic_field = None;
    config.grid.adapt = false;
    config.grid.adapt_every_n_time_steps = None;
    config
}

/// 产物文本的头文件横幅
pub fn banner(subject: &str) -> String {
    format!(
        "// ****\n// *\n// * #defines for configuring the {subject}\n// *\n\
         // * (c) Dr. Stephen J. Bradshaw\n// *\n\
         // * Source code generated by hydrad_tools on {FIXED_DATE}\n// *\n// ****"
    )
}

/// 配置文件末尾的生成说明
pub fn notice() -> String {
    format!("Configuration file generated by hydrad_tools on {FIXED_DATE}")
}

/// 逐行比较两段文本，返回不同的行号
pub fn changed_lines(a: &str, b: &str) -> Vec<usize> {
    let a: Vec<_> = a.split('\n').collect();
    let b: Vec<_> = b.split('\n').collect();
    assert_eq!(a.len(), b.len(), "行数不同");
    (0..a.len()).filter(|&i| a[i] != b[i]).collect()
}
