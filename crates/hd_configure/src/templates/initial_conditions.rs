// crates/hd_configure/src/templates/initial_conditions.rs

use hd_config::{
    format_float, ConfigError, ConfigResult, HydradConfig, InitialConditionsConfig, Section, Unit,
};

use super::RADIATION_CONFIG_H;
use crate::artifact::POLY_FIT_GRAVITY_FILE;
use crate::render::Lines;

/// 未指定 `profile_path` 时的输出剖面路径
pub const DEFAULT_PROFILE_PATH: &str = "Initial_Conditions/profiles/initial";

/// `Initial_Conditions/config/initial_conditions.cfg`
pub(crate) fn config_file(config: &HydradConfig, date: &str) -> ConfigResult<String> {
    let ic = &config.initial_conditions;
    let cm = Unit::centimeter();

    let density = required!(ic, footpoint_density, Unit::per_cubic_centimeter())?;
    let height = required!(ic, footpoint_height, cm)?;
    let temperature = required!(ic, footpoint_temperature, Unit::kelvin())?;
    let location = required!(ic, heating_location, cm)?;
    let scale_height = required!(ic, heating_scale_height, cm)?;

    // 等温模型不搜索加热率
    let heating_range = if ic.isothermal {
        ["0.0", "0.0", "1.0", "1.0"].map(String::from)
    } else {
        let rate = Unit::heating_rate();
        let lower = required!(ic, heating_range_lower_bound, rate)?;
        let upper = required!(ic, heating_range_upper_bound, rate)?;
        [
            log10_bound(lower, "heating_range_lower_bound")?,
            log10_bound(upper, "heating_range_upper_bound")?,
            required!(ic, heating_range_step_size)?.to_string(),
            required!(ic, heating_range_fine_tuning)?.to_string(),
        ]
    };

    let mut lines = Lines::new();
    lines
        .line(ic.profile_path.as_deref().unwrap_or(DEFAULT_PROFILE_PATH))
        .blank()
        .line(format_float(density))
        .line(format_float(height))
        .blank()
        .line(format_float(temperature))
        .blank()
        .line(format_float(location))
        .line(format_float(scale_height))
        .blank();
    for value in heating_range {
        lines.line(value);
    }
    lines.blank().notice(date);
    Ok(lines.finish())
}

fn log10_bound(rate: f64, key: &str) -> ConfigResult<String> {
    if rate > 0.0 {
        Ok(format_float(rate.log10()))
    } else {
        Err(ConfigError::InvalidValue {
            key: format!("{}.{key}", InitialConditionsConfig::NAME),
            value: format_float(rate),
            reason: "加热率搜索范围的边界必须为正".to_string(),
        })
    }
}

/// `Initial_Conditions/source/config.h`
pub(crate) fn header(config: &HydradConfig, date: &str) -> ConfigResult<String> {
    let ic = &config.initial_conditions;
    let solver = &config.solver;
    let grid = &config.grid;

    let epsilon = *required!(solver, epsilon)?;
    let min_cells = *required!(grid, minimum_cells)?;
    let max_cells = *required!(grid, maximum_cells)?;
    let max_refinement = *required!(grid, maximum_refinement_level)?;
    let min_ds = required!(grid, minimum_delta_s, Unit::centimeter())?;
    let max_variation = required!(grid, maximum_variation)?.one_plus();

    let poly_fit_gravity = (ic.isothermal && config.general.poly_fit_gravity.is_some()).then(|| {
        format!(
            "#define USE_POLY_FIT_TO_GRAVITY\n#define POLY_FIT_TO_GRAVITY_FILE \"{POLY_FIT_GRAVITY_FILE}\""
        )
    });

    let mut lines = Lines::header("hydrostatic model", date);
    lines.blank();
    lines.section("Output", |s| {
        s.blank();
        Ok(())
    })?;
    lines.blank();
    lines.section("Physics", |s| {
        s.include(RADIATION_CONFIG_H)
            .flag("ISOTHERMAL", ic.isothermal)
            .slot(poly_fit_gravity);
        Ok(())
    })?;
    lines.blank();
    lines.section("Solver", |s| {
        s.define("EPSILON", epsilon);
        Ok(())
    })?;
    lines.blank();
    lines.section("Grid", |s| {
        s.flag("ADAPT", grid.adapt)
            .define("MIN_CELLS", min_cells)
            .define("MAX_CELLS", max_cells)
            .define("MAX_REFINEMENT_LEVEL", max_refinement)
            .define("MIN_DS", format_float(min_ds))
            .define("MAX_VARIATION", max_variation);
        Ok(())
    })?;
    Ok(lines.finish())
}
