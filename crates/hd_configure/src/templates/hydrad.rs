// crates/hd_configure/src/templates/hydrad.rs

use hd_config::{format_float, ConfigResult, HydradConfig, Section, Unit};

use super::{HEATING_CONFIG_H, RADIATION_CONFIG_H};
use crate::artifact::{POLY_FIT_GRAVITY_FILE, POLY_FIT_MAGNETIC_FIELD_FILE};
use crate::render::Lines;

/// 未指定 `initial_amr_file` 时使用的初始条件
pub const DEFAULT_AMR_FILE: &str = "Initial_Conditions/profiles/initial.amr";

/// `HYDRAD/config/hydrad.cfg`
pub(crate) fn config_file(config: &HydradConfig, date: &str) -> ConfigResult<String> {
    let general = &config.general;
    let total_time = required!(general, total_time, Unit::second())?;
    let output_interval = required!(general, output_interval, Unit::second())?;

    let mut lines = Lines::new();
    lines.line(general.initial_amr_file.as_deref().unwrap_or(DEFAULT_AMR_FILE));
    if general.poly_fit_gravity.is_some() {
        lines.line(POLY_FIT_GRAVITY_FILE);
    }
    if general.poly_fit_magnetic_field.is_some() {
        lines.line(POLY_FIT_MAGNETIC_FIELD_FILE);
    }
    lines
        .line(format_float(total_time))
        .line(format_float(output_interval))
        .blank()
        .notice(date);
    Ok(lines.finish())
}

/// `HYDRAD/source/config.h`
pub(crate) fn header(config: &HydradConfig, date: &str) -> ConfigResult<String> {
    let general = &config.general;
    let solver = &config.solver;
    let grid = &config.grid;
    let kelvin = Unit::kelvin();

    let output_every = *required!(general, output_every_n_time_steps)?;
    let timestep_limit = general
        .heat_flux_timestep_limit
        .as_ref()
        .map(|_| required!(general, heat_flux_timestep_limit, Unit::second()))
        .transpose()?;

    let safety_radiation = *required!(solver, safety_radiation)?;
    let safety_conduction = *required!(solver, safety_conduction)?;
    let safety_advection = *required!(solver, safety_advection)?;
    let safety_viscosity = *required!(solver, safety_viscosity)?;
    let viscous_timescale = *required!(solver, relative_viscous_timescale)?;
    let increase_limit = required!(solver, timestep_increase_limit)?.one_plus();
    let min_radiation_temperature = required!(solver, minimum_radiation_temperature, kelvin)?;
    let zero_over_interval = required!(solver, zero_over_temperature_interval, kelvin)?;
    let min_temperature = required!(solver, minimum_temperature, kelvin)?;

    let max_refinement = *required!(grid, maximum_refinement_level)?;
    let min_frac_diff = *required!(grid, minimum_fractional_difference)?;
    let max_frac_diff = *required!(grid, maximum_fractional_difference)?;

    let mut lines = Lines::header("hydrodynamic model", date);
    lines.blank();
    lines.section("Output", |s| {
        s.flag("WRITE_FILE_PHYSICAL", general.write_file_physical)
            .flag("WRITE_FILE_ION_POPULATIONS", general.write_file_ion_populations)
            .flag("WRITE_FILE_HSTATE", general.write_file_hydrogen_level_populations)
            .flag("WRITE_FILE_SCALES", general.write_file_timescales)
            .flag("WRITE_FILE_TERMS", general.write_file_equation_terms)
            .define("OUTPUT_EVERY_N_TIME_STEPS", output_every);
        Ok(())
    })?;
    lines.blank();
    lines.section("Physics", |s| {
        s.include(HEATING_CONFIG_H)
            .include(RADIATION_CONFIG_H)
            .slot(
                general
                    .heat_flux_limiting_coefficient
                    .map(|v| format!("#define HEAT_FLUX_LIMITING_COEFFICIENT {v}")),
            )
            .slot(timestep_limit.map(|v| format!("#define TIME_STEP_LIMIT {}", format_float(v))))
            .flag("USE_KINETIC_MODEL", general.use_kinetic_model)
            .include("collisions.h")
            .flag(
                "USE_POLY_FIT_TO_MAGNETIC_FIELD",
                general.poly_fit_magnetic_field.is_some(),
            );
        Ok(())
    })?;
    lines.blank();
    lines.section("Solver", |s| {
        s.define("SAFETY_RADIATION", safety_radiation)
            .define("SAFETY_CONDUCTION", safety_conduction)
            .define("SAFETY_ADVECTION", safety_advection)
            .define("SAFETY_VISCOSITY", safety_viscosity)
            .define("RELATIVE_VISCOUS_TIME_SCALE", viscous_timescale)
            .define("TIME_STEP_INCREASE_LIMIT", increase_limit)
            .define(
                "MINIMUM_RADIATION_TEMPERATURE",
                format_float(min_radiation_temperature),
            )
            .define(
                "ZERO_OVER_TEMPERATURE_INTERVAL",
                format_float(zero_over_interval),
            )
            .define("MINIMUM_TEMPERATURE", format_float(min_temperature));
        Ok(())
    })?;
    lines.blank();
    lines.section("Grid", |s| {
        s.define("MAX_REFINEMENT_LEVEL", max_refinement)
            .flag("ADAPT", grid.adapt)
            .slot(
                grid.adapt_every_n_time_steps
                    .map(|n| format!("#define ADAPT_EVERY_N_TIME_STEPS {n}")),
            )
            .flag("REFINE_ON_DENSITY", grid.refine_on_density)
            .flag("REFINE_ON_ELECTRON_ENERGY", grid.refine_on_electron_energy)
            .flag("REFINE_ON_HYDROGEN_ENERGY", grid.refine_on_hydrogen_energy)
            .define("MIN_FRAC_DIFF", min_frac_diff)
            .define("MAX_FRAC_DIFF", max_frac_diff)
            .flag("LINEAR_RESTRICTION", grid.linear_restriction)
            .flag("ENFORCE_CONSERVATION", grid.enforce_conservation);
        Ok(())
    })?;
    Ok(lines.finish())
}
