// crates/hd_configure/src/templates/radiation.rs

use hd_config::{format_float, ConfigResult, ElementRef, HydradConfig, Section, Unit};

use crate::elements::{resolve_unique, EQUILIBRIUM_BASE};
use crate::render::Lines;

/// 电离平衡类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Ionization {
    Equilibrium,
    Nonequilibrium,
}

/// `Radiation_Model/source/config.h`
pub(crate) fn header(config: &HydradConfig, date: &str) -> ConfigResult<String> {
    let radiation = &config.radiation;
    let max_thin_density = required!(
        radiation,
        maximum_optically_thin_density,
        Unit::per_cubic_centimeter()
    )?;
    let safety_atomic = *required!(radiation, safety_atomic)?;
    let cutoff_ion_fraction = *required!(radiation, cutoff_ion_fraction)?;
    let epsilon_d = *required!(radiation, epsilon_d)?;
    let epsilon_r = *required!(radiation, epsilon_r)?;

    // 幂律辐射损失与非平衡电离求解互斥
    let losses = if radiation.use_power_law_radiative_losses {
        "#define USE_POWER_LAW_RADIATIVE_LOSSES"
    } else {
        "#define NON_EQUILIBRIUM_RADIATION\n#define DECOUPLE_IONIZATION_STATE_SOLVER"
    };

    let mut lines = Lines::header("radiation model", date);
    lines.blank();
    lines.section("Physics", |s| {
        s.line(losses)
            .flag("DENSITY_DEPENDENT_RATES", radiation.density_dependent_rates)
            .flag("OPTICALLY_THICK_RADIATION", radiation.optically_thick_radiation)
            .flag("NLTE_CHROMOSPHERE", radiation.nlte_chromosphere)
            .include("../../HYDRAD/source/collisions.h");
        Ok(())
    })?;
    lines.blank();
    lines.section("Solver", |s| {
        s.define("MAX_OPTICALLY_THIN_DENSITY", format_float(max_thin_density))
            .define("SAFETY_ATOMIC", safety_atomic)
            .define("CUTOFF_ION_FRACTION", cutoff_ion_fraction)
            .define("EPSILON_D", epsilon_d)
            .define("EPSILON_R", epsilon_r);
        Ok(())
    })?;
    Ok(lines.finish())
}

/// `Radiation_Model/config/elements_eq.cfg` 与 `elements_neq.cfg`
pub(crate) fn elements_file(
    config: &HydradConfig,
    date: &str,
    ionization: Ionization,
) -> ConfigResult<String> {
    let radiation = &config.radiation;
    let ranges = required!(radiation, ranges_dataset)?;
    let emissivity = required!(radiation, emissivity_dataset)?;
    let abundance = required!(radiation, abundance_dataset)?;
    let rates = required!(radiation, rates_dataset)?;

    let (base, configured): (&[u32], &[ElementRef]) = match ionization {
        Ionization::Equilibrium => (
            EQUILIBRIUM_BASE.as_slice(),
            radiation.elements_equilibrium.as_slice(),
        ),
        Ionization::Nonequilibrium => (&[], radiation.elements_nonequilibrium.as_slice()),
    };
    let elements = resolve_unique(base, configured)?;

    let mut lines = Lines::new();
    lines
        .line(ranges.as_str())
        .line(emissivity.as_str())
        .line(abundance.as_str())
        .line(rates.as_str())
        .blank()
        .line(elements.len().to_string())
        .blank();
    for element in &elements {
        lines.line(format!("{} {}", element.lowercase_symbol(), element.number));
    }
    lines.blank().notice(date);
    Ok(lines.finish())
}
