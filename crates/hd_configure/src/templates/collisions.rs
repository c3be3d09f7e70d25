// crates/hd_configure/src/templates/collisions.rs

use hd_config::{format_float, ConfigResult, HydradConfig, Section, Unit};

use crate::render::Lines;

/// `HYDRAD/source/collisions.h`
pub(crate) fn header(config: &HydradConfig, date: &str) -> ConfigResult<String> {
    let general = &config.general;
    let timescale = required!(general, minimum_collisional_coupling_timescale, Unit::second())?;

    let mut lines = Lines::header("shortest collisional coupling timescale", date);
    lines.blank();
    lines.section("Physics", |s| {
        s.define(
            "MINIMUM_COLLISIONAL_COUPLING_TIME_SCALE",
            format_float(timescale),
        )
        .flag("FORCE_SINGLE_FLUID", general.force_single_fluid);
        Ok(())
    })?;
    Ok(lines.finish())
}
