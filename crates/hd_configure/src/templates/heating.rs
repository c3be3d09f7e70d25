// crates/hd_configure/src/templates/heating.rs

use hd_config::{BackgroundHeating, ConfigResult, HydradConfig};

use super::RADIATION_CONFIG_H;
use crate::render::{join_floats, Lines};

/// `Heating_Model/config/heating_model.cfg`
pub(crate) fn config_file(config: &HydradConfig, date: &str) -> ConfigResult<String> {
    let heating = &config.heating;
    let background = match &heating.background_heating {
        BackgroundHeating::Disabled => [0.0; 3],
        BackgroundHeating::Enabled(profile) => profile.to_cgs()?,
    };
    let events = heating
        .events
        .iter()
        .enumerate()
        .map(|(i, event)| event.to_cgs(i))
        .collect::<ConfigResult<Vec<_>>>()?;

    let mut lines = Lines::new();
    lines
        .line(join_floats(&background))
        .blank()
        .line(events.len().to_string())
        .blank();
    for event in &events {
        lines.line(join_floats(event));
    }
    lines.blank().notice(date);
    Ok(lines.finish())
}

/// `Heating_Model/source/config.h`
pub(crate) fn header(config: &HydradConfig, date: &str) -> ConfigResult<String> {
    let heating = &config.heating;
    // HYDRAD: 0 = 电子, 1 = 离子
    let species = if heating.heat_electrons { 0 } else { 1 };

    let mut lines = Lines::header("heating model", date);
    lines
        .define("HEATED_SPECIES", species)
        .flag("BEAM_HEATING", heating.beam_heating)
        .flag("ALFVEN_WAVE_HEATING", heating.alfven_wave_heating)
        .include(RADIATION_CONFIG_H);
    Ok(lines.finish())
}
