// crates/hd_configure/src/configure.rs

//! Configure - 配置到 HYDRAD 产物的渲染器
//!
//! 每次读取都从当前配置重新渲染，不做缓存；调用方可以在两次读取之间
//! 修改 `config`。在冻结生成时间的情况下，相同配置的重复读取逐字节相同。

use chrono::{DateTime, Utc};
use hd_config::{ConfigResult, HydradConfig};
use tracing::debug;

use crate::artifact::Artifact;
use crate::templates::radiation::Ionization;
use crate::templates::{collisions, heating, hydrad, initial_conditions, poly_fit, radiation};

/// 生成时间格式
pub const DATE_FORMAT: &str = "%Y-%m-%d_%H.%M.%S UTC";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GenerationDate {
    /// 构造时固定
    Frozen(DateTime<Utc>),
    /// 每次读取时取当前时间
    Live,
}

/// HYDRAD 产物渲染器
#[derive(Debug, Clone)]
pub struct Configure {
    /// 配置
    pub config: HydradConfig,
    date: GenerationDate,
}

impl Configure {
    /// 创建渲染器
    ///
    /// `freeze_date` 为 `true` 时生成时间固定为当前时刻，
    /// 否则每次读取产物时重新取时间。
    pub fn new(config: HydradConfig, freeze_date: bool) -> Self {
        let date = if freeze_date {
            GenerationDate::Frozen(Utc::now())
        } else {
            GenerationDate::Live
        };
        Self { config, date }
    }

    /// 使用给定的生成时间
    pub fn with_date(config: HydradConfig, date: DateTime<Utc>) -> Self {
        Self {
            config,
            date: GenerationDate::Frozen(date),
        }
    }

    /// 生成时间是否固定
    pub fn is_frozen(&self) -> bool {
        matches!(self.date, GenerationDate::Frozen(_))
    }

    /// 生成时间
    pub fn date(&self) -> String {
        let at = match self.date {
            GenerationDate::Frozen(at) => at,
            GenerationDate::Live => Utc::now(),
        };
        at.format(DATE_FORMAT).to_string()
    }

    /// 固定当前生成时间的副本，用于让一组产物共享同一时间
    pub fn snapshot(&self) -> Configure {
        match self.date {
            GenerationDate::Frozen(_) => self.clone(),
            GenerationDate::Live => Self::new(self.config.clone(), true),
        }
    }

    /// 按名称渲染产物；可选产物在配置未给出数据时返回 `None`
    pub fn render(&self, artifact: Artifact) -> ConfigResult<Option<String>> {
        match artifact {
            Artifact::CollisionsHeader => self.collisions_header().map(Some),
            Artifact::HydradHeader => self.hydrad_header().map(Some),
            Artifact::HydradCfg => self.hydrad_cfg().map(Some),
            Artifact::HeatingHeader => self.heating_header().map(Some),
            Artifact::HeatingCfg => self.heating_cfg().map(Some),
            Artifact::RadiationHeader => self.radiation_header().map(Some),
            Artifact::RadiationEquilibriumCfg => self.radiation_equilibrium_cfg().map(Some),
            Artifact::RadiationNonequilibriumCfg => self.radiation_nonequilibrium_cfg().map(Some),
            Artifact::InitialConditionsHeader => self.initial_conditions_header().map(Some),
            Artifact::InitialConditionsCfg => self.initial_conditions_cfg().map(Some),
            Artifact::PolyFitGravity => self.poly_fit_gravity(),
            Artifact::PolyFitMagneticField => self.poly_fit_magnetic_field(),
        }
    }

    /// `HYDRAD/source/collisions.h`
    pub fn collisions_header(&self) -> ConfigResult<String> {
        debug!("渲染 {}", Artifact::CollisionsHeader);
        collisions::header(&self.config, &self.date())
    }

    /// `Heating_Model/config/heating_model.cfg`
    pub fn heating_cfg(&self) -> ConfigResult<String> {
        debug!(
            "渲染 {} ({} 个加热事件)",
            Artifact::HeatingCfg,
            self.config.heating.events.len()
        );
        heating::config_file(&self.config, &self.date())
    }

    /// `Heating_Model/source/config.h`
    pub fn heating_header(&self) -> ConfigResult<String> {
        debug!("渲染 {}", Artifact::HeatingHeader);
        heating::header(&self.config, &self.date())
    }

    /// `HYDRAD/config/hydrad.cfg`
    pub fn hydrad_cfg(&self) -> ConfigResult<String> {
        debug!("渲染 {}", Artifact::HydradCfg);
        hydrad::config_file(&self.config, &self.date())
    }

    /// `HYDRAD/source/config.h`
    pub fn hydrad_header(&self) -> ConfigResult<String> {
        debug!("渲染 {}", Artifact::HydradHeader);
        hydrad::header(&self.config, &self.date())
    }

    /// `Initial_Conditions/config/initial_conditions.cfg`
    pub fn initial_conditions_cfg(&self) -> ConfigResult<String> {
        debug!("渲染 {}", Artifact::InitialConditionsCfg);
        initial_conditions::config_file(&self.config, &self.date())
    }

    /// [`initial_conditions_cfg`](Self::initial_conditions_cfg) 的兼容拼写
    pub fn intial_conditions_cfg(&self) -> ConfigResult<String> {
        self.initial_conditions_cfg()
    }

    /// `Initial_Conditions/source/config.h`
    pub fn initial_conditions_header(&self) -> ConfigResult<String> {
        debug!("渲染 {}", Artifact::InitialConditionsHeader);
        initial_conditions::header(&self.config, &self.date())
    }

    /// `Radiation_Model/source/config.h`
    pub fn radiation_header(&self) -> ConfigResult<String> {
        debug!("渲染 {}", Artifact::RadiationHeader);
        radiation::header(&self.config, &self.date())
    }

    /// `Radiation_Model/config/elements_eq.cfg`，总是包含氢和氦
    pub fn radiation_equilibrium_cfg(&self) -> ConfigResult<String> {
        debug!("渲染 {}", Artifact::RadiationEquilibriumCfg);
        radiation::elements_file(&self.config, &self.date(), Ionization::Equilibrium)
    }

    /// `Radiation_Model/config/elements_neq.cfg`
    pub fn radiation_nonequilibrium_cfg(&self) -> ConfigResult<String> {
        debug!("渲染 {}", Artifact::RadiationNonequilibriumCfg);
        radiation::elements_file(&self.config, &self.date(), Ionization::Nonequilibrium)
    }

    /// `poly_fit.gravity`，未配置 `general.poly_fit_gravity` 时为 `None`
    pub fn poly_fit_gravity(&self) -> ConfigResult<Option<String>> {
        debug!("渲染 {}", Artifact::PolyFitGravity);
        let date = self.date();
        Ok(self
            .config
            .general
            .poly_fit_gravity
            .as_deref()
            .map(|c| poly_fit::data_file(c, &date)))
    }

    /// `poly_fit.magnetic_field`，未配置 `general.poly_fit_magnetic_field` 时为 `None`
    pub fn poly_fit_magnetic_field(&self) -> ConfigResult<Option<String>> {
        debug!("渲染 {}", Artifact::PolyFitMagneticField);
        let date = self.date();
        Ok(self
            .config
            .general
            .poly_fit_magnetic_field
            .as_deref()
            .map(|c| poly_fit::data_file(c, &date)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_frozen_date_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        let configure = Configure::with_date(HydradConfig::default(), at);
        assert!(configure.is_frozen());
        assert_eq!(configure.date(), "2024-03-05_07.08.09 UTC");
    }

    #[test]
    fn test_live_date_snapshot_is_frozen() {
        let configure = Configure::new(HydradConfig::default(), false);
        assert!(!configure.is_frozen());
        let snapshot = configure.snapshot();
        assert!(snapshot.is_frozen());
        assert_eq!(snapshot.date(), snapshot.date());
    }

    #[test]
    fn test_new_frozen_keeps_date() {
        let configure = Configure::new(HydradConfig::default(), true);
        let first = configure.date();
        assert_eq!(configure.date(), first);
        assert!(first.ends_with(" UTC"));
    }

    #[test]
    fn test_poly_fit_absent() {
        let configure = Configure::new(HydradConfig::default(), true);
        assert_eq!(configure.poly_fit_gravity().unwrap(), None);
        assert_eq!(configure.render(Artifact::PolyFitMagneticField).unwrap(), None);
    }

    #[test]
    fn test_poly_fit_file() {
        let mut config = HydradConfig::default();
        config.general.poly_fit_gravity = Some(vec![1.0, -2.5e-9, 3.0e-18]);
        let at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let configure = Configure::with_date(config, at);
        assert_eq!(
            configure.poly_fit_gravity().unwrap().unwrap(),
            "3\n1.0\n-2.5e-09\n3e-18\n\nConfiguration file generated by hydrad_tools on 2020-01-01_00.00.00 UTC"
        );
    }
}
