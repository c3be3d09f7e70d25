// crates/hd_configure/src/artifact.rs

//! 产物清单
//!
//! HYDRAD 目录树中由配置生成的全部文件及其相对路径。

use std::fmt;
use std::str::FromStr;

/// 重力拟合系数文件（相对 HYDRAD 根目录）
pub const POLY_FIT_GRAVITY_FILE: &str = "poly_fit.gravity";

/// 磁场拟合系数文件（相对 HYDRAD 根目录）
pub const POLY_FIT_MAGNETIC_FIELD_FILE: &str = "poly_fit.magnetic_field";

/// 生成产物
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// 碰撞耦合头文件
    CollisionsHeader,
    /// 流体力学模型头文件
    HydradHeader,
    /// 流体力学模型配置
    HydradCfg,
    /// 加热模型头文件
    HeatingHeader,
    /// 加热模型配置
    HeatingCfg,
    /// 辐射模型头文件
    RadiationHeader,
    /// 平衡电离元素配置
    RadiationEquilibriumCfg,
    /// 非平衡电离元素配置
    RadiationNonequilibriumCfg,
    /// 流体静力学模型头文件
    InitialConditionsHeader,
    /// 流体静力学模型配置
    InitialConditionsCfg,
    /// 重力拟合系数（可选）
    PolyFitGravity,
    /// 磁场拟合系数（可选）
    PolyFitMagneticField,
}

impl Artifact {
    /// 全部产物，按写出顺序
    pub const ALL: [Artifact; 12] = [
        Self::CollisionsHeader,
        Self::HydradHeader,
        Self::HydradCfg,
        Self::HeatingHeader,
        Self::HeatingCfg,
        Self::RadiationHeader,
        Self::RadiationEquilibriumCfg,
        Self::RadiationNonequilibriumCfg,
        Self::InitialConditionsHeader,
        Self::InitialConditionsCfg,
        Self::PolyFitGravity,
        Self::PolyFitMagneticField,
    ];

    /// 名称（命令行参数与日志中使用）
    pub fn name(&self) -> &'static str {
        match self {
            Self::CollisionsHeader => "collisions_header",
            Self::HydradHeader => "hydrad_header",
            Self::HydradCfg => "hydrad_cfg",
            Self::HeatingHeader => "heating_header",
            Self::HeatingCfg => "heating_cfg",
            Self::RadiationHeader => "radiation_header",
            Self::RadiationEquilibriumCfg => "radiation_equilibrium_cfg",
            Self::RadiationNonequilibriumCfg => "radiation_nonequilibrium_cfg",
            Self::InitialConditionsHeader => "initial_conditions_header",
            Self::InitialConditionsCfg => "initial_conditions_cfg",
            Self::PolyFitGravity => "poly_fit_gravity",
            Self::PolyFitMagneticField => "poly_fit_magnetic_field",
        }
    }

    /// 相对 HYDRAD 根目录的路径
    pub fn relative_path(&self) -> &'static str {
        match self {
            Self::CollisionsHeader => "HYDRAD/source/collisions.h",
            Self::HydradHeader => "HYDRAD/source/config.h",
            Self::HydradCfg => "HYDRAD/config/hydrad.cfg",
            Self::HeatingHeader => "Heating_Model/source/config.h",
            Self::HeatingCfg => "Heating_Model/config/heating_model.cfg",
            Self::RadiationHeader => "Radiation_Model/source/config.h",
            Self::RadiationEquilibriumCfg => "Radiation_Model/config/elements_eq.cfg",
            Self::RadiationNonequilibriumCfg => "Radiation_Model/config/elements_neq.cfg",
            Self::InitialConditionsHeader => "Initial_Conditions/source/config.h",
            Self::InitialConditionsCfg => "Initial_Conditions/config/initial_conditions.cfg",
            Self::PolyFitGravity => POLY_FIT_GRAVITY_FILE,
            Self::PolyFitMagneticField => POLY_FIT_MAGNETIC_FIELD_FILE,
        }
    }

    /// 只在配置给出对应数据时生成
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::PolyFitGravity | Self::PolyFitMagneticField)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 未知产物名称
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("未知产物: '{0}'")]
pub struct UnknownArtifact(pub String);

impl FromStr for Artifact {
    type Err = UnknownArtifact;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // 兼容拼写
        if s == "intial_conditions_cfg" {
            return Ok(Self::InitialConditionsCfg);
        }
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownArtifact(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for artifact in Artifact::ALL {
            assert_eq!(artifact.name().parse::<Artifact>().unwrap(), artifact);
        }
        assert_eq!(
            "intial_conditions_cfg".parse::<Artifact>().unwrap(),
            Artifact::InitialConditionsCfg
        );
        assert!("hydrad".parse::<Artifact>().is_err());
    }

    #[test]
    fn test_paths_unique() {
        let mut paths: Vec<_> = Artifact::ALL.iter().map(|a| a.relative_path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Artifact::ALL.len());
    }
}
