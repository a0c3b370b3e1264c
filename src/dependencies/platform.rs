use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::dependencies::error::DependencyError;

/// IDE products the platform can be resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlatformType {
    AndroidStudio,
    CLion,
    Gateway,
    GoLand,
    IntellijIdeaCommunity,
    IntellijIdeaUltimate,
    PhpStorm,
    PyCharmCommunity,
    PyCharmProfessional,
    Rider,
}

impl PlatformType {
    pub const ALL: [PlatformType; 10] = [
        PlatformType::AndroidStudio,
        PlatformType::CLion,
        PlatformType::Gateway,
        PlatformType::GoLand,
        PlatformType::IntellijIdeaCommunity,
        PlatformType::IntellijIdeaUltimate,
        PlatformType::PhpStorm,
        PlatformType::PyCharmCommunity,
        PlatformType::PyCharmProfessional,
        PlatformType::Rider,
    ];

    /// Two-letter product code as found in `product-info.json`
    pub fn code(&self) -> &'static str {
        match self {
            PlatformType::AndroidStudio => "AI",
            PlatformType::CLion => "CL",
            PlatformType::Gateway => "GW",
            PlatformType::GoLand => "GO",
            PlatformType::IntellijIdeaCommunity => "IC",
            PlatformType::IntellijIdeaUltimate => "IU",
            PlatformType::PhpStorm => "PS",
            PlatformType::PyCharmCommunity => "PC",
            PlatformType::PyCharmProfessional => "PY",
            PlatformType::Rider => "RD",
        }
    }

    pub fn group_id(&self) -> &'static str {
        match self {
            PlatformType::AndroidStudio => "com.google.android.studio",
            PlatformType::CLion => "com.jetbrains.intellij.clion",
            PlatformType::Gateway => "com.jetbrains.gateway",
            PlatformType::GoLand => "com.jetbrains.intellij.goland",
            PlatformType::IntellijIdeaCommunity | PlatformType::IntellijIdeaUltimate => {
                "com.jetbrains.intellij.idea"
            }
            PlatformType::PhpStorm => "com.jetbrains.intellij.phpstorm",
            PlatformType::PyCharmCommunity | PlatformType::PyCharmProfessional => {
                "com.jetbrains.intellij.pycharm"
            }
            PlatformType::Rider => "com.jetbrains.intellij.rider",
        }
    }

    pub fn artifact_id(&self) -> &'static str {
        match self {
            PlatformType::AndroidStudio => "android-studio",
            PlatformType::CLion => "clion",
            PlatformType::Gateway => "JetBrainsGateway",
            PlatformType::GoLand => "goland",
            PlatformType::IntellijIdeaCommunity => "ideaIC",
            PlatformType::IntellijIdeaUltimate => "ideaIU",
            PlatformType::PhpStorm => "phpstorm",
            PlatformType::PyCharmCommunity => "pycharmPC",
            PlatformType::PyCharmProfessional => "pycharmPY",
            PlatformType::Rider => "riderRD",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, DependencyError> {
        Self::ALL
            .into_iter()
            .find(|platform_type| platform_type.code() == code)
            .ok_or_else(|| DependencyError::UnknownPlatformType(code.to_string()))
    }
}

impl FromStr for PlatformType {
    type Err = DependencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
