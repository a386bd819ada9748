use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Swedish electricity bidding zone («elområde»).
#[derive(Debug, Hash, clap::ValueEnum, enumset::EnumSetType, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Zone {
    /// Luleå, northern Sweden.
    Se1,

    /// Sundsvall, north-central Sweden.
    Se2,

    /// Stockholm, central Sweden.
    Se3,

    /// Malmö, southern Sweden.
    Se4,
}

impl Zone {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Se1 => "SE1",
            Self::Se2 => "SE2",
            Self::Se3 => "SE3",
            Self::Se4 => "SE4",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Se1 => "Luleå – Norra Sverige",
            Self::Se2 => "Sundsvall – Norra Mellansverige",
            Self::Se3 => "Stockholm – Mellersta Sverige",
            Self::Se4 => "Malmö – Södra Sverige",
        }
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
