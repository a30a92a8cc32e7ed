use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Midpoint strategy used by [`crate::BinarySearch`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap_derive", derive(clap::ValueEnum))]
pub enum Mode {
    /// `(low + high) / 2`. Overflows once `low + high` exceeds the index width.
    #[default]
    #[serde(rename = "prone")]
    #[cfg_attr(feature = "clap_derive", value(name = "prone"))]
    OverflowProne,

    /// `low + (high - low) / 2`. Never leaves `[low, high]`.
    #[serde(rename = "safe")]
    #[cfg_attr(feature = "clap_derive", value(name = "safe"))]
    OverflowSafe,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::OverflowProne => write!(f, "prone"),
            Mode::OverflowSafe => write!(f, "safe"),
        }
    }
}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prone" => Ok(Mode::OverflowProne),
            "safe" => Ok(Mode::OverflowSafe),
            _ => Err(UnknownMode(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown midpoint mode \"{0}\", expected \"prone\" or \"safe\"")]
pub struct UnknownMode(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in [Mode::OverflowProne, Mode::OverflowSafe] {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
        assert_eq!("fixed".parse::<Mode>(), Err(UnknownMode("fixed".to_owned())));
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&Mode::OverflowSafe).unwrap(), "\"safe\"");
        assert_eq!(
            serde_json::from_str::<Mode>("\"prone\"").unwrap(),
            Mode::OverflowProne
        );
    }
}
