use std::{fmt, str::FromStr};

use crate::models::fluid_flow::core::SizingError;

/// The quantity a sizing run solves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculationMode {
    /// Solve for the conduit diameter from flow rate and velocity.
    Diameter,
    /// Solve for the flow velocity from flow rate and diameter.
    Velocity,
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Diameter => "diameter",
            Self::Velocity => "velocity",
        })
    }
}

/// Parses a menu code (`"1"`, `"2"`) or a mode name.
impl FromStr for CalculationMode {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match super::normalize(s).as_str() {
            "1" | "diameter" => Ok(Self::Diameter),
            "2" | "velocity" => Ok(Self::Velocity),
            _ => Err(SizingError::unrecognized("calculation mode", s)),
        }
    }
}
