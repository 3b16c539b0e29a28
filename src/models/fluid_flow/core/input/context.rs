use std::{fmt, str::FromStr};

use crate::models::fluid_flow::core::SizingError;

/// Selects which velocity reference table an advisory is judged against.
///
/// The two contexts share fluid category names but have different bounds
/// and band counts, so they are kept as distinct tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvisoryContext {
    /// Steady in-line conduit velocities.
    Pipe,
    /// Discharge and nozzle exit velocities.
    Nozzle,
}

impl fmt::Display for AdvisoryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pipe => "pipe",
            Self::Nozzle => "nozzle",
        })
    }
}

impl FromStr for AdvisoryContext {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match super::normalize(s).as_str() {
            "pipe" | "pipeflow" => Ok(Self::Pipe),
            "nozzle" => Ok(Self::Nozzle),
            _ => Err(SizingError::unrecognized("advisory context", s)),
        }
    }
}
