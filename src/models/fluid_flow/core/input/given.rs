use uom::si::f64::{Length, Velocity};

use super::CalculationMode;

/// Specifies the quantity known in addition to the flow rate.
///
/// The other of the two is solved for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Given {
    /// An acceptable velocity; solve for the diameter.
    Velocity(Velocity),

    /// An internal diameter; solve for the velocity.
    Diameter(Length),
}

impl Given {
    /// Returns the calculation mode this constraint implies.
    #[must_use]
    pub fn mode(&self) -> CalculationMode {
        match self {
            Self::Velocity(_) => CalculationMode::Diameter,
            Self::Diameter(_) => CalculationMode::Velocity,
        }
    }
}
