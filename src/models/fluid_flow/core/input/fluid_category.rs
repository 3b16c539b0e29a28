use std::{fmt, str::FromStr};

use crate::models::fluid_flow::core::SizingError;

/// The phase of the fluid being sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FluidCategory {
    Liquid,
    Gas,
    /// Gas-liquid mixture.
    TwoPhase,
}

impl FluidCategory {
    /// All categories, in menu order.
    pub const ALL: [Self; 3] = [Self::Liquid, Self::Gas, Self::TwoPhase];
}

impl fmt::Display for FluidCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Liquid => "liquid",
            Self::Gas => "gas",
            Self::TwoPhase => "two-phase",
        })
    }
}

/// Parses a menu code (`"1"`, `"2"`, `"3"`) or a category name.
///
/// Names are matched ignoring case, spaces, hyphens and underscores, so
/// `"Two-Phase"`, `"two_phase"` and `"twophase"` are equivalent.
impl FromStr for FluidCategory {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match super::normalize(s).as_str() {
            "1" | "liquid" => Ok(Self::Liquid),
            "2" | "gas" => Ok(Self::Gas),
            "3" | "twophase" => Ok(Self::TwoPhase),
            _ => Err(SizingError::unrecognized("fluid category", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_codes_and_names() {
        assert_eq!("1".parse(), Ok(FluidCategory::Liquid));
        assert_eq!(" Gas ".parse(), Ok(FluidCategory::Gas));
        assert_eq!("3".parse(), Ok(FluidCategory::TwoPhase));
        assert_eq!("Two-Phase".parse(), Ok(FluidCategory::TwoPhase));
        assert_eq!("two_phase".parse(), Ok(FluidCategory::TwoPhase));
    }

    #[test]
    fn rejects_unknown_categories() {
        for input in ["", "4", "steam", "slurry"] {
            let err = input.parse::<FluidCategory>().unwrap_err();
            assert!(matches!(err, SizingError::UnrecognizedCategory { .. }));
        }
    }

    #[test]
    fn display_round_trips() {
        for category in FluidCategory::ALL {
            assert_eq!(category.to_string().parse(), Ok(category));
        }
    }
}
