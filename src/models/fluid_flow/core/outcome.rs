use std::fmt;

/// How seriously an advisory should be taken.
///
/// Ordered from least to most serious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Within the recommended range.
    Safe,
    /// Outside the recommended range; review the design.
    Caution,
    /// Far outside the recommended range; resize.
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Safe => "safe",
            Self::Caution => "caution",
            Self::Critical => "critical",
        })
    }
}

/// The band a value was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Laminar,
    Transitional,
    Turbulent,
    /// Velocity within the recommended range.
    Recommended,
    /// Velocity below the recommended range.
    Low,
    /// Velocity above the recommended range.
    High,
    /// Velocity far above the recommended range.
    Excessive,
}

impl Classification {
    /// Returns the human-readable label, e.g. `"Laminar Flow"`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Laminar => "Laminar Flow",
            Self::Transitional => "Transitional Flow",
            Self::Turbulent => "Turbulent Flow",
            Self::Recommended => "Recommended Velocity",
            Self::Low => "Low Velocity",
            Self::High => "High Velocity",
            Self::Excessive => "Excessive Velocity",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The result of classifying a value against a band table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvisoryOutcome {
    /// The band the value fell in.
    pub classification: Classification,

    /// How urgently the classification calls for action.
    pub severity: Severity,

    /// Engineering note explaining the classification.
    ///
    /// The wording is informational and may change between releases.
    pub message: &'static str,
}

impl AdvisoryOutcome {
    /// Returns the classification label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.classification.label()
    }

    /// Returns `true` if the outcome calls for no action.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.severity == Severity::Safe
    }
}

impl fmt::Display for AdvisoryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.label(), self.severity, self.message)
    }
}
