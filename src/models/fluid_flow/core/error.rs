use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while sizing a conduit or classifying a flow.
///
/// Every operation either succeeds completely or returns one of these;
/// inputs are never coerced or defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizingError {
    /// A numeric input was outside its physical domain.
    ///
    /// Flow rates, velocities, diameters, areas, densities and viscosities
    /// must be strictly positive; Reynolds numbers must be non-negative.
    #[error("invalid {quantity}: {source}")]
    InvalidInput {
        /// Name of the offending quantity.
        quantity: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// A category, context or mode was not in the known set.
    ///
    /// Also returned when a fluid category has no reference table in the
    /// requested advisory context.
    #[error("unrecognized {kind}: `{value}`")]
    UnrecognizedCategory {
        /// What was being looked up (e.g., "fluid category").
        kind: &'static str,

        /// The rejected value.
        value: String,
    },
}

impl SizingError {
    /// Returns a closure wrapping a [`ConstraintError`] for the named quantity.
    ///
    /// Intended for `map_err` at validation sites.
    pub(crate) fn invalid(quantity: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidInput { quantity, source }
    }

    pub(crate) fn unrecognized(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnrecognizedCategory {
            kind,
            value: value.into(),
        }
    }
}
