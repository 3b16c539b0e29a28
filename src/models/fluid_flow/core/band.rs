//! Regime bands and validated band tables.
//!
//! A [`BandTable`] is an ordered list of [`RegimeBand`]s that partition a
//! contiguous numeric domain. Construction checks that the bands are
//! well-formed, ordered, non-overlapping and free of gaps, so every value in
//! the domain falls into exactly one band.

use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::{AdvisoryOutcome, Classification, Severity};

/// One end of a [`RegimeBand`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// No limit in this direction.
    Unbounded,
    /// The limit value belongs to the band.
    Inclusive(f64),
    /// The limit value does not belong to the band.
    Exclusive(f64),
}

impl Bound {
    fn value(self) -> Option<f64> {
        match self {
            Self::Unbounded => None,
            Self::Inclusive(x) | Self::Exclusive(x) => Some(x),
        }
    }

    fn is_inclusive(self) -> bool {
        matches!(self, Self::Inclusive(_))
    }
}

/// A numeric interval mapped to a classification and severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeBand {
    /// Lower end of the interval.
    pub lower: Bound,

    /// Upper end of the interval.
    pub upper: Bound,

    /// Classification assigned to values in the band.
    pub classification: Classification,

    /// Severity assigned to values in the band.
    pub severity: Severity,

    /// Engineering note reported with the classification.
    pub message: &'static str,
}

impl RegimeBand {
    /// Returns `true` if `value` lies within this band.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let above_lower = match self.lower {
            Bound::Unbounded => true,
            Bound::Inclusive(x) => value >= x,
            Bound::Exclusive(x) => value > x,
        };
        let below_upper = match self.upper {
            Bound::Unbounded => true,
            Bound::Inclusive(x) => value <= x,
            Bound::Exclusive(x) => value < x,
        };
        above_lower && below_upper
    }

    /// Returns the advisory outcome this band assigns.
    #[must_use]
    pub fn outcome(&self) -> AdvisoryOutcome {
        AdvisoryOutcome {
            classification: self.classification,
            severity: self.severity,
            message: self.message,
        }
    }

    fn is_well_formed(&self) -> bool {
        match (self.lower.value(), self.upper.value()) {
            (Some(lo), _) if lo.is_nan() => false,
            (_, Some(hi)) if hi.is_nan() => false,
            (Some(lo), Some(hi)) if lo == hi => {
                self.lower.is_inclusive() && self.upper.is_inclusive()
            }
            (Some(lo), Some(hi)) => lo < hi,
            _ => true,
        }
    }
}

/// Errors returned when a band table is not a valid partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BandTableError {
    #[error("band table has no bands")]
    Empty,

    /// A band has a `NaN` bound or an empty interval.
    #[error("band {index} is malformed")]
    Malformed { index: usize },

    /// A band overlaps the band before it, or is out of order.
    #[error("band {index} overlaps the previous band")]
    Overlap { index: usize },

    /// Values between a band and the one before it would go unclassified.
    #[error("gap between band {index} and the previous band")]
    Gap { index: usize },
}

/// An ordered, validated set of non-overlapping bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable {
    bands: Vec<RegimeBand>,
}

impl BandTable {
    /// Constructs a band table, checking that the bands partition their domain.
    ///
    /// Bands must be listed in ascending order, and each band's lower bound
    /// must meet the previous band's upper bound at the same value with
    /// exactly one of the two inclusive.
    ///
    /// # Errors
    ///
    /// Returns a [`BandTableError`] describing the first problem found.
    pub fn new(bands: Vec<RegimeBand>) -> Result<Self, BandTableError> {
        if bands.is_empty() {
            return Err(BandTableError::Empty);
        }

        for (index, band) in bands.iter().enumerate() {
            if !band.is_well_formed() {
                return Err(BandTableError::Malformed { index });
            }
        }

        for (index, pair) in bands.windows(2).enumerate() {
            let index = index + 1;
            let (prev, next) = (pair[0].upper, pair[1].lower);
            let (Some(prev_value), Some(next_value)) = (prev.value(), next.value()) else {
                return Err(BandTableError::Overlap { index });
            };

            if next_value < prev_value {
                return Err(BandTableError::Overlap { index });
            }
            if next_value > prev_value {
                return Err(BandTableError::Gap { index });
            }
            match (prev.is_inclusive(), next.is_inclusive()) {
                (true, true) => return Err(BandTableError::Overlap { index }),
                (false, false) => return Err(BandTableError::Gap { index }),
                _ => {}
            }
        }

        Ok(Self { bands })
    }

    /// Returns the band containing `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotANumber`] for `NaN`, and
    /// [`ConstraintError::BelowMinimum`] or [`ConstraintError::AboveMaximum`]
    /// if `value` lies outside the table's domain.
    pub fn classify(&self, value: f64) -> Result<&RegimeBand, ConstraintError> {
        if value.is_nan() {
            return Err(ConstraintError::NotANumber);
        }

        if let Some(band) = self.bands.iter().find(|band| band.contains(value)) {
            tracing::trace!(value, classification = %band.classification, "classified");
            return Ok(band);
        }

        let first = &self.bands[0];
        if first.lower.value().is_some_and(|lo| value <= lo) {
            Err(ConstraintError::BelowMinimum)
        } else {
            Err(ConstraintError::AboveMaximum)
        }
    }

    /// Returns the bands in ascending order.
    #[must_use]
    pub fn bands(&self) -> &[RegimeBand] {
        &self.bands
    }
}
