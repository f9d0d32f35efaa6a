//! Scales map domain values to a normalized `[0, 1]` range and back.
//!
//! A [`Scale`] knows nothing about pixels; pair it with a
//! [`Transform`](crate::Transform) to place values on a meter track.
//!
//! Available scale types:
//! - [`SymLog`] - Signed logarithmic mapping that crosses zero

pub mod signed_log;
pub mod sym_log;
pub mod tick_iter;
pub mod util;

pub use sym_log::SymLog;
pub use tick_iter::TickIter;

/// A tick mark produced by a scale.
///
/// `level` 0 is a major tick; higher levels are progressively less prominent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick<D> {
    /// Position of the tick in domain units.
    pub value: D,
    /// Prominence of the tick, 0 being the most prominent.
    pub level: u8,
}

/// Bidirectional mapping between a domain and a normalized `[0, 1]` range.
///
/// Methods ending in `_opt` return `None` when a value cannot be represented
/// in the target numeric type. Their counterparts without the suffix panic in
/// that case.
pub trait Scale {
    /// Type of the domain values.
    type Domain;
    /// Type of the normalized values.
    type Normalized;

    /// Returns the domain endpoints as `(min, max)`, exactly as they were set.
    fn domain(&self) -> (&Self::Domain, &Self::Domain);

    /// Replaces the domain endpoints.
    fn set_domain(&mut self, min: Self::Domain, max: Self::Domain);

    /// Maps a domain value to the normalized range.
    ///
    /// Values outside the domain are not clamped.
    fn normalize_opt(&self, value: &Self::Domain) -> Option<Self::Normalized>;

    /// Maps a normalized value back to the domain.
    fn denormalize_opt(&self, t: Self::Normalized) -> Option<Self::Domain>;

    /// Produces the scale's tick marks in domain order.
    fn tick_iter(&self) -> TickIter<Self::Domain>;

    /// Returns true if the scale can map `value`.
    fn is_valid_domain_value(&self, value: &Self::Domain) -> bool;

    /// Maps a domain value to the normalized range.
    fn normalize(&self, value: &Self::Domain) -> Self::Normalized {
        self.normalize_opt(value).unwrap()
    }

    /// Maps a normalized value back to the domain.
    fn denormalize(&self, t: Self::Normalized) -> Self::Domain {
        self.denormalize_opt(t).unwrap()
    }

    /// Collects [`Scale::tick_iter`] into a vector.
    fn ticks(&self) -> Vec<Tick<Self::Domain>> {
        self.tick_iter().collect()
    }
}
