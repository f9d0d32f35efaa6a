//! Meter divisions spaced evenly in square-root space.
//!
//! An alternative to the signed-log layout: the distance
//! `w = sqrt(|value_min|) - sqrt(|value_max|)` is split into equal parts and
//! each remaining distance is squared. Divisions get denser toward the end of
//! the walk (0 dB on a level meter), though more gently than signed-log.

use num_traits::Float;

use crate::scale::util::unit_step;

/// Iterator over square-root spaced division magnitudes.
///
/// Yields `(w - w * i / parts)^2` for `i in 0..parts`, where
/// `w = sqrt(|value_min|) - sqrt(|value_max|)`. The values are squared
/// distances from `sqrt(|value_max|)`, not absolute magnitudes: they start at
/// `w^2`, which equals `|value_min|` only when `value_max` is zero, and
/// shrink toward `0` without yielding it.
///
/// ```rust
/// use meterscale::division::sqrt_divisions;
///
/// let divisions: Vec<f64> = sqrt_divisions(-70.0, 0.0, 10).collect();
///
/// assert_eq!(divisions.len(), 10);
/// assert!((divisions[0] - 70.0).abs() < 1e-9);
/// assert!((divisions[1] - 56.7).abs() < 1e-9);
/// assert!((divisions[9] - 0.7).abs() < 1e-9);
/// ```
pub fn sqrt_divisions<D: Float>(value_min: D, value_max: D, parts: usize) -> SqrtDivisions<D> {
    SqrtDivisions {
        width: value_min.abs().sqrt() - value_max.abs().sqrt(),
        index: 0,
        parts,
    }
}

pub struct SqrtDivisions<D> {
    width: D,
    index: usize,
    parts: usize,
}

impl<D: Float> Iterator for SqrtDivisions<D> {
    type Item = D;

    fn next(&mut self) -> Option<D> {
        if self.index >= self.parts {
            return None;
        }

        let step: D = unit_step(self.index, self.parts);
        self.index += 1;

        Some((self.width - self.width * step).powi(2))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.parts - self.index;
        (remaining, Some(remaining))
    }
}

impl<D: Float> ExactSizeIterator for SqrtDivisions<D> {}
