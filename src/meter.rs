//! Meter layout: a value range paired with a pixel range, and its tick labels.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::mapping;
use crate::prettify::prettify;

/// Value range and pixel range of a meter track.
///
/// `MeterRange` is plain data and derives serde, so a widget can read its
/// layout from a config file. The default is the classic level-meter layout,
/// `-70 dB ..= 0 dB` drawn on pixels `10 ..= 210`.
///
/// [`MeterRange::new`] accepts anything and lets degenerate ranges produce
/// `inf`/`NaN`; [`MeterRange::try_new`] rejects them.
///
/// # Examples
///
/// ```rust
/// use meterscale::MeterRange;
///
/// let range = MeterRange::<f64>::default();
///
/// let px = range.value_to_px(-10.0);
/// assert!((px - 97.49).abs() < 0.01);
///
/// let value = range.px_to_value(px);
/// assert!((value + 10.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeterRange<D = f64> {
    pub value_min: D,
    pub value_max: D,
    pub px_min: D,
    pub px_max: D,
}

impl<D: Float> Default for MeterRange<D> {
    fn default() -> Self {
        Self {
            value_min: D::from(-70.0).unwrap(),
            value_max: D::zero(),
            px_min: D::from(10.0).unwrap(),
            px_max: D::from(210.0).unwrap(),
        }
    }
}

impl<D: Float> MeterRange<D> {
    /// Creates a range without validation.
    pub const fn new(value_min: D, value_max: D, px_min: D, px_max: D) -> Self {
        Self {
            value_min,
            value_max,
            px_min,
            px_max,
        }
    }

    /// Creates a range, rejecting layouts that would map to `inf` or `NaN`.
    ///
    /// ```rust
    /// use meterscale::{MeterRange, RangeError};
    ///
    /// assert!(MeterRange::try_new(-70.0, 0.0, 10.0, 210.0).is_ok());
    /// assert_eq!(
    ///     MeterRange::try_new(-6.0, -6.0, 10.0, 210.0),
    ///     Err(RangeError::EmptyValueSpan)
    /// );
    /// ```
    pub fn try_new(value_min: D, value_max: D, px_min: D, px_max: D) -> Result<Self, RangeError> {
        let range = Self::new(value_min, value_max, px_min, px_max);
        range.validate()?;
        Ok(range)
    }

    /// Checks that both ranges are finite and non-empty.
    pub fn validate(&self) -> Result<(), RangeError> {
        let endpoints = [self.value_min, self.value_max, self.px_min, self.px_max];
        if !endpoints.iter().all(|v| v.is_finite()) {
            log::debug!("rejecting meter range with non-finite endpoint");
            return Err(RangeError::NonFinite);
        }
        if self.value_span() == D::zero() {
            log::debug!("rejecting meter range with empty value span");
            return Err(RangeError::EmptyValueSpan);
        }
        if self.pixel_span() == D::zero() {
            log::debug!("rejecting meter range with empty pixel span");
            return Err(RangeError::EmptyPixelSpan);
        }
        Ok(())
    }

    /// Width of the value range in signed-log space.
    pub fn value_span(&self) -> D {
        mapping::value_span(self.value_min, self.value_max)
    }

    /// Signed width of the pixel range, `px_max - px_min`.
    pub fn pixel_span(&self) -> D {
        self.px_max - self.px_min
    }

    /// See [`mapping::value_to_px`].
    pub fn value_to_px(&self, value: D) -> D {
        mapping::value_to_px(
            value,
            self.value_min,
            self.value_max,
            self.px_min,
            self.px_max,
        )
    }

    /// See [`mapping::px_to_value`].
    pub fn px_to_value(&self, px: D) -> D {
        mapping::px_to_value(px, self.value_min, self.value_max, self.px_min, self.px_max)
    }

    /// Labelled ticks at `parts + 1` evenly spaced pixel positions.
    ///
    /// ```rust
    /// use meterscale::MeterRange;
    ///
    /// let labels: Vec<f64> = MeterRange::<f64>::default().ticks(9).map(|t| t.value).collect();
    /// assert_eq!(labels, [-70.0, -43.0, -27.0, -16.0, -10.0, -6.0, -3.0, -2.0, -1.0, 0.0]);
    /// ```
    pub fn ticks(&self, parts: usize) -> MeterTicks<D> {
        MeterTicks {
            range: *self,
            index: 0,
            parts,
            done: false,
        }
    }
}

/// A tick label and where to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeterTick<D = f64> {
    /// Pixel coordinate of the tick.
    pub px: D,
    /// Prettified value shown next to the tick.
    pub value: D,
}

/// Iterator over the ticks of a [`MeterRange`], see [`MeterRange::ticks`].
///
/// Tick `i` sits at `px_min + (px_max - px_min) / parts * i` for
/// `i in 0..=parts` and is labelled `prettify(px_to_value(px))`. With
/// `parts == 0` the only tick is at `px_min`.
///
/// The reported length saturates at `usize::MAX`, so `ticks(usize::MAX)`
/// claims one tick fewer than it would eventually yield.
#[derive(Debug, Clone)]
pub struct MeterTicks<D> {
    range: MeterRange<D>,
    index: usize,
    parts: usize,
    done: bool,
}

impl<D: Float> MeterTicks<D> {
    fn px_at(&self, index: usize) -> D {
        if self.parts == 0 {
            return self.range.px_min;
        }
        let step = self.range.pixel_span() / D::from(self.parts).unwrap();
        self.range.px_min + step * D::from(index).unwrap()
    }
}

impl<D: Float> Iterator for MeterTicks<D> {
    type Item = MeterTick<D>;

    fn next(&mut self) -> Option<MeterTick<D>> {
        if self.done {
            return None;
        }

        let px = self.px_at(self.index);
        if self.index == self.parts {
            self.done = true;
        } else {
            self.index += 1;
        }

        let value = prettify(self.range.px_to_value(px));
        Some(MeterTick { px, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.done {
            0
        } else {
            (self.parts - self.index).saturating_add(1)
        };
        (remaining, Some(remaining))
    }
}

impl<D: Float> ExactSizeIterator for MeterTicks<D> {}

/// Labelled ticks for an ad-hoc layout; shorthand for
/// `MeterRange::new(..).ticks(parts)`.
///
/// ```rust
/// use meterscale::tick_labels;
///
/// let ticks: Vec<_> = tick_labels(-70.0, 0.0, 10.0, 210.0, 9).collect();
/// assert_eq!(ticks.len(), 10);
/// assert_eq!(ticks[0].px, 10.0);
/// assert_eq!(ticks[0].value, -70.0);
/// ```
pub fn tick_labels<D: Float>(
    value_min: D,
    value_max: D,
    px_min: D,
    px_max: D,
    parts: usize,
) -> MeterTicks<D> {
    MeterRange::new(value_min, value_max, px_min, px_max).ticks(parts)
}
