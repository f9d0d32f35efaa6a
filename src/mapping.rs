//! Value/pixel mapping linear in signed-log space.
//!
//! Both directions first measure the value range in signed-log space
//! (`sig_log(value_max) - sig_log(value_min)`), then map affinely onto the
//! pixel range. Equal pixel distances therefore stand for equal *ratios* of
//! magnitude, while negative values and a zero crossing remain representable.
//!
//! These functions do no validation. A value range whose endpoints share the
//! same signed-log value has a zero span, and the result is `inf` or `NaN`
//! exactly as IEEE arithmetic produces it. Use
//! [`MeterRange::try_new`](crate::MeterRange::try_new) to reject such ranges
//! up front.

use num_traits::Float;

use crate::scale::signed_log::{sig_exp, sig_log};

/// Width of `[value_min, value_max]` measured in signed-log space.
pub fn value_span<D: Float>(value_min: D, value_max: D) -> D {
    sig_log(value_max) - sig_log(value_min)
}

/// Maps `value` from the value range onto the pixel range.
///
/// ```rust
/// use meterscale::mapping::value_to_px;
///
/// assert!((value_to_px(-70.0_f64, -70.0, 0.0, 10.0, 210.0) - 10.0).abs() < 1e-9);
/// assert!((value_to_px(0.0_f64, -70.0, 0.0, 10.0, 210.0) - 210.0).abs() < 1e-9);
///
/// // -10 dB already sits near the middle of the track.
/// let px = value_to_px(-10.0_f64, -70.0, 0.0, 10.0, 210.0);
/// assert!((px - 97.49).abs() < 0.01);
/// ```
pub fn value_to_px<D: Float>(value: D, value_min: D, value_max: D, px_min: D, px_max: D) -> D {
    let ratio = (px_max - px_min) / value_span(value_min, value_max);

    ratio * (sig_log(value) - sig_log(value_min)) + px_min
}

/// Maps the pixel coordinate `px` back onto the value range.
///
/// Inverse of [`value_to_px`] for the same ranges.
///
/// ```rust
/// use meterscale::mapping::{px_to_value, value_to_px};
///
/// let value = px_to_value(110.0_f64, -70.0, 0.0, 10.0, 210.0);
/// assert!((value + 7.426).abs() < 0.001);
///
/// let px = value_to_px(value, -70.0, 0.0, 10.0, 210.0);
/// assert!((px - 110.0).abs() < 1e-9);
/// ```
pub fn px_to_value<D: Float>(px: D, value_min: D, value_max: D, px_min: D, px_max: D) -> D {
    let span = value_span(value_min, value_max);
    log::trace!("px_to_value: value span {:?}", span.to_f64());
    let ratio = (px_max - px_min) / span;

    sig_exp((px - px_min) / ratio + sig_log(value_min))
}
