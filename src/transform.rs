//! Coordinate transformations between a meter track and a scale's domain.
//!
//! A meter is one-dimensional: values live on a single track between two
//! pixel coordinates. [`PixelSpan`] describes that track and [`Transform`]
//! connects it to any [`Scale`].
//!
//! # Orientation
//!
//! `PixelSpan { min, max }` maps the scale's first domain endpoint to `min` and
//! the second to `max`. `min` does not need to be smaller than `max`: a
//! vertical meter that grows upward on a y-down screen simply uses
//! `PixelSpan::new(bottom, top)`.
//!
//! # Examples
//!
//! ```rust
//! use meterscale::{PixelSpan, Transform, scale::SymLog};
//!
//! let track = PixelSpan::new(10.0_f64, 210.0);
//! let scale = SymLog::<f64, f64>::new(-70.0, 0.0);
//! let transform = Transform::new(&track, &scale);
//!
//! assert!((transform.value_to_px(&-70.0) - 10.0).abs() < 1e-9);
//! assert!((transform.value_to_px(&0.0) - 210.0).abs() < 1e-9);
//!
//! let value = transform.px_to_value(&110.0);
//! assert!((value + 7.426).abs() < 0.001);
//! ```
//!
//! ## Placing Tick Labels
//!
//! ```rust
//! use meterscale::{PixelSpan, Transform, scale::SymLog};
//!
//! let track = PixelSpan::new(10.0_f64, 210.0);
//! let scale = SymLog::<f64, f64>::new(-70.0, 0.0);
//! let transform = Transform::new(&track, &scale);
//!
//! for (px, tick) in transform.tick_positions() {
//!     println!("{:>4} dB at {px:.1}px", tick.value);
//! }
//! ```

use num_traits::Float;

use crate::scale::{Scale, Tick, util::sorted_pair};

/// A one-dimensional span of pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelSpan<S = f32> {
    /// Pixel coordinate of the first domain endpoint.
    pub min: S,
    /// Pixel coordinate of the second domain endpoint.
    pub max: S,
}

impl<S> PixelSpan<S> {
    pub const fn new(min: S, max: S) -> Self {
        Self { min, max }
    }
}

impl<S: Float> PixelSpan<S> {
    /// Signed length of the span, `max - min`.
    pub fn length(&self) -> S {
        self.max - self.min
    }

    /// Returns true if `px` lies on the span, inclusive of both ends.
    ///
    /// Works for inverted spans by comparing sorted endpoints.
    pub fn contains(&self, px: &S) -> bool {
        let (lo, hi) = sorted_pair(self.min, self.max);
        px >= &lo && px <= &hi
    }
}

/// Transforms coordinates between a pixel span and a scale's domain.
///
/// # Type Parameters
///
/// - `D`: Domain type (data values, typically `f64`)
/// - `N`: Normalized type (used internally by the scale)
/// - `S`: Screen type (pixel coordinates, typically `f32`)
///
/// # Method Variants
///
/// - `method()` - Panics on numeric conversion failure
/// - `method_opt()` - Returns `Option`
#[derive(Clone, Copy)]
pub struct Transform<'a, D = f64, N = f32, S = f32> {
    span: &'a PixelSpan<S>,
    scale: &'a dyn Scale<Domain = D, Normalized = N>,
}

impl<'a, D, N, S> Transform<'a, D, N, S> {
    pub const fn new(
        span: &'a PixelSpan<S>,
        scale: &'a dyn Scale<Domain = D, Normalized = N>,
    ) -> Self {
        Self { span, scale }
    }

    /// Returns the pixel span passed to [`Transform::new`].
    pub const fn pixel_span(&self) -> &PixelSpan<S> {
        self.span
    }
}

impl<'a, D, N, S> Transform<'a, D, N, S>
where
    D: Float,
    N: Float,
    S: Float,
{
    /// Transforms a domain value to a pixel coordinate.
    pub fn value_to_px_opt(&self, value: &D) -> Option<S> {
        let norm: N = self.scale.normalize_opt(value)?;
        let norm_s: S = S::from(norm)?;
        Some(self.span.min + norm_s * self.span.length())
    }

    /// Transforms a domain value to a pixel coordinate.
    pub fn value_to_px(&self, value: &D) -> S {
        self.value_to_px_opt(value).unwrap()
    }

    /// Transforms a pixel coordinate to a domain value.
    ///
    /// An empty span maps every pixel to the scale's first endpoint.
    pub fn px_to_value_opt(&self, px: &S) -> Option<D> {
        let length = self.span.length();
        let norm_s = if length == S::zero() {
            S::zero()
        } else {
            (*px - self.span.min) / length
        };

        let norm: N = N::from(norm_s)?;
        self.scale.denormalize_opt(norm)
    }

    /// Transforms a pixel coordinate to a domain value.
    pub fn px_to_value(&self, px: &S) -> D {
        self.px_to_value_opt(px).unwrap()
    }

    /// Pairs every tick of the scale with its pixel coordinate.
    ///
    /// Ticks whose position cannot be represented are skipped.
    pub fn tick_positions(&self) -> Vec<(S, Tick<D>)> {
        self.scale
            .tick_iter()
            .filter_map(|tick| Some((self.value_to_px_opt(&tick.value)?, tick)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{px_to_value, value_to_px};
    use crate::scale::SymLog;

    #[test]
    fn pixel_span_length_and_contains() {
        let span = PixelSpan::new(210.0f32, 10.0);

        assert_eq!(span.length(), -200.0);
        assert!(span.contains(&10.0));
        assert!(span.contains(&120.0));
        assert!(!span.contains(&211.0));
    }

    #[test]
    fn value_to_px_matches_free_function() {
        let span = PixelSpan::new(10.0f64, 210.0);
        let scale = SymLog::<f64, f64>::new(-70.0, 0.0);
        let transform = Transform::new(&span, &scale);

        for value in [-70.0, -45.0, -12.0, -3.0, -0.5, 0.0] {
            let px = transform.value_to_px(&value);
            let expected = value_to_px(value, -70.0, 0.0, 10.0, 210.0);
            assert!((px - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn px_to_value_matches_free_function() {
        let span = PixelSpan::new(10.0f64, 210.0);
        let scale = SymLog::<f64, f64>::new(-70.0, 0.0);
        let transform = Transform::new(&span, &scale);

        for px in [10.0, 37.0, 99.0, 150.5, 210.0] {
            let value = transform.px_to_value(&px);
            let expected = px_to_value(px, -70.0, 0.0, 10.0, 210.0);
            assert!((value - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn inverted_span_for_vertical_meter() {
        let span = PixelSpan::new(400.0f32, 0.0f32);
        let scale = SymLog::<f64, f32>::new(-60.0, 0.0);
        let transform = Transform::new(&span, &scale);

        assert!((transform.value_to_px(&-60.0) - 400.0).abs() < 1e-3);
        assert!(transform.value_to_px(&0.0).abs() < 1e-3);
        assert!((transform.px_to_value(&0.0)).abs() < 1e-3);
    }

    #[test]
    fn empty_span_maps_to_first_endpoint() {
        let span = PixelSpan::new(50.0f64, 50.0);
        let scale = SymLog::<f64, f64>::new(-70.0, 0.0);
        let transform = Transform::new(&span, &scale);

        assert!((transform.px_to_value(&80.0) + 70.0).abs() < 1e-9);
    }

    #[test]
    fn tick_positions_are_monotonic() {
        let span = PixelSpan::new(10.0f64, 210.0);
        let scale = SymLog::<f64, f64>::new(-70.0, 0.0);
        let transform = Transform::new(&span, &scale);

        let positions = transform.tick_positions();
        assert_eq!(positions.len(), 10);
        assert!((positions[0].0 - 10.0).abs() < 1e-9);
        assert!((positions[9].0 - 210.0).abs() < 1e-9);
        for pair in positions.windows(2) {
            assert!(pair[1].0 > pair[0].0);
        }
    }
}
