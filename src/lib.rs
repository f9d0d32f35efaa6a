//! Meter scale library
//!
//! `meterscale` maps level values (typically decibels) onto the pixel track of
//! a meter widget and back, and produces readable tick labels for it. It
//! does no drawing: it provides the math a widget needs to place its marks.
//!
//! # Core Concepts
//!
//! ## Signed-Log Space
//!
//! Values are compressed with `sign(v) * log10(|v| + 1)`
//! ([`scale::signed_log`]). The transform is finite at zero, keeps the sign and
//! is its own mirror image, so a track can cover `-70..0`, `0..24` or even
//! `-100..100` while equal pixel distances stand for equal magnitude ratios.
//!
//! ## Mapping
//!
//! - [`mapping::value_to_px`] / [`mapping::px_to_value`] - Stateless
//!   value/pixel conversion given both ranges
//! - [`MeterRange`] - The same conversion bundled with its ranges, with
//!   optional validation and serde support
//!
//! ## Tick Labels
//!
//! - [`prettify()`] - Rounds a raw value to a magnitude-appropriate label
//! - [`MeterRange::ticks`] / [`tick_labels`] - Evenly spaced pixel positions
//!   with prettified labels
//! - [`division::sqrt_divisions`] - Divisions spaced evenly in square-root space
//!
//! ## Scales and Transforms
//!
//! [`scale::SymLog`] implements the [`Scale`] trait, normalizing its domain to
//! `[0, 1]`. A [`Transform`] places any scale on a [`PixelSpan`].
//!
//! # Examples
//!
//! ## Value to Pixel
//!
//! ```rust
//! use meterscale::MeterRange;
//!
//! let range = MeterRange::<f64>::try_new(-70.0, 0.0, 10.0, 210.0).unwrap();
//!
//! assert!((range.value_to_px(-70.0) - 10.0).abs() < 1e-9);
//! assert!((range.value_to_px(0.0) - 210.0).abs() < 1e-9);
//!
//! // The loud end gets most of the track
//! assert!(range.value_to_px(-10.0) > 95.0);
//! ```
//!
//! ## Tick Labels
//!
//! ```rust
//! use meterscale::MeterRange;
//!
//! for tick in MeterRange::<f64>::default().ticks(9) {
//!     println!("{:>4} at {:.1}px", tick.value, tick.px);
//! }
//! ```
//!
//! ## Generic Scale
//!
//! ```rust
//! use meterscale::{PixelSpan, Scale, Transform, scale::SymLog};
//!
//! let scale = SymLog::<f64, f32>::new(-60.0, 6.0);
//! let track = PixelSpan::new(300.0f32, 0.0f32);
//! let transform = Transform::new(&track, &scale);
//!
//! let px = transform.value_to_px(&0.0);
//! assert!(px > 0.0 && px < 300.0);
//! assert_eq!(scale.normalize(&-60.0), 0.0);
//! ```
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade and stays silent unless the
//! application installs a logger. [`mapping::px_to_value`] emits the value span
//! at `trace` level.

pub mod division;
pub mod error;
pub mod mapping;
pub mod meter;
pub mod prettify;
pub mod scale;
pub mod transform;

pub use error::RangeError;
pub use meter::{MeterRange, MeterTick, MeterTicks, tick_labels};
pub use num_traits::Float;
pub use prettify::prettify;
pub use scale::{Scale, Tick, TickIter};
pub use transform::{PixelSpan, Transform};
