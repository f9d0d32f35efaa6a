use super::signed_log::{sig_exp, sig_log};
use super::{Scale, Tick, TickIter, util};
use crate::prettify::prettify;
use num_traits::Float;

type SymLogTickGenerator<D, N> = Box<dyn Fn(&SymLog<D, N>) -> TickIter<D>>;

/// Default number of divisions between the two domain endpoints.
pub const DEFAULT_DIVISIONS: usize = 9;

/// Signed logarithmic scale: maps a numeric domain to normalized `[0, 1]` range
/// linearly in signed-log space.
///
/// `SymLog` compresses magnitude with `log10(|v| + 1)` while keeping the sign,
/// so unlike a plain logarithmic scale it accepts zero and negative values and
/// can cross zero. This suits level meters whose domain is something like
/// `-70 dB ..= 0 dB`: the loud end gets most of the track.
///
/// # Type Parameters
///
/// - `D`: Domain type (the data values, typically `f32` or `f64`)
/// - `N`: Normalized type (typically `f32` or `f64`, represents `[0, 1]` range)
///
/// # Domain
///
/// Every value is valid, zero and negatives included. Endpoints are kept as
/// given, so a reversed domain (`new(0.0, -70.0)`) is a reversed axis.
///
/// If both endpoints have the same signed-log value the span is empty and
/// every value normalizes to `0`.
///
/// # Examples
///
/// ## Basic Usage
///
/// ```rust
/// use meterscale::{Scale, scale::SymLog};
///
/// let scale = SymLog::<f64, f64>::new(-70.0, 0.0);
///
/// assert_eq!(scale.normalize(&-70.0), 0.0);
/// assert_eq!(scale.normalize(&0.0), 1.0);
///
/// // -10 is already close to the middle of the track
/// let norm = scale.normalize(&-10.0);
/// assert!((norm - 0.437).abs() < 0.001);
///
/// let value = scale.denormalize(norm);
/// assert!((value + 10.0).abs() < 1e-9);
/// ```
///
/// ## Crossing Zero
///
/// ```rust
/// use meterscale::{Scale, scale::SymLog};
///
/// let scale = SymLog::<f64, f64>::new(-100.0, 100.0);
///
/// assert!((scale.normalize(&0.0) - 0.5).abs() < 1e-12);
/// assert!((scale.normalize(&-9.0) + scale.normalize(&9.0) - 1.0).abs() < 1e-12);
/// ```
///
/// ## Tick Generation
///
/// Ticks are evenly spaced on the track and labelled with prettified values:
///
/// ```rust
/// use meterscale::{Scale, scale::SymLog};
///
/// let scale = SymLog::<f64, f64>::new(-70.0, 0.0);
/// let values: Vec<f64> = scale.ticks().iter().map(|t| t.value).collect();
///
/// assert_eq!(
///     values,
///     vec![-70.0, -43.0, -27.0, -16.0, -10.0, -6.0, -3.0, -2.0, -1.0, 0.0]
/// );
/// ```
pub struct SymLog<D, N = f64>
where
    D: Float,
    N: Float,
{
    min: D,
    max: D,
    divisions: usize,
    tick_generator: SymLogTickGenerator<D, N>,
    _phantom: std::marker::PhantomData<N>,
}

impl<D, N> SymLog<D, N>
where
    D: Float + 'static,
    N: Float + 'static,
{
    /// Creates a new signed logarithmic scale over `[min, max]`.
    ///
    /// Uses the default tick generator with [`DEFAULT_DIVISIONS`] divisions.
    ///
    /// ```
    /// use meterscale::{Scale, scale::SymLog};
    ///
    /// let scale = SymLog::<f64, f32>::new(-70.0, 0.0);
    /// assert_eq!(scale.domain(), (&-70.0, &0.0));
    /// ```
    pub fn new(min: D, max: D) -> Self {
        Self::new_with_tick_generator(min, max, default_tick_generator)
    }

    /// Creates a new scale with a custom tick generator.
    ///
    /// ```
    /// use meterscale::{Scale, scale::{SymLog, TickIter}};
    ///
    /// let scale = SymLog::<f64, f64>::new_with_tick_generator(
    ///     -70.0, 0.0,
    ///     |_scale| TickIter::empty()
    /// );
    /// assert!(scale.ticks().is_empty());
    /// ```
    pub fn new_with_tick_generator<F>(min: D, max: D, tick_generator: F) -> Self
    where
        F: Fn(&Self) -> TickIter<D> + 'static,
    {
        Self {
            min,
            max,
            divisions: DEFAULT_DIVISIONS,
            tick_generator: Box::new(tick_generator),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Creates a new scale whose ticks come from a function returning a `Vec`.
    ///
    /// ```
    /// use meterscale::{Scale, scale::{SymLog, Tick}};
    ///
    /// let scale = SymLog::<f64, f64>::new_with_tick_fn(-60.0, 0.0, |_scale| {
    ///     [-60.0, -40.0, -20.0, -6.0, 0.0]
    ///         .into_iter()
    ///         .map(|value| Tick { value, level: 0 })
    ///         .collect()
    /// });
    /// assert_eq!(scale.ticks().len(), 5);
    /// ```
    pub fn new_with_tick_fn<F>(min: D, max: D, tick_fn: F) -> Self
    where
        F: Fn(&Self) -> Vec<Tick<D>> + 'static,
    {
        Self::new_with_tick_generator(min, max, move |scale| {
            TickIter::from_vec(tick_fn(scale))
        })
    }

    /// Sets how many equal parts the default tick generator splits the track into.
    pub fn with_divisions(mut self, divisions: usize) -> Self {
        self.divisions = divisions;
        self
    }

    /// Number of equal parts used by the default tick generator.
    pub fn divisions(&self) -> usize {
        self.divisions
    }
}

impl<D: Float, N: Float> SymLog<D, N> {
    /// Width of the domain in signed-log space.
    fn log_span(&self) -> D {
        sig_log(self.max) - sig_log(self.min)
    }
}

fn default_tick_generator<D, N>(scale: &SymLog<D, N>) -> TickIter<D>
where
    D: Float + 'static,
    N: Float,
{
    TickIter::from_sym_log(SymLogTickIter::from_scale(scale))
}

/// Ticks at evenly spaced track positions, labelled with prettified values.
///
/// Consecutive positions whose labels round to the same value yield a single
/// tick. The first and last positions are major (level 0).
pub struct SymLogTickIter<D: Float> {
    log_min: D,
    log_span: D,
    index: usize,
    divisions: usize,
    last_value: Option<D>,
}

impl<D: Float> SymLogTickIter<D> {
    pub(crate) fn from_scale<N: Float>(scale: &SymLog<D, N>) -> Self {
        Self {
            log_min: sig_log(scale.min),
            log_span: scale.log_span(),
            index: 0,
            divisions: scale.divisions,
            last_value: None,
        }
    }
}

impl<D: Float> Iterator for SymLogTickIter<D> {
    type Item = Tick<D>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index <= self.divisions {
            let index = self.index;
            self.index += 1;

            let t: D = util::unit_step(index, self.divisions);
            let value = prettify(sig_exp(self.log_min + t * self.log_span));

            if !value.is_finite() || self.last_value == Some(value) {
                continue;
            }
            self.last_value = Some(value);

            let level = if index == 0 || index == self.divisions {
                0
            } else {
                1
            };
            return Some(Tick { value, level });
        }

        None
    }
}

impl<D, N> Scale for SymLog<D, N>
where
    D: Float,
    N: Float,
{
    type Domain = D;
    type Normalized = N;

    fn domain(&self) -> (&D, &D) {
        (&self.min, &self.max)
    }

    fn set_domain(&mut self, min: D, max: D) {
        self.min = min;
        self.max = max;
    }

    fn normalize_opt(&self, value: &D) -> Option<N> {
        let span_d = self.log_span();
        if span_d == D::zero() {
            return Some(N::zero());
        }

        let offset_d = sig_log(*value) - sig_log(self.min);

        let offset_n: N = N::from(offset_d)?;
        let span_n: N = N::from(span_d)?;

        Some(offset_n / span_n)
    }

    fn denormalize_opt(&self, t: N) -> Option<D> {
        let span_n: N = N::from(self.log_span())?;
        let scaled_d: D = D::from(t * span_n)?;

        Some(sig_exp(sig_log(self.min) + scaled_d))
    }

    fn tick_iter(&self) -> TickIter<D> {
        (self.tick_generator)(self)
    }

    fn is_valid_domain_value(&self, value: &D) -> bool {
        value.is_finite()
    }
}
