//! Magnitude-appropriate rounding for tick labels.

use num_traits::Float;

/// Rounds half toward positive infinity (`-0.5` becomes `0`, `0.5` becomes `1`).
///
/// [`Float::round`] rounds half away from zero, which would turn small negative
/// labels such as `-0.5` into `-1`. `floor(n + 0.5)` is not used because the
/// addition itself rounds up values just below one half.
pub(crate) fn round_half_up<D: Float>(n: D) -> D {
    let half = D::from(0.5).unwrap();
    let rounded = n.round();
    if rounded - n == -half {
        rounded + D::one()
    } else {
        rounded
    }
}

/// Rounds `n` to a "nice" value derived from its own order of magnitude.
///
/// Zero maps to `0` without touching `log10`. Otherwise the granularity is
/// `round(10^log10(|n|))`; when that is zero (magnitudes below one half) the
/// result is `0`, else `round(n / granularity) * granularity`.
///
/// This is a display heuristic: the output is "a tidy label near `n`", not a
/// precise rounding rule.
///
/// # Examples
///
/// ```rust
/// use meterscale::prettify;
///
/// assert_eq!(prettify(0.0), 0.0);
/// assert_eq!(prettify(0.3), 0.0);
/// assert_eq!(prettify(-43.214), -43.0);
/// assert_eq!(prettify(9.7), 10.0);
/// ```
pub fn prettify<D: Float>(n: D) -> D {
    if n == D::zero() {
        return D::zero();
    }

    let ten = D::from(10.0).unwrap();
    let exp = round_half_up(ten.powf(n.abs().log10()));
    if exp == D::zero() {
        return D::zero();
    }

    round_half_up(n / exp) * exp
}
