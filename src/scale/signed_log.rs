//! Signed logarithm: a log10 compression of magnitude that keeps the sign.
//!
//! `log10(|n| + 1)` stays finite and is zero at `n = 0`, so the transform is
//! defined on the whole real line and is odd-symmetric:
//! `sig_log(-n) == -sig_log(n)`.
//!
//! ```rust
//! use meterscale::scale::signed_log::{sig_exp, sig_log};
//!
//! assert_eq!(sig_log(0.0), 0.0);
//! assert!((sig_log(9.0_f64) - 1.0).abs() < 1e-12);
//! assert!((sig_log(-99.0_f64) + 2.0).abs() < 1e-12);
//!
//! let x = -42.0_f64;
//! assert!((sig_exp(sig_log(x)) - x).abs() < 1e-9);
//! ```

use num_traits::Float;

/// Sign of `n` as `-1`, `0` or `1`.
///
/// Unlike [`Float::signum`], zero (of either sign) maps to `0`.
pub fn sig<D: Float>(n: D) -> D {
    if n == D::zero() {
        D::zero()
    } else {
        n / n.abs()
    }
}

/// Signed logarithm: `sig(n) * log10(|n| + 1)`.
pub fn sig_log<D: Float>(n: D) -> D {
    (n.abs() + D::one()).log10() * sig(n)
}

/// Inverse of [`sig_log`]: `sig(n) * (10^|n| - 1)`.
pub fn sig_exp<D: Float>(n: D) -> D {
    let ten = D::from(10.0).unwrap();
    (ten.powf(n.abs()) - D::one()) * sig(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sig() {
        assert_eq!(sig(0.0f64), 0.0);
        assert_eq!(sig(-0.0f64), 0.0);
        assert_eq!(sig(3.5f64), 1.0);
        assert_eq!(sig(-0.001f64), -1.0);
    }

    #[test]
    fn test_zero_fixpoint() {
        assert_eq!(sig_log(0.0f64), 0.0);
        assert_eq!(sig_exp(0.0f64), 0.0);
        assert_eq!(sig_log(0.0f32), 0.0);
        assert_eq!(sig_exp(0.0f32), 0.0);
    }

    #[test]
    fn test_sig_log_known_values() {
        assert!((sig_log(9.0f64) - 1.0).abs() < 1e-12);
        assert!((sig_log(999.0f64) - 3.0).abs() < 1e-12);
        assert!((sig_log(-70.0f64) + 1.851_258_348_719_075).abs() < 1e-12);
    }

    #[test]
    fn test_odd_symmetry() {
        for n in [0.25f64, 1.0, 3.0, 70.0, 1234.5] {
            assert!((sig_log(-n) + sig_log(n)).abs() < 1e-12);
            assert_eq!(sig_exp(-n), -sig_exp(n));
        }
    }

    #[test]
    fn test_inverse_law() {
        for n in [-1000.0f64, -70.0, -1.5, -0.01, 0.0, 0.3, 12.0, 5000.0] {
            let back = sig_exp(sig_log(n));
            assert!((back - n).abs() < 1e-9 * n.abs().max(1.0), "{n} -> {back}");
        }

        for y in [-3.0f64, -1.2, -0.1, 0.0, 0.5, 2.0, 4.0] {
            let back = sig_log(sig_exp(y));
            assert!((back - y).abs() < 1e-12, "{y} -> {back}");
        }
    }

    #[test]
    fn test_f32() {
        let n = -42.0f32;
        assert!((sig_exp(sig_log(n)) - n).abs() < 1e-3);
    }
}
