use num_traits::Float;

/// Return `(min, max)` for two owned values.
pub fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Evenly spaced fraction `index / parts` of the unit interval.
///
/// `parts == 0` collapses every index onto `0`.
pub fn unit_step<D: Float>(index: usize, parts: usize) -> D {
    if parts == 0 {
        return D::zero();
    }
    D::from(index).unwrap() / D::from(parts).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_pair() {
        assert_eq!(sorted_pair(3.0, -1.0), (-1.0, 3.0));
        assert_eq!(sorted_pair(-1.0, 3.0), (-1.0, 3.0));
    }

    #[test]
    fn test_unit_step() {
        assert_eq!(unit_step::<f64>(0, 4), 0.0);
        assert_eq!(unit_step::<f64>(2, 4), 0.5);
        assert_eq!(unit_step::<f64>(4, 4), 1.0);
        assert_eq!(unit_step::<f64>(3, 0), 0.0);
    }
}
