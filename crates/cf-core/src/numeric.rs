/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Linear blend between `a` (weight 0) and `b` (weight 1).
#[inline]
pub fn lerp(a: Real, b: Real, weight: Real) -> Real {
    a + weight * (b - a)
}

/// Position of `x` between `x0` and `x1`, as used by [`lerp`].
///
/// Returns 0 for a degenerate interval.
#[inline]
pub fn lerp_weight(x: Real, x0: Real, x1: Real) -> Real {
    let span = x1 - x0;
    if span.abs() < Real::EPSILON {
        0.0
    } else {
        (x - x0) / span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn lerp_hits_endpoints() {
        assert_eq!(lerp(300.0, 400.0, 0.0), 300.0);
        assert_eq!(lerp(300.0, 400.0, 1.0), 400.0);
        assert!(nearly_equal(
            lerp(300.0, 400.0, 0.25),
            325.0,
            Tolerances::default()
        ));
    }

    #[test]
    fn lerp_weight_inverts_lerp() {
        let w = lerp_weight(0.35, 0.333, 0.376);
        assert!(w > 0.0 && w < 1.0);
        assert!(nearly_equal(
            lerp(0.333, 0.376, w),
            0.35,
            Tolerances::default()
        ));
        assert_eq!(lerp_weight(1.0, 2.0, 2.0), 0.0);
    }
}
