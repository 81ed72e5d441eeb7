//! Three-point piecewise-linear scales.

use crate::style::ConfigurationError;

/// Zoom control points shared by every scale: far out, neutral, close in.
pub const ZOOM_DOMAIN: [f64; 3] = [0.25, 1.0, 4.0];

/// A piecewise-linear map through three control points.
///
/// Inputs between two control points are interpolated linearly. Inputs
/// outside the domain are extrapolated from the nearest segment, so the
/// output is never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiecewiseScale {
    domain: [f64; 3],
    range: [f64; 3],
}

impl PiecewiseScale {
    /// Creates a scale, checking that the domain is finite and strictly increasing.
    pub fn new(domain: [f64; 3], range: [f64; 3]) -> Result<Self, ConfigurationError> {
        validate_domain(domain)?;
        if let Some(&value) = range.iter().find(|v| !v.is_finite()) {
            return Err(ConfigurationError::NonFinite { value });
        }
        Ok(Self { domain, range })
    }

    /// Scale over [`ZOOM_DOMAIN`] with an unchecked range.
    pub(crate) const fn zoom(range: [f64; 3]) -> Self {
        Self {
            domain: ZOOM_DOMAIN,
            range,
        }
    }

    /// Same domain, different range. The domain was validated when `self` was built.
    pub(crate) const fn with_range(&self, range: [f64; 3]) -> Self {
        Self {
            domain: self.domain,
            range,
        }
    }

    pub fn domain(&self) -> [f64; 3] {
        self.domain
    }

    pub fn range(&self) -> [f64; 3] {
        self.range
    }

    /// Maps `x` through the scale.
    pub fn apply(&self, x: f64) -> f64 {
        // Segment 0 covers everything below the middle point, segment 1 the rest.
        let i = if x < self.domain[1] { 0 } else { 1 };
        let (d0, d1) = (self.domain[i], self.domain[i + 1]);
        let (r0, r1) = (self.range[i], self.range[i + 1]);
        let t = (x - d0) / (d1 - d0);
        r0 + (r1 - r0) * t
    }
}

/// Checks that the control points are finite and strictly increasing.
pub fn validate_domain(domain: [f64; 3]) -> Result<(), ConfigurationError> {
    if let Some(&value) = domain.iter().find(|v| !v.is_finite()) {
        return Err(ConfigurationError::NonFinite { value });
    }
    if domain[0] < domain[1] && domain[1] < domain[2] {
        Ok(())
    } else {
        Err(ConfigurationError::UnorderedDomain { domain })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn control_points_map_to_range(
            min in -50.0f64..50.0,
            d1 in 0.0f64..50.0,
            d2 in 0.0f64..50.0,
        ) {
            let (normal, max) = (min + d1, min + d1 + d2);
            let scale = PiecewiseScale::zoom([min, normal, max]);

            prop_assert!((scale.apply(0.25) - min).abs() < 1e-9);
            prop_assert!((scale.apply(1.0) - normal).abs() < 1e-9);
            prop_assert!((scale.apply(4.0) - max).abs() < 1e-9);
        }

        #[test]
        fn monotonic_for_ordered_range(
            min in 0.0f64..20.0,
            d1 in 0.0f64..20.0,
            d2 in 0.0f64..20.0,
            a in 0.0f64..8.0,
            b in 0.0f64..8.0,
        ) {
            let scale = PiecewiseScale::zoom([min, min + d1, min + d1 + d2]);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

            prop_assert!(
                scale.apply(lo) <= scale.apply(hi) + 1e-9,
                "apply({}) = {} > apply({}) = {}",
                lo, scale.apply(lo), hi, scale.apply(hi)
            );
        }
    }
}
