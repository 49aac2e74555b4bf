//! Degree helpers for camera angles

/// Wrap an angle in degrees into (-180, 180] with at most one correction
///
/// Subtracts 360 when the angle is at or above 180, then adds 360 when it is
/// at or below -180. Inputs more than one turn out of range come back still
/// out of range; per-frame camera deltas never get that large.
#[inline]
pub fn wrap_degrees_once(mut degrees: f32) -> f32 {
    if degrees >= 180.0 {
        degrees -= 360.0;
    }
    if degrees <= -180.0 {
        degrees += 360.0;
    }
    degrees
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_untouched() {
        assert_eq!(wrap_degrees_once(0.0), 0.0);
        assert_eq!(wrap_degrees_once(179.5), 179.5);
        assert_eq!(wrap_degrees_once(-179.5), -179.5);
    }

    #[test]
    fn test_wraps_over_the_top() {
        assert_eq!(wrap_degrees_once(184.0), -176.0);
        assert_eq!(wrap_degrees_once(-190.0), 170.0);
    }

    #[test]
    fn test_boundaries() {
        // 180 drops to -180, which bounces back to 180
        assert_eq!(wrap_degrees_once(180.0), 180.0);
        assert_eq!(wrap_degrees_once(-180.0), 180.0);
    }

    #[test]
    fn test_single_wrap_only() {
        // More than a full turn past the bound is not fully normalized
        assert_eq!(wrap_degrees_once(600.0), 240.0);
    }
}
