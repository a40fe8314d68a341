//! Free-function vector operations on top of glam's `Vec3`.

use crate::Vec3;

/// Dot product.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

/// Cross product (right-handed).
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Squared Euclidean length.
#[inline]
pub fn squared_length(v: Vec3) -> f32 {
    v.length_squared()
}

/// Normalize `v` in place and return it for chaining.
///
/// `v` must have non-zero length. This is not checked in release builds;
/// the result for a zero vector is NaN.
#[inline]
pub fn normalize_in_place(v: &mut Vec3) -> &mut Vec3 {
    debug_assert!(v.length_squared() > 0.0, "normalize of zero-length vector");
    let inv_len = 1.0 / v.length();
    *v *= inv_len;
    v
}

/// Reflect `v` about the unit normal `n`: `v - 2 * dot(v, n) * n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Clamp `x` to `[min, max]`.
#[inline]
pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_cross() {
        assert_eq!(dot(Vec3::X, Vec3::Y), 0.0);
        assert_eq!(dot(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)), 32.0);
        assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::Z);
        assert_eq!(cross(Vec3::Y, Vec3::X), -Vec3::Z);
    }

    #[test]
    fn test_length() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(squared_length(v), 25.0);
    }

    #[test]
    fn test_normalize_in_place() {
        let mut v = Vec3::new(0.0, 3.0, 4.0);
        normalize_in_place(&mut v);
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);

        // Chaining returns the same vector
        let mut w = Vec3::new(2.0, 0.0, 0.0);
        let out = *normalize_in_place(&mut w);
        assert_eq!(out, Vec3::X);
        assert_eq!(w, Vec3::X);
    }

    #[test]
    fn test_reflect() {
        let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));

        // Reflecting twice gives the original vector back
        let n = Vec3::new(1.0, 1.0, 0.0).normalize();
        let v = Vec3::new(0.3, -0.7, 0.2);
        assert!((reflect(reflect(v, n), n) - v).length() < 1e-6);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
    }
}
