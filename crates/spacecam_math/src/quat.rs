//! Quaternion rotations
//!
//! Only the pieces the camera transform needs: axis-angle construction,
//! yaw-only rotation, composition and vector rotation.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use crate::Vec3;

/// Unit quaternion `w + xi + yj + zk`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quat {
    /// Vector part, i
    pub x: f32,
    /// Vector part, j
    pub y: f32,
    /// Vector part, k
    pub z: f32,
    /// Scalar part
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Rotation of `angle` radians around `axis`
    ///
    /// The axis does not need to be unit length. A zero axis yields identity.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let axis = axis.normalized();
        if axis == Vec3::ZERO {
            return Self::IDENTITY;
        }

        let half = angle * 0.5;
        let sin_h = half.sin();
        Self {
            x: axis.x * sin_h,
            y: axis.y * sin_h,
            z: axis.z * sin_h,
            w: half.cos(),
        }
    }

    /// Rotation of `degrees` around `axis`
    #[inline]
    pub fn from_axis_angle_degrees(axis: Vec3, degrees: f32) -> Self {
        Self::from_axis_angle(axis, degrees.to_radians())
    }

    /// Yaw-only rotation around +Y
    ///
    /// Positive yaw turns +Z toward +X, matching the host camera azimuth.
    #[inline]
    pub fn from_yaw_degrees(degrees: f32) -> Self {
        Self::from_axis_angle_degrees(Vec3::Y, degrees)
    }

    /// Squared magnitude
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Magnitude
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Normalize to unit magnitude
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            let inv_mag = 1.0 / mag;
            Self {
                x: self.x * inv_mag,
                y: self.y * inv_mag,
                z: self.z * inv_mag,
                w: self.w * inv_mag,
            }
        } else {
            Self::IDENTITY
        }
    }

    /// Conjugate, the inverse rotation for unit quaternions
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self { x: -self.x, y: -self.y, z: -self.z, w: self.w }
    }

    /// Compose two rotations: `self * other` applies `other` first
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            z: self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
        }
    }

    /// Rotate a vector
    ///
    /// Uses `v' = v + w*t + u x t` with `t = 2 * (u x v)`, `u` the vector part.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let u = Vec3::new(self.x, self.y, self.z);
        let t = u.cross(v) * 2.0;
        v + t * self.w + u.cross(t)
    }
}

impl std::ops::Mul for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        self.compose(&other)
    }
}

impl std::ops::Mul<Vec3> for Quat {
    type Output = Vec3;
    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        self.rotate(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn test_identity_rotation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(Quat::IDENTITY.rotate(v), v));
    }

    #[test]
    fn test_yaw_90_turns_forward_to_right() {
        let q = Quat::from_yaw_degrees(90.0);
        let rotated = q * Vec3::Z;
        assert!(vec_approx_eq(rotated, Vec3::X), "Expected X, got {:?}", rotated);

        // Up is untouched by yaw
        assert!(vec_approx_eq(q * Vec3::Y, Vec3::Y));
    }

    #[test]
    fn test_yaw_180_reverses_forward() {
        let rotated = Quat::from_yaw_degrees(180.0) * Vec3::new(0.0, 0.0, -5.0);
        assert!(vec_approx_eq(rotated, Vec3::new(0.0, 0.0, 5.0)), "got {:?}", rotated);
    }

    #[test]
    fn test_zero_axis_is_identity() {
        assert_eq!(Quat::from_axis_angle(Vec3::ZERO, 1.0), Quat::IDENTITY);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, -0.5), 1.23);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(approx_eq(v.length(), q.rotate(v).length()));
    }

    #[test]
    fn test_compose_inverse() {
        let q = Quat::from_axis_angle(Vec3::new(0.3, 1.0, 0.2), 0.8);
        let composed = q * q.conjugate();
        assert!(approx_eq(composed.normalize().w, 1.0), "Expected identity, got {:?}", composed);
    }

    #[test]
    fn test_compose_adds_yaw() {
        let a = Quat::from_yaw_degrees(30.0);
        let b = Quat::from_yaw_degrees(60.0);
        let rotated = (a * b) * Vec3::Z;
        assert!(vec_approx_eq(rotated, Vec3::X), "got {:?}", rotated);
    }

    #[test]
    fn test_normalize() {
        let mut q = Quat::from_yaw_degrees(45.0);
        q.w *= 2.0;
        q.y *= 2.0;
        assert!(approx_eq(q.normalize().magnitude(), 1.0));
    }
}
