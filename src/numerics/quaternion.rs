use nalgebra as na;

/// Quaternion utilities for spacecraft attitude dynamics
/// Following scalar-first convention: q = [q0; q1; q2; q3] = [w; x; y; z]
#[derive(Debug, Clone)]
pub struct Quaternion {
    pub data: na::Vector4<f64>,
}

impl Quaternion {
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Quaternion {
            data: na::Vector4::new(w, x, y, z),
        }
    }

    pub fn identity() -> Self {
        Quaternion::new(1.0, 0.0, 0.0, 0.0)
    }

    pub fn scalar(&self) -> f64 {
        self.data[0]
    }

    pub fn vector(&self) -> na::Vector3<f64> {
        na::Vector3::new(self.data[1], self.data[2], self.data[3])
    }

    pub fn norm(&self) -> f64 {
        self.data.magnitude()
    }

    pub fn normalize(&self) -> Self {
        Quaternion {
            data: self.data.normalize(),
        }
    }

    /// Conjugate divided by the squared norm. For the unit quaternions this
    /// simulation carries, this is the conjugate.
    pub fn inverse(&self) -> Self {
        let norm_sq = self.data.magnitude_squared();
        Quaternion {
            data: na::Vector4::new(
                self.data[0] / norm_sq,
                -self.data[1] / norm_sq,
                -self.data[2] / norm_sq,
                -self.data[3] / norm_sq,
            ),
        }
    }

    pub fn to_rotation_matrix(&self) -> na::Matrix3<f64> {
        let q0 = self.data[0];
        let q1 = self.data[1];
        let q2 = self.data[2];
        let q3 = self.data[3];

        na::Matrix3::new(
            1.0-2.0*(q2*q2+q3*q3), 2.0*(q1*q2-q0*q3),     2.0*(q1*q3+q0*q2),
            2.0*(q1*q2+q0*q3),     1.0-2.0*(q1*q1+q3*q3), 2.0*(q2*q3-q0*q1),
            2.0*(q1*q3-q0*q2),     2.0*(q2*q3+q0*q1),     1.0-2.0*(q1*q1+q2*q2)
        )
    }

    /// Converts a rotation matrix to a unit quaternion, branching on the
    /// largest diagonal element to keep the division well-conditioned.
    pub fn from_rotation_matrix(m: &na::Matrix3<f64>) -> Self {
        let trace = m[(0, 0)] + m[(1, 1)] + m[(2, 2)];

        let q = if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Quaternion::new(
                0.25 * s,
                (m[(2, 1)] - m[(1, 2)]) / s,
                (m[(0, 2)] - m[(2, 0)]) / s,
                (m[(1, 0)] - m[(0, 1)]) / s,
            )
        } else if m[(0, 0)] > m[(1, 1)] && m[(0, 0)] > m[(2, 2)] {
            let s = (1.0 + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]).sqrt() * 2.0;
            Quaternion::new(
                (m[(2, 1)] - m[(1, 2)]) / s,
                0.25 * s,
                (m[(0, 1)] + m[(1, 0)]) / s,
                (m[(0, 2)] + m[(2, 0)]) / s,
            )
        } else if m[(1, 1)] > m[(2, 2)] {
            let s = (1.0 + m[(1, 1)] - m[(0, 0)] - m[(2, 2)]).sqrt() * 2.0;
            Quaternion::new(
                (m[(0, 2)] - m[(2, 0)]) / s,
                (m[(0, 1)] + m[(1, 0)]) / s,
                0.25 * s,
                (m[(1, 2)] + m[(2, 1)]) / s,
            )
        } else {
            let s = (1.0 + m[(2, 2)] - m[(0, 0)] - m[(1, 1)]).sqrt() * 2.0;
            Quaternion::new(
                (m[(1, 0)] - m[(0, 1)]) / s,
                (m[(0, 2)] + m[(2, 0)]) / s,
                (m[(1, 2)] + m[(2, 1)]) / s,
                0.25 * s,
            )
        };

        q.normalize()
    }

    pub fn multiply(&self, other: &Quaternion) -> Self {
        let q1 = self;
        let q2 = other;

        Quaternion::new(
            q1.scalar() * q2.scalar() - q1.vector().dot(&q2.vector()),
            q1.scalar() * q2.vector()[0] + q2.scalar() * q1.vector()[0] +
                (q1.vector()[1] * q2.vector()[2] - q1.vector()[2] * q2.vector()[1]),
            q1.scalar() * q2.vector()[1] + q2.scalar() * q1.vector()[1] +
                (q1.vector()[2] * q2.vector()[0] - q1.vector()[0] * q2.vector()[2]),
            q1.scalar() * q2.vector()[2] + q2.scalar() * q1.vector()[2] +
                (q1.vector()[0] * q2.vector()[1] - q1.vector()[1] * q2.vector()[0])
        ).normalize()
    }

    /// Rotation axis and angle. A degenerate rotation (angle ≈ 0) yields a
    /// zero axis and zero angle instead of NaN.
    pub fn axis_angle(&self) -> (na::Vector3<f64>, f64) {
        let w = self.data[0].clamp(-1.0, 1.0);
        let half_sin = (1.0 - w * w).sqrt();

        if half_sin < 1e-8 {
            (na::Vector3::zeros(), 0.0)
        } else {
            (self.vector() / half_sin, 2.0 * w.acos())
        }
    }
}

impl std::ops::Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Quaternion {
            data: self.data + other.data,
        }
    }
}

impl std::ops::Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Quaternion {
            data: self.data * scalar,
        }
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Quaternion { data: -self.data }
    }
}

/// Quaternion kinematics q̇ = ½ ω_quat ∘ q for an inertial-frame angular
/// rate ω. The result is unnormalized; callers integrate and re-normalize.
pub fn compute_quaternion_derivative(q: &Quaternion, w: &na::Vector3<f64>) -> Quaternion {
    let wx = w[0];
    let wy = w[1];
    let wz = w[2];

    Quaternion::new(
        -0.5 * (wx * q.data[1] + wy * q.data[2] + wz * q.data[3]),
         0.5 * (wx * q.data[0] + wy * q.data[3] - wz * q.data[2]),
         0.5 * (wy * q.data[0] + wz * q.data[1] - wx * q.data[3]),
         0.5 * (wz * q.data[0] + wx * q.data[2] - wy * q.data[1]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    #[test]
    fn rotation_matrix_round_trip() {
        let q = Quaternion::new((PI / 8.0).cos(), 0.0, (PI / 8.0).sin(), 0.0);
        let round_tripped = Quaternion::from_rotation_matrix(&q.to_rotation_matrix());
        assert_abs_diff_eq!(round_tripped.data, q.data, epsilon = 1e-12);
    }

    #[test]
    fn from_rotation_matrix_handles_negative_trace() {
        // 180° about y: trace is -1, the naive scalar-first formula divides
        // by zero here
        let m = na::Matrix3::new(
            -1.0, 0.0, 0.0,
             0.0, 1.0, 0.0,
             0.0, 0.0, -1.0,
        );
        let q = Quaternion::from_rotation_matrix(&m);
        assert_abs_diff_eq!(q.scalar(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.vector(), na::Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn multiply_with_inverse_is_identity() {
        let q = Quaternion::new(0.5, 0.5, -0.5, 0.5);
        let product = q.multiply(&q.inverse());
        assert_abs_diff_eq!(product.scalar(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(product.vector(), na::Vector3::zeros(), epsilon = 1e-12);
    }

    #[test]
    fn axis_angle_of_quarter_turn() {
        let q = Quaternion::new((PI / 4.0).cos(), 0.0, 0.0, (PI / 4.0).sin());
        let (axis, angle) = q.axis_angle();
        assert_relative_eq!(angle, PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(axis, na::Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn axis_angle_of_identity_is_neutral() {
        let (axis, angle) = Quaternion::identity().axis_angle();
        assert_eq!(angle, 0.0);
        assert_eq!(axis, na::Vector3::zeros());
    }

    #[test]
    fn derivative_of_identity_is_half_rate() {
        let w = na::Vector3::new(0.2, -0.4, 0.6);
        let q_dot = compute_quaternion_derivative(&Quaternion::identity(), &w);
        assert_abs_diff_eq!(q_dot.scalar(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q_dot.vector(), w * 0.5, epsilon = 1e-12);
    }
}
