use nalgebra as na;

/// Constant rigid-body inertia, fixed at construction for the lifetime of
/// the simulated vehicle. The inverse is precomputed; nothing is inverted
/// mid-step.
#[derive(Debug, Clone, Copy)]
pub struct RigidBodyInertia {
    tensor: na::Matrix3<f64>,
    inverse: na::Matrix3<f64>,
    diag: na::Vector3<f64>,
}

impl RigidBodyInertia {
    pub fn from_diagonal(diag: na::Vector3<f64>) -> Self {
        let tensor = na::Matrix3::from_diagonal(&diag);
        let inverse = na::Matrix3::from_diagonal(&na::Vector3::new(
            1.0 / diag.x,
            1.0 / diag.y,
            1.0 / diag.z,
        ));
        RigidBodyInertia {
            tensor,
            inverse,
            diag,
        }
    }

    pub fn tensor(&self) -> &na::Matrix3<f64> {
        &self.tensor
    }

    pub fn inverse(&self) -> &na::Matrix3<f64> {
        &self.inverse
    }

    pub fn diag(&self) -> na::Vector3<f64> {
        self.diag
    }
}
