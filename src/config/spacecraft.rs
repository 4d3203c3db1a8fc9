use crate::models::spacecraft::SpacecraftProperties;
use nalgebra as na;

/// 1U CubeSat vehicle definition.
pub struct CubeSat1U;

impl CubeSat1U {
    pub const MASS: f64 = 1.33; // kg

    /// Principal-axis inertia (kg·m²).
    pub fn inertia_diag() -> na::Vector3<f64> {
        na::Vector3::new(0.0010, 0.0012, 0.0011)
    }
}

impl SpacecraftProperties for CubeSat1U {
    fn mass(&self) -> f64 {
        Self::MASS
    }

    fn inertia_diag(&self) -> na::Vector3<f64> {
        Self::inertia_diag()
    }
}
