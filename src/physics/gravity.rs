use crate::constants::MU_EARTH;
use nalgebra as na;

/// Point-mass gravitational acceleration toward the primary at the origin.
/// Callers guarantee a non-zero radius.
pub fn gravity_acceleration(position: &na::Vector3<f64>) -> na::Vector3<f64> {
    let r: f64 = position.magnitude();
    let acceleration_magnitude: f64 = -MU_EARTH / (r * r);
    position.normalize() * acceleration_magnitude
}
