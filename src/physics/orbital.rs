use crate::constants::{MU_EARTH, PI};

pub struct OrbitalMechanics;

impl OrbitalMechanics {
    pub fn compute_orbital_period(a: f64) -> f64 {
        2.0 * PI * (a.powi(3) / MU_EARTH).sqrt()
    }

    pub fn compute_circular_velocity(r: f64) -> f64 {
        (MU_EARTH / r).sqrt()
    }

    /// Mean motion of a circular orbit of radius `r` (rad/s). `r` is the
    /// unscaled radius in meters.
    pub fn compute_orbital_rate(r: f64) -> f64 {
        (MU_EARTH / (r * r * r)).sqrt()
    }
}
