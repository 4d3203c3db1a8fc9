use crate::constants::MU_EARTH;
use crate::models::spacecraft::SpacecraftProperties;
use crate::models::state::SimulationState;
use nalgebra as na;

pub fn calculate_energy<T: SpacecraftProperties>(state: &SimulationState<T>) -> f64 {
    let r = state.position.magnitude();
    let v = state.velocity.magnitude();
    let mass = state.spacecraft.mass();

    let kinetic = 0.5 * mass * v * v;
    let potential = -MU_EARTH * mass / r;

    kinetic + potential
}

pub fn calculate_angular_momentum<T: SpacecraftProperties>(
    state: &SimulationState<T>,
) -> na::Vector3<f64> {
    state.position.cross(&(state.velocity * state.spacecraft.mass()))
}
