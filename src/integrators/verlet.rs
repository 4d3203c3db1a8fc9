use crate::models::spacecraft::SpacecraftProperties;
use crate::models::state::SimulationState;
use crate::physics::gravity::gravity_acceleration;

/// Velocity-Verlet propagation of the two-body orbit, in unscaled meters.
///
/// The velocity update averages the accelerations sampled before and after
/// the position update; the second sample must use the updated position.
pub fn propagate_orbit<T: SpacecraftProperties>(state: &mut SimulationState<T>, dt: f64) {
    let accel_initial = gravity_acceleration(&state.position);

    // Update position
    state.position += state.velocity * dt + accel_initial * (0.5 * dt * dt);

    // Recompute acceleration at the new position
    let accel_final = gravity_acceleration(&state.position);

    // Update velocity
    state.velocity += (accel_initial + accel_final) * (0.5 * dt);
}
