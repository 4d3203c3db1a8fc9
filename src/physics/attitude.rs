use crate::models::spacecraft::SpacecraftProperties;
use crate::models::state::SimulationState;
use crate::numerics::quaternion::compute_quaternion_derivative;
use nalgebra as na;

/// Integrates rigid-body rotational dynamics under the applied torque.
///
/// Euler's equation gives the angular acceleration; the angular velocity is
/// updated first and the updated rate drives the quaternion kinematics
/// (semi-implicit coupling). The quaternion is re-normalized every step.
pub fn integrate_attitude<T: SpacecraftProperties>(
    state: &mut SimulationState<T>,
    applied_torque: &na::Vector3<f64>,
    dt: f64,
) {
    let omega = state.angular_velocity;

    let angular_momentum = state.inertia.tensor() * omega;
    let gyroscopic = omega.cross(&angular_momentum);
    let angular_acc = state.inertia.inverse() * (applied_torque - gyroscopic);

    // Integrate angular velocity
    state.angular_velocity += angular_acc * dt;

    // Integrate orientation from the updated rate
    let q_dot = compute_quaternion_derivative(&state.quaternion, &state.angular_velocity);
    state.quaternion = (state.quaternion.clone() + q_dot * dt).normalize();
}
