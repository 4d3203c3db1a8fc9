use crate::constants::{MAX_DELTA_TIME, SUB_STEPS};
use crate::gnc::control::nadir_controller::NadirController;
use crate::integrators::verlet::propagate_orbit;
use crate::models::spacecraft::SpacecraftProperties;
use crate::models::state::SimulationState;
use crate::physics::attitude::integrate_attitude;

/// Caps a frame's elapsed time at `MAX_DELTA_TIME`. Render stalls reach
/// the integrators as a clamped step, never a large one.
pub fn clamp_timestep(elapsed: f64) -> f64 {
    elapsed.min(MAX_DELTA_TIME)
}

/// Advances the simulation by one frame. The clamped elapsed time is split
/// into equal sub-steps; each sub-step propagates the orbit, runs the nadir
/// control law, applies the command through the wheel array, and integrates
/// the body attitude under the wheels' reaction torque.
///
/// Wall-clock time is never read here; `elapsed` is the caller's single
/// clock sample for the frame.
pub fn advance<T: SpacecraftProperties>(
    state: &mut SimulationState<T>,
    controller: &NadirController,
    elapsed: f64,
) {
    let frame_dt = clamp_timestep(elapsed);
    let dt = frame_dt / SUB_STEPS as f64;

    for _ in 0..SUB_STEPS {
        propagate_orbit(state, dt);

        let command = controller.compute_control_torque(state);
        state.wheels.apply_torque_commands(&command.torque, dt);
        state.wheels.update(dt);
        let reaction_torque = state.wheels.compute_reaction_torque(dt);

        integrate_attitude(state, &reaction_torque, dt);
    }

    state.sim_elapsed_time += frame_dt;
}
