use hifitime::{Duration, Epoch};
use nadirsat::config::spacecraft::CubeSat1U;
use nadirsat::constants::{MAX_DELTA_TIME, ORBIT_ALTITUDE, R_EARTH};
use nadirsat::gnc::control::nadir_controller::NadirController;
use nadirsat::models::spacecraft::SpacecraftProperties;
use nadirsat::models::SimulationState;
use nadirsat::numerics::quaternion::Quaternion;
use nadirsat::physics::energy::{calculate_angular_momentum, calculate_energy};
use nadirsat::physics::orbital::OrbitalMechanics;
use nadirsat::sim;
use nadirsat::telemetry::{TelemetryRecord, TelemetryWriter};
use nalgebra as na;
use std::error::Error;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    static SPACECRAFT: CubeSat1U = CubeSat1U;

    // 400 km circular orbit, built in unscaled meters
    let radius = R_EARTH + ORBIT_ALTITUDE;
    let position = na::Vector3::new(0.0, 0.0, radius);
    let orbit_dir = na::Vector3::y().cross(&position).normalize();
    let velocity = orbit_dir * OrbitalMechanics::compute_circular_velocity(radius);

    let start_time = Epoch::from_gregorian_utc(2025, 6, 1, 12, 0, 0, 0);

    // Launch dispersion: identity attitude with a residual tip-off rate,
    // leaving the controller the full acquisition slew
    let mut state = SimulationState::new(
        &SPACECRAFT,
        position,
        velocity,
        Quaternion::identity(),
        na::Vector3::new(0.01, 0.0, 0.0),
        start_time,
    );

    let controller = NadirController::new(SPACECRAFT.inertia_diag(), 0.3, 1.0);

    let initial_energy = calculate_energy(&state);
    let initial_angular_momentum = calculate_angular_momentum(&state);

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;
    let mut telemetry = TelemetryWriter::create(output_dir.join("telemetry.csv"))?;

    let frame_dt = MAX_DELTA_TIME;
    let simulation_time = 600.0;
    let frames = (simulation_time / frame_dt) as usize;

    for i in 0..frames {
        sim::advance(&mut state, &controller, frame_dt);
        state.epoch = start_time + Duration::from_seconds(state.sim_elapsed_time);

        // Sample telemetry every second of simulated time
        if i % 100 == 0 {
            let command = controller.compute_control_torque(&state);
            telemetry.record(&TelemetryRecord::sample(
                &state,
                &command,
                initial_energy,
                &initial_angular_momentum,
            ))?;
        }
    }

    telemetry.flush()?;
    println!("Telemetry written to output/telemetry.csv");

    Ok(())
}
