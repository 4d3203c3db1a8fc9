use crate::gnc::control::nadir_controller::NadirCommand;
use crate::models::spacecraft::SpacecraftProperties;
use crate::models::state::SimulationState;
use crate::physics::energy::{calculate_angular_momentum, calculate_energy};
use nalgebra as na;
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::Path;

/// One telemetry sample. Field renames become the CSV header row.
#[derive(Debug, Serialize)]
pub struct TelemetryRecord {
    #[serde(rename = "UTC Time")]
    pub utc_time: String,
    #[serde(rename = "Time (s)")]
    pub time: f64,
    #[serde(rename = "Position X (km)")]
    pub position_x: f64,
    #[serde(rename = "Position Y (km)")]
    pub position_y: f64,
    #[serde(rename = "Position Z (km)")]
    pub position_z: f64,
    #[serde(rename = "Velocity X (km/s)")]
    pub velocity_x: f64,
    #[serde(rename = "Velocity Y (km/s)")]
    pub velocity_y: f64,
    #[serde(rename = "Velocity Z (km/s)")]
    pub velocity_z: f64,
    #[serde(rename = "Quaternion W")]
    pub quaternion_w: f64,
    #[serde(rename = "Quaternion X")]
    pub quaternion_x: f64,
    #[serde(rename = "Quaternion Y")]
    pub quaternion_y: f64,
    #[serde(rename = "Quaternion Z")]
    pub quaternion_z: f64,
    #[serde(rename = "Angular Velocity X (rad/s)")]
    pub angular_velocity_x: f64,
    #[serde(rename = "Angular Velocity Y (rad/s)")]
    pub angular_velocity_y: f64,
    #[serde(rename = "Angular Velocity Z (rad/s)")]
    pub angular_velocity_z: f64,
    #[serde(rename = "Pointing Error (deg)")]
    pub pointing_error: f64,
    #[serde(rename = "Wheel 1 Speed (rad/s)")]
    pub wheel_speed_1: f64,
    #[serde(rename = "Wheel 2 Speed (rad/s)")]
    pub wheel_speed_2: f64,
    #[serde(rename = "Wheel 3 Speed (rad/s)")]
    pub wheel_speed_3: f64,
    #[serde(rename = "Reaction Torque X (N⋅m)")]
    pub reaction_torque_x: f64,
    #[serde(rename = "Reaction Torque Y (N⋅m)")]
    pub reaction_torque_y: f64,
    #[serde(rename = "Reaction Torque Z (N⋅m)")]
    pub reaction_torque_z: f64,
    #[serde(rename = "Energy Error")]
    pub energy_error: f64,
    #[serde(rename = "Angular Momentum Error")]
    pub angular_momentum_error: f64,
}

impl TelemetryRecord {
    pub fn sample<T: SpacecraftProperties>(
        state: &SimulationState<T>,
        command: &NadirCommand,
        initial_energy: f64,
        initial_angular_momentum: &na::Vector3<f64>,
    ) -> Self {
        let current_energy = calculate_energy(state);
        let current_angular_momentum = calculate_angular_momentum(state);

        let energy_error = (current_energy - initial_energy).abs() / initial_energy.abs();
        let angular_momentum_error = (current_angular_momentum - initial_angular_momentum)
            .magnitude()
            / initial_angular_momentum.magnitude();

        let reaction_torque = state.wheels.reaction_torque();

        TelemetryRecord {
            utc_time: state.epoch.to_string(),
            time: state.sim_elapsed_time,
            position_x: state.position.x / 1000.0,
            position_y: state.position.y / 1000.0,
            position_z: state.position.z / 1000.0,
            velocity_x: state.velocity.x / 1000.0,
            velocity_y: state.velocity.y / 1000.0,
            velocity_z: state.velocity.z / 1000.0,
            quaternion_w: state.quaternion.scalar(),
            quaternion_x: state.quaternion.vector()[0],
            quaternion_y: state.quaternion.vector()[1],
            quaternion_z: state.quaternion.vector()[2],
            angular_velocity_x: state.angular_velocity[0],
            angular_velocity_y: state.angular_velocity[1],
            angular_velocity_z: state.angular_velocity[2],
            pointing_error: command.error_angle.to_degrees(),
            wheel_speed_1: state.wheels.wheel_speed(0),
            wheel_speed_2: state.wheels.wheel_speed(1),
            wheel_speed_3: state.wheels.wheel_speed(2),
            reaction_torque_x: reaction_torque.x,
            reaction_torque_y: reaction_torque.y,
            reaction_torque_z: reaction_torque.z,
            energy_error,
            angular_momentum_error,
        }
    }
}

pub struct TelemetryWriter<W: io::Write> {
    writer: csv::Writer<W>,
}

impl TelemetryWriter<File> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, csv::Error> {
        let file = File::create(path)?;
        Ok(TelemetryWriter {
            writer: csv::Writer::from_writer(file),
        })
    }
}

impl<W: io::Write> TelemetryWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        TelemetryWriter {
            writer: csv::Writer::from_writer(writer),
        }
    }

    pub fn record(&mut self, record: &TelemetryRecord) -> Result<(), csv::Error> {
        self.writer.serialize(record)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
