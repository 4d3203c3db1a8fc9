use crate::actuators::reaction_wheel_system::ReactionWheelSystem;
use crate::constants::SCALE_FACTOR;
use crate::models::inertia::RigidBodyInertia;
use crate::models::spacecraft::SpacecraftProperties;
use crate::numerics::quaternion::Quaternion;
use hifitime::Epoch;
use nalgebra as na;

/// Shared simulation record, mutated in place once per sub-step by the
/// orchestrating loop. Orbital state is kept in unscaled meters; rendering
/// collaborators read `display_position` instead.
#[derive(Debug)]
pub struct SimulationState<'a, T: SpacecraftProperties> {
    pub spacecraft: &'a T,
    pub inertia: RigidBodyInertia,

    // Orbital state
    pub position: na::Vector3<f64>,
    pub velocity: na::Vector3<f64>,

    // Attitude state
    pub quaternion: Quaternion,
    pub angular_velocity: na::Vector3<f64>,

    pub wheels: ReactionWheelSystem,

    // Time properties
    pub epoch: Epoch,
    pub sim_elapsed_time: f64,
}

impl<'a, T: SpacecraftProperties> SimulationState<'a, T> {
    pub fn new(
        spacecraft: &'a T,
        position: na::Vector3<f64>,
        velocity: na::Vector3<f64>,
        quaternion: Quaternion,
        angular_velocity: na::Vector3<f64>,
        epoch: Epoch,
    ) -> Self {
        SimulationState {
            spacecraft,
            inertia: RigidBodyInertia::from_diagonal(spacecraft.inertia_diag()),
            position,
            velocity,
            quaternion,
            angular_velocity,
            wheels: ReactionWheelSystem::new(),
            epoch,
            sim_elapsed_time: 0.0,
        }
    }

    /// Position in display units for the rendering collaborator. The scale
    /// factor is applied here and nowhere else.
    pub fn display_position(&self) -> na::Vector3<f64> {
        self.position * SCALE_FACTOR
    }
}

impl<'a, T: SpacecraftProperties> Clone for SimulationState<'a, T> {
    fn clone(&self) -> Self {
        SimulationState {
            spacecraft: self.spacecraft,
            inertia: self.inertia,
            position: self.position,
            velocity: self.velocity,
            quaternion: self.quaternion.clone(),
            angular_velocity: self.angular_velocity,
            wheels: self.wheels.clone(),
            epoch: self.epoch,
            sim_elapsed_time: self.sim_elapsed_time,
        }
    }
}
