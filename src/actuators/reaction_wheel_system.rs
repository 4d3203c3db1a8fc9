use super::reaction_wheel::ReactionWheel;
use nalgebra as na;

pub const NUM_WHEELS: usize = 3;

/// Rotor spin inertia per wheel (kg·m²).
const WHEEL_INERTIA: f64 = 0.01;

/// Three orthogonal reaction wheels spanning the body torque space.
///
/// Owns the momentum reference left by the previous reaction-torque
/// computation; instances share no state.
#[derive(Debug, Clone)]
pub struct ReactionWheelSystem {
    wheels: [ReactionWheel; NUM_WHEELS],
    previous_momentum: na::Vector3<f64>,
    last_reaction_torque: na::Vector3<f64>,
}

impl ReactionWheelSystem {
    pub fn new() -> Self {
        ReactionWheelSystem {
            wheels: [
                ReactionWheel::new(na::Vector3::x(), WHEEL_INERTIA),
                ReactionWheel::new(na::Vector3::y(), WHEEL_INERTIA),
                ReactionWheel::new(na::Vector3::z(), WHEEL_INERTIA),
            ],
            previous_momentum: na::Vector3::zeros(),
            last_reaction_torque: na::Vector3::zeros(),
        }
    }

    /// Routes torque component `i` to wheel `i`. The command is expected in
    /// wheel-axis coordinates; no allocation matrix is applied.
    pub fn apply_torque_commands(&mut self, torques: &na::Vector3<f64>, dt: f64) {
        for (i, wheel) in self.wheels.iter_mut().enumerate() {
            wheel.apply_torque(torques[i], dt);
        }
    }

    pub fn update(&mut self, dt: f64) {
        for wheel in &mut self.wheels {
            wheel.update(dt);
        }
    }

    pub fn total_momentum(&self) -> na::Vector3<f64> {
        self.wheels
            .iter()
            .fold(na::Vector3::zeros(), |sum, wheel| sum + wheel.angular_momentum())
    }

    /// Net torque the wheel array exerts on the body: the negated momentum
    /// derivative since the previous call. The first call differences
    /// against a zero reference.
    pub fn compute_reaction_torque(&mut self, dt: f64) -> na::Vector3<f64> {
        let current_momentum = self.total_momentum();
        self.last_reaction_torque = -(current_momentum - self.previous_momentum) / dt;
        self.previous_momentum = current_momentum;

        self.last_reaction_torque
    }

    /// Last value computed by `compute_reaction_torque`, unchanged until the
    /// next call.
    pub fn reaction_torque(&self) -> na::Vector3<f64> {
        self.last_reaction_torque
    }

    pub fn speeds(&self) -> [f64; NUM_WHEELS] {
        [
            self.wheels[0].angular_velocity(),
            self.wheels[1].angular_velocity(),
            self.wheels[2].angular_velocity(),
        ]
    }

    pub fn wheel_speed(&self, idx: usize) -> f64 {
        self.wheels[idx].angular_velocity()
    }

    pub fn wheel_axis(&self, idx: usize) -> na::Vector3<f64> {
        self.wheels[idx].axis()
    }
}

impl Default for ReactionWheelSystem {
    fn default() -> Self {
        Self::new()
    }
}
