use nalgebra as na;

/// Single momentum-exchange wheel spinning about a fixed body axis.
#[derive(Debug, Clone)]
pub struct ReactionWheel {
    axis: na::Vector3<f64>,
    inertia: f64,
    angular_velocity: f64,
}

impl ReactionWheel {
    /// Torque capability typical for CubeSat wheels (N·m).
    pub const MAX_TORQUE: f64 = 5.0e-5;
    /// Speed limit: 6000 rpm in rad/s.
    pub const MAX_SPEED: f64 = 6000.0 * 2.0 * std::f64::consts::PI / 60.0;

    pub fn new(axis: na::Vector3<f64>, inertia: f64) -> Self {
        ReactionWheel {
            axis: axis.normalize(),
            inertia,
            angular_velocity: 0.0,
        }
    }

    /// Saturates the commanded torque, integrates the spin rate, then
    /// saturates the rate. Clamp order is fixed: torque before integration,
    /// speed after.
    pub fn apply_torque(&mut self, torque: f64, dt: f64) {
        let limited_torque = torque.clamp(-Self::MAX_TORQUE, Self::MAX_TORQUE);

        let angular_acc = limited_torque / self.inertia;
        self.angular_velocity += angular_acc * dt;

        self.angular_velocity = self.angular_velocity.clamp(-Self::MAX_SPEED, Self::MAX_SPEED);
    }

    /// Space for future upgrades (damping, friction)
    pub fn update(&mut self, _dt: f64) {}

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    pub fn angular_momentum(&self) -> na::Vector3<f64> {
        self.axis * (self.inertia * self.angular_velocity)
    }

    pub fn axis(&self) -> na::Vector3<f64> {
        self.axis
    }
}
