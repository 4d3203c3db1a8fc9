use crate::models::spacecraft::SpacecraftProperties;
use crate::models::state::SimulationState;
use crate::numerics::quaternion::Quaternion;
use crate::physics::orbital::OrbitalMechanics;
use nalgebra as na;

/// Per-axis PD gains derived from the vehicle inertia and a second-order
/// response target (natural frequency, damping ratio).
#[derive(Debug, Clone)]
pub struct ControlGains {
    pub kp: na::Vector3<f64>,
    pub kd: na::Vector3<f64>,
    pub natural_frequency: f64,
    pub damping_ratio: f64,
}

impl ControlGains {
    pub fn from_response(inertia_diag: &na::Vector3<f64>, wn: f64, zeta: f64) -> Self {
        ControlGains {
            kp: inertia_diag * (wn * wn),
            kd: inertia_diag * (2.0 * zeta * wn),
            natural_frequency: wn,
            damping_ratio: zeta,
        }
    }
}

/// Torque command plus the pointing diagnostics read by the telemetry
/// collaborator.
#[derive(Debug, Clone)]
pub struct NadirCommand {
    pub torque: na::Vector3<f64>,
    pub error_angle: f64,
    pub error_axis: na::Vector3<f64>,
    pub desired_rate: na::Vector3<f64>,
}

pub struct NadirController {
    gains: ControlGains,
    inertia_diag: na::Vector3<f64>,
}

impl NadirController {
    /// Pointing errors beyond this switch the derivative term to pure rate
    /// damping (20°).
    pub const LARGE_ERROR_ANGLE: f64 = 20.0 * std::f64::consts::PI / 180.0;
    /// Component-wise command saturation (N·m).
    pub const TORQUE_LIMIT: f64 = 0.002;

    pub fn new(inertia_diag: na::Vector3<f64>, natural_frequency: f64, damping_ratio: f64) -> Self {
        NadirController {
            gains: ControlGains::from_response(&inertia_diag, natural_frequency, damping_ratio),
            inertia_diag,
        }
    }

    pub fn gains(&self) -> &ControlGains {
        &self.gains
    }

    /// Local-vertical/local-horizontal frame for the given orbit state.
    /// Column z is the boresight toward the primary, columns x and y
    /// complete the orthonormal triad with y along the orbit normal.
    pub fn desired_frame(
        position: &na::Vector3<f64>,
        velocity: &na::Vector3<f64>,
    ) -> na::Matrix3<f64> {
        let boresight = -position.normalize();
        let orbit_normal = position.cross(velocity).normalize();
        let right = orbit_normal.cross(&boresight).normalize();
        let up = boresight.cross(&right);

        na::Matrix3::from_columns(&[right, up, boresight])
    }

    /// Nadir-aligned orientation and feedforward angular velocity for the
    /// given orbit state. Used to initialize the vehicle already on target.
    pub fn desired_attitude(
        position: &na::Vector3<f64>,
        velocity: &na::Vector3<f64>,
    ) -> (Quaternion, na::Vector3<f64>) {
        let frame = Self::desired_frame(position, velocity);
        let orientation = Quaternion::from_rotation_matrix(&frame);

        let rate = OrbitalMechanics::compute_orbital_rate(position.magnitude());
        let angular_velocity = frame * na::Vector3::new(0.0, rate, 0.0);

        (orientation, angular_velocity)
    }

    /// PD attitude law with orbital-rate feedforward.
    ///
    /// Large pointing errors fall back to rate damping alone; the
    /// feedforward rate only enters the derivative term once the error is
    /// inside `LARGE_ERROR_ANGLE`.
    pub fn compute_control_torque<T: SpacecraftProperties>(
        &self,
        state: &SimulationState<T>,
    ) -> NadirCommand {
        let frame = Self::desired_frame(&state.position, &state.velocity);
        let q_desired = Quaternion::from_rotation_matrix(&frame);

        let mut q_error = q_desired.multiply(&state.quaternion.inverse());
        if q_error.scalar() < 0.0 {
            q_error = -q_error; // shortest path
        }
        let (error_axis, error_angle) = q_error.axis_angle();

        // Feedforward at the circular orbital rate, along the desired
        // frame's own angular-momentum axis, expressed in inertial
        // coordinates. The radius is unscaled meters.
        let orbital_rate = OrbitalMechanics::compute_orbital_rate(state.position.magnitude());
        let desired_rate = frame * na::Vector3::new(0.0, orbital_rate, 0.0);

        let proportional = self.gains.kp.component_mul(&(error_axis * error_angle));

        let derivative = if error_angle > Self::LARGE_ERROR_ANGLE {
            // Far off-pointing: damp body rates only
            self.inertia_diag.component_mul(&(-state.angular_velocity))
        } else {
            self.gains
                .kd
                .component_mul(&(state.angular_velocity - desired_rate))
        };

        let torque = (-(proportional + derivative))
            .map(|t| t.clamp(-Self::TORQUE_LIMIT, Self::TORQUE_LIMIT));

        NadirCommand {
            torque,
            error_angle,
            error_axis,
            desired_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::spacecraft::CubeSat1U;
    use crate::constants::{ORBIT_ALTITUDE, R_EARTH};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use hifitime::Epoch;

    static SPACECRAFT: CubeSat1U = CubeSat1U;

    fn controller() -> NadirController {
        NadirController::new(CubeSat1U::inertia_diag(), 0.3, 1.0)
    }

    fn circular_orbit() -> (na::Vector3<f64>, na::Vector3<f64>) {
        let radius = R_EARTH + ORBIT_ALTITUDE;
        let position = na::Vector3::new(radius, 0.0, 0.0);
        let speed = OrbitalMechanics::compute_circular_velocity(radius);
        (position, na::Vector3::new(0.0, speed, 0.0))
    }

    fn state_with_attitude(
        quaternion: Quaternion,
        angular_velocity: na::Vector3<f64>,
    ) -> SimulationState<'static, CubeSat1U> {
        let (position, velocity) = circular_orbit();
        SimulationState::new(
            &SPACECRAFT,
            position,
            velocity,
            quaternion,
            angular_velocity,
            Epoch::default(),
        )
    }

    #[test]
    fn gains_follow_second_order_response() {
        let gains = ControlGains::from_response(&CubeSat1U::inertia_diag(), 0.3, 1.0);
        assert_relative_eq!(gains.kp.x, 0.0010 * 0.09, epsilon = 1e-15);
        assert_relative_eq!(gains.kd.y, 0.0012 * 0.6, epsilon = 1e-15);
    }

    #[test]
    fn desired_frame_is_orthonormal_with_nadir_boresight() {
        let (position, velocity) = circular_orbit();
        let frame = NadirController::desired_frame(&position, &velocity);

        assert_relative_eq!(
            (frame.transpose() * frame),
            na::Matrix3::identity(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            frame.column(2).into_owned(),
            -position.normalize(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn on_target_command_is_null() {
        let (position, velocity) = circular_orbit();
        let (orientation, angular_velocity) =
            NadirController::desired_attitude(&position, &velocity);
        let state = state_with_attitude(orientation, angular_velocity);

        let command = controller().compute_control_torque(&state);

        assert_abs_diff_eq!(command.error_angle, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(command.torque, na::Vector3::zeros(), epsilon = 1e-12);
    }

    #[test]
    fn large_error_uses_rate_damping_only() {
        // Identity attitude on this orbit leaves a 120° pointing error
        let omega = na::Vector3::new(0.01, 0.02, -0.01);
        let state = state_with_attitude(Quaternion::identity(), omega);

        let command = controller().compute_control_torque(&state);
        assert!(command.error_angle > NadirController::LARGE_ERROR_ANGLE);

        // Reconstruct the expected command with the rate-damping derivative;
        // the feedforward rate must not appear
        let gains = ControlGains::from_response(&CubeSat1U::inertia_diag(), 0.3, 1.0);
        let proportional = gains
            .kp
            .component_mul(&(command.error_axis * command.error_angle));
        let derivative = CubeSat1U::inertia_diag().component_mul(&(-omega));
        let expected = -(proportional + derivative);

        assert_abs_diff_eq!(command.torque, expected, epsilon = 1e-12);
    }

    #[test]
    fn small_error_uses_rate_error_derivative() {
        let (position, velocity) = circular_orbit();
        let (orientation, _) = NadirController::desired_attitude(&position, &velocity);
        let omega = na::Vector3::new(1.0e-3, -2.0e-3, 5.0e-4);
        let state = state_with_attitude(orientation, omega);

        let command = controller().compute_control_torque(&state);
        assert!(command.error_angle < NadirController::LARGE_ERROR_ANGLE);

        let gains = ControlGains::from_response(&CubeSat1U::inertia_diag(), 0.3, 1.0);
        let expected = -(gains
            .kp
            .component_mul(&(command.error_axis * command.error_angle))
            + gains.kd.component_mul(&(omega - command.desired_rate)));

        assert_abs_diff_eq!(command.torque, expected, epsilon = 1e-12);
    }

    #[test]
    fn command_saturates_component_wise() {
        let omega = na::Vector3::new(50.0, -50.0, 50.0);
        let state = state_with_attitude(Quaternion::identity(), omega);

        let command = controller().compute_control_torque(&state);

        for i in 0..3 {
            assert!(command.torque[i].abs() <= NadirController::TORQUE_LIMIT + 1e-15);
        }
        // This rate is far past the saturation knee on every axis
        assert_relative_eq!(
            command.torque.x.abs(),
            NadirController::TORQUE_LIMIT,
            epsilon = 1e-15
        );
    }

    #[test]
    fn degenerate_error_axis_yields_zero_proportional_term() {
        let (position, velocity) = circular_orbit();
        let (orientation, angular_velocity) =
            NadirController::desired_attitude(&position, &velocity);
        let state = state_with_attitude(orientation, angular_velocity);

        let command = controller().compute_control_torque(&state);
        assert_eq!(command.error_axis, na::Vector3::zeros());
        assert_eq!(command.error_angle, 0.0);
    }
}
