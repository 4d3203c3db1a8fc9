pub const G: f64 = 6.67430e-11; // Gravitational constant (m³/kg/s²)
pub const M_EARTH: f64 = 5.972e24; // Mass of Earth (kg)
pub const MU_EARTH: f64 = G * M_EARTH; // Standard gravitational parameter (m³/s²)
pub const R_EARTH: f64 = 6.371e6; // Radius of Earth (m)
pub const ORBIT_ALTITUDE: f64 = 400_000.0; // Orbital altitude for LEO (m)

// Display scaling: maps Earth's radius to 30 render units. Applied only at
// the rendering boundary, never inside a physics formula.
pub const SCALE_FACTOR: f64 = 1.0 / 212_367.0;

// Simulation clocking
pub const MAX_DELTA_TIME: f64 = 0.01; // Upper bound on one frame's elapsed time (s)
pub const SUB_STEPS: usize = 15; // Physics sub-steps per frame

// Math
pub const PI: f64 = std::f64::consts::PI;
