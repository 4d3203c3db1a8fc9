pub mod actuators;
pub mod config;
pub mod constants;
pub mod gnc;
pub mod integrators;
pub mod models;
pub mod numerics;
pub mod physics;
pub mod sim;
pub mod telemetry;
