use nalgebra as na;

pub trait SpacecraftProperties {
    fn mass(&self) -> f64;
    fn inertia_diag(&self) -> na::Vector3<f64>;
}
