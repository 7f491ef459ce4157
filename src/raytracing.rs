pub mod brdf;
pub mod camera;
pub mod geometry;
pub mod intersect;
pub mod light;
pub mod loader;
pub mod material;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod scenes;

pub use math::*;
