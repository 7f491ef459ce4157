pub mod aabb;
pub mod color;
pub mod mat4;
pub mod ray;
pub mod vec3;

pub use aabb::*;
pub use color::*;
pub use mat4::*;
pub use ray::*;
pub use vec3::*;
