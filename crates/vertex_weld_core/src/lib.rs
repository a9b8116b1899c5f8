//! The core data types for 3D point set indexing:
//! - `Point3f`: a 3-dimensional point with `f32` components
//! - `Aabb3`: a closed axis-aligned bounding box, with octant splitting
//! - `Sphere3`: a closed sphere, used as a range query volume

pub mod aabb3;
pub mod point3;
pub mod sphere3;

pub use aabb3::{bounding_aabb, Aabb3};
pub use point3::Point3f;
pub use sphere3::Sphere3;

#[cfg(feature = "glam")]
pub use glam;
#[cfg(feature = "mint")]
pub use mint;

pub mod prelude {
    pub use super::{bounding_aabb, Aabb3, Point3f, Sphere3};
}
