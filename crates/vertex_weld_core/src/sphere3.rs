use crate::Point3f;

/// A sphere with its boundary included: all points at most `radius` away from `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Sphere3 {
    pub center: Point3f,
    pub radius: f32,
}

impl Sphere3 {
    #[inline]
    pub fn new(center: Point3f, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Compares squared distances, so no square root is taken. A zero-radius sphere contains
    /// exactly its center.
    #[inline]
    pub fn contains_point(&self, p: Point3f) -> bool {
        p.l2_distance_squared(self.center) <= self.radius * self.radius
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_point_includes_the_boundary() {
        let sphere = Sphere3::new(Point3f([1.0, 0.0, 0.0]), 2.0);

        assert!(sphere.contains_point(sphere.center));
        assert!(sphere.contains_point(Point3f([3.0, 0.0, 0.0])));
        assert!(sphere.contains_point(Point3f([1.0, -2.0, 0.0])));
        assert!(!sphere.contains_point(Point3f([3.1, 0.0, 0.0])));
    }

    #[test]
    fn zero_radius_sphere_is_a_point() {
        let sphere = Sphere3::new(Point3f([1.0, 2.0, 3.0]), 0.0);

        assert!(sphere.contains_point(sphere.center));
        assert!(!sphere.contains_point(Point3f([1.0, 2.0, 3.0001])));
    }
}
