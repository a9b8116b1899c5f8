use crate::{Point3f, Sphere3};

/// A 3-dimensional axis-aligned bounding box, defined by its `minimum` and `maximum` corners.
///
/// The box is closed on all sides, so `contains_point` is true for points on any face, including
/// the maximum corner. This makes it possible to cover a point set exactly with [`bounding_aabb`]
/// and still have every input point contained.
///
/// ```
/// use vertex_weld_core::{Aabb3, Point3f};
///
/// let aabb = Aabb3::from_min_and_max(Point3f::ZERO, Point3f::fill(10.0));
///
/// assert!(aabb.contains_point(Point3f::ZERO));
/// assert!(aabb.contains_point(Point3f::fill(10.0)));
/// assert!(!aabb.contains_point(Point3f([5.0, 5.0, 10.1])));
/// assert_eq!(aabb.size(), Point3f::fill(10.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Aabb3 {
    /// The least point contained in the box.
    pub minimum: Point3f,
    /// The greatest point contained in the box.
    pub maximum: Point3f,
}

impl Aabb3 {
    /// Builds a box directly from its corners. `minimum` must be component-wise LEQ `maximum`.
    #[inline]
    pub fn from_min_and_max(minimum: Point3f, maximum: Point3f) -> Self {
        Self { minimum, maximum }
    }

    /// Builds the smallest box containing both `corner1` and `corner2`, which need not be
    /// ordered.
    #[inline]
    pub fn from_corners(corner1: Point3f, corner2: Point3f) -> Self {
        Self::from_min_and_max(corner1.meet(corner2), corner1.join(corner2))
    }

    #[inline]
    pub fn size(&self) -> Point3f {
        self.maximum - self.minimum
    }

    #[inline]
    pub fn center(&self) -> Point3f {
        self.minimum + self.size() * 0.5
    }

    pub fn volume(&self) -> f32 {
        let size = self.size();

        size.x() * size.y() * size.z()
    }

    #[inline]
    pub fn contains_point(&self, p: Point3f) -> bool {
        self.minimum <= p && p <= self.maximum
    }

    /// Returns `true` iff `self` and `sphere` share at least one point.
    ///
    /// Measures from the sphere's center to the closest point of the box, so a sphere that only
    /// touches a face still intersects.
    #[inline]
    pub fn intersects_sphere(&self, sphere: Sphere3) -> bool {
        let closest_point = sphere.center.join(self.minimum).meet(self.maximum);

        closest_point.l2_distance_squared(sphere.center) <= sphere.radius * sphere.radius
    }

    /// The index of the octant of `self` that contains `p`, under the same splitting rule as
    /// `split_at_center`.
    ///
    /// Octants are indexed like a 3-bit binary number `0bZYX`, where each bit is set iff the
    /// point's component on that axis is GEQ the center's. Every point gets exactly one octant,
    /// with points on a bisecting plane landing in the upper half.
    #[inline]
    pub fn octant_index(&self, p: Point3f) -> usize {
        let center = self.center();

        ((p.x() >= center.x()) as usize)
            | (((p.y() >= center.y()) as usize) << 1)
            | (((p.z() >= center.z()) as usize) << 2)
    }

    /// Bisects `self` on all 3 axes, returning the 8 octant boxes in `octant_index` order.
    ///
    /// Each octant keeps the parent's corner coordinates on its outer faces and uses the exact
    /// center coordinates on its inner faces, so the octants tile the parent without
    /// floating-point gaps and the parent's maximum stays covered.
    pub fn split_at_center(&self) -> [Self; 8] {
        let center = self.center();

        let mut octants = [*self; 8];
        for (octant_index, octant) in octants.iter_mut().enumerate() {
            for axis in 0..3 {
                if octant_index & (1 << axis) == 0 {
                    octant.maximum.0[axis] = center.at(axis);
                } else {
                    octant.minimum.0[axis] = center.at(axis);
                }
            }
        }

        octants
    }
}

/// Returns the smallest `Aabb3` containing all of the given points, or `None` if there are no
/// points.
pub fn bounding_aabb<I>(mut points: I) -> Option<Aabb3>
where
    I: Iterator<Item = Point3f>,
{
    let first_point = points.next()?;

    let mut min_point = first_point;
    let mut max_point = first_point;
    for p in points {
        min_point = min_point.meet(p);
        max_point = max_point.join(p);
    }

    Some(Aabb3::from_min_and_max(min_point, max_point))
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
