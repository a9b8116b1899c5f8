use core::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::cmp::Ordering;

/// A 3-dimensional point with `f32` components.
///
/// The underlying array is public, so a point can be built directly as `Point3f([x, y, z])`.
///
/// ```
/// use vertex_weld_core::Point3f;
///
/// let p = Point3f([1.0, 2.0, 3.0]) + Point3f::ONES;
///
/// assert_eq!(p, Point3f([2.0, 3.0, 4.0]));
/// assert_eq!(p.y(), 3.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(transparent)]
pub struct Point3f(pub [f32; 3]);

// Point3f is repr(transparent) over [f32; 3], which has no padding.
unsafe impl bytemuck::Zeroable for Point3f {}
unsafe impl bytemuck::Pod for Point3f {}

impl Point3f {
    pub const ZERO: Self = Self([0.0; 3]);
    pub const ONES: Self = Self([1.0; 3]);

    #[inline]
    pub fn fill(value: f32) -> Self {
        Self([value; 3])
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn z(self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.0[0]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.0[1]
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut f32 {
        &mut self.0[2]
    }

    #[inline]
    pub fn at(self, component_index: usize) -> f32 {
        self.0[component_index]
    }

    pub fn map_components(self, f: impl Fn(f32) -> f32) -> Self {
        Self([f(self.x()), f(self.y()), f(self.z())])
    }

    /// The component-wise minimum, i.e. the greatest lower bound of `self` and `other` under the
    /// partial order.
    #[inline]
    pub fn meet(self, other: Self) -> Self {
        Self([
            self.x().min(other.x()),
            self.y().min(other.y()),
            self.z().min(other.z()),
        ])
    }

    /// The component-wise maximum, i.e. the least upper bound of `self` and `other` under the
    /// partial order.
    #[inline]
    pub fn join(self, other: Self) -> Self {
        Self([
            self.x().max(other.x()),
            self.y().max(other.y()),
            self.z().max(other.z()),
        ])
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    #[inline]
    pub fn norm_squared(self) -> f32 {
        self.dot(self)
    }

    /// The squared Euclidean distance between `self` and `other`.
    #[inline]
    pub fn l2_distance_squared(self, other: Self) -> f32 {
        (self - other).norm_squared()
    }
}

impl Add for Point3f {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut sum = self;
        *sum.x_mut() += rhs.x();
        *sum.y_mut() += rhs.y();
        *sum.z_mut() += rhs.z();

        sum
    }
}

impl Sub for Point3f {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut sub = self;
        *sub.x_mut() -= rhs.x();
        *sub.y_mut() -= rhs.y();
        *sub.z_mut() -= rhs.z();

        sub
    }
}

impl AddAssign for Point3f {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point3f {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Point3f {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self([rhs * self.x(), rhs * self.y(), rhs * self.z()])
    }
}

impl Div<f32> for Point3f {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self([self.x() / rhs, self.y() / rhs, self.z() / rhs])
    }
}

// This particular partial order allows us to say that an `Aabb3` b contains a `Point3f` p iff p
// is GEQ the minimum of b and p is LEQ the maximum of b.
impl PartialOrd for Point3f {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self < other {
            Some(Ordering::Less)
        } else if self > other {
            Some(Ordering::Greater)
        } else if self.0 == other.0 {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.x() < other.x() && self.y() < other.y() && self.z() < other.z()
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.x() > other.x() && self.y() > other.y() && self.z() > other.z()
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.x() <= other.x() && self.y() <= other.y() && self.z() <= other.z()
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.x() >= other.x() && self.y() >= other.y() && self.z() >= other.z()
    }
}

#[cfg(feature = "glam")]
mod glam_conversions;
#[cfg(feature = "mint")]
mod mint_conversions;

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
    fn partial_order_compares_all_components() {
        let min = Point3f([0.0, 0.0, 0.0]);
        let max = Point3f([1.0, 2.0, 3.0]);

        assert!(min < max);
        assert!(min <= max);
        assert!(max > min);
        assert!(min <= min);
        assert!(min.ge(&min));

        // Incomparable points are not ordered either way.
        let mixed = Point3f([-1.0, 5.0, 1.0]);
        assert!(!(mixed <= max));
        assert!(!(mixed >= max));
        assert_eq!(mixed.partial_cmp(&max), None);
    }

    #[test]
    fn meet_and_join_bound_both_points() {
        let p1 = Point3f([0.0, 5.0, -2.0]);
        let p2 = Point3f([3.0, 1.0, 4.0]);

        let meet = p1.meet(p2);
        let join = p1.join(p2);

        assert_eq!(meet, Point3f([0.0, 1.0, -2.0]));
        assert_eq!(join, Point3f([3.0, 5.0, 4.0]));
        assert!(meet <= p1 && meet <= p2);
        assert!(p1 <= join && p2 <= join);
    }

    #[test]
    fn arithmetic_is_component_wise() {
        let p = Point3f([1.0, 2.0, 3.0]);

        assert_eq!(p + p, p * 2.0);
        assert_eq!(p - p, Point3f::ZERO);
        assert_eq!((p * 2.0) / 2.0, p);

        let mut sum = Point3f::ZERO;
        sum += p;
        sum -= Point3f::ONES;
        assert_eq!(sum, Point3f([0.0, 1.0, 2.0]));
    }

    #[test]
    fn squared_distance_is_symmetric() {
        let p1 = Point3f([1.0, 0.0, 0.0]);
        let p2 = Point3f([0.0, 2.0, 2.0]);

        assert_eq!(p1.l2_distance_squared(p2), 9.0);
        assert_eq!(p2.l2_distance_squared(p1), 9.0);
        assert_eq!(p1.l2_distance_squared(p1), 0.0);
    }

    #[test]
    fn flat_buffers_cast_to_points() {
        let buffer = [0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0];
        let points: &[Point3f] = bytemuck::cast_slice(&buffer);

        assert_eq!(points, &[Point3f([0.0, 1.0, 2.0]), Point3f([3.0, 4.0, 5.0])]);
    }
}
