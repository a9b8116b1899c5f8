use super::*;

impl From<mint::Point3<f32>> for Point3f {
    #[inline]
    fn from(p: mint::Point3<f32>) -> Self {
        Point3f([p.x, p.y, p.z])
    }
}

impl From<Point3f> for mint::Point3<f32> {
    #[inline]
    fn from(p: Point3f) -> Self {
        mint::Point3::from_slice(&p.0)
    }
}

impl From<mint::Vector3<f32>> for Point3f {
    #[inline]
    fn from(p: mint::Vector3<f32>) -> Self {
        Point3f([p.x, p.y, p.z])
    }
}

impl From<Point3f> for mint::Vector3<f32> {
    #[inline]
    fn from(p: Point3f) -> Self {
        mint::Vector3::from_slice(&p.0)
    }
}
