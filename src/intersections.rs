use crate::{
    ray::Ray,
    types::{Float, Vec3},
};

/// A ray/surface crossing: parametric distance plus the surface normal there.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub t: Float,
    pub normal: Vec3,
}

/// Nearest-crossing test against a single surface.
///
/// Only the near crossing is ever reported; callers that care about
/// occlusion rather than distance go through the scene query instead.
pub trait Intersectable {
    fn intersect(&self, ray: &Ray) -> Option<Hit>;
}
