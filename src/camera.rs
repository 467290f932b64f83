use cgmath::{num_traits::AsPrimitive, vec3, Vector2};

use crate::{
    ray::Ray,
    types::{Float, Vec2, Vec3},
};

/// Half-width of the view plane in world units.
const VIEW_EXTENT: Float = 5.0;

/// Fixed pinhole camera at `eye`, looking down +z.
///
/// The view plane spans ±`VIEW_EXTENT` horizontally at `plane_dist` in front
/// of the eye; the vertical span follows the image aspect.
pub struct Camera {
    eye: Vec3,
    plane_dist: Float,
    width: Float,
    height: Float,
}

impl Camera {
    pub fn new(eye: Vec3, plane_dist: Float, width: usize, height: usize) -> Self {
        Self {
            eye,
            plane_dist,
            width: width.as_(),
            height: height.as_(),
        }
    }

    /// Unit-direction ray through the center of `pixel`, displaced by a
    /// sub-pixel `offset`. Pixel rows run top to bottom.
    pub fn build_ray(&self, pixel: Vector2<usize>, offset: Vec2) -> Ray {
        let px = pixel.x as Float + 0.5 + offset.x;
        let py = pixel.y as Float + 0.5 + offset.y;
        let u = (2.0 * px / self.width - 1.0) * VIEW_EXTENT;
        let v = -(2.0 * py / self.height - 1.0) * VIEW_EXTENT * self.height / self.width;
        Ray::towards(self.eye, self.eye + vec3(u, v, self.plane_dist))
    }
}
