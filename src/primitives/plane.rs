use cgmath::InnerSpace as _;

use crate::{
    intersections::{Hit, Intersectable},
    ray::Ray,
    types::{Float, Vec3},
};

/// Denominators below this mean the ray runs along the plane.
const PARALLEL_EPSILON: Float = 1e-2;

/// Infinite plane `normal . P = offset`, with a unit normal.
#[derive(Debug, Clone)]
pub struct Plane {
    pub normal: Vec3,
    pub offset: Float,
}

impl Plane {
    pub fn new(normal: Vec3, offset: Float) -> Self {
        Self { normal, offset }
    }
}

impl Intersectable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let denom = self.normal.dot(ray.dir);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let v0 = -(self.normal.dot(ray.origin) - self.offset);
        let t = v0 / denom;
        if t < 0.0 {
            return None;
        }
        // The plane's own normal, never flipped toward the ray.
        Some(Hit {
            t,
            normal: self.normal,
        })
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{assert_abs_diff_eq, vec3};

    use super::*;

    #[test]
    fn hits_from_above() {
        let plane = Plane::new(vec3(0.0, 1.0, 0.0), -4.0);
        let ray = Ray {
            origin: vec3(0.0, 10.0, 0.0),
            dir: vec3(0.0, -1.0, 0.0),
        };
        let hit = plane.intersect(&ray).unwrap();
        assert_abs_diff_eq!(hit.t, 14.0);
        assert_eq!(hit.normal, vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn keeps_its_normal_when_approached_from_below() {
        let plane = Plane::new(vec3(0.0, 1.0, 0.0), 0.0);
        let ray = Ray {
            origin: vec3(0.0, -3.0, 0.0),
            dir: vec3(0.0, 1.0, 0.0),
        };
        let hit = plane.intersect(&ray).unwrap();
        assert_abs_diff_eq!(hit.t, 3.0);
        assert_eq!(hit.normal, vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn near_parallel_rays_miss() {
        let plane = Plane::new(vec3(0.0, 1.0, 0.0), 0.0);
        let ray = Ray {
            origin: vec3(0.0, 1.0, 0.0),
            dir: vec3(1.0, -0.005, 0.0),
        };
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn rejects_crossings_behind_the_origin() {
        let plane = Plane::new(vec3(0.0, 1.0, 0.0), 0.0);
        let ray = Ray {
            origin: vec3(0.0, 1.0, 0.0),
            dir: vec3(0.0, 1.0, 0.0),
        };
        assert!(plane.intersect(&ray).is_none());
    }
}
