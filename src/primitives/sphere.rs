use cgmath::InnerSpace as _;

use crate::{
    intersections::{Hit, Intersectable},
    ray::Ray,
    types::{normalize_safe, Float, Vec3},
};

/// Discriminants this close to zero count as a tangential graze.
const TANGENT_EPSILON: Float = 1e-2;

#[derive(Debug, Clone)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: Float,
}

impl Sphere {
    pub fn new(center: Vec3, radius: Float) -> Self {
        Self { center, radius }
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        normalize_safe(point - self.center)
    }
}

impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc = ray.origin - self.center;
        // a * t^2 + b * t + c = 0
        let a = ray.dir.dot(ray.dir);
        let b = 2.0 * ray.dir.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return None;
        }
        let t = if disc <= TANGENT_EPSILON {
            -b / (2.0 * a)
        } else {
            // Near root; the far crossing stays hidden behind it.
            (-b - disc.sqrt()) / (2.0 * a)
        };
        Some(Hit {
            t,
            normal: self.normal_at(ray.position_at(t)),
        })
    }
}
