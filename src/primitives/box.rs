use cgmath::vec3;

use crate::{
    intersections::{Hit, Intersectable},
    ray::Ray,
    types::{axis_sign, Float, Vec3},
};

/// Axis-aligned box spanning two opposite corners.
#[derive(Debug, Clone)]
pub struct Box {
    pub min: Vec3,
    pub max: Vec3,
}

impl Box {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    /// Translates both corners so the box is centered on `center`.
    pub fn recenter(&mut self, center: Vec3) {
        let half = (self.max - self.min) / 2.0;
        self.min = center - half;
        self.max = center + half;
    }
}

/// One slab boundary crossing, remembering which axis produced it.
struct SlabHit {
    t: Float,
    axis: usize,
}

impl SlabHit {
    fn later(self, other: SlabHit) -> SlabHit {
        if self.t < other.t {
            other
        } else {
            self
        }
    }

    fn earlier(self, other: SlabHit) -> SlabHit {
        if self.t < other.t {
            self
        } else {
            other
        }
    }
}

impl Intersectable for Box {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let mut span: Option<(SlabHit, SlabHit)> = None;
        for axis in 0..3 {
            if ray.dir[axis] == 0.0 {
                if ray.origin[axis] < self.min[axis] || self.max[axis] < ray.origin[axis] {
                    return None;
                }
                continue;
            }
            let t1 = (self.min[axis] - ray.origin[axis]) / ray.dir[axis];
            let t2 = (self.max[axis] - ray.origin[axis]) / ray.dir[axis];
            let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
            span = Some(match span {
                Some((entry, exit)) => (
                    SlabHit { t: near, axis }.later(entry),
                    SlabHit { t: far, axis }.earlier(exit),
                ),
                None => (SlabHit { t: near, axis }, SlabHit { t: far, axis }),
            });
        }

        let (entry, exit) = span?;
        if exit.t <= entry.t {
            return None;
        }
        Some(Hit {
            t: entry.t,
            normal: face_normal(entry.axis, ray.dir[entry.axis]),
        })
    }
}

/// Outward face normal for the axis that closed the entry interval.
///
/// Axis-grazing directions leave a zero component on that axis.
fn face_normal(axis: usize, dir_component: Float) -> Vec3 {
    let sign = -axis_sign(dir_component);
    if axis == 0 {
        return vec3(sign, 0.0, 0.0);
    }
    if axis == 1 {
        return vec3(0.0, sign, 0.0);
    }
    vec3(0.0, 0.0, sign)
}
