use std::sync::Arc;

use cgmath::InnerSpace as _;
use log::debug;

use crate::{
    intersections::{Hit, Intersectable},
    material::Material,
    primitives::{Box, Plane, Sphere},
    ray::Ray,
    types::{Color, Float, Vec3},
};

/// Closed set of surfaces the renderer understands.
#[derive(Debug, Clone)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Box(Box),
}

impl Intersectable for Shape {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Plane(plane) => plane.intersect(ray),
            Shape::Box(r#box) => r#box.intersect(ray),
        }
    }
}

impl Shape {
    /// Moves the surface to `position`; the one sanctioned mutation, applied
    /// by the frame driver before any ray work starts.
    pub fn set_position(&mut self, position: Vec3) {
        match self {
            Shape::Sphere(sphere) => sphere.center = position,
            Shape::Plane(plane) => plane.offset = plane.normal.dot(position),
            Shape::Box(r#box) => r#box.recenter(position),
        }
    }
}

/// A shape paired with its surface material. Materials are shared, so two
/// primitives may point at the same instance.
pub struct Primitive {
    pub shape: Shape,
    pub material: Arc<Material>,
}

/// Handle returned by [`Scene::push`]; names a primitive for skip lists and
/// per-frame animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveId(usize);

/// How a ray query scans the scene.
#[derive(Debug, Clone, Copy, Default)]
pub struct Query {
    /// Stop at the first positive crossing instead of the nearest one.
    /// Occlusion tests only; which primitive comes back depends on
    /// insertion order.
    pub first_hit: bool,
    /// Primitive excluded from the scan.
    pub skip: Option<PrimitiveId>,
}

impl Query {
    pub fn first_hit() -> Self {
        Self {
            first_hit: true,
            skip: None,
        }
    }
}

/// A scene crossing, carrying the primitive that produced it.
pub struct SceneHit<'a> {
    pub t: Float,
    pub normal: Vec3,
    pub primitive: &'a Primitive,
}

/// Ordered primitive collection. Insertion order is preserved but carries no
/// meaning beyond tie-breaking in first-hit scans.
pub struct Scene {
    primitives: Vec<Primitive>,
    pub background: Color,
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            primitives: Vec::new(),
            background,
        }
    }

    pub fn push(&mut self, shape: Shape, material: Arc<Material>) -> PrimitiveId {
        let id = PrimitiveId(self.primitives.len());
        debug!("scene primitive {}: {:?}", id.0, shape);
        self.primitives.push(Primitive { shape, material });
        id
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Per-frame animation entry point; must finish before the frame's ray
    /// loop starts.
    pub fn set_position(&mut self, id: PrimitiveId, position: Vec3) {
        self.primitives[id.0].shape.set_position(position);
    }

    pub fn nearest_hit(&self, ray: &Ray) -> Option<SceneHit<'_>> {
        self.intersect_ray(ray, Query::default())
    }

    /// Linear scan keeping the minimum positive `t`. With `first_hit` the
    /// scan returns on the first positive crossing found.
    pub fn intersect_ray(&self, ray: &Ray, query: Query) -> Option<SceneHit<'_>> {
        let mut res: Option<SceneHit> = None;
        for (index, primitive) in self.primitives.iter().enumerate() {
            if query.skip == Some(PrimitiveId(index)) {
                continue;
            }
            let Some(hit) = primitive.shape.intersect(ray) else {
                continue;
            };
            if hit.t <= 0.0 {
                continue;
            }
            if query.first_hit {
                return Some(SceneHit {
                    t: hit.t,
                    normal: hit.normal,
                    primitive,
                });
            }
            match &res {
                Some(nearest) if nearest.t <= hit.t => {}
                _ => {
                    res = Some(SceneHit {
                        t: hit.t,
                        normal: hit.normal,
                        primitive,
                    })
                }
            }
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{assert_abs_diff_eq, vec3};

    use crate::material::{Diffuse, Material};

    use super::*;

    fn flat_gray() -> Arc<Material> {
        Arc::new(Material::Diffuse(Diffuse::new(
            vec3(0.5, 0.5, 0.5),
            vec3(0.1, 0.1, 0.1),
        )))
    }

    fn two_spheres(front_first: bool) -> Scene {
        let mut scene = Scene::new(vec3(0.0, 0.0, 0.0));
        let front = Shape::Sphere(Sphere::new(vec3(0.0, 0.0, 5.0), 2.0));
        let back = Shape::Sphere(Sphere::new(vec3(0.0, 0.0, 6.0), 2.0));
        if front_first {
            scene.push(front, flat_gray());
            scene.push(back, flat_gray());
        } else {
            scene.push(back, flat_gray());
            scene.push(front, flat_gray());
        }
        scene
    }

    fn forward_ray() -> Ray {
        Ray {
            origin: vec3(0.0, 0.0, 0.0),
            dir: vec3(0.0, 0.0, 1.0),
        }
    }

    #[test]
    fn nearest_wins_regardless_of_insertion_order() {
        for front_first in [true, false] {
            let scene = two_spheres(front_first);
            let hit = scene.nearest_hit(&forward_ray()).unwrap();
            assert_abs_diff_eq!(hit.t, 3.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn first_hit_scan_returns_in_insertion_order() {
        // The back sphere sits first in the list, so an occlusion scan
        // reports it even though the front sphere is nearer.
        let scene = two_spheres(false);
        let hit = scene.intersect_ray(&forward_ray(), Query::first_hit()).unwrap();
        assert_abs_diff_eq!(hit.t, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn skip_excludes_one_primitive() {
        let mut scene = Scene::new(vec3(0.0, 0.0, 0.0));
        let front = scene.push(
            Shape::Sphere(Sphere::new(vec3(0.0, 0.0, 5.0), 2.0)),
            flat_gray(),
        );
        scene.push(
            Shape::Sphere(Sphere::new(vec3(0.0, 0.0, 6.0), 2.0)),
            flat_gray(),
        );
        let hit = scene
            .intersect_ray(
                &forward_ray(),
                Query {
                    first_hit: false,
                    skip: Some(front),
                },
            )
            .unwrap();
        assert_abs_diff_eq!(hit.t, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn crossings_behind_the_origin_are_ignored() {
        let mut scene = Scene::new(vec3(0.0, 0.0, 0.0));
        scene.push(
            Shape::Sphere(Sphere::new(vec3(0.0, 0.0, -5.0), 1.0)),
            flat_gray(),
        );
        assert!(scene.nearest_hit(&forward_ray()).is_none());
    }

    #[test]
    fn set_position_moves_a_sphere() {
        let mut scene = Scene::new(vec3(0.0, 0.0, 0.0));
        let id = scene.push(
            Shape::Sphere(Sphere::new(vec3(0.0, 100.0, 5.0), 1.0)),
            flat_gray(),
        );
        assert!(scene.nearest_hit(&forward_ray()).is_none());
        scene.set_position(id, vec3(0.0, 0.0, 5.0));
        let hit = scene.nearest_hit(&forward_ray()).unwrap();
        assert_abs_diff_eq!(hit.t, 4.0, epsilon = 1e-9);
    }
}
