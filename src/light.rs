use cgmath::InnerSpace as _;

use crate::{
    ray::Ray,
    scene::{Query, Scene},
    types::{Color, Float, Vec3},
};

/// How far behind a lit point the shadow ray starts.
const SHADOW_STEP: Float = 10_000.0;

/// Shadow crossings within this distance of the full step count as the point
/// itself.
const SHADOW_TOLERANCE: Float = 1e-2;

/// Light arriving at one point from one source.
#[derive(Debug, Clone)]
pub struct Irradiance {
    pub direction: Vec3,
    pub color: Color,
    pub visible: bool,
}

/// Parallel-ray source; `direction` points from the light into the scene.
#[derive(Debug, Clone)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub color: Color,
}

impl DirectionalLight {
    pub fn new(direction: Vec3, color: Color) -> Self {
        Self {
            direction: direction.normalize(),
            color,
        }
    }

    /// Shadow-tests `pos` and reports this light's contribution there.
    ///
    /// The shadow ray starts a full step behind the point along the light
    /// direction and must travel that whole step unobstructed: the point is
    /// lit exactly when its nearest crossing lands within `SHADOW_TOLERANCE`
    /// of `SHADOW_STEP`. The scan must not skip the lit primitive itself,
    /// since the self-crossing is what marks the ray as unobstructed.
    pub fn evaluate(&self, scene: &Scene, pos: Vec3) -> Irradiance {
        let shadow_ray = Ray {
            origin: pos - self.direction * SHADOW_STEP,
            dir: self.direction,
        };
        let hit = scene.intersect_ray(&shadow_ray, Query::default());
        let visible = matches!(&hit, Some(h) if (h.t - SHADOW_STEP).abs() < SHADOW_TOLERANCE);
        Irradiance {
            direction: self.direction,
            color: self.color,
            visible,
        }
    }
}

/// Ordered light collection; shading sums contributions in registration
/// order.
#[derive(Default)]
pub struct Lights {
    lights: Vec<DirectionalLight>,
}

impl Lights {
    pub fn new() -> Self {
        Self { lights: Vec::new() }
    }

    pub fn push(&mut self, light: DirectionalLight) {
        self.lights.push(light);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DirectionalLight> {
        self.lights.iter()
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cgmath::vec3;

    use crate::{
        material::{Diffuse, Material},
        primitives::{Plane, Sphere},
        scene::Shape,
    };

    use super::*;

    fn floor_scene() -> Scene {
        let mut scene = Scene::new(vec3(0.0, 0.0, 0.0));
        scene.push(
            Shape::Plane(Plane::new(vec3(0.0, 1.0, 0.0), 0.0)),
            Arc::new(Material::Diffuse(Diffuse::new(
                vec3(0.8, 0.8, 0.8),
                vec3(0.1, 0.1, 0.1),
            ))),
        );
        scene
    }

    #[test]
    fn open_sky_is_visible() {
        let scene = floor_scene();
        let light = DirectionalLight::new(vec3(0.0, -1.0, 0.0), vec3(1.0, 1.0, 1.0));
        let irradiance = light.evaluate(&scene, vec3(2.0, 0.0, 3.0));
        assert!(irradiance.visible);
        assert_eq!(irradiance.color, vec3(1.0, 1.0, 1.0));
        assert_eq!(irradiance.direction, vec3(0.0, -1.0, 0.0));
    }

    #[test]
    fn an_occluder_blocks_the_light() {
        let mut scene = floor_scene();
        scene.push(
            Shape::Sphere(Sphere::new(vec3(0.0, 5.0, 0.0), 1.0)),
            Arc::new(Material::Ambient(vec3(0.0, 0.0, 0.0))),
        );
        let light = DirectionalLight::new(vec3(0.0, -1.0, 0.0), vec3(1.0, 1.0, 1.0));
        let irradiance = light.evaluate(&scene, vec3(0.0, 0.0, 0.0));
        assert!(!irradiance.visible);
    }

    #[test]
    fn new_normalizes_the_direction() {
        let light = DirectionalLight::new(vec3(0.0, -2.0, 0.0), vec3(1.0, 1.0, 1.0));
        assert_eq!(light.direction, vec3(0.0, -1.0, 0.0));
    }
}
