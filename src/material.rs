use std::sync::Arc;

use cgmath::{ElementWise as _, InnerSpace as _};

use crate::{
    light::{Irradiance, Lights},
    ray::Ray,
    scene::{Primitive, Scene},
    types::{reflect, Color, Float, Vec3},
};

/// World-space width of one checker tile.
const TILE_SIZE: Float = 4.0;

/// Everything shading needs to know about one surface crossing.
pub struct ShadeContext<'a> {
    pub ray: &'a Ray,
    pub t: Float,
    pub normal: Vec3,
    pub primitive: &'a Primitive,
}

impl ShadeContext<'_> {
    pub fn position(&self) -> Vec3 {
        self.ray.position_at(self.t)
    }
}

/// Lambertian surface with a constant ambient floor.
///
/// The per-light term and the ambient term are exposed separately so a
/// specular layer can sum light contributions itself without counting the
/// ambient floor twice.
#[derive(Debug, Clone)]
pub struct Diffuse {
    pub color: Color,
    pub ambient: Color,
}

impl Diffuse {
    pub fn new(color: Color, ambient: Color) -> Self {
        Self { color, ambient }
    }

    /// One light's Lambertian contribution. The irradiance direction points
    /// *at* the surface, hence the negated cosine.
    fn radiance(&self, irradiance: &Irradiance, normal: Vec3) -> Color {
        let lambert = (-normal.dot(irradiance.direction)).max(0.0);
        lambert * irradiance.color.mul_element_wise(self.color)
    }

    fn ambient_term(&self) -> Color {
        self.ambient.mul_element_wise(self.color)
    }
}

/// Closed set of shading models.
#[derive(Debug)]
pub enum Material {
    /// Constant color; ignores lights entirely.
    Ambient(Color),
    Diffuse(Diffuse),
    /// Phong highlight layered over a diffuse base.
    Specular { base: Diffuse, power: Float },
    /// Delegates to one of two sub-materials by world-space tile parity.
    Checker {
        even: Arc<Material>,
        odd: Arc<Material>,
    },
}

impl Material {
    /// Color of the surface under `ctx`, shadow-testing every light.
    pub fn evaluate(&self, ctx: &ShadeContext, scene: &Scene, lights: &Lights) -> Color {
        match self {
            Material::Ambient(color) => *color,
            Material::Diffuse(diffuse) => {
                let pos = ctx.position();
                let mut color = diffuse.ambient_term();
                for light in lights.iter() {
                    let irradiance = light.evaluate(scene, pos);
                    if irradiance.visible {
                        color += diffuse.radiance(&irradiance, ctx.normal);
                    }
                }
                color
            }
            Material::Specular { base, power } => {
                let pos = ctx.position();
                let mirror = reflect(ctx.ray.dir, ctx.normal);
                let mut color = base.ambient_term();
                for light in lights.iter() {
                    let irradiance = light.evaluate(scene, pos);
                    if !irradiance.visible {
                        continue;
                    }
                    color += base.radiance(&irradiance, ctx.normal);
                    let highlight = (-mirror.dot(irradiance.direction)).max(0.0).powf(*power);
                    color += highlight * irradiance.color;
                }
                color
            }
            Material::Checker { even, odd } => {
                let pos = ctx.position();
                let tile = |v: Float| (v / TILE_SIZE).floor() as i64;
                if (tile(pos.x) ^ tile(pos.z)) & 1 == 0 {
                    even.evaluate(ctx, scene, lights)
                } else {
                    odd.evaluate(ctx, scene, lights)
                }
            }
        }
    }
}
