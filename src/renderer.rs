use cgmath::vec2;
use log::info;
use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};
use thiserror::Error;

use crate::{
    camera::Camera,
    image::Image,
    light::Lights,
    material::ShadeContext,
    ray::Ray,
    sampler::Sampler,
    scene::Scene,
    types::{saturate, Color},
};

/// Frame-level knobs. The setup layer validates these before rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub samples_per_pixel: u32,
    /// Jitter sub-pixel offsets instead of firing through pixel centers.
    pub jitter: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            samples_per_pixel: 1,
            jitter: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimensions { width: usize, height: usize },
    #[error("samples per pixel must be non-zero")]
    ZeroSamples,
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        Ok(())
    }

    fn sampler(&self) -> Sampler {
        if self.jitter {
            Sampler::jittered(self.samples_per_pixel)
        } else {
            Sampler::new(self.samples_per_pixel)
        }
    }
}

/// Color carried by one camera ray: the nearest surface shaded, or the
/// scene background.
fn trace(scene: &Scene, lights: &Lights, ray: &Ray) -> Color {
    match scene.nearest_hit(ray) {
        Some(hit) => {
            let ctx = ShadeContext {
                ray,
                t: hit.t,
                normal: hit.normal,
                primitive: hit.primitive,
            };
            hit.primitive.material.evaluate(&ctx, scene, lights)
        }
        None => scene.background,
    }
}

fn render_pixel(
    scene: &Scene,
    lights: &Lights,
    camera: &Camera,
    sampler: &mut Sampler,
    x: usize,
    y: usize,
) -> Color {
    sampler.reset();
    while let Some(offset) = sampler.next_offset() {
        let ray = camera.build_ray(vec2(x, y), offset);
        sampler.accumulate(trace(scene, lights, &ray));
    }
    saturate(sampler.result())
}

/// Sequential row-major render; hands each pixel to `sink` exactly once, in
/// a deterministic left-to-right, top-to-bottom order.
pub fn render_with<F>(
    scene: &Scene,
    lights: &Lights,
    camera: &Camera,
    config: &RenderConfig,
    mut sink: F,
) where
    F: FnMut(usize, usize, Color),
{
    let mut sampler = config.sampler();
    for y in 0..config.height {
        for x in 0..config.width {
            sink(x, y, render_pixel(scene, lights, camera, &mut sampler, x, y));
        }
    }
}

/// Renders one frame into an image buffer, pixels spread across worker
/// threads. Scene and lights stay frozen for the whole frame; any
/// `set_position` animation must happen before this call.
pub fn render(scene: &Scene, lights: &Lights, camera: &Camera, config: &RenderConfig) -> Image {
    info!(
        "rendering {}x{} at {} spp",
        config.width, config.height, config.samples_per_pixel
    );
    let mut image = Image::new(config.width, config.height);
    image.pixels.par_iter_mut().enumerate().for_each(|(index, pixel)| {
        let x = index % config.width;
        let y = index / config.width;
        let mut sampler = config.sampler();
        *pixel = render_pixel(scene, lights, camera, &mut sampler, x, y);
    });
    image
}
