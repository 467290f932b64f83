use std::{env, fs::File, io::BufWriter, sync::Arc};

use anyhow::Context as _;
use cgmath::vec3;
use log::info;

use raylite::{
    camera::Camera,
    light::{DirectionalLight, Lights},
    material::{Diffuse, Material},
    ppm,
    primitives::{Box, Plane, Sphere},
    renderer::{render, RenderConfig},
    scene::{PrimitiveId, Scene, Shape},
    types::Float,
};

const FRAMES: usize = 8;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let prefix = env::args().nth(1).unwrap_or_else(|| "frame".to_string());

    let config = RenderConfig {
        width: 640,
        height: 480,
        samples_per_pixel: 1,
        jitter: false,
    };
    config.validate()?;

    let (mut scene, moving) = build_scene();
    let lights = build_lights();
    let camera = Camera::new(vec3(0.0, 0.0, -15.0), 15.0, config.width, config.height);

    for frame in 0..FRAMES {
        // The animation step happens strictly before the frame's ray work.
        let angle = frame as Float / FRAMES as Float * std::f64::consts::TAU;
        scene.set_position(moving, vec3(3.0 * angle.cos(), 0.0, 6.0 + 2.0 * angle.sin()));

        let image = render(&scene, &lights, &camera, &config);

        let path = format!("{prefix}_{frame:03}.ppm");
        let file = File::create(&path).with_context(|| format!("cannot create {path}"))?;
        ppm::save_to_ppm(&image, BufWriter::new(file))
            .with_context(|| format!("cannot write {path}"))?;
        info!("wrote {path}");
    }
    Ok(())
}

/// Checkered floor, a shiny sphere to animate, and a matte box.
fn build_scene() -> (Scene, PrimitiveId) {
    let mut scene = Scene::new(vec3(0.02, 0.02, 0.05));
    let soft_ambient = vec3(0.15, 0.15, 0.15);

    let checker = Arc::new(Material::Checker {
        even: Arc::new(Material::Diffuse(Diffuse::new(
            vec3(0.9, 0.9, 0.9),
            soft_ambient,
        ))),
        odd: Arc::new(Material::Diffuse(Diffuse::new(
            vec3(0.12, 0.12, 0.12),
            soft_ambient,
        ))),
    });
    scene.push(Shape::Plane(Plane::new(vec3(0.0, 1.0, 0.0), -4.0)), checker);

    let shiny_red = Arc::new(Material::Specular {
        base: Diffuse::new(vec3(0.85, 0.2, 0.15), soft_ambient),
        power: 32.0,
    });
    let moving = scene.push(
        Shape::Sphere(Sphere::new(vec3(3.0, 0.0, 6.0), 2.0)),
        shiny_red,
    );

    let matte_blue = Arc::new(Material::Diffuse(Diffuse::new(
        vec3(0.2, 0.3, 0.8),
        soft_ambient,
    )));
    scene.push(
        Shape::Box(Box::new(vec3(-5.5, -4.0, 7.0), vec3(-2.5, -1.0, 10.0))),
        matte_blue,
    );

    (scene, moving)
}

fn build_lights() -> Lights {
    let mut lights = Lights::new();
    lights.push(DirectionalLight::new(
        vec3(-0.4, -1.0, 0.6),
        vec3(0.9, 0.9, 0.9),
    ));
    lights.push(DirectionalLight::new(
        vec3(0.7, -0.3, 0.2),
        vec3(0.25, 0.2, 0.15),
    ));
    lights
}
