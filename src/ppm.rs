use std::io::{self, Write};

use crate::{
    image::Image,
    types::{Color, Float},
};

/// Writes `image` as a binary P6 PPM stream.
pub fn save_to_ppm<W: Write>(image: &Image, mut out: W) -> io::Result<()> {
    out.write_all(b"P6\n")?;
    writeln!(out, "{} {}", image.width, image.height)?;
    out.write_all(b"255\n")?;
    for pixel in &image.pixels {
        out.write_all(&to_bytes(pixel))?;
    }
    Ok(())
}

fn channel_to_byte(v: Float) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn to_bytes(pixel: &Color) -> [u8; 3] {
    [
        channel_to_byte(pixel.x),
        channel_to_byte(pixel.y),
        channel_to_byte(pixel.z),
    ]
}
