use cgmath::num_traits::zero;

use crate::types::Color;

/// Frame buffer of linear [0, 1] colors, row-major from the top-left.
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>,
}

impl Image {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![zero(); width * height],
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use cgmath::vec3;

    use super::*;

    #[test]
    fn starts_black_and_indexes_row_major() {
        let mut image = Image::new(3, 2);
        assert_eq!(image.pixel(2, 1), vec3(0.0, 0.0, 0.0));
        image.pixels[1 * 3 + 2] = vec3(1.0, 0.5, 0.0);
        assert_eq!(image.pixel(2, 1), vec3(1.0, 0.5, 0.0));
    }
}
