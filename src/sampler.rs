use cgmath::{num_traits::zero, vec2};
use rand::Rng as _;

use crate::types::{Color, Float, Vec2};

/// Per-pixel sample iterator and accumulator.
///
/// `reset` must run before each pixel's loop; `result` leaves the
/// accumulator untouched, so reuse without `reset` keeps accumulating.
#[derive(Debug, Clone)]
pub struct Sampler {
    target: u32,
    remaining: u32,
    weight: Float,
    accum: Color,
    jitter: bool,
}

impl Sampler {
    /// Sampler that fires every sample through the pixel center.
    pub fn new(samples: u32) -> Self {
        Self {
            target: samples,
            remaining: samples,
            weight: 0.0,
            accum: zero(),
            jitter: false,
        }
    }

    /// Sampler with uniform sub-pixel offsets in [-0.5, 0.5).
    pub fn jittered(samples: u32) -> Self {
        Self {
            jitter: true,
            ..Self::new(samples)
        }
    }

    pub fn reset(&mut self) {
        self.remaining = self.target;
        self.weight = 0.0;
        self.accum = zero();
    }

    pub fn has_next(&self) -> bool {
        self.remaining > 0
    }

    /// Next sub-pixel offset, fixing the weight applied to the sample fed
    /// back through [`Sampler::accumulate`]. `None` once the pixel budget is
    /// spent.
    pub fn next_offset(&mut self) -> Option<Vec2> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.weight = 1.0 / Float::from(self.target);
        Some(if self.jitter {
            let mut rng = rand::thread_rng();
            vec2(rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5))
        } else {
            vec2(0.0, 0.0)
        })
    }

    pub fn accumulate(&mut self, color: Color) {
        self.accum += color * self.weight;
    }

    pub fn result(&self) -> Color {
        self.accum
    }
}
