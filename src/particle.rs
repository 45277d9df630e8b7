// Simple particle struct to keep track of individual position, velocity,
// radius, and color. Velocity, radius, and color never change after creation.

use crate::color::{self, Color};
use rand::Rng;

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    // Position uniform over the surface, velocity components in [-0.25, 0.25],
    // radius in [1, 3), color uniform over the palette
    pub fn random(width: f64, height: f64, rng: &mut impl Rng) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * 0.5;
        let vel_y = (rng.gen::<f64>() - 0.5) * 0.5;
        let radius = rng.gen::<f64>() * 2.0 + 1.0;
        let color = color::PALETTE[(rng.gen::<f64>() * color::PALETTE.len() as f64) as usize];
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color)
    }
}
