// The particle field: owns the particle batch, the surface dimensions, and
// the tracked pointer, and performs the per-frame update-and-render pass.
// All drawing goes through the Surface trait, so the whole pass can be driven
// frame-by-frame in tests without a canvas.

use crate::color;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;
use vecmath::Vector2;

pub const NUM_PARTICLES: u32 = 256;
pub const MAX_DISTANCE: f64 = 128.0;

const PARTICLE_LINE_WIDTH: f64 = 0.5;
const POINTER_LINE_WIDTH: f64 = 1.0;

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Option<[f64; 2]>,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, num_particles: u32, rng: &mut impl Rng) -> ParticleField {
        let mut field = ParticleField {
            width,
            height,
            particles: Vec::new(),
            pointer: None,
        };
        field.initialize_particles(num_particles, rng);
        field
    }

    // Fixed batch, for deterministic setups
    pub fn with_particles(width: f64, height: f64, particles: Vec<Particle>) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
            pointer: None,
        }
    }

    // Recreates the whole batch; the only way the particle set ever changes
    pub fn initialize_particles(&mut self, num_particles: u32, rng: &mut impl Rng) {
        self.particles.clear();
        self.particles.reserve(num_particles as usize);
        for _ in 0..num_particles {
            self.particles
                .push(Particle::random(self.width, self.height, rng));
        }
    }

    // Only the stored dimensions change; out-of-bounds particles are pulled
    // back in by the wrap check on the next step
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some([x, y]);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    // One animation frame: clear, advance and draw every particle, then the
    // connection passes. Unit timestep, so perceived speed follows the
    // caller's frame rate.
    pub fn step(&mut self, surface: &mut impl Surface) {
        surface.clear(self.width, self.height);

        for particle in &mut self.particles {
            particle.pos[0] += particle.vel[0];
            particle.pos[1] += particle.vel[1];

            // Wrap around edges. This snaps to the far bound rather than
            // carrying the overflow; a particle crossing 0 lands exactly on
            // the opposite edge.
            if particle.pos[0] < 0.0 {
                particle.pos[0] = self.width;
            }
            if particle.pos[0] > self.width {
                particle.pos[0] = 0.0;
            }
            if particle.pos[1] < 0.0 {
                particle.pos[1] = self.height;
            }
            if particle.pos[1] > self.height {
                particle.pos[1] = 0.0;
            }

            surface.fill_circle(particle.pos, particle.radius, particle.color);
        }

        // O(n^2) over unordered pairs; fine at this particle count
        for i in 0..self.particles.len() {
            let p1 = self.particles[i].pos;
            for j in (i + 1)..self.particles.len() {
                let p2 = self.particles[j].pos;
                let distance = distance(p1, p2);
                if distance < MAX_DISTANCE {
                    let alpha = 1.0 - distance / MAX_DISTANCE;
                    surface.stroke_line(p1, p2, color::CYAN, alpha, PARTICLE_LINE_WIDTH);
                }
            }

            if let Some(pointer) = self.pointer {
                let distance = distance(p1, pointer);
                if distance < MAX_DISTANCE {
                    let alpha = 1.0 - distance / MAX_DISTANCE;
                    surface.stroke_line(p1, pointer, color::YELLOW, alpha, POINTER_LINE_WIDTH);
                }
            }
        }
    }
}

fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    vecmath::vec2_len(vecmath::vec2_sub(a, b))
}
