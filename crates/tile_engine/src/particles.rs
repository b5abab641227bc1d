//! Short-lived sparkle particles trailing a body
//!
//! An emitter owns a fixed pool of particles. Particles die after a few
//! frames and are respawned in place around the emitter's anchor, so the
//! pool never grows or shrinks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::foundation::math::Vec2;
use crate::physics::collision::Aabb;
use crate::render::{Camera, DrawCommand};

/// Particles per emitter
pub const TOTAL_PARTICLES: usize = 20;

/// A particle is dead once it has lived more than this many frames
pub const PARTICLE_LIFETIME: u32 = 10;

/// Color of a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Red sparkle
    Red,
    /// Green sparkle
    Green,
    /// Blue sparkle
    Blue,
}

/// A single sparkle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Top-left position in world units
    pub position: Vec2,
    /// Frames lived so far
    pub frame: u32,
    /// Color
    pub kind: ParticleKind,
}

impl Particle {
    /// New particle scattered around `anchor`
    ///
    /// Offsets are drawn from `-5..20` on each axis; the starting frame from
    /// `0..5` so a fresh pool does not die all at once.
    pub fn spawn<R: Rng + ?Sized>(anchor: Vec2, rng: &mut R) -> Self {
        let dx: i32 = rng.gen_range(0..25) - 5;
        let dy: i32 = rng.gen_range(0..25) - 5;
        let kind = match rng.gen_range(0..3u8) {
            0 => ParticleKind::Red,
            1 => ParticleKind::Green,
            _ => ParticleKind::Blue,
        };
        Self {
            position: anchor + Vec2::new(dx as f32, dy as f32),
            frame: rng.gen_range(0..5),
            kind,
        }
    }

    /// True once the particle outlived [`PARTICLE_LIFETIME`]
    pub fn is_dead(&self) -> bool {
        self.frame > PARTICLE_LIFETIME
    }

    /// Shimmer overlay is drawn on even frames
    pub fn shimmers(&self) -> bool {
        self.frame % 2 == 0
    }
}

/// Source regions of the particle sprites
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSheet {
    /// Red sparkle clip
    pub red: Aabb,
    /// Green sparkle clip
    pub green: Aabb,
    /// Blue sparkle clip
    pub blue: Aabb,
    /// Shimmer overlay clip
    pub shimmer: Aabb,
}

impl ParticleSheet {
    fn clip(&self, kind: ParticleKind) -> Aabb {
        match kind {
            ParticleKind::Red => self.red,
            ParticleKind::Green => self.green,
            ParticleKind::Blue => self.blue,
        }
    }
}

impl Default for ParticleSheet {
    fn default() -> Self {
        Self {
            red: Aabb::new(0.0, 0.0, 10.0, 10.0),
            green: Aabb::new(10.0, 0.0, 10.0, 10.0),
            blue: Aabb::new(20.0, 0.0, 10.0, 10.0),
            shimmer: Aabb::new(30.0, 0.0, 10.0, 10.0),
        }
    }
}

/// Fixed pool of particles around an anchor
#[derive(Debug, Clone)]
pub struct ParticleEmitter<R = StdRng> {
    particles: Vec<Particle>,
    rng: R,
}

impl ParticleEmitter<StdRng> {
    /// Emitter seeded from the OS
    pub fn new(anchor: Vec2) -> Self {
        Self::with_rng(anchor, StdRng::from_entropy())
    }
}

impl<R: Rng> ParticleEmitter<R> {
    /// Emitter drawing randomness from `rng`
    pub fn with_rng(anchor: Vec2, mut rng: R) -> Self {
        let particles = (0..TOTAL_PARTICLES)
            .map(|_| Particle::spawn(anchor, &mut rng))
            .collect();
        Self { particles, rng }
    }

    /// Current particles
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Respawn dead particles around `anchor`, then age every particle
    pub fn update(&mut self, anchor: Vec2) {
        let mut respawned = 0;
        for particle in &mut self.particles {
            if particle.is_dead() {
                *particle = Particle::spawn(anchor, &mut self.rng);
                respawned += 1;
            }
            particle.frame += 1;
        }
        if respawned > 0 {
            log::trace!("Respawned {respawned} particles");
        }
    }

    /// Draw commands for all particles, shimmer overlays included
    pub fn draws(&self, sheet: &ParticleSheet, camera: &Camera) -> Vec<DrawCommand> {
        let mut out = Vec::with_capacity(self.particles.len() * 2);
        for particle in &self.particles {
            let clip = sheet.clip(particle.kind);
            let world = Aabb::new(particle.position.x, particle.position.y, clip.w, clip.h);
            let destination = camera.to_screen(&world);
            out.push(DrawCommand { source: clip, destination });
            if particle.shimmers() {
                out.push(DrawCommand { source: sheet.shimmer, destination });
            }
        }
        out
    }
}
