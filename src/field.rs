// Simulation core for the particle background. Owns the particle set and
// the surface bounds, advances one tick per animation frame, and computes
// the pairwise proximity links. No DOM types in here, so the whole module
// runs under native `cargo test`.

use crate::particle::Particle;
use rand::Rng;

/// A proximity connection between particles `a` and `b` (indices into the
/// field's particle slice, `a < b`), with the stroke alpha precomputed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f64,
}

/// The owned state behind one animated background: bounds plus a particle
/// set of fixed size. Created empty, populated once, stepped forever.
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Particles closer than this many surface units get a link.
    pub const LINK_DISTANCE: f64 = 150.0;
    /// Link alpha at distance zero; decays linearly to zero at `LINK_DISTANCE`.
    pub const LINK_MAX_ALPHA: f64 = 0.06;

    pub fn new(width: f64, height: f64) -> ParticleField {
        ParticleField {
            width,
            height,
            particles: Vec::new(),
        }
    }

    /// Spawns exactly `num_particles` particles from the given source.
    /// Callers pass `rand::thread_rng()` in production and a seeded rng in
    /// tests; layouts are bit-identical for identical sources.
    pub fn initialize_particles<R: Rng>(&mut self, num_particles: u32, rng: &mut R) {
        self.particles.reserve(num_particles as usize);
        for _ in 0..num_particles {
            self.particles
                .push(Particle::spawn(rng, self.width, self.height));
        }
    }

    /// One tick: velocity is the per-frame displacement. The sign flip
    /// happens after the move, with no clamping, so a particle can sit one
    /// step past an edge before the reflected velocity carries it back.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.pos = vecmath::vec2_add(particle.pos, particle.vel);
            if particle.pos[0] < 0.0 || particle.pos[0] > self.width {
                particle.vel[0] *= -1.0;
            }
            if particle.pos[1] < 0.0 || particle.pos[1] > self.height {
                particle.vel[1] *= -1.0;
            }
        }
    }

    /// Evaluates every unordered pair exactly once and yields a link for
    /// each pair strictly closer than `LINK_DISTANCE`.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let separation =
                    vecmath::vec2_sub(self.particles[j].pos, self.particles[i].pos);
                let distance = vecmath::vec2_len(separation);
                if distance < Self::LINK_DISTANCE {
                    links.push(Link {
                        a: i,
                        b: j,
                        alpha: Self::LINK_MAX_ALPHA * (1.0 - distance / Self::LINK_DISTANCE),
                    });
                }
            }
        }
        links
    }

    /// Bounds follow the canvas; particle state is deliberately left alone.
    /// After a shrink a particle may sit outside the new bounds until its
    /// velocity next carries it through an edge check.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
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
}
