// Simple particle struct to keep track of individual position, velocity,
// size, opacity, and hue

use crate::color::Hue;
use rand::Rng;
use vecmath::Vector2;

/// A single drifting dot. Radius, opacity, and hue are fixed at spawn;
/// velocity only ever changes sign, on boundary contact.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub opacity: f64,
    pub hue: Hue,
}

impl Particle {
    pub const MIN_RADIUS: f64 = 0.5;
    pub const MAX_RADIUS: f64 = 2.5;
    /// Per-axis, per-frame displacement bound.
    pub const MAX_SPEED: f64 = 0.15;
    pub const MIN_OPACITY: f64 = 0.1;
    pub const MAX_OPACITY: f64 = 0.6;

    /// Spawns a particle uniformly inside the given bounds. The draw order
    /// from `rng` is fixed (x, y, radius, vel x, vel y, opacity, hue) so a
    /// seeded source reproduces layouts exactly.
    pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let radius = rng.gen::<f64>() * (Self::MAX_RADIUS - Self::MIN_RADIUS) + Self::MIN_RADIUS;
        let vel_x = (rng.gen::<f64>() - 0.5) * (Self::MAX_SPEED * 2.0);
        let vel_y = (rng.gen::<f64>() - 0.5) * (Self::MAX_SPEED * 2.0);
        let opacity =
            rng.gen::<f64>() * (Self::MAX_OPACITY - Self::MIN_OPACITY) + Self::MIN_OPACITY;
        let hue = if rng.gen::<f64>() > 0.5 {
            Hue::Violet
        } else {
            Hue::Cyan
        };

        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            opacity,
            hue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_with_zeroed_rng_hits_lower_bounds() {
        let mut rng = StepRng::new(0, 0);
        let p = Particle::spawn(&mut rng, 800.0, 600.0);

        assert_eq!(p.pos, [0.0, 0.0]);
        assert_eq!(p.radius, Particle::MIN_RADIUS);
        assert_eq!(p.vel[0], (0.0 - 0.5) * (Particle::MAX_SPEED * 2.0));
        assert_eq!(p.vel[1], (0.0 - 0.5) * (Particle::MAX_SPEED * 2.0));
        assert_eq!(p.opacity, Particle::MIN_OPACITY);
        // A draw of 0.0 is not > 0.5, so the spawn falls on the cyan side.
        assert_eq!(p.hue, Hue::Cyan);
    }

    #[test]
    fn spawn_stays_inside_attribute_ranges() {
        let mut rng = StdRng::seed_from_u64(0xDECAF);
        for _ in 0..1000 {
            let p = Particle::spawn(&mut rng, 800.0, 600.0);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
            assert!(p.radius >= Particle::MIN_RADIUS && p.radius < Particle::MAX_RADIUS);
            assert!(p.vel[0] >= -Particle::MAX_SPEED && p.vel[0] < Particle::MAX_SPEED);
            assert!(p.vel[1] >= -Particle::MAX_SPEED && p.vel[1] < Particle::MAX_SPEED);
            assert!(p.opacity >= Particle::MIN_OPACITY && p.opacity < Particle::MAX_OPACITY);
        }
    }

    #[test]
    fn spawn_picks_both_hues() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut violet = 0;
        let mut cyan = 0;
        for _ in 0..200 {
            match Particle::spawn(&mut rng, 100.0, 100.0).hue {
                Hue::Violet => violet += 1,
                Hue::Cyan => cyan += 1,
            }
        }
        assert!(violet > 0 && cyan > 0);
    }
}
