//! Random particle layouts for the decorative backgrounds.
//!
//! Layout is generated once per mount from a seeded `SmallRng`; the motion
//! itself is CSS keyframes reading the per-particle custom properties that
//! `Particle::style` emits.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleTint {
    Orange,
    Cyan,
    White,
}

impl ParticleTint {
    pub fn color(self) -> &'static str {
        match self {
            ParticleTint::Orange => "rgba(249, 115, 22, 0.4)",
            ParticleTint::Cyan => "rgba(34, 211, 238, 0.3)",
            ParticleTint::White => "rgba(255, 255, 255, 0.2)",
        }
    }

    fn rotating(index: usize) -> Self {
        match index % 3 {
            0 => ParticleTint::Orange,
            1 => ParticleTint::Cyan,
            _ => ParticleTint::White,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container.
    pub x: f64,
    /// Vertical position, percent of the container.
    pub y: f64,
    pub size: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub opacity: f64,
    /// Two intermediate drift offsets in px; the loop starts and ends at 0.
    pub drift: [(f64, f64); 2],
    pub tint: ParticleTint,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; \
             background-color: {}; animation-duration: {:.2}s; animation-delay: {:.2}s; \
             --p-opacity: {:.3}; --dx1: {:.1}px; --dy1: {:.1}px; --dx2: {:.1}px; --dy2: {:.1}px;",
            self.x,
            self.y,
            self.size,
            self.size,
            self.tint.color(),
            self.duration_s,
            self.delay_s,
            self.opacity,
            self.drift[0].0,
            self.drift[0].1,
            self.drift[1].0,
            self.drift[1].1,
        )
    }
}

pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Dense orange field behind the hero.
pub fn hero_field<R: Rng>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(1.0..5.0),
            duration_s: rng.gen_range(15.0..35.0),
            delay_s: rng.gen_range(0.0..5.0),
            opacity: rng.gen_range(0.1..0.6),
            drift: [
                (rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)),
                (rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)),
            ],
            tint: ParticleTint::Orange,
        })
        .collect()
}

/// Sparse page-wide particles that float upwards and back.
pub fn page_field<R: Rng>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|index| {
            let sway = rng.gen_range(-25.0..25.0);
            Particle {
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(0.0..100.0),
                size: rng.gen_range(1.0..4.0),
                duration_s: rng.gen_range(10.0..25.0),
                delay_s: rng.gen_range(0.0..5.0),
                opacity: 0.2,
                drift: [(sway, -100.0), (0.0, 0.0)],
                tint: ParticleTint::rotating(index),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_particles_stay_in_range() {
        let mut rng = seeded_rng(7);
        let field = hero_field(&mut rng, 50);
        assert_eq!(field.len(), 50);

        for particle in &field {
            assert!((0.0..100.0).contains(&particle.x));
            assert!((0.0..100.0).contains(&particle.y));
            assert!((1.0..5.0).contains(&particle.size));
            assert!((15.0..35.0).contains(&particle.duration_s));
            assert!((0.0..5.0).contains(&particle.delay_s));
            assert!((0.1..0.6).contains(&particle.opacity));
            for (dx, dy) in particle.drift {
                assert!(dx.abs() <= 50.0 && dy.abs() <= 50.0);
            }
        }
    }

    #[test]
    fn page_particles_rotate_tints() {
        let mut rng = seeded_rng(42);
        let field = page_field(&mut rng, 6);
        let tints: Vec<ParticleTint> = field.iter().map(|p| p.tint).collect();
        assert_eq!(
            tints,
            vec![
                ParticleTint::Orange,
                ParticleTint::Cyan,
                ParticleTint::White,
                ParticleTint::Orange,
                ParticleTint::Cyan,
                ParticleTint::White,
            ]
        );
        assert!(field.iter().all(|p| (1.0..4.0).contains(&p.size)));
    }

    #[test]
    fn same_seed_same_layout() {
        let a = hero_field(&mut seeded_rng(1234), 10);
        let b = hero_field(&mut seeded_rng(1234), 10);
        assert_eq!(a, b);
    }

    #[test]
    fn style_carries_motion_properties() {
        let particle = Particle {
            x: 12.5,
            y: 80.0,
            size: 2.0,
            duration_s: 20.0,
            delay_s: 1.5,
            opacity: 0.3,
            drift: [(10.0, -20.0), (-5.0, 5.0)],
            tint: ParticleTint::Cyan,
        };
        let style = particle.style();
        assert!(style.contains("left: 12.50%"));
        assert!(style.contains("animation-duration: 20.00s"));
        assert!(style.contains("--dx1: 10.0px"));
        assert!(style.contains("--dy2: 5.0px"));
        assert!(style.contains("rgba(34, 211, 238, 0.3)"));
    }
}
