use serde::{Deserialize, Serialize};

use crate::Point;

/// Outline a [`Particle`] is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleShape {
    #[default]
    Circle,
    /// Five-pointed star, turned by the particle's rotation.
    Star,
}

/// A fading fragment thrown out by an exploding [`Projectile`](crate::Projectile).
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Point,
    velocity: Point,
    pub hue: f64,
    pub alpha: f64,
    pub size: f64,
    pub rotation: f64,
    spin: f64,
    gravity: f64,
    decay: f64,
}

impl Particle {
    pub fn new(
        position: Point,
        velocity: Point,
        hue: f64,
        size: f64,
        spin: f64,
        gravity: f64,
        decay: f64,
    ) -> Particle {
        Particle {
            position,
            velocity,
            hue,
            alpha: 1.0,
            size,
            rotation: 0.0,
            spin,
            gravity,
            decay,
        }
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn tick(&mut self) {
        self.velocity.1 += self.gravity;
        self.position += self.velocity;
        self.rotation += self.spin;
        self.alpha = (self.alpha - self.decay).max(0.0);
    }

    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle() -> Particle {
        Particle::new(Point(10.0, 10.0), Point(1.0, -2.0), 30.0, 2.0, 0.05, 0.1, 0.25)
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut particle = particle();

        particle.tick();
        assert!((particle.velocity().1 - -1.9).abs() < 1e-12);
        assert!((particle.position.0 - 11.0).abs() < 1e-12);
        assert!((particle.position.1 - 8.1).abs() < 1e-12);

        particle.tick();
        assert!((particle.velocity().1 - -1.8).abs() < 1e-12);
        assert!((particle.position.1 - 6.3).abs() < 1e-12);
        assert!((particle.rotation - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_alpha_decays_to_zero_and_stops() {
        let mut particle = particle();
        assert_eq!(particle.alpha, 1.0);

        for expected in [0.75, 0.5, 0.25] {
            particle.tick();
            assert!((particle.alpha - expected).abs() < 1e-12);
            assert!(particle.is_alive());
        }

        particle.tick();
        assert_eq!(particle.alpha, 0.0);
        assert!(!particle.is_alive());

        particle.tick();
        assert_eq!(particle.alpha, 0.0);
    }

    #[test]
    fn test_alpha_never_negative() {
        let mut particle = Particle::new(Point::default(), Point::default(), 0.0, 1.0, 0.0, 0.0, 0.3);

        while particle.is_alive() {
            particle.tick();
            assert!(particle.alpha >= 0.0);
        }

        assert_eq!(particle.alpha, 0.0);
    }
}
