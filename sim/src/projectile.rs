use rand::Rng;

use crate::{Config, HueRange, Particle, Point};

/// A firework shell travelling in a straight line towards its target.
///
/// Once it comes close enough to the target it explodes: it stops moving,
/// stops being drawn, and lives on only until the [`Particle`]s it spawned
/// have faded.
#[derive(Debug, Clone)]
pub struct Projectile {
    position: Point,
    target: Point,
    velocity: Point,
    speed: f64,
    hues: HueRange,
    /// Hue of the shell itself while in flight.
    hue: f64,
    alive: bool,
    particles: Vec<Particle>,
}

impl Projectile {
    pub fn new(start: Point, target: Point, speed: f64, hues: HueRange, hue: f64) -> Projectile {
        let heading = target - start;
        let angle = heading.1.atan2(heading.0);

        Projectile {
            position: start,
            target,
            velocity: Point::from_angle(angle) * speed,
            speed,
            hues,
            hue,
            alive: true,
            particles: Vec::new(),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn hues(&self) -> HueRange {
        self.hues
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn distance_to_target(&self) -> f64 {
        self.position.distance(&self.target)
    }

    /// Determines if the projectile is still in flight.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Determines if the projectile has exploded and all of its particles faded.
    pub fn is_finished(&self) -> bool {
        !self.alive && self.particles.is_empty()
    }

    /// Moves the projectile one frame along its heading and returns `true` if it is
    /// now within `explode_distance` of its target.
    ///
    /// A step that would carry the projectile past its target lands on the target
    /// instead, so the distance shrinks on every call. Exploded projectiles stay put.
    pub fn advance(&mut self, explode_distance: f64) -> bool {
        if !self.alive {
            return false;
        }

        if self.distance_to_target() <= self.speed {
            self.position = self.target;
        } else {
            self.position += self.velocity;
        }

        self.distance_to_target() < explode_distance
    }

    /// Replaces the projectile with a burst of `config.particle_count` particles.
    pub fn explode<R: Rng>(&mut self, config: &Config, rng: &mut R) {
        self.alive = false;
        self.particles.reserve(config.particle_count);

        for _ in 0..config.particle_count {
            let angle = rng.gen_range(0.0..std::f64::consts::TAU);
            let speed = rng.gen_range(config.particle_speed_min..=config.particle_speed_max);

            self.particles.push(Particle::new(
                self.position,
                Point::from_angle(angle) * speed,
                self.hues.sample(rng),
                rng.gen_range(config.particle_size_min..=config.particle_size_max),
                rng.gen_range(-config.particle_spin..=config.particle_spin),
                config.gravity,
                config.decay,
            ));
        }
    }

    /// Advances every particle by one frame and drops the ones that have faded.
    pub fn tick_particles(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.tick();
        }

        self.particles.retain(Particle::is_alive);
    }
}
