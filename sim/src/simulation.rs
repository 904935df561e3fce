use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{Config, ConfigError, Particle, Point, Projectile, Theme};

/// The complete state of a fireworks display.
///
/// Every launch trigger and the per-frame [`Simulation::tick`] operate on this one
/// owned value. From a given seed and sequence of calls the exact same state is reached.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: Config,
    theme: Theme,
    bounds: Point,
    projectiles: Vec<Projectile>,
    rng: ChaCha8Rng,
    frame: u64,
}

impl Simulation {
    /// Instantiates an empty [`Simulation`] over a canvas of size `bounds`.
    pub fn new(config: Config, bounds: Point, seed: u64) -> Result<Simulation, ConfigError> {
        config.validate()?;

        Ok(Simulation {
            theme: config.theme,
            config,
            bounds,
            projectiles: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            frame: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bounds(&self) -> Point {
        self.bounds
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Changes the theme of every projectile launched from now on.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            log::info!("theme changed from {} to {}", self.theme, theme);
            self.theme = theme;
        }
    }

    pub fn resize(&mut self, bounds: Point) {
        self.bounds = bounds;
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.projectiles
            .iter()
            .flat_map(|projectile| projectile.particles())
    }

    /// Determines if nothing is left to update or draw.
    pub fn is_idle(&self) -> bool {
        self.projectiles.is_empty()
    }

    /// Advances the display by one frame.
    ///
    /// Projectiles in flight move and possibly explode, then every particle moves and
    /// fades. Faded particles and projectiles with nothing left to show are dropped
    /// afterwards.
    pub fn tick(&mut self) {
        for projectile in self.projectiles.iter_mut() {
            if projectile.advance(self.config.explode_distance) {
                projectile.explode(&self.config, &mut self.rng);

                log::debug!(
                    "frame {}: exploded at ({:.1}, {:.1}) into {} particles",
                    self.frame,
                    projectile.position().0,
                    projectile.position().1,
                    projectile.particles().len(),
                );
            }

            projectile.tick_particles();
        }

        self.projectiles.retain(|projectile| !projectile.is_finished());
        self.frame += 1;
    }

    /// Launches a projectile from `start` towards `target` using the current theme.
    pub fn launch(&mut self, start: Point, target: Point) {
        let hues = self.theme.resolve(&mut self.rng);
        let hue = hues.sample(&mut self.rng);

        log::debug!(
            "frame {}: launching from ({:.1}, {:.1}) to ({:.1}, {:.1}) with hue {:.1} in {}±{}",
            self.frame,
            start.0,
            start.1,
            target.0,
            target.1,
            hue,
            hues.base,
            hues.variation,
        );

        self.projectiles.push(Projectile::new(
            start,
            target,
            self.config.projectile_speed,
            hues,
            hue,
        ));
    }

    /// Launches from a random point on the bottom edge towards `target`, typically a click.
    pub fn launch_towards(&mut self, target: Point) {
        let start = self.launch_site();
        self.launch(start, target);
    }

    /// Launches towards a random point in the upper part of the canvas.
    pub fn launch_random(&mut self) {
        let start = self.launch_site();
        let target = Point(
            self.rng.gen_range(0.0..=self.bounds.0.max(0.0)),
            self.rng
                .gen_range(0.0..=(self.bounds.1 * self.config.launch_ceiling).max(0.0)),
        );

        self.launch(start, target);
    }

    /// Launches towards a point scattered around the centre of the canvas.
    pub fn launch_opening(&mut self) {
        let half_spread = self.config.opening_spread / 2.0;
        let start = self.launch_site();
        let target = Point(
            self.bounds.0 / 2.0 + self.rng.gen_range(-half_spread..=half_spread),
            self.bounds.1 / 2.0 + self.rng.gen_range(-half_spread..=half_spread),
        );

        self.launch(start, target);
    }

    fn launch_site(&mut self) -> Point {
        Point(self.rng.gen_range(0.0..=self.bounds.0.max(0.0)), self.bounds.1)
    }
}
