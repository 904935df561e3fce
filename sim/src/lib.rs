//! Platform-independent fireworks simulation.
//!
//! A [`Simulation`] owns every [`Projectile`] in flight together with the
//! [`Particle`]s they spawn once they explode. It is advanced one frame at a
//! time with [`Simulation::tick`] and is fully deterministic for a given seed.

mod config;
pub use config::*;

mod point;
pub use point::*;

mod theme;
pub use theme::*;

mod particle;
pub use particle::*;

mod projectile;
pub use projectile::*;

mod simulation;
pub use simulation::*;
