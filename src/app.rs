use std::fmt;

use sim::{Config, ConfigError, Point, Simulation, Theme};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::draw::{draw_particle, draw_projectile, draw_trail};

/// Errors concerning the [`App`].
#[derive(Debug)]
pub struct AppError(String);

impl From<ConfigError> for AppError {
    fn from(config_error: ConfigError) -> Self {
        AppError(format!("ConfigError: {0}", config_error.0))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AppError> for JsValue {
    fn from(app_error: AppError) -> Self {
        JsValue::from_str(&app_error.to_string())
    }
}

pub struct App {
    simulation: Simulation,
}

impl App {
    pub fn new(config: Config, bounds: Point, seed: u64) -> Result<App, AppError> {
        log::info!(
            "starting a {}x{} display with the {} theme",
            bounds.0,
            bounds.1,
            config.theme
        );

        Ok(App {
            simulation: Simulation::new(config, bounds, seed)?,
        })
    }

    pub fn config(&self) -> &Config {
        self.simulation.config()
    }

    pub fn tick(&mut self) {
        self.simulation.tick();
    }

    pub fn draw(&self, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let config = self.simulation.config();

        draw_trail(context, self.simulation.bounds(), config.trail_alpha);

        for projectile in self.simulation.projectiles() {
            if projectile.is_alive() {
                draw_projectile(context, projectile, config.projectile_radius, config.glow)?;
            }

            for particle in projectile.particles() {
                draw_particle(context, particle, config.shape)?;
            }
        }

        Ok(())
    }

    pub fn on_click(&mut self, location: Point) {
        self.simulation.launch_towards(location);
    }

    pub fn on_resize(&mut self, bounds: Point) {
        self.simulation.resize(bounds);
    }

    pub fn on_auto_launch(&mut self) {
        self.simulation.launch_random();
    }

    pub fn on_opening_launch(&mut self) {
        self.simulation.launch_opening();
    }

    pub fn on_theme(&mut self, name: &str) {
        match name.parse::<Theme>() {
            Ok(theme) => self.simulation.set_theme(theme),
            Err(err) => log::warn!("ignoring theme button: {err}"),
        }
    }
}
