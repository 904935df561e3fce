use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ParticleShape, Theme};

/// Errors concerning an invalid [`Config`] or an unknown [`Theme`] name.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

/// Tunable constants of the simulation.
///
/// Distances are in pixels, speeds in pixels per frame and intervals in
/// milliseconds. Any field missing from a deserialized document takes its
/// [`Default`] value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub projectile_speed: f64,
    /// A projectile explodes once it is closer than this to its target.
    pub explode_distance: f64,
    pub particle_count: usize,
    pub particle_speed_min: f64,
    pub particle_speed_max: f64,
    /// Added to each particle's vertical velocity every frame.
    pub gravity: f64,
    /// Subtracted from each particle's alpha every frame.
    pub decay: f64,
    pub particle_size_min: f64,
    pub particle_size_max: f64,
    /// Upper bound of the rotation speed of a particle, in radians per frame.
    pub particle_spin: f64,
    pub shape: ParticleShape,
    pub theme: Theme,
    /// Opacity of the black rectangle painted over the canvas every frame.
    pub trail_alpha: f64,
    pub auto_launch_ms: Option<u32>,
    pub opening_delay_ms: Option<u32>,
    /// Fraction of the canvas height, from the top, that automatic launches aim into.
    pub launch_ceiling: f64,
    pub opening_spread: f64,
    pub projectile_radius: f64,
    pub glow: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            projectile_speed: 2.0,
            explode_distance: 5.0,
            particle_count: 50,
            particle_speed_min: 0.5,
            particle_speed_max: 4.0,
            gravity: 0.1,
            decay: 0.015,
            particle_size_min: 1.0,
            particle_size_max: 4.0,
            particle_spin: 0.1,
            shape: ParticleShape::Circle,
            theme: Theme::Random,
            trail_alpha: 0.1,
            auto_launch_ms: Some(1200),
            opening_delay_ms: Some(1000),
            launch_ceiling: 0.5,
            opening_spread: 200.0,
            projectile_radius: 2.0,
            glow: 10.0,
        }
    }
}

fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError(format!("{name} must be positive, got {value}")))
    }
}

fn non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError(format!("{name} must not be negative, got {value}")))
    }
}

/// Rejects values whose symmetric range `-value..=value` would not have a finite width.
fn bounded_span(name: &str, value: f64) -> Result<(), ConfigError> {
    non_negative(name, value)?;

    if (value * 2.0).is_finite() {
        Ok(())
    } else {
        Err(ConfigError(format!("{name} is too large, got {value}")))
    }
}

fn unit(name: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError(format!("{name} must lie in [0, 1], got {value}")))
    }
}

fn ordered(name: &str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError(format!("{name} range is empty: {min} > {max}")))
    }
}

impl Config {
    /// Checks that every value keeps the simulation finite and terminating.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("projectile_speed", self.projectile_speed)?;
        positive("explode_distance", self.explode_distance)?;
        positive("decay", self.decay)?;

        if !self.gravity.is_finite() {
            return Err(ConfigError(format!("gravity must be finite, got {}", self.gravity)));
        }

        non_negative("particle_speed_min", self.particle_speed_min)?;
        non_negative("particle_speed_max", self.particle_speed_max)?;
        ordered("particle_speed", self.particle_speed_min, self.particle_speed_max)?;

        positive("particle_size_min", self.particle_size_min)?;
        positive("particle_size_max", self.particle_size_max)?;
        ordered("particle_size", self.particle_size_min, self.particle_size_max)?;

        bounded_span("particle_spin", self.particle_spin)?;
        bounded_span("opening_spread", self.opening_spread)?;
        non_negative("projectile_radius", self.projectile_radius)?;
        non_negative("glow", self.glow)?;

        unit("trail_alpha", self.trail_alpha)?;
        unit("launch_ceiling", self.launch_ceiling)?;

        if self.auto_launch_ms == Some(0) {
            return Err(ConfigError("auto_launch_ms must not be zero".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "particle_count": 40, "theme": "gold", "shape": "star" }"#)
                .unwrap();

        assert_eq!(config.particle_count, 40);
        assert_eq!(config.theme, Theme::Gold);
        assert_eq!(config.shape, ParticleShape::Star);
        assert_eq!(config.decay, Config::default().decay);
        assert_eq!(config.auto_launch_ms, Some(1200));
    }

    #[test]
    fn test_null_disables_timers() {
        let config: Config =
            serde_json::from_str(r#"{ "auto_launch_ms": null, "opening_delay_ms": null }"#)
                .unwrap();

        assert_eq!(config.auto_launch_ms, None);
        assert_eq!(config.opening_delay_ms, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{ "theme": "neon" }"#).is_err());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let cases = [
            Config {
                projectile_speed: 0.0,
                ..Default::default()
            },
            Config {
                explode_distance: -1.0,
                ..Default::default()
            },
            Config {
                decay: 0.0,
                ..Default::default()
            },
            Config {
                gravity: f64::NAN,
                ..Default::default()
            },
            Config {
                particle_speed_min: 5.0,
                particle_speed_max: 1.0,
                ..Default::default()
            },
            Config {
                particle_size_min: 0.0,
                ..Default::default()
            },
            Config {
                trail_alpha: 1.5,
                ..Default::default()
            },
            Config {
                launch_ceiling: -0.1,
                ..Default::default()
            },
            Config {
                auto_launch_ms: Some(0),
                ..Default::default()
            },
            Config {
                particle_spin: 1e308,
                ..Default::default()
            },
            Config {
                opening_spread: f64::MAX,
                ..Default::default()
            },
        ];

        for config in cases {
            assert!(config.validate().is_err(), "{config:?} should be rejected");
        }
    }

    #[test]
    fn test_large_spans_within_range_are_accepted() {
        let config = Config {
            particle_spin: 1e300,
            opening_spread: 1e300,
            ..Default::default()
        };

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_error_message() {
        let error = Config {
            decay: -0.5,
            ..Default::default()
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            error.to_string(),
            "invalid configuration: decay must be positive, got -0.5"
        );
    }
}
