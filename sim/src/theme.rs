use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Wraps any finite hue, in degrees, into `[0, 360)`.
pub fn wrap_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);

    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// A window of hues `base ± variation`, in degrees, on the color wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueRange {
    pub base: f64,
    pub variation: f64,
}

impl HueRange {
    pub const fn new(base: f64, variation: f64) -> HueRange {
        HueRange { base, variation }
    }

    /// Picks a uniformly distributed hue inside the window.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        wrap_hue(self.base + rng.gen_range(-self.variation..=self.variation))
    }

    /// Determines if `hue` lies inside the window, measured around the color wheel.
    pub fn contains(&self, hue: f64) -> bool {
        let offset = (hue - self.base).rem_euclid(360.0);
        offset.min(360.0 - offset) <= self.variation + 1e-9
    }
}

/// Named color theme biasing the hues of exploding particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Warm,
    Cool,
    Purple,
    Gold,
    Rainbow,
    /// Picks one of the other themes for every projectile.
    #[default]
    Random,
}

impl Theme {
    /// Every theme with a fixed hue window, in table order.
    pub const NAMED: [Theme; 5] = [
        Theme::Warm,
        Theme::Cool,
        Theme::Purple,
        Theme::Gold,
        Theme::Rainbow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Warm => "warm",
            Theme::Cool => "cool",
            Theme::Purple => "purple",
            Theme::Gold => "gold",
            Theme::Rainbow => "rainbow",
            Theme::Random => "random",
        }
    }

    /// Hue window of a named theme, or [`None`] for [`Theme::Random`].
    pub fn range(&self) -> Option<HueRange> {
        match self {
            Theme::Warm => Some(HueRange::new(15.0, 25.0)),
            Theme::Cool => Some(HueRange::new(200.0, 30.0)),
            Theme::Purple => Some(HueRange::new(285.0, 25.0)),
            Theme::Gold => Some(HueRange::new(45.0, 10.0)),
            Theme::Rainbow => Some(HueRange::new(180.0, 180.0)),
            Theme::Random => None,
        }
    }

    /// Settles the hue window a single projectile will use.
    pub fn resolve<R: Rng>(&self, rng: &mut R) -> HueRange {
        match self.range() {
            Some(range) => range,
            None => {
                let theme = Theme::NAMED[rng.gen_range(0..Theme::NAMED.len())];
                theme.range().unwrap_or(HueRange::new(180.0, 180.0))
            }
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();

        Theme::NAMED
            .iter()
            .chain(std::iter::once(&Theme::Random))
            .find(|theme| theme.name() == name)
            .copied()
            .ok_or_else(|| ConfigError(format!("unknown theme `{s}`")))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(0.0), 0.0);
        assert_eq!(wrap_hue(360.0), 0.0);
        assert_eq!(wrap_hue(370.0), 10.0);
        assert_eq!(wrap_hue(-10.0), 350.0);
        assert_eq!(wrap_hue(-720.0), 0.0);
        assert!(wrap_hue(-1e-20) < 360.0);
    }

    #[test]
    fn test_warm_samples_stay_in_window() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let warm = Theme::Warm.resolve(&mut rng);

        for _ in 0..1000 {
            let hue = warm.sample(&mut rng);

            assert!((0.0..360.0).contains(&hue));
            assert!(warm.contains(hue), "{hue} escaped the warm window");
            // 15 ± 25 wraps around zero
            assert!(hue <= 40.0 || hue >= 350.0);
        }
    }

    #[test]
    fn test_contains_wraps() {
        let range = HueRange::new(350.0, 20.0);

        assert!(range.contains(5.0));
        assert!(range.contains(330.0));
        assert!(!range.contains(15.0));
        assert!(!range.contains(180.0));
        assert!(Theme::Rainbow.range().unwrap().contains(123.4));
    }

    #[test]
    fn test_random_resolves_to_named_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let ranges: Vec<HueRange> = Theme::NAMED.iter().filter_map(Theme::range).collect();

        for _ in 0..50 {
            assert!(ranges.contains(&Theme::Random.resolve(&mut rng)));
        }
    }

    #[test]
    fn test_names_round_trip() {
        for theme in Theme::NAMED.iter().chain(std::iter::once(&Theme::Random)) {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(*theme));
        }

        assert_eq!(" Gold ".parse::<Theme>(), Ok(Theme::Gold));
        assert!("neon".parse::<Theme>().is_err());
    }
}
