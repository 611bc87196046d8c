// Tunables for the scan and the animation, optionally loaded from TOML.
//
// [scan]
// threshold = 0.5
// fill = [0, 0, 255]
//
// [animation]
// batch = 30
// interval_ms = 30
// ink = [255, 0, 0]
// background = [255, 255, 255]

use crate::color::{BLUE, Color, RED, WHITE};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scan: ScanConfig,
    pub animation: AnimationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Distance to the target colour under which a pixel counts as the line.
    /// 0 = only exact black/white, 0.5 = black/white and grays.
    pub threshold: f64,
    /// Colour the filled line is repainted with.
    pub fill: [u8; 3],
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { threshold: 0.5, fill: BLUE.rgb() }
    }
}

impl ScanConfig {
    pub fn fill_color(&self) -> Color {
        Color::Rgb(self.fill)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::Config(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Points drawn per tick.
    pub batch: usize,
    /// Time between ticks.
    pub interval_ms: u64,
    pub ink: [u8; 3],
    pub background: [u8; 3],
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            batch: 30,
            interval_ms: 30,
            ink: RED.rgb(),
            background: WHITE.rgb(),
        }
    }
}

impl AnimationConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch == 0 {
            return Err(Error::Config("animation batch must be at least 1".into()));
        }
        Ok(())
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    /// The config file if one was given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.scan.validate()?;
        self.animation.validate()
    }
}
