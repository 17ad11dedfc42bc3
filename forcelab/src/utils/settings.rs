use super::color::Palette;
use super::color::Vec4Color;
use crate::simulation::bounds::CanvasBounds;
use crate::simulation::experiment::ExperimentLayout;
use crate::simulation::playground::PlaygroundRanges;
use anyhow::anyhow;
use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use glam::Vec2;
use glam::Vec4;
use log::info;
use rustc_hash::FxHashMap;
use std::str::FromStr;

/// Flat `key=value` store. Blank lines and lines starting with `#` are skipped.
#[derive(Clone, Debug, Default)]
pub struct Settings {
    values: FxHashMap<String, String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LessonSettings {
    pub layout: ExperimentLayout,
    pub ranges: PlaygroundRanges,
    pub palette: Palette,
}

impl Settings {
    #[cfg(not(web))]
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_context(|| format!("Failed to read settings file {}", path))?;
        let settings = content.parse::<Settings>()?;
        info!("Loaded {} settings from {}", settings.len(), path);

        Ok(settings)
    }

    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
    {
        match self.values.get(key) {
            Some(value) => match value.parse() {
                Ok(value) => Ok(Some(value)),
                Err(_) => bail!("Invalid value {} for setting {}", value, key),
            },
            None => Ok(None),
        }
    }

    pub fn get_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
    {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Like `get_or`, but `NaN` and infinities are errors.
    pub fn get_finite(&self, key: &str, default: f32) -> Result<f32> {
        let value = self.get_or(key, default)?;
        if !value.is_finite() {
            bail!("Setting {} must be a finite number, got {}", key, value);
        }

        Ok(value)
    }

    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|value| value.as_str())
    }

    pub fn set<T>(&mut self, key: &str, value: T)
    where
        T: ToString,
    {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys are written in sorted order so the output is stable.
    pub fn serialize(&self) -> String {
        let mut keys = self.values.keys().collect::<Vec<&String>>();
        keys.sort();

        keys.into_iter().map(|key| format!("{}={}", key, self.values[key])).collect::<Vec<String>>().join("\n")
    }
}

impl FromStr for Settings {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> Result<Self> {
        let mut values = FxHashMap::default();

        for (index, line) in content.lines().map(|line| line.trim()).enumerate() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| anyhow!("Missing '=' in settings line {}", index + 1))?;
            let key = key.trim();

            if key.is_empty() {
                bail!("Empty key in settings line {}", index + 1);
            }

            values.insert(key.to_string(), value.trim().to_string());
        }

        Ok(Self { values })
    }
}

impl LessonSettings {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let size = Vec2::new(settings.get_finite("canvas.width", 600.0)?, settings.get_finite("canvas.height", 400.0)?);
        let margin_x = settings.get_finite("canvas.margin_x", 20.0)?;
        let margin_top = settings.get_finite("canvas.margin_top", 50.0)?;
        let margin_bottom = settings.get_finite("canvas.margin_bottom", 20.0)?;

        if size.x <= 2.0 * margin_x || size.y <= margin_top + margin_bottom {
            bail!("Canvas {}x{} is too small for its margins", size.x, size.y);
        }

        let mut layout = ExperimentLayout::for_canvas(size, CanvasBounds::from_canvas(size, margin_x, margin_top, margin_bottom));
        layout.tolerance = settings.get_finite("experiment.tolerance", layout.tolerance)?;
        layout.force_scale = settings.get_finite("experiment.force_scale", layout.force_scale)?;

        if layout.tolerance <= 0.0 || layout.force_scale <= 0.0 {
            bail!("Experiment tolerance and force scale must be positive");
        }

        let defaults = PlaygroundRanges::default();
        let ranges = PlaygroundRanges {
            min_magnitude: settings.get_finite("playground.min_magnitude", defaults.min_magnitude)?,
            max_magnitude: settings.get_finite("playground.max_magnitude", defaults.max_magnitude)?,
            max_angle: settings.get_finite("playground.max_angle", defaults.max_angle)?,
        };

        if ranges.min_magnitude < 0.0 || ranges.min_magnitude > ranges.max_magnitude || !(0.0..=180.0).contains(&ranges.max_angle) {
            bail!("Invalid playground ranges {:?}", ranges);
        }

        let mut palette = Palette::default();
        for (key, color) in [
            ("palette.f1", &mut palette.f1),
            ("palette.f2", &mut palette.f2),
            ("palette.resultant", &mut palette.resultant),
            ("palette.construction", &mut palette.construction),
            ("palette.success", &mut palette.success),
            ("palette.failure", &mut palette.failure),
        ] {
            if let Some(hex) = settings.get_raw(key) {
                *color = Vec4::from_hex(hex).with_context(|| format!("Invalid color for {}", key))?;
            }
        }

        Ok(Self { layout, ranges, palette })
    }
}

impl Default for LessonSettings {
    fn default() -> Self {
        Self { layout: ExperimentLayout::default(), ranges: PlaygroundRanges::default(), palette: Palette::default() }
    }
}
