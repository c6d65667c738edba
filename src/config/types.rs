use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Angle used when a custom slant has no usable value
pub const FALLBACK_ANGLE: f64 = 11.3;

/// Italicize settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Slant angle selection
    pub slant: Slant,

    /// Horizontal stem compensation
    pub compensation: Compensation,

    /// Post-processing toggles
    pub options: Options,

    /// Base glyph name -> ordered italic alternate candidates
    pub alternates: BTreeMap<String, Vec<String>>,
}

/// Named slant presets, aligned to whole pixel ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SlantPreset {
    /// 7.1° (1:8)
    Subtle,
    /// 9.5° (1:6)
    Classic,
    /// 11.3° (1:5)
    Standard,
    /// 14.0° (1:4)
    Aggressive,
    /// Use `slant.angle`
    Custom,
}

impl SlantPreset {
    pub const ALL: [SlantPreset; 5] = [
        SlantPreset::Subtle,
        SlantPreset::Classic,
        SlantPreset::Standard,
        SlantPreset::Aggressive,
        SlantPreset::Custom,
    ];

    /// Preset angle in degrees, `None` for custom
    pub fn angle(self) -> Option<f64> {
        match self {
            SlantPreset::Subtle => Some(7.1),
            SlantPreset::Classic => Some(9.5),
            SlantPreset::Standard => Some(11.3),
            SlantPreset::Aggressive => Some(14.0),
            SlantPreset::Custom => None,
        }
    }

    /// Horizontal run per unit of rise (1:n)
    pub fn ratio(self) -> Option<u32> {
        match self {
            SlantPreset::Subtle => Some(8),
            SlantPreset::Classic => Some(6),
            SlantPreset::Standard => Some(5),
            SlantPreset::Aggressive => Some(4),
            SlantPreset::Custom => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SlantPreset::Subtle => "Subtle",
            SlantPreset::Classic => "Classic",
            SlantPreset::Standard => "Standard",
            SlantPreset::Aggressive => "Aggressive",
            SlantPreset::Custom => "Custom",
        }
    }
}

impl fmt::Display for SlantPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description().to_lowercase())
    }
}

/// Slant configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Slant {
    /// Which preset to use
    pub preset: SlantPreset,

    /// Angle in degrees when `preset = "custom"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,

    /// Height the skew pivots around (0 = baseline)
    pub origin_y: f64,
}

impl Slant {
    /// Resolve the slant angle in degrees
    pub fn resolve_angle(&self) -> f64 {
        match self.preset.angle() {
            Some(angle) => angle,
            None => match self.angle {
                Some(angle) if angle.is_finite() => angle,
                _ => {
                    log::warn!(
                        "Custom slant without a valid angle, using {}°",
                        FALLBACK_ANGLE
                    );
                    FALLBACK_ANGLE
                }
            },
        }
    }
}

/// Stem compensation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Compensation {
    /// Horizontal stretch in percent (0 = none, 2 = calculated, 5+ = overcorrection)
    pub percent: f64,

    /// Stretch advance widths along with the outlines
    pub scale_advance: bool,
}

/// Post-processing options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Substitute italic alternates (a, g, f)
    pub use_alternates: bool,

    /// Add extremes, clean up paths and correct path direction
    pub cleanup: bool,

    /// Round coordinates to the pixel grid (for screen fonts)
    pub snap_to_grid: bool,

    /// Grid unit used when snapping
    pub grid: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            slant: Slant::default(),
            compensation: Compensation::default(),
            options: Options::default(),
            alternates: default_alternates(),
        }
    }
}

impl Default for Slant {
    fn default() -> Self {
        Self {
            preset: SlantPreset::Standard,
            angle: None,
            origin_y: 0.0,
        }
    }
}

impl Default for Compensation {
    fn default() -> Self {
        Self {
            percent: 2.0,
            scale_advance: true,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            use_alternates: true,
            cleanup: true,
            snap_to_grid: false,
            grid: 1.0,
        }
    }
}

fn default_alternates() -> BTreeMap<String, Vec<String>> {
    [
        ("a", ["a.ss01", "a.italic"]),
        ("g", ["g.ss01", "g.italic"]),
        ("f", ["f.italic", "f.ss01"]),
    ]
    .into_iter()
    .map(|(base, alts)| {
        (
            base.to_string(),
            alts.iter().map(|s| s.to_string()).collect(),
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.slant.preset, SlantPreset::Standard);
        assert_eq!(settings.slant.resolve_angle(), 11.3);
        assert_eq!(settings.compensation.percent, 2.0);
        assert!(settings.compensation.scale_advance);
        assert!(settings.options.use_alternates);
        assert!(settings.options.cleanup);
        assert!(!settings.options.snap_to_grid);
        assert_eq!(settings.options.grid, 1.0);
        assert_eq!(settings.alternates["f"], vec!["f.italic", "f.ss01"]);
    }

    #[test]
    fn test_settings_serialization() {
        let settings = Settings::default();
        let toml = toml::to_string(&settings).unwrap();
        assert!(toml.contains("preset = \"standard\""));
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.slant.preset, SlantPreset::Standard);
        assert_eq!(parsed.alternates.len(), 3);
    }

    #[test]
    fn test_preset_angles_and_ratios() {
        assert_eq!(SlantPreset::Subtle.angle(), Some(7.1));
        assert_eq!(SlantPreset::Classic.angle(), Some(9.5));
        assert_eq!(SlantPreset::Aggressive.angle(), Some(14.0));
        assert_eq!(SlantPreset::Custom.angle(), None);
        assert_eq!(SlantPreset::Standard.ratio(), Some(5));
        assert_eq!(SlantPreset::Subtle.to_string(), "subtle");
    }

    #[test]
    fn test_custom_angle() {
        let slant = Slant {
            preset: SlantPreset::Custom,
            angle: Some(12.5),
            origin_y: 0.0,
        };
        assert_eq!(slant.resolve_angle(), 12.5);
    }

    #[test]
    fn test_custom_angle_fallback() {
        let slant = Slant {
            preset: SlantPreset::Custom,
            angle: None,
            origin_y: 0.0,
        };
        assert_eq!(slant.resolve_angle(), FALLBACK_ANGLE);

        let nan = Slant {
            angle: Some(f64::NAN),
            ..slant
        };
        assert_eq!(nan.resolve_angle(), FALLBACK_ANGLE);
    }

    #[test]
    fn test_preset_ignores_custom_angle() {
        let slant = Slant {
            preset: SlantPreset::Classic,
            angle: Some(3.0),
            origin_y: 0.0,
        };
        assert_eq!(slant.resolve_angle(), 9.5);
    }
}
