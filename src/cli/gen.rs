use std::path::PathBuf;

use crate::config::{self, Settings, SlantPreset, DEFAULT_CONFIG};
use crate::error::Result;
use crate::italic::{italic_name, ItalicBuilder};
use crate::models::Font;
use crate::renderer::Renderer;
use crate::source;

/// Command-line settings that take precedence over the config file
#[derive(Debug, Default)]
pub struct Overrides {
    pub preset: Option<SlantPreset>,
    pub angle: Option<f64>,
    pub compensation: Option<f64>,
    pub no_alternates: bool,
    pub no_cleanup: bool,
    pub snap: bool,
}

impl Overrides {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(preset) = self.preset {
            settings.slant.preset = preset;
        }
        if let Some(angle) = self.angle {
            settings.slant.preset = SlantPreset::Custom;
            settings.slant.angle = Some(angle);
        }
        if let Some(percent) = self.compensation {
            settings.compensation.percent = percent;
        }
        if self.no_alternates {
            settings.options.use_alternates = false;
        }
        if self.no_cleanup {
            settings.options.cleanup = false;
        }
        if self.snap {
            settings.options.snap_to_grid = true;
        }
    }
}

pub struct GenArgs {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub masters: Vec<String>,
    pub all_masters: bool,
    pub overrides: Overrides,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
}

/// Generate italic masters for one font source
pub fn run(args: GenArgs) -> Result<()> {
    let config_path = args.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let mut settings = config::load_or_default(&config_path)?;
    args.overrides.apply(&mut settings);

    let mut font = source::load(&args.input)?;
    let sources = source_masters(&font, &args.masters, args.all_masters);
    if sources.is_empty() {
        println!("No upright masters left to italicize.");
        return Ok(());
    }

    let builder = ItalicBuilder::new(&settings);
    let renderer = Renderer::new();
    for master in &sources {
        let report = builder.build(&mut font, master)?;
        if !report.has_changes() {
            log::warn!("'{}' has no glyphs to slant", report.source_master);
        }
        crate::display::print_markdown(&renderer.render(&report));
        println!();
    }

    if args.dry_run {
        return Ok(());
    }

    let output_path = args
        .output
        .unwrap_or_else(|| source::italic_path(&args.input));
    source::save(&font, &output_path)?;
    println!("Font written to: {}", output_path.display());

    Ok(())
}

/// Masters to build from: the requested ones, every upright one, or the first
fn source_masters(font: &Font, requested: &[String], all: bool) -> Vec<String> {
    if all {
        return font
            .masters
            .iter()
            .filter(|m| !m.name.contains("Italic"))
            .filter(|m| {
                let exists = font.master_by_name(&italic_name(&m.name)).is_some();
                if exists {
                    log::warn!("Skipping '{}': its italic already exists", m.name);
                }
                !exists
            })
            .map(|m| m.id.clone())
            .collect();
    }

    if requested.is_empty() {
        return font.masters.iter().take(1).map(|m| m.id.clone()).collect();
    }

    requested.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Master;

    fn font(names: &[&str]) -> Font {
        Font {
            family_name: "Test Sans".to_string(),
            units_per_em: 1000,
            masters: names
                .iter()
                .enumerate()
                .map(|(i, name)| Master {
                    id: format!("m{:02}", i + 1),
                    name: name.to_string(),
                    italic_angle: 0.0,
                })
                .collect(),
            glyphs: vec![],
        }
    }

    #[test]
    fn test_angle_override_selects_custom() {
        let mut settings = Settings::default();
        Overrides {
            preset: Some(SlantPreset::Subtle),
            angle: Some(12.5),
            ..Default::default()
        }
        .apply(&mut settings);

        assert_eq!(settings.slant.preset, SlantPreset::Custom);
        assert_eq!(settings.slant.resolve_angle(), 12.5);
    }

    #[test]
    fn test_flag_overrides() {
        let mut settings = Settings::default();
        Overrides {
            preset: Some(SlantPreset::Aggressive),
            compensation: Some(3.0),
            no_alternates: true,
            no_cleanup: true,
            snap: true,
            ..Default::default()
        }
        .apply(&mut settings);

        assert_eq!(settings.slant.resolve_angle(), 14.0);
        assert_eq!(settings.compensation.percent, 3.0);
        assert!(!settings.options.use_alternates);
        assert!(!settings.options.cleanup);
        assert!(settings.options.snap_to_grid);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let mut settings = Settings::default();
        Overrides::default().apply(&mut settings);

        assert_eq!(settings.slant.preset, SlantPreset::Standard);
        assert!(settings.options.use_alternates);
        assert!(!settings.options.snap_to_grid);
    }

    #[test]
    fn test_first_master_by_default() {
        let font = font(&["Regular", "Bold"]);
        assert_eq!(source_masters(&font, &[], false), vec!["m01"]);
    }

    #[test]
    fn test_requested_masters() {
        let font = font(&["Regular", "Bold"]);
        let requested = vec!["Bold".to_string()];
        assert_eq!(source_masters(&font, &requested, false), vec!["Bold"]);
    }

    #[test]
    fn test_all_masters_skips_italics() {
        let font = font(&["Light", "Regular", "Italic", "Bold"]);
        // Regular already has its Italic
        assert_eq!(source_masters(&font, &[], true), vec!["m01", "m04"]);
    }
}
