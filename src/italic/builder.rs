use chrono::Utc;
use uuid::Uuid;

use super::alternates::Alternates;
use super::cleanup::{clean_up, is_degenerate};
use super::contour::Outline;
use super::direction::correct_directions;
use super::extrema::add_extremes;
use super::grid::snap_layer;
use super::transform::SlantTransform;
use crate::config::Settings;
use crate::error::{ItalicError, Result};
use crate::models::{Font, ItalicReport, Layer, Master, Substitution};

/// Builds an italic master from an upright one
pub struct ItalicBuilder<'a> {
    settings: &'a Settings,
}

impl<'a> ItalicBuilder<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Add an italic master derived from `source` (id or name) to the font
    pub fn build(&self, font: &mut Font, source: &str) -> Result<ItalicReport> {
        let angle = self.settings.slant.resolve_angle();
        let compensation = self.settings.compensation.percent;
        let transform = SlantTransform::new(angle, compensation, self.settings.slant.origin_y)?;

        let source_master = font
            .master(source)
            .cloned()
            .ok_or_else(|| ItalicError::MasterNotFound(source.to_string()))?;

        if source_master.name.contains("Italic") {
            return Err(ItalicError::AlreadyItalic(source_master.name));
        }

        let name = italic_name(&source_master.name);
        if font.master_by_name(&name).is_some() {
            return Err(ItalicError::MasterExists(name));
        }

        let master = Master {
            id: Uuid::new_v4().to_string().to_uppercase(),
            name,
            italic_angle: -angle,
        };

        let alternates = if self.settings.options.use_alternates {
            Alternates::resolve(font, &self.settings.alternates, &source_master.id)
        } else {
            Alternates::default()
        };
        if !alternates.is_empty() {
            log::debug!("{} italic alternates available", alternates.len());
        }

        log::info!("Generating {}", master.name);
        log::info!("Angle: {}°, Compensation: {}%", angle, compensation);
        let matrix = transform.coefficients();
        log::debug!(
            "Transform matrix: [{:.4}, {}, {:.4}, {}]",
            matrix[0],
            matrix[1],
            matrix[2],
            matrix[3]
        );

        let mut processed = 0;
        let mut substitutions = Vec::new();
        let mut glyphs = font.glyphs.clone();

        for glyph in &mut glyphs {
            let index = match glyph.layers.iter().position(|l| l.master_id == master.id) {
                Some(index) => index,
                None => {
                    let Some(source_layer) = glyph.layer(&source_master.id) else {
                        continue;
                    };
                    let mut layer = source_layer.clone();
                    layer.master_id = master.id.clone();
                    glyph.layers.push(layer);
                    glyph.layers.len() - 1
                }
            };
            let layer = &mut glyph.layers[index];

            if let Some(alternate) = alternates.substitute(&glyph.name, layer) {
                log::debug!("Substituted: {} → {}", glyph.name, alternate);
                substitutions.push(Substitution {
                    glyph: glyph.name.clone(),
                    alternate: alternate.to_string(),
                });
            }

            if layer.is_empty() {
                continue;
            }

            transform.apply_to_layer(layer, self.settings.compensation.scale_advance);

            if self.settings.options.cleanup {
                post_process(layer)
                    .map_err(|e| ItalicError::Outline(format!("glyph '{}': {}", glyph.name, e)))?;
            }

            if self.settings.options.snap_to_grid {
                snap_layer(layer, self.settings.options.grid);
            }

            processed += 1;
        }

        log::info!("Processed {} glyphs", processed);
        if !substitutions.is_empty() {
            log::info!("Substituted {} alternates", substitutions.len());
        }

        let report = ItalicReport {
            family_name: font.family_name.clone(),
            source_master: source_master.name.clone(),
            master_name: master.name.clone(),
            master_id: master.id.clone(),
            angle,
            compensation_percent: compensation,
            matrix,
            processed,
            substitutions,
            cleanup: self.settings.options.cleanup,
            snapped: self.settings.options.snap_to_grid,
            generated_at: Utc::now(),
        };

        font.glyphs = glyphs;
        font.masters.push(master);
        Ok(report)
    }
}

/// Name of the italic counterpart of an upright master
pub fn italic_name(upright: &str) -> String {
    let name = upright.replace("Regular", "Italic");
    if name.contains("Italic") {
        return name;
    }
    if upright.contains("Bold") {
        return upright.replace("Bold", "Bold Italic");
    }
    format!("{} Italic", upright)
}

/// Add extremes, clean up and fix the direction of a layer's paths
fn post_process(layer: &mut Layer) -> std::result::Result<(), String> {
    let mut outline = Outline::from_paths(&layer.paths)?;

    let mut added = 0;
    let mut removed = 0;
    for contour in &mut outline.contours {
        added += add_extremes(contour);
        removed += clean_up(contour);
    }
    outline.contours.retain(|c| !is_degenerate(c));
    let reversed = correct_directions(&mut outline.contours);

    log::trace!(
        "{} nodes added, {} removed, {} paths reversed",
        added,
        removed,
        reversed
    );
    layer.paths = outline.into_paths();
    Ok(())
}
