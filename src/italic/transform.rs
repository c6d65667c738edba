//! Slant and stem compensation transform

use kurbo::{Affine, Point};

use crate::error::{ItalicError, Result};
use crate::models::Layer;

pub const MIN_ANGLE: f64 = 1.0;
pub const MAX_ANGLE: f64 = 20.0;
pub const MAX_COMPENSATION: f64 = 8.0;

/// Horizontal shear combined with a horizontal stretch
///
/// `x' = stretch * x + tan(angle) * stretch * (y - origin_y)`, `y' = y`.
/// The stretch widens glyphs to counteract the apparent thinning of
/// vertical stems once they lean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlantTransform {
    angle: f64,
    stretch: f64,
    origin_y: f64,
}

impl SlantTransform {
    pub fn new(angle: f64, compensation_percent: f64, origin_y: f64) -> Result<Self> {
        validate_angle(angle)?;
        validate_compensation(compensation_percent)?;
        if !origin_y.is_finite() {
            return Err(ItalicError::Config(format!(
                "Skew origin must be a finite height, got {}",
                origin_y
            )));
        }
        Ok(Self {
            angle,
            stretch: 1.0 + compensation_percent / 100.0,
            origin_y,
        })
    }

    pub fn affine(&self) -> Affine {
        let skew = self.angle.to_radians().tan() * self.stretch;
        Affine::new([self.stretch, 0.0, skew, 1.0, -skew * self.origin_y, 0.0])
    }

    /// Matrix as `[xx, xy, yx, yy, dx, dy]`
    pub fn coefficients(&self) -> [f64; 6] {
        self.affine().as_coeffs()
    }

    pub fn apply_to_point(&self, pt: Point) -> Point {
        self.affine() * pt
    }

    /// Transform every node, anchor and component of a layer
    ///
    /// Components are conjugated by the transform so that they keep pointing
    /// at the same place on their base glyph, which is slanted on its own.
    pub fn apply_to_layer(&self, layer: &mut Layer, scale_advance: bool) {
        let affine = self.affine();
        let inverse = affine.inverse();

        for path in &mut layer.paths {
            for node in &mut path.nodes {
                node.set_point(affine * node.point());
            }
        }

        for anchor in &mut layer.anchors {
            let pt = self.apply_to_point(Point::new(anchor.x, anchor.y));
            anchor.x = pt.x;
            anchor.y = pt.y;
        }

        for component in &mut layer.components {
            component.transform = (affine * component.affine() * inverse).as_coeffs();
        }

        if scale_advance {
            layer.width *= self.stretch;
        }
    }
}

fn validate_angle(angle: f64) -> Result<()> {
    if !(MIN_ANGLE..=MAX_ANGLE).contains(&angle) {
        return Err(ItalicError::InvalidAngle(angle));
    }
    Ok(())
}

fn validate_compensation(percent: f64) -> Result<()> {
    if !(0.0..=MAX_COMPENSATION).contains(&percent) {
        return Err(ItalicError::InvalidCompensation(percent));
    }
    Ok(())
}
