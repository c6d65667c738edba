//! Add on-curve nodes where curves reach a horizontal or vertical tangent

use kurbo::{CubicBez, ParamCurve, ParamCurveExtrema, Point};

use super::contour::{Contour, OnCurve, Segment, SegmentKind};

/// Parameters this close to a segment end are not split
const T_EPSILON: f64 = 1e-3;

/// Split points this close to an existing on-curve point are skipped
const MIN_DISTANCE: f64 = 0.5;

/// Insert extremum nodes into every curve of the contour
///
/// Returns the number of on-curve nodes added.
pub fn add_extremes(contour: &mut Contour) -> usize {
    let mut added = 0;
    let mut segments = Vec::with_capacity(contour.segments.len());

    for (i, seg) in contour.segments.iter().enumerate() {
        let start = contour.start_of(i).pt;
        let split = match seg.kind {
            SegmentKind::Line => None,
            SegmentKind::Cubic => split_cubic(start, seg),
            SegmentKind::Quad => split_quads(start, seg),
        };
        match split {
            Some(pieces) => {
                added += pieces.len() - 1;
                segments.extend(pieces);
            }
            None => segments.push(seg.clone()),
        }
    }

    contour.segments = segments;
    added
}

fn split_cubic(start: Point, seg: &Segment) -> Option<Vec<Segment>> {
    let cubic = CubicBez::new(start, seg.offcurves[0], seg.offcurves[1], seg.end.pt);
    let params = split_params(&cubic);
    if params.is_empty() {
        return None;
    }

    let pieces = pieces(&cubic, &params)
        .map(|(piece, last)| {
            let end = if last {
                seg.end
            } else {
                OnCurve::new(piece.p3, true)
            };
            Segment::cubic(piece.p1, piece.p2, end)
        })
        .collect();
    Some(pieces)
}

/// Quadratic runs keep their implied points unless one of their curves is split
fn split_quads(start: Point, seg: &Segment) -> Option<Vec<Segment>> {
    let quads = seg.quads(start);
    let params: Vec<Vec<f64>> = quads.iter().map(split_params).collect();
    if params.iter().all(Vec::is_empty) {
        return None;
    }

    let mut segments = Vec::new();
    let count = quads.len();
    for (q, (quad, ts)) in quads.iter().zip(&params).enumerate() {
        let last_quad = q + 1 == count;
        for (piece, last_piece) in pieces(quad, ts) {
            let end = if last_quad && last_piece {
                seg.end
            } else {
                OnCurve::new(piece.p2, true)
            };
            segments.push(Segment::quad(piece.p1, end));
        }
    }
    Some(segments)
}

/// Interior extremum parameters far enough from the segment ends
fn split_params<C: ParamCurveExtrema>(curve: &C) -> Vec<f64> {
    let p0 = curve.start();
    let p1 = curve.end();
    let mut params: Vec<f64> = Vec::new();

    for t in curve.extrema() {
        if t <= T_EPSILON || t >= 1.0 - T_EPSILON {
            continue;
        }
        let pt = curve.eval(t);
        if pt.distance(p0) < MIN_DISTANCE || pt.distance(p1) < MIN_DISTANCE {
            continue;
        }
        if let Some(&prev) = params.last() {
            if t - prev <= T_EPSILON || pt.distance(curve.eval(prev)) < MIN_DISTANCE {
                continue;
            }
        }
        params.push(t);
    }

    params
}

/// Sub-curves between consecutive split parameters, flagged when last
fn pieces<'a, C: ParamCurve>(
    curve: &'a C,
    params: &'a [f64],
) -> impl Iterator<Item = (C, bool)> + 'a {
    let bounds: Vec<f64> = std::iter::once(0.0)
        .chain(params.iter().copied())
        .chain(std::iter::once(1.0))
        .collect();
    let count = bounds.len() - 1;
    (0..count).map(move |i| (curve.subsegment(bounds[i]..bounds[i + 1]), i + 1 == count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Node, NodeType, Path};
    use kurbo::Affine;

    /// A circle drawn with four cubics, on-curves at its extrema
    fn circle(r: f64) -> Path {
        let k = 0.5523 * r;
        Path::closed(vec![
            Node::off(r, k),
            Node::off(k, r),
            Node::smooth(0.0, r, NodeType::Curve),
            Node::off(-k, r),
            Node::off(-r, k),
            Node::smooth(-r, 0.0, NodeType::Curve),
            Node::off(-r, -k),
            Node::off(-k, -r),
            Node::smooth(0.0, -r, NodeType::Curve),
            Node::off(k, -r),
            Node::off(r, -k),
            Node::smooth(r, 0.0, NodeType::Curve),
        ])
    }

    fn skew(path: &Path, angle: f64) -> Path {
        let affine = Affine::skew(angle.to_radians().tan(), 0.0);
        let mut path = path.clone();
        for node in &mut path.nodes {
            node.set_point(affine * node.point());
        }
        path
    }

    #[test]
    fn test_rectangle_gets_no_extremes() {
        let path = Path::closed(vec![
            Node::line(0.0, 0.0),
            Node::line(100.0, 0.0),
            Node::line(100.0, 100.0),
            Node::line(0.0, 100.0),
        ]);
        let mut contour = Contour::from_path(&path).unwrap().unwrap();
        assert_eq!(add_extremes(&mut contour), 0);
        assert_eq!(contour.to_path(), path);
    }

    #[test]
    fn test_upright_circle_already_has_extremes() {
        let mut contour = Contour::from_path(&circle(100.0)).unwrap().unwrap();
        assert_eq!(add_extremes(&mut contour), 0);
        assert_eq!(contour.segments.len(), 4);
    }

    #[test]
    fn test_skewed_circle_gains_extremes() {
        let mut contour = Contour::from_path(&skew(&circle(100.0), 12.0))
            .unwrap()
            .unwrap();
        let added = add_extremes(&mut contour);

        // The vertical tangents moved off the left/right on-curve nodes
        assert!(added >= 2, "added {}", added);
        assert_eq!(contour.segments.len(), 4 + added);
        assert!(contour
            .segments
            .iter()
            .all(|s| s.kind == SegmentKind::Cubic));

        let rightmost = contour
            .segments
            .iter()
            .map(|s| s.end.pt.x)
            .fold(f64::MIN, f64::max);
        let bbox_right = kurbo::Shape::bounding_box(&contour.to_bez_path()).x1;
        assert!((rightmost - bbox_right).abs() < 1e-6);
    }

    #[test]
    fn test_split_preserves_shape() {
        let original = Contour::from_path(&skew(&circle(100.0), 12.0))
            .unwrap()
            .unwrap();
        let mut split = original.clone();
        add_extremes(&mut split);

        let area = original.signed_area();
        assert!((split.signed_area() - area).abs() < 1e-6 * area.abs());
        assert!(split.segments.iter().filter(|s| s.end.smooth).count() >= 4);
    }

    #[test]
    fn test_quadratic_bulge_is_split() {
        // A single quad peaking at its midpoint
        let path = Path::closed(vec![
            Node::line(0.0, 0.0),
            Node::off(50.0, 100.0),
            Node::qcurve(100.0, 0.0),
        ]);
        let mut contour = Contour::from_path(&path).unwrap().unwrap();
        assert_eq!(add_extremes(&mut contour), 1);

        let peak = contour.segments[1].end;
        assert!(peak.smooth);
        assert!((peak.pt.x - 50.0).abs() < 1e-9);
        assert!((peak.pt.y - 50.0).abs() < 1e-9);
        assert_eq!(contour.segments[2].kind, SegmentKind::Quad);
    }

    #[test]
    fn test_quadratic_run_without_extremes_keeps_implied_points() {
        let path = Path::closed(vec![
            Node::line(0.0, 0.0),
            Node::off(0.0, 50.0),
            Node::off(50.0, 100.0),
            Node::qcurve(100.0, 100.0),
        ]);
        let mut contour = Contour::from_path(&path).unwrap().unwrap();
        assert_eq!(add_extremes(&mut contour), 0);
        assert_eq!(contour.to_path(), path);
    }
}
