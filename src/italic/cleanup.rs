//! Path cleanup: degenerate segments, retracted handles, redundant nodes

use kurbo::Point;

use super::contour::{Contour, Segment, SegmentKind};

/// Distance under which points are treated as the same
const SAME_POINT: f64 = 0.01;

/// Maximum distance of a joint from the line through its neighbours to be dropped
const COLLINEAR: f64 = 0.01;

/// Clean up a contour in place
///
/// Returns the number of on-curve nodes removed.
pub fn clean_up(contour: &mut Contour) -> usize {
    retract_flat_cubics(contour);
    let removed = remove_zero_length(contour);
    removed + merge_collinear_lines(contour)
}

/// Contours that no longer enclose or draw anything
pub fn is_degenerate(contour: &Contour) -> bool {
    let count = contour.segments.len();
    if !contour.is_closed() {
        return count == 0;
    }
    let all_lines = contour
        .segments
        .iter()
        .all(|s| s.kind == SegmentKind::Line);
    count < 2 || (all_lines && count < 3)
}

/// Cubics whose handles sit on their end points are straight lines
fn retract_flat_cubics(contour: &mut Contour) {
    for i in 0..contour.segments.len() {
        let start = contour.start_of(i).pt;
        let seg = &mut contour.segments[i];
        if seg.kind == SegmentKind::Cubic
            && same(seg.offcurves[0], start)
            && same(seg.offcurves[1], seg.end.pt)
        {
            *seg = Segment::line(seg.end);
        }
    }
}

fn remove_zero_length(contour: &mut Contour) -> usize {
    let mut removed = 0;
    let mut i = 0;
    while i < contour.segments.len() && contour.segments.len() > 1 {
        let start = contour.start_of(i).pt;
        let seg = &contour.segments[i];
        let collapsed = same(seg.end.pt, start) && seg.offcurves.iter().all(|&p| same(p, start));
        if collapsed {
            contour.segments.remove(i);
            removed += 1;
        } else {
            i += 1;
        }
    }
    removed
}

/// Drop line-line joints that lie on the straight line between their neighbours
fn merge_collinear_lines(contour: &mut Contour) -> usize {
    let mut removed = 0;
    loop {
        let count = contour.segments.len();
        let min_count = if contour.is_closed() { 4 } else { 2 };
        if count < min_count {
            return removed;
        }
        let last = if contour.is_closed() { count } else { count - 1 };

        let joint = (0..last).find(|&i| {
            let next = &contour.segments[(i + 1) % count];
            contour.segments[i].kind == SegmentKind::Line
                && next.kind == SegmentKind::Line
                && between(
                    contour.start_of(i).pt,
                    contour.segments[i].end.pt,
                    next.end.pt,
                )
        });

        match joint {
            Some(i) => {
                contour.segments.remove(i);
                removed += 1;
            }
            None => return removed,
        }
    }
}

fn same(a: Point, b: Point) -> bool {
    a.distance(b) < SAME_POINT
}

/// Whether `mid` lies on the segment from `a` to `b`, strictly inside it
fn between(a: Point, mid: Point, b: Point) -> bool {
    let ab = b - a;
    let len = ab.hypot();
    if len < SAME_POINT {
        return false;
    }
    let am = mid - a;
    let off_line = ab.cross(am).abs() / len;
    let along = ab.dot(am) / len;
    off_line < COLLINEAR && along > 0.0 && along < len
}
