//! Path direction correction
//!
//! Outermost contours run counter-clockwise and every nesting level
//! alternates, so counters cut holes under the non-zero fill rule.

use kurbo::Shape;

use super::contour::Contour;

/// Reverse closed contours whose direction does not match their nesting depth
///
/// Returns the number of reversed contours.
pub fn correct_directions(contours: &mut [Contour]) -> usize {
    let shapes: Vec<_> = contours
        .iter()
        .map(|c| c.is_closed().then(|| c.to_bez_path()))
        .collect();

    let mut reversed = 0;
    for i in 0..contours.len() {
        if !contours[i].is_closed() {
            continue;
        }
        let Some(probe) = contours[i].first_point() else {
            continue;
        };

        let depth = shapes
            .iter()
            .enumerate()
            .filter(|(j, shape)| {
                *j != i && shape.as_ref().is_some_and(|s| s.winding(probe) != 0)
            })
            .count();

        let area = contours[i].signed_area();
        if area == 0.0 {
            continue;
        }
        let want_ccw = depth % 2 == 0;
        if (area > 0.0) != want_ccw {
            contours[i].reverse();
            reversed += 1;
        }
    }

    reversed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Node, Path};

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64, ccw: bool) -> Contour {
        let mut nodes = vec![
            Node::line(x0, y0),
            Node::line(x1, y0),
            Node::line(x1, y1),
            Node::line(x0, y1),
        ];
        if !ccw {
            nodes.reverse();
        }
        Contour::from_path(&Path::closed(nodes)).unwrap().unwrap()
    }

    #[test]
    fn test_clockwise_outer_is_reversed() {
        let mut contours = vec![rect(0.0, 0.0, 100.0, 100.0, false)];
        assert!(contours[0].signed_area() < 0.0);

        assert_eq!(correct_directions(&mut contours), 1);
        assert!(contours[0].signed_area() > 0.0);
    }

    #[test]
    fn test_counter_runs_clockwise() {
        let mut contours = vec![
            rect(0.0, 0.0, 300.0, 300.0, true),
            rect(100.0, 100.0, 200.0, 200.0, true),
        ];

        assert_eq!(correct_directions(&mut contours), 1);
        assert!(contours[0].signed_area() > 0.0);
        assert!(contours[1].signed_area() < 0.0);
    }

    #[test]
    fn test_island_inside_counter_is_counter_clockwise() {
        let mut contours = vec![
            rect(0.0, 0.0, 500.0, 500.0, false),
            rect(100.0, 100.0, 400.0, 400.0, false),
            rect(200.0, 200.0, 300.0, 300.0, false),
        ];

        assert_eq!(correct_directions(&mut contours), 2);
        assert!(contours[0].signed_area() > 0.0);
        assert!(contours[1].signed_area() < 0.0);
        assert!(contours[2].signed_area() > 0.0);
    }

    #[test]
    fn test_separate_shapes_are_both_outer() {
        let mut contours = vec![
            rect(0.0, 0.0, 100.0, 100.0, true),
            rect(200.0, 0.0, 300.0, 100.0, false),
        ];

        assert_eq!(correct_directions(&mut contours), 1);
        assert!(contours.iter().all(|c| c.signed_area() > 0.0));
    }

    #[test]
    fn test_open_contours_are_ignored() {
        let open = Contour::from_path(&Path::open(vec![
            Node::line(100.0, 0.0),
            Node::line(0.0, 0.0),
        ]))
        .unwrap()
        .unwrap();
        let mut contours = vec![open.clone()];

        assert_eq!(correct_directions(&mut contours), 0);
        assert_eq!(contours[0], open);
    }
}
