//! Pixel grid snapping

use crate::models::Layer;

/// Round a value to the nearest multiple of `grid`
pub fn snap(value: f64, grid: f64) -> f64 {
    // adding 0.0 turns -0.0 into 0.0
    (value / grid).round() * grid + 0.0
}

/// Round all coordinates of a layer to the grid
///
/// Points sharing an x or y before snapping still share it afterwards, so
/// horizontal and vertical handles at extrema stay tangent continuous.
pub fn snap_layer(layer: &mut Layer, grid: f64) {
    for path in &mut layer.paths {
        for node in &mut path.nodes {
            node.x = snap(node.x, grid);
            node.y = snap(node.y, grid);
        }
    }

    for anchor in &mut layer.anchors {
        anchor.x = snap(anchor.x, grid);
        anchor.y = snap(anchor.y, grid);
    }

    for component in &mut layer.components {
        component.transform[4] = snap(component.transform[4], grid);
        component.transform[5] = snap(component.transform[5], grid);
    }

    layer.width = snap(layer.width, grid);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Component, Node, NodeType, Path};

    #[test]
    fn test_snap_values() {
        assert_eq!(snap(10.4, 1.0), 10.0);
        assert_eq!(snap(10.5, 1.0), 11.0);
        assert_eq!(snap(-0.2, 1.0), 0.0);
        assert!(snap(-0.2, 1.0).is_sign_positive());
        assert_eq!(snap(13.0, 4.0), 12.0);
        assert_eq!(snap(15.0, 4.0), 16.0);
    }

    #[test]
    fn test_snap_layer() {
        let mut layer = Layer::new("m01", 510.4);
        layer.paths.push(Path::closed(vec![
            Node::line(0.3, -0.2),
            Node::line(102.7, 0.0),
            Node::line(243.9, 700.0),
        ]));
        layer.components.push(Component::offset("acutecomb", 151.6, 500.0));

        snap_layer(&mut layer, 1.0);

        let coords: Vec<(f64, f64)> = layer.paths[0].nodes.iter().map(|n| (n.x, n.y)).collect();
        assert_eq!(coords, vec![(0.0, 0.0), (103.0, 0.0), (244.0, 700.0)]);
        assert_eq!(layer.components[0].transform[4], 152.0);
        assert_eq!(layer.width, 510.0);
    }

    #[test]
    fn test_horizontal_handles_stay_level() {
        let mut layer = Layer::new("m01", 500.0);
        layer.paths.push(Path::closed(vec![
            Node::off(180.37, 700.46),
            Node::smooth(240.61, 700.46, NodeType::Curve),
            Node::off(300.82, 700.46),
            Node::off(340.2, 650.0),
            Node::curve(350.0, 600.0),
            Node::line(100.0, 0.0),
        ]));

        snap_layer(&mut layer, 1.0);

        let nodes = &layer.paths[0].nodes;
        assert_eq!(nodes[0].y, nodes[1].y);
        assert_eq!(nodes[1].y, nodes[2].y);
        assert!(nodes
            .iter()
            .all(|n| n.x.fract() == 0.0 && n.y.fract() == 0.0));
    }
}
