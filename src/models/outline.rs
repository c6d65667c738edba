use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};

/// Role of a node within a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// On-curve point ending a straight segment
    Line,
    /// On-curve point ending a cubic segment (two off-curves precede it)
    Curve,
    /// On-curve point ending a quadratic segment (one or more off-curves precede it)
    QCurve,
    /// Control point
    OffCurve,
}

impl NodeType {
    pub fn is_on_curve(self) -> bool {
        self != NodeType::OffCurve
    }
}

/// A single outline node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Tangent continuity through this node (on-curve nodes only)
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub smooth: bool,
}

impl Node {
    pub fn new(x: f64, y: f64, node_type: NodeType) -> Self {
        Self {
            x,
            y,
            node_type,
            smooth: false,
        }
    }

    pub fn off(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeType::OffCurve)
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_point(&mut self, pt: Point) {
        self.x = pt.x;
        self.y = pt.y;
    }
}

#[cfg(test)]
impl Node {
    pub fn smooth(x: f64, y: f64, node_type: NodeType) -> Self {
        Self {
            smooth: true,
            ..Self::new(x, y, node_type)
        }
    }

    pub fn line(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeType::Line)
    }

    pub fn curve(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeType::Curve)
    }

    pub fn qcurve(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeType::QCurve)
    }
}

/// A contour made of nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    #[serde(default = "default_closed")]
    pub closed: bool,
    pub nodes: Vec<Node>,
}

fn default_closed() -> bool {
    true
}

impl Path {
    pub fn closed(nodes: Vec<Node>) -> Self {
        Self {
            closed: true,
            nodes,
        }
    }

    pub fn open(nodes: Vec<Node>) -> Self {
        Self {
            closed: false,
            nodes,
        }
    }
}

/// A reference to another glyph, placed with an affine transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    /// `[xx, xy, yx, yy, dx, dy]`
    #[serde(default = "identity")]
    pub transform: [f64; 6],
}

fn identity() -> [f64; 6] {
    Affine::IDENTITY.as_coeffs()
}

impl Component {
    pub fn affine(&self) -> Affine {
        Affine::new(self.transform)
    }
}

#[cfg(test)]
impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: identity(),
        }
    }

    pub fn offset(name: impl Into<String>, dx: f64, dy: f64) -> Self {
        Self {
            name: name.into(),
            transform: Affine::translate((dx, dy)).as_coeffs(),
        }
    }
}

/// A named attachment point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub name: String,
    pub x: f64,
    pub y: f64,
}
