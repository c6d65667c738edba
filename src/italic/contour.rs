//! Segment view of node-list paths
//!
//! A [`Path`] stores nodes the way font editors do: off-curve control points
//! precede the on-curve node that ends their segment, and closed paths wrap
//! around. [`Contour`] regroups them into explicit segments so geometric
//! passes can split, drop and reverse segments, then writes them back.

use kurbo::{BezPath, CubicBez, Line, ParamCurveArea, PathSeg, Point, QuadBez};

use crate::models::{Node, NodeType, Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Line,
    Cubic,
    /// One or more off-curves with implied on-curve midpoints
    Quad,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnCurve {
    pub pt: Point,
    pub smooth: bool,
    /// Type the node had in its path; new points start as `Line`
    pub node_type: NodeType,
}

impl OnCurve {
    pub fn new(pt: Point, smooth: bool) -> Self {
        Self {
            pt,
            smooth,
            node_type: NodeType::Line,
        }
    }

    fn from_node(node: &Node) -> Self {
        Self {
            pt: node.point(),
            smooth: node.smooth,
            node_type: node.node_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub offcurves: Vec<Point>,
    pub end: OnCurve,
}

impl Segment {
    pub fn line(end: OnCurve) -> Self {
        Self {
            kind: SegmentKind::Line,
            offcurves: Vec::new(),
            end,
        }
    }

    pub fn cubic(c1: Point, c2: Point, end: OnCurve) -> Self {
        Self {
            kind: SegmentKind::Cubic,
            offcurves: vec![c1, c2],
            end,
        }
    }

    pub fn quad(c: Point, end: OnCurve) -> Self {
        Self {
            kind: SegmentKind::Quad,
            offcurves: vec![c],
            end,
        }
    }

    /// Kurbo curves for this segment when it starts at `start`
    pub fn to_kurbo(&self, start: Point) -> Vec<PathSeg> {
        match self.kind {
            SegmentKind::Line => vec![PathSeg::Line(Line::new(start, self.end.pt))],
            SegmentKind::Cubic => vec![PathSeg::Cubic(CubicBez::new(
                start,
                self.offcurves[0],
                self.offcurves[1],
                self.end.pt,
            ))],
            SegmentKind::Quad => self
                .quads(start)
                .into_iter()
                .map(PathSeg::Quad)
                .collect(),
        }
    }

    /// Expand the implied on-curve points of a quadratic run
    pub fn quads(&self, start: Point) -> Vec<QuadBez> {
        let mut quads = Vec::with_capacity(self.offcurves.len());
        let mut p0 = start;
        for (i, &ctrl) in self.offcurves.iter().enumerate() {
            let p2 = match self.offcurves.get(i + 1) {
                Some(next) => ctrl.midpoint(*next),
                None => self.end.pt,
            };
            quads.push(QuadBez::new(p0, ctrl, p2));
            p0 = p2;
        }
        quads
    }

    /// Node type written for the end point
    ///
    /// Curves dictate the type; a straight segment keeps `qcurve` if it had it.
    fn end_node_type(&self) -> NodeType {
        match self.kind {
            SegmentKind::Line if self.end.node_type == NodeType::QCurve => NodeType::QCurve,
            SegmentKind::Line => NodeType::Line,
            SegmentKind::Cubic => NodeType::Curve,
            SegmentKind::Quad => NodeType::QCurve,
        }
    }

    /// The same curve traversed from end to start, ending at `start`
    fn reversed(&self, start: OnCurve) -> Self {
        Self {
            kind: self.kind,
            offcurves: self.offcurves.iter().rev().copied().collect(),
            end: start,
        }
    }
}

/// A path as a list of segments
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    /// First on-curve of an open contour; closed contours start at their last segment's end
    pub start: Option<OnCurve>,
    pub segments: Vec<Segment>,
}

impl Contour {
    pub fn closed(segments: Vec<Segment>) -> Self {
        Self {
            start: None,
            segments,
        }
    }

    pub fn open(start: OnCurve, segments: Vec<Segment>) -> Self {
        Self {
            start: Some(start),
            segments,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.start.is_none()
    }

    /// Group the nodes of a path into segments
    ///
    /// Returns `Ok(None)` for paths without on-curve nodes, which are left alone.
    pub fn from_path(path: &Path) -> Result<Option<Contour>, String> {
        let Some(last_on) = path.nodes.iter().rposition(|n| n.node_type.is_on_curve()) else {
            if path.nodes.is_empty() || path.closed {
                return Ok(None);
            }
            return Err("open path has no on-curve nodes".to_string());
        };

        if path.closed {
            let ordered = path.nodes[last_on + 1..]
                .iter()
                .chain(&path.nodes[..=last_on]);
            let segments = collect_segments(ordered)?;
            return Ok(Some(Contour::closed(segments)));
        }

        let first = path.nodes[0];
        if !first.node_type.is_on_curve() {
            return Err("open path must start with an on-curve node".to_string());
        }
        if last_on + 1 != path.nodes.len() {
            return Err("open path ends with off-curve nodes".to_string());
        }
        let segments = collect_segments(path.nodes[1..].iter())?;
        Ok(Some(Contour::open(OnCurve::from_node(&first), segments)))
    }

    /// Write the segments back as nodes
    pub fn to_path(&self) -> Path {
        let mut nodes = Vec::new();
        if let Some(start) = self.start {
            nodes.push(on_curve_node(start, start.node_type));
        }
        for seg in &self.segments {
            nodes.extend(seg.offcurves.iter().map(|pt| Node::off(pt.x, pt.y)));
            nodes.push(on_curve_node(seg.end, seg.end_node_type()));
        }
        if self.is_closed() {
            Path::closed(nodes)
        } else {
            Path::open(nodes)
        }
    }

    /// On-curve point a segment starts from
    pub fn start_of(&self, index: usize) -> OnCurve {
        if index > 0 {
            return self.segments[index - 1].end;
        }
        match self.start {
            Some(start) => start,
            None => self.segments[self.segments.len() - 1].end,
        }
    }

    /// First on-curve point, if any
    pub fn first_point(&self) -> Option<Point> {
        if self.segments.is_empty() {
            return self.start.map(|s| s.pt);
        }
        Some(self.start_of(0).pt)
    }

    /// All kurbo curves in drawing order
    pub fn kurbo_segments(&self) -> Vec<PathSeg> {
        (0..self.segments.len())
            .flat_map(|i| self.segments[i].to_kurbo(self.start_of(i).pt))
            .collect()
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some(first) = self.first_point() else {
            return path;
        };
        path.move_to(first);
        for seg in self.kurbo_segments() {
            match seg {
                PathSeg::Line(l) => path.line_to(l.p1),
                PathSeg::Quad(q) => path.quad_to(q.p1, q.p2),
                PathSeg::Cubic(c) => path.curve_to(c.p1, c.p2, c.p3),
            }
        }
        if self.is_closed() {
            path.close_path();
        }
        path
    }

    /// Signed area; positive when counter-clockwise (y-up)
    pub fn signed_area(&self) -> f64 {
        if !self.is_closed() {
            return 0.0;
        }
        self.kurbo_segments().iter().map(|s| s.signed_area()).sum()
    }

    /// Reverse the drawing direction, keeping every point and smooth flag
    pub fn reverse(&mut self) {
        if self.segments.is_empty() {
            return;
        }
        let reversed: Vec<Segment> = (0..self.segments.len())
            .rev()
            .map(|i| self.segments[i].reversed(self.start_of(i)))
            .collect();
        if self.start.is_some() {
            self.start = self.segments.last().map(|s| s.end);
        }
        self.segments = reversed;
    }
}

fn on_curve_node(on: OnCurve, node_type: NodeType) -> Node {
    Node {
        smooth: on.smooth,
        ..Node::new(on.pt.x, on.pt.y, node_type)
    }
}

fn collect_segments<'a>(nodes: impl Iterator<Item = &'a Node>) -> Result<Vec<Segment>, String> {
    let mut segments = Vec::new();
    let mut pending = Vec::new();

    for node in nodes {
        let kind = match node.node_type {
            NodeType::OffCurve => {
                pending.push(node.point());
                continue;
            }
            NodeType::Line if pending.is_empty() => SegmentKind::Line,
            NodeType::Line => {
                return Err(format!(
                    "line node at ({}, {}) is preceded by off-curve nodes",
                    node.x, node.y
                ))
            }
            NodeType::Curve if pending.len() == 2 => SegmentKind::Cubic,
            NodeType::Curve => {
                return Err(format!(
                    "curve node at ({}, {}) needs two off-curve nodes, found {}",
                    node.x,
                    node.y,
                    pending.len()
                ))
            }
            NodeType::QCurve if pending.is_empty() => SegmentKind::Line,
            NodeType::QCurve => SegmentKind::Quad,
        };
        segments.push(Segment {
            kind,
            offcurves: std::mem::take(&mut pending),
            end: OnCurve::from_node(node),
        });
    }

    Ok(segments)
}

/// Paths of a layer split into editable contours and paths left as they are
#[derive(Debug, Clone, Default)]
pub struct Outline {
    pub contours: Vec<Contour>,
    untouched: Vec<(usize, Path)>,
}

impl Outline {
    pub fn from_paths(paths: &[Path]) -> Result<Self, String> {
        let mut outline = Outline::default();
        for (index, path) in paths.iter().enumerate() {
            match Contour::from_path(path).map_err(|e| format!("path {}: {}", index, e))? {
                Some(contour) => outline.contours.push(contour),
                None => outline.untouched.push((index, path.clone())),
            }
        }
        Ok(outline)
    }

    pub fn into_paths(self) -> Vec<Path> {
        let mut paths: Vec<Path> = self.contours.iter().map(Contour::to_path).collect();
        for (index, path) in self.untouched {
            let at = index.min(paths.len());
            paths.insert(at, path);
        }
        paths
    }
}
