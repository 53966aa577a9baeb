use super::geometry::Point;
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    Line(Point),
    Cubic { c1: Point, c2: Point, to: Point },
}
impl PathSegment {
    pub fn end(&self) -> Point {
        match *self {
            PathSegment::Line(to) | PathSegment::Cubic { to, .. } => to,
        }
    }
}
/// Stroke path for the load trace.
#[derive(Clone, Debug, PartialEq)]
pub struct TracePath {
    pub start: Point,
    pub segments: Vec<PathSegment>,
}
impl TracePath {
    pub fn is_smooth(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, PathSegment::Cubic { .. }))
    }
    /// Polyline approximation with `steps` chords per curve segment.
    pub fn flatten(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        let mut out = vec![self.start];
        let mut from = self.start;
        for segment in &self.segments {
            match *segment {
                PathSegment::Line(to) => out.push(to),
                PathSegment::Cubic { c1, c2, to } => {
                    for i in 1..=steps {
                        out.push(cubic_point(from, c1, c2, to, i as f32 / steps as f32));
                    }
                }
            }
            from = segment.end();
        }
        out
    }
}
fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let u = 1.0 - t;
    let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}
/// Connects `points` in order. Needs at least two points.
///
/// Smoothing puts both control points on the horizontal midpoint of each span,
/// the first at the previous point's height and the second at the current one,
/// which eases between samples without overshooting them.
pub fn build_path(points: &[Point], smooth: bool) -> Option<TracePath> {
    let (&start, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let segments = points
        .windows(2)
        .map(|pair| {
            let (prev, cur) = (pair[0], pair[1]);
            if !smooth {
                return PathSegment::Line(cur);
            }
            let mid_x = prev.x + (cur.x - prev.x) / 2.0;
            PathSegment::Cubic {
                c1: Point::new(mid_x, prev.y),
                c2: Point::new(mid_x, cur.y),
                to: cur,
            }
        })
        .collect();
    Some(TracePath { start, segments })
}
