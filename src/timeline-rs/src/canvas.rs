use super::geometry::{Point, Rect, Rgba};
use super::path::{PathSegment, TracePath};
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Rgba,
}
impl Stroke {
    pub const fn new(width: f32, color: Rgba) -> Self {
        Self { width, color }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}
/// Which point of the text box sits on the given position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextAnchor {
    pub h: HAlign,
    pub v: VAlign,
}
impl TextAnchor {
    pub const LEFT_CENTER: TextAnchor = TextAnchor {
        h: HAlign::Left,
        v: VAlign::Center,
    };
    pub const RIGHT_CENTER: TextAnchor = TextAnchor {
        h: HAlign::Right,
        v: VAlign::Center,
    };
    pub const CENTER_TOP: TextAnchor = TextAnchor {
        h: HAlign::Center,
        v: VAlign::Top,
    };
}
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
    pub color: Rgba,
}
/// Curve subdivision used by the default `stroke_path`.
const FLATTEN_STEPS: usize = 12;
/// Strips used by the default gradient fill.
const GRADIENT_BANDS: usize = 32;
/// 2D drawing surface the timeline paints onto.
///
/// Backends implement the handful of required primitives; the provided methods
/// fall back to those primitives and can be overridden where the backend has
/// native support (curves, meshes, dash patterns).
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke);
    fn line(&mut self, from: Point, to: Point, stroke: Stroke);
    fn circle_stroke(&mut self, center: Point, radius: f32, stroke: Stroke);
    fn text(&mut self, pos: Point, anchor: TextAnchor, text: &str, style: TextStyle);
    fn fill_rounded_rect(&mut self, rect: Rect, _radius: f32, color: Rgba) {
        self.fill_rect(rect, color);
    }
    fn fill_vertical_gradient(&mut self, rect: Rect, top: Rgba, bottom: Rgba) {
        if rect.is_empty() {
            return;
        }
        let band = rect.height / GRADIENT_BANDS as f32;
        for i in 0..GRADIENT_BANDS {
            let t = (i as f32 + 0.5) / GRADIENT_BANDS as f32;
            let strip = Rect::new(rect.left, rect.top + band * i as f32, rect.width, band);
            self.fill_rect(strip, top.mix(bottom, t));
        }
    }
    fn dashed_line(&mut self, from: Point, to: Point, stroke: Stroke, dash: f32, gap: f32) {
        for (a, b) in dash_segments(from, to, dash, gap) {
            self.line(a, b, stroke);
        }
    }
    fn stroke_path(&mut self, path: &TracePath, stroke: Stroke) {
        let points = if path.is_smooth() {
            path.flatten(FLATTEN_STEPS)
        } else {
            std::iter::once(path.start)
                .chain(path.segments.iter().map(PathSegment::end))
                .collect()
        };
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], stroke);
        }
    }
}
/// Splits `from..to` into dash pieces of length `dash` separated by `gap`.
pub fn dash_segments(from: Point, to: Point, dash: f32, gap: f32) -> Vec<(Point, Point)> {
    let length = from.distance(to);
    if length <= 0.0 || dash <= 0.0 {
        return Vec::new();
    }
    let period = dash + gap.max(0.0);
    let mut out = Vec::new();
    let mut offset = 0.0;
    while offset < length {
        let end = (offset + dash).min(length);
        out.push((from.lerp(to, offset / length), from.lerp(to, end / length)));
        offset += period;
    }
    out
}
