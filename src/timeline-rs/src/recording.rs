use super::canvas::{Canvas, Stroke, TextAnchor, TextStyle};
use super::geometry::{Point, Rect, Rgba};
use super::path::TracePath;
/// Drawing call captured by [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Gradient(Rect),
    Fill(Rect, Rgba),
    RoundedFill(Rect, Rgba),
    StrokeRect(Rect),
    Line(Point, Point, Stroke),
    Dashed(Point, Point),
    Path(TracePath),
    Circle(Point, Rgba),
    Text(String, Rgba),
}
#[derive(Default, Debug)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
}
impl RecordingCanvas {
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(t, _) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
    pub fn paths(&self) -> Vec<&TracePath> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Path(p) => Some(p),
                _ => None,
            })
            .collect()
    }
    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}
impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(Op::Fill(rect, color));
    }
    fn stroke_rect(&mut self, rect: Rect, _stroke: Stroke) {
        self.ops.push(Op::StrokeRect(rect));
    }
    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.ops.push(Op::Line(from, to, stroke));
    }
    fn circle_stroke(&mut self, center: Point, _radius: f32, stroke: Stroke) {
        self.ops.push(Op::Circle(center, stroke.color));
    }
    fn text(&mut self, _pos: Point, _anchor: TextAnchor, text: &str, style: TextStyle) {
        self.ops.push(Op::Text(text.to_owned(), style.color));
    }
    fn fill_rounded_rect(&mut self, rect: Rect, _radius: f32, color: Rgba) {
        self.ops.push(Op::RoundedFill(rect, color));
    }
    fn fill_vertical_gradient(&mut self, rect: Rect, _top: Rgba, _bottom: Rgba) {
        self.ops.push(Op::Gradient(rect));
    }
    fn dashed_line(&mut self, from: Point, to: Point, _stroke: Stroke, _dash: f32, _gap: f32) {
        self.ops.push(Op::Dashed(from, to));
    }
    fn stroke_path(&mut self, path: &TracePath, _stroke: Stroke) {
        self.ops.push(Op::Path(path.clone()));
    }
}
