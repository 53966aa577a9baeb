// src/painter.rs
use eframe::egui;
use egui::epaint::{CubicBezierShape, Mesh};
use egui::{Align2, Color32, FontId, Pos2, Shape};
use crate::timeline::{
    Canvas, HAlign, PathSegment, Point, Rect, Rgba, Stroke, TextAnchor, TextStyle, TracePath,
    VAlign,
};
pub fn to_color(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}
fn to_pos(p: Point) -> Pos2 {
    Pos2::new(p.x, p.y)
}
fn to_rect(r: Rect) -> egui::Rect {
    egui::Rect::from_min_max(to_pos(r.top_left()), to_pos(r.bottom_right()))
}
fn to_stroke(s: Stroke) -> egui::Stroke {
    egui::Stroke::new(s.width, to_color(s.color))
}
pub fn from_rect(r: egui::Rect) -> Rect {
    Rect::new(r.min.x, r.min.y, r.width(), r.height())
}
fn to_align(anchor: TextAnchor) -> Align2 {
    let h = match anchor.h {
        HAlign::Left => egui::Align::Min,
        HAlign::Center => egui::Align::Center,
        HAlign::Right => egui::Align::Max,
    };
    let v = match anchor.v {
        VAlign::Top => egui::Align::Min,
        VAlign::Center => egui::Align::Center,
        VAlign::Bottom => egui::Align::Max,
    };
    Align2([h, v])
}
/// Timeline canvas on top of an egui painter (already clipped to the widget).
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
}
impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}
impl Canvas for EguiCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.painter.rect_filled(to_rect(rect), 0.0, to_color(color));
    }
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.painter.rect_stroke(to_rect(rect), 0.0, to_stroke(stroke));
    }
    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.painter
            .line_segment([to_pos(from), to_pos(to)], to_stroke(stroke));
    }
    fn circle_stroke(&mut self, center: Point, radius: f32, stroke: Stroke) {
        self.painter
            .circle_stroke(to_pos(center), radius, to_stroke(stroke));
    }
    fn text(&mut self, pos: Point, anchor: TextAnchor, text: &str, style: TextStyle) {
        // egui has no bold proportional face by default; bold labels use the same font.
        self.painter.text(
            to_pos(pos),
            to_align(anchor),
            text,
            FontId::proportional(style.size),
            to_color(style.color),
        );
    }
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Rgba) {
        self.painter
            .rect_filled(to_rect(rect), radius, to_color(color));
    }
    fn fill_vertical_gradient(&mut self, rect: Rect, top: Rgba, bottom: Rgba) {
        let r = to_rect(rect);
        let (top, bottom) = (to_color(top), to_color(bottom));
        let mut mesh = Mesh::default();
        mesh.colored_vertex(r.left_top(), top);
        mesh.colored_vertex(r.right_top(), top);
        mesh.colored_vertex(r.left_bottom(), bottom);
        mesh.colored_vertex(r.right_bottom(), bottom);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(1, 3, 2);
        self.painter.add(Shape::mesh(mesh));
    }
    fn dashed_line(&mut self, from: Point, to: Point, stroke: Stroke, dash: f32, gap: f32) {
        self.painter.extend(Shape::dashed_line(
            &[to_pos(from), to_pos(to)],
            to_stroke(stroke),
            dash,
            gap,
        ));
    }
    fn stroke_path(&mut self, path: &TracePath, stroke: Stroke) {
        let stroke = to_stroke(stroke);
        if !path.is_smooth() {
            let points = std::iter::once(path.start)
                .chain(path.segments.iter().map(PathSegment::end))
                .map(to_pos)
                .collect();
            self.painter.add(Shape::line(points, stroke));
            return;
        }
        let mut from = to_pos(path.start);
        for segment in &path.segments {
            match *segment {
                PathSegment::Line(to) => {
                    self.painter.line_segment([from, to_pos(to)], stroke);
                }
                PathSegment::Cubic { c1, c2, to } => {
                    self.painter.add(CubicBezierShape::from_points_stroke(
                        [from, to_pos(c1), to_pos(c2), to_pos(to)],
                        false,
                        Color32::TRANSPARENT,
                        stroke,
                    ));
                }
            }
            from = to_pos(segment.end());
        }
    }
}
