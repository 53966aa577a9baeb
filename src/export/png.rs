use std::fs;
use std::io::Cursor;
use std::path::Path;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::{
    BitMapBackend, Circle, DrawingArea, FontDesc, FontFamily, FontStyle, IntoDrawingArea,
    PathElement, RGBAColor, RGBColor, Rectangle, ShapeStyle, Text,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use crate::export::error::ExportError;
use crate::timeline::{
    Canvas, Clock, HAlign, LoadTimeline, Point, Rect, Rgba, Stroke, TextAnchor, TextStyle, VAlign,
};
fn to_color(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, f64::from(c.a) / 255.0)
}
fn to_coord(p: Point) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}
fn stroke_style(stroke: Stroke) -> ShapeStyle {
    ShapeStyle {
        color: to_color(stroke.color),
        filled: false,
        stroke_width: stroke.width.round().max(1.0) as u32,
    }
}
/// Timeline canvas drawing onto a plotters bitmap.
///
/// Backend failures are kept and reported by [`PlottersCanvas::finish`]; text that
/// cannot be rendered (no usable system font) is skipped with a warning instead.
pub struct PlottersCanvas<'a, 'b> {
    area: &'a DrawingArea<BitMapBackend<'b>, Shift>,
    failure: Option<ExportError>,
    skipped_text: usize,
}
impl<'a, 'b> PlottersCanvas<'a, 'b> {
    pub fn new(area: &'a DrawingArea<BitMapBackend<'b>, Shift>) -> Self {
        Self {
            area,
            failure: None,
            skipped_text: 0,
        }
    }
    fn record<E: std::error::Error + Send + Sync + 'static>(
        &mut self,
        result: Result<(), DrawingAreaErrorKind<E>>,
    ) {
        if let Err(err) = result {
            if self.failure.is_none() {
                self.failure = Some(err.into());
            }
        }
    }
    pub fn finish(self) -> Result<(), ExportError> {
        if self.skipped_text > 0 {
            log::warn!("snapshot drawn without {} text labels", self.skipped_text);
        }
        match self.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
impl Canvas for PlottersCanvas<'_, '_> {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let style = ShapeStyle {
            color: to_color(color),
            filled: true,
            stroke_width: 0,
        };
        let result = self.area.draw(&Rectangle::new(
            [to_coord(rect.top_left()), to_coord(rect.bottom_right())],
            style,
        ));
        self.record(result);
    }
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        let result = self.area.draw(&Rectangle::new(
            [to_coord(rect.top_left()), to_coord(rect.bottom_right())],
            stroke_style(stroke),
        ));
        self.record(result);
    }
    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        let result = self.area.draw(&PathElement::new(
            vec![to_coord(from), to_coord(to)],
            stroke_style(stroke),
        ));
        self.record(result);
    }
    fn circle_stroke(&mut self, center: Point, radius: f32, stroke: Stroke) {
        let result = self.area.draw(&Circle::new(
            to_coord(center),
            radius.round() as i32,
            stroke_style(stroke),
        ));
        self.record(result);
    }
    fn text(&mut self, pos: Point, anchor: TextAnchor, text: &str, style: TextStyle) {
        let h = match anchor.h {
            HAlign::Left => HPos::Left,
            HAlign::Center => HPos::Center,
            HAlign::Right => HPos::Right,
        };
        let v = match anchor.v {
            VAlign::Top => VPos::Top,
            VAlign::Center => VPos::Center,
            VAlign::Bottom => VPos::Bottom,
        };
        let weight = if style.bold {
            FontStyle::Bold
        } else {
            FontStyle::Normal
        };
        let font = FontDesc::new(FontFamily::SansSerif, f64::from(style.size), weight)
            .color(&to_color(style.color))
            .pos(Pos::new(h, v));
        if let Err(err) = self
            .area
            .draw(&Text::new(text.to_owned(), to_coord(pos), font))
        {
            log::debug!("skipping label {text:?}: {err:?}");
            self.skipped_text += 1;
        }
    }
}
/// Renders `timeline` into a PNG of the given pixel size.
pub fn render_timeline_png<C: Clock>(
    timeline: &LoadTimeline<C>,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, ExportError> {
    if width == 0 || height == 0 {
        return Err(ExportError::EmptySurface { width, height });
    }
    let len = surface_len(width, height)?;
    let mut buffer = vec![0u8; len];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&RGBColor(255, 255, 255))?;
        let mut canvas = PlottersCanvas::new(&root);
        timeline.paint(
            &mut canvas,
            Rect::new(0.0, 0.0, width as f32, height as f32),
        );
        canvas.finish()?;
        root.present()?;
    }
    encode_png(&buffer, width, height)
}
/// Longest side accepted for a snapshot.
pub const MAX_SNAPSHOT_SIDE: u32 = 16_384;
/// RGB buffer length for a `width` x `height` bitmap.
fn surface_len(width: u32, height: u32) -> Result<usize, ExportError> {
    let too_large = ExportError::SurfaceTooLarge { width, height };
    if width > MAX_SNAPSHOT_SIDE || height > MAX_SNAPSHOT_SIDE {
        return Err(too_large);
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or(too_large)
}
pub fn write_snapshot(path: &Path, png: &[u8]) -> Result<(), ExportError> {
    fs::write(path, png)?;
    log::info!("snapshot written to {} ({} bytes)", path.display(), png.len());
    Ok(())
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| ExportError::Encode("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
