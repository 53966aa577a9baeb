use serde::{Deserialize, Serialize};
/// Screen-space position in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}
impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
    pub fn distance(self, other: Point) -> f32 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}
impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
/// Axis-aligned rectangle, y grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}
impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
    /// Moves each edge inwards by the given amounts.
    pub fn inset(&self, left: f32, top: f32, right: f32, bottom: f32) -> Rect {
        Rect::new(
            self.left + left,
            self.top + top,
            self.width - left - right,
            self.height - top - bottom,
        )
    }
}
/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}
fn opaque() -> u8 {
    255
}
impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
    /// Channel-wise linear blend, `t = 0` gives `self`.
    pub fn mix(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let blend = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: blend(self.r, other.r),
            g: blend(self.g, other.g),
            b: blend(self.b, other.b),
            a: blend(self.a, other.a),
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn inset_shrinks_every_edge() {
        let r = Rect::new(0.0, 0.0, 400.0, 220.0).inset(48.0, 20.0, 20.0, 28.0);
        assert_eq!(r.left, 48.0);
        assert_eq!(r.top, 20.0);
        assert_eq!(r.right(), 380.0);
        assert_eq!(r.bottom(), 192.0);
        assert!(!r.is_empty());
        assert!(Rect::new(0.0, 0.0, 30.0, 30.0)
            .inset(20.0, 20.0, 20.0, 20.0)
            .is_empty());
    }
    #[test]
    fn color_mix_hits_endpoints() {
        let a = Rgba::rgb(240, 248, 255);
        let b = Rgba::rgb(210, 228, 255);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), Rgba::rgb(225, 238, 255));
    }
}
