//! Render target abstraction and a software bitmap implementation.
//!
//! [`Surface`] is the seam between the pure drawing model and whatever
//! actually puts pixels on screen. The in-crate [`Bitmap`] rasterizer
//! exists so replay determinism can be asserted pixel-for-pixel in
//! tests; hosts with a real canvas implement the trait themselves.

use crate::consts::PREVIEW_DASH;
use crate::geom::{Color, Point};

/// How a stroked outline is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    /// On/off dashes of [`PREVIEW_DASH`] pixels, used for shape previews.
    Dashed,
}

/// A mutable render target in canvas pixel coordinates.
pub trait Surface {
    /// Flood the whole surface with one color.
    fn fill(&mut self, color: Color);

    /// Stroke connected segments through `points` in order.
    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: u32, style: LineStyle);

    /// Stroke the axis-aligned rectangle with corners `a` and `b`.
    fn stroke_rect(&mut self, a: Point, b: Point, color: Color, width: u32, style: LineStyle);

    /// Stroke a circle outline.
    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Color,
        width: u32,
        style: LineStyle,
    );

    /// Fill a solid disc.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Draw `text` with its baseline at `at`, in a font `font_px` tall.
    fn fill_text(&mut self, text: &str, at: Point, font_px: u32, color: Color);
}

/// A plain in-memory RGB framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
impl Bitmap {
    /// A new bitmap flooded with the canvas background color.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BACKGROUND; (width as usize) * (height as usize)],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The color at `(x, y)`, or `None` outside the bitmap.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            self.pixels.get((y as usize) * (self.width as usize) + x as usize).copied()
        } else {
            None
        }
    }

    fn set(&mut self, x: i64, y: i64, color: Color) {
        if x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height) {
            self.pixels[(y as usize) * (self.width as usize) + x as usize] = color;
        }
    }

    /// Stamp a square brush of side `2 * half + 1` centered at `(cx, cy)`.
    fn stamp(&mut self, cx: i64, cy: i64, half: i64, color: Color) {
        for dy in -half..=half {
            for dx in -half..=half {
                self.set(cx + dx, cy + dy, color);
            }
        }
    }

    /// Stamp the brush along the segment `a..=b`, stepping one pixel at a
    /// time along the longer axis. `travelled` accumulates arc length so
    /// dash phase is continuous across segments of one polyline.
    fn segment(
        &mut self,
        a: Point,
        b: Point,
        color: Color,
        width: u32,
        style: LineStyle,
        travelled: &mut f64,
    ) {
        let half = i64::from(width / 2);
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0);
        let step_len = a.distance_to(b) / steps;
        let mut i = 0.0;
        while i <= steps {
            if dash_on(style, *travelled + i * step_len) {
                let x = (a.x + dx * i / steps).round() as i64;
                let y = (a.y + dy * i / steps).round() as i64;
                self.stamp(x, y, half, color);
            }
            i += 1.0;
        }
        *travelled += steps * step_len;
    }
}

fn dash_on(style: LineStyle, travelled: f64) -> bool {
    match style {
        LineStyle::Solid => true,
        LineStyle::Dashed => (travelled / PREVIEW_DASH) as i64 % 2 == 0,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
impl Surface for Bitmap {
    fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: u32, style: LineStyle) {
        let mut travelled = 0.0;
        for pair in points.windows(2) {
            self.segment(pair[0], pair[1], color, width, style, &mut travelled);
        }
    }

    fn stroke_rect(&mut self, a: Point, b: Point, color: Color, width: u32, style: LineStyle) {
        let corners = [
            a,
            Point::new(b.x, a.y),
            b,
            Point::new(a.x, b.y),
            a,
        ];
        self.stroke_polyline(&corners, color, width, style);
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Color,
        width: u32,
        style: LineStyle,
    ) {
        if radius <= 0.0 {
            self.stamp(center.x.round() as i64, center.y.round() as i64, i64::from(width / 2), color);
            return;
        }
        let segments = (std::f64::consts::TAU * radius).ceil().max(12.0) as usize;
        let mut points = Vec::with_capacity(segments + 1);
        for i in 0..=segments {
            let theta = std::f64::consts::TAU * (i as f64) / (segments as f64);
            points.push(Point::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            ));
        }
        self.stroke_polyline(&points, color, width, style);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let r = radius.max(0.0);
        let (x0, x1) = ((center.x - r).floor() as i64, (center.x + r).ceil() as i64);
        let (y0, y1) = ((center.y - r).floor() as i64, (center.y + r).ceil() as i64);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Point::new(x as f64, y as f64);
                if p.distance_to(center) <= r {
                    self.set(x, y, color);
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, at: Point, font_px: u32, color: Color) {
        // Glyph shaping belongs to the host renderer. The software
        // fallback fills the text's em box so replay stays deterministic.
        if text.is_empty() {
            return;
        }
        let font = f64::from(font_px);
        let advance = font * 0.6;
        let chars = text.chars().count() as f64;
        let (x0, x1) = (at.x.floor() as i64, (at.x + advance * chars).ceil() as i64);
        let (y0, y1) = ((at.y - font).floor() as i64, at.y.ceil() as i64);
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set(x, y, color);
            }
        }
    }
}
