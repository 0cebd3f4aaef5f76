// File: crates/piece-core/src/canvas.rs
// Summary: Drawing capability seam and its Skia CPU raster implementation.

use skia_safe as skia;

use crate::error::{Error, Result};
use crate::geometry::{centroid, closed_cardinal_spline, PointF, RectF};
use crate::recipe::{Fill, GradientDirection, Primitive, Shape};
use crate::types::Rgba;

/// Row-major straight-alpha RGBA8 pixels; stride is `width * 4`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw pixels. Returns `None` when the length does not match.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        (data.len() == width as usize * height as usize * 4).then_some(Self { width, height, data })
    }

    pub fn transparent(width: u32, height: u32) -> Self {
        Self { width, height, data: vec![0; width as usize * height as usize * 4] }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn stride(&self) -> usize { self.width as usize * 4 }
    pub fn as_raw(&self) -> &[u8] { &self.data }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride() + x as usize * 4;
        let p = &self.data[i..i + 4];
        Some(Rgba::rgba(p[0], p[1], p[2], p[3]))
    }

    /// Count of pixels with any coverage.
    pub fn coverage(&self) -> usize {
        self.data.chunks_exact(4).filter(|p| p[3] > 0).count()
    }
}

/// Target of primitive draw calls. Coordinates are canvas pixels.
pub trait Canvas {
    type Output;

    fn size(&self) -> u32;
    /// Draw the fill (if any) then the stroke (if any) of one primitive.
    fn draw(&mut self, primitive: &Primitive) -> Result<()>;
    fn finish(self) -> Result<Self::Output>;
}

/// Canvas that keeps the primitives it receives instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    size: u32,
    primitives: Vec<Primitive>,
}

impl RecordingCanvas {
    pub fn new(size: u32) -> Self {
        Self { size, primitives: Vec::new() }
    }
}

impl Canvas for RecordingCanvas {
    type Output = Vec<Primitive>;

    fn size(&self) -> u32 { self.size }

    fn draw(&mut self, primitive: &Primitive) -> Result<()> {
        self.primitives.push(primitive.clone());
        Ok(())
    }

    fn finish(self) -> Result<Vec<Primitive>> {
        Ok(self.primitives)
    }
}

/// Anti-aliased CPU raster canvas, cleared to transparent on creation.
pub struct SkiaCanvas {
    surface: skia::Surface,
    size: u32,
    label: String,
}

impl SkiaCanvas {
    /// `label` names the piece in error messages.
    pub fn new(size: u32, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        let side = size as i32;
        let mut surface = skia::surfaces::raster_n32_premul((side, side))
            .ok_or_else(|| Error::render(&label, format!("failed to create {size}x{size} raster surface")))?;
        surface.canvas().clear(skia::Color::TRANSPARENT);
        Ok(Self { surface, size, label })
    }

    fn fail(&self, reason: impl Into<String>) -> Error {
        Error::render(&self.label, reason)
    }

    fn fill_paint(&self, fill: &Fill, shape: &Shape) -> Result<skia::Paint> {
        let mut paint = base_paint(skia::paint::Style::Fill);
        match fill {
            Fill::Solid(c) => {
                paint.set_color(to_color(*c));
            }
            Fill::Linear { from, to, direction, bounds } => {
                let rect = bounds.unwrap_or_else(|| shape.bounds());
                let (p0, p1) = gradient_line(&rect, *direction);
                let colors = [to_color(*from), to_color(*to)];
                let shader = skia::Shader::linear_gradient(
                    (p0, p1),
                    &colors[..],
                    None,
                    skia::TileMode::Clamp,
                    None,
                    None,
                )
                .ok_or_else(|| self.fail("linear gradient shader"))?;
                paint.set_shader(shader);
            }
            // Multi-color rims are painted by `fill_path_gradient`.
            Fill::Radial { center, surround } => {
                let rim = surround.first().copied().unwrap_or(*center);
                let rect = shape.bounds();
                let c = rect.center();
                let mut local = skia::Matrix::translate((c.x, c.y));
                local.pre_scale((rect.width * 0.5, rect.height * 0.5), None);
                let colors = [to_color(*center), to_color(rim)];
                let shader = skia::Shader::radial_gradient(
                    (0.0, 0.0),
                    1.0,
                    &colors[..],
                    None,
                    skia::TileMode::Clamp,
                    None,
                    &local,
                )
                .ok_or_else(|| self.fail("radial gradient shader"))?;
                paint.set_shader(shader);
            }
        }
        Ok(paint)
    }

    /// Path gradient with one surround color per vertex: a sweep of the rim
    /// colors around the centroid, overlaid by the center color fading out.
    fn fill_path_gradient(&mut self, path: &skia::Path, points: &[PointF], center: Rgba, surround: &[Rgba]) -> Result<()> {
        let origin = centroid(points).ok_or_else(|| self.fail("path gradient without vertices"))?;
        let reach = points.iter().map(|p| p.distance(origin)).fold(0.0f32, f32::max).max(1.0);

        let (stops, colors) = sweep_stops(origin, points, surround);
        let colors: Vec<skia::Color> = colors.into_iter().map(to_color).collect();
        let sweep = skia::Shader::sweep_gradient(
            (origin.x, origin.y),
            colors.as_slice(),
            Some(stops.as_slice()),
            skia::TileMode::Clamp,
            None,
            None,
            None,
        )
        .ok_or_else(|| self.fail("sweep gradient shader"))?;

        let glow = [to_color(center), to_color(center.with_alpha(0))];
        let radial = skia::Shader::radial_gradient(
            (origin.x, origin.y),
            reach,
            &glow[..],
            None,
            skia::TileMode::Clamp,
            None,
            None,
        )
        .ok_or_else(|| self.fail("radial gradient shader"))?;

        let canvas = self.surface.canvas();
        let mut paint = base_paint(skia::paint::Style::Fill);
        paint.set_shader(sweep);
        canvas.draw_path(path, &paint);
        paint.set_shader(radial);
        canvas.draw_path(path, &paint);
        Ok(())
    }

    fn draw_shape(&mut self, shape: &Shape, paint: &skia::Paint) -> Result<()> {
        let path = match shape {
            Shape::Polygon(_) | Shape::Curve { .. } => Some(self.closed_path(shape)?),
            _ => None,
        };
        let canvas = self.surface.canvas();
        match shape {
            Shape::Ellipse(r) => {
                canvas.draw_oval(to_rect(r), paint);
            }
            Shape::Rect(r) => {
                canvas.draw_rect(to_rect(r), paint);
            }
            Shape::Polygon(_) | Shape::Curve { .. } => {
                if let Some(path) = &path {
                    canvas.draw_path(path, paint);
                }
            }
            Shape::Line { from, to } => {
                canvas.draw_line((from.x, from.y), (to.x, to.y), paint);
            }
        }
        Ok(())
    }

    fn closed_path(&self, shape: &Shape) -> Result<skia::Path> {
        outline_path(shape).ok_or_else(|| self.fail("polygon or curve needs 3+ vertices"))
    }
}

impl Canvas for SkiaCanvas {
    type Output = PixelBuffer;

    fn size(&self) -> u32 { self.size }

    fn draw(&mut self, primitive: &Primitive) -> Result<()> {
        let shape = &primitive.shape;
        if let Some(fill) = &primitive.fill {
            match (fill, shape) {
                (Fill::Radial { center, surround }, Shape::Polygon(points) | Shape::Curve { points, .. })
                    if surround.len() > 1 =>
                {
                    let path = self.closed_path(shape)?;
                    self.fill_path_gradient(&path, points, *center, surround)?;
                }
                // A line has no interior.
                (_, Shape::Line { .. }) => {}
                _ => {
                    let paint = self.fill_paint(fill, shape)?;
                    self.draw_shape(shape, &paint)?;
                }
            }
        }
        if let Some(stroke) = &primitive.stroke {
            if !(stroke.width > 0.0 && stroke.width.is_finite()) {
                return Err(self.fail(format!("invalid stroke width {}", stroke.width)));
            }
            let mut paint = base_paint(skia::paint::Style::Stroke);
            paint.set_color(to_color(stroke.color));
            paint.set_stroke_width(stroke.width);
            self.draw_shape(shape, &paint)?;
        }
        Ok(())
    }

    fn finish(mut self) -> Result<PixelBuffer> {
        let side = self.size as i32;
        let info = skia::ImageInfo::new(
            (side, side),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut buffer = PixelBuffer::transparent(self.size, self.size);
        let stride = buffer.stride();
        if !self.surface.read_pixels(&info, &mut buffer.data, stride, (0, 0)) {
            return Err(self.fail("reading back raster pixels"));
        }
        Ok(buffer)
    }
}

// ---- helpers ----------------------------------------------------------------

fn base_paint(style: skia::paint::Style) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(style);
    paint
}

fn to_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_rect(r: &RectF) -> skia::Rect {
    skia::Rect::from_xywh(r.left, r.top, r.width, r.height)
}

/// Closed outline for polygon-like shapes; `None` below three vertices.
fn outline_path(shape: &Shape) -> Option<skia::Path> {
    let mut path = skia::Path::new();
    match shape {
        Shape::Polygon(points) => {
            if points.len() < 3 {
                return None;
            }
            path.move_to((points[0].x, points[0].y));
            for p in &points[1..] {
                path.line_to((p.x, p.y));
            }
        }
        Shape::Curve { points, tension } => {
            let segments = closed_cardinal_spline(points, *tension);
            let first = segments.first()?;
            path.move_to((first.from.x, first.from.y));
            for s in &segments {
                path.cubic_to((s.c1.x, s.c1.y), (s.c2.x, s.c2.y), (s.to.x, s.to.y));
            }
        }
        _ => return None,
    }
    path.close();
    Some(path)
}

/// Endpoints of a linear gradient so that the start and end colors land on
/// the extreme corners of `rect` along `direction`.
pub(crate) fn gradient_line(rect: &RectF, direction: GradientDirection) -> (skia::Point, skia::Point) {
    let c = rect.center();
    match direction {
        GradientDirection::Horizontal => {
            (skia::Point::new(rect.left, c.y), skia::Point::new(rect.right(), c.y))
        }
        GradientDirection::Vertical => {
            (skia::Point::new(c.x, rect.top), skia::Point::new(c.x, rect.bottom()))
        }
        GradientDirection::Angle(deg) => {
            let (sin, cos) = deg.to_radians().sin_cos();
            let half = (rect.width * cos.abs() + rect.height * sin.abs()) * 0.5;
            (
                skia::Point::new(c.x - cos * half, c.y - sin * half),
                skia::Point::new(c.x + cos * half, c.y + sin * half),
            )
        }
    }
}

/// Sweep gradient stops: each vertex contributes its surround color at its
/// angle around `origin` (clockwise from +x, as Skia sweeps), sorted, with a
/// blended seam color pinned to 0 and 1.
pub(crate) fn sweep_stops(origin: PointF, points: &[PointF], surround: &[Rgba]) -> (Vec<f32>, Vec<Rgba>) {
    let mut entries: Vec<(f32, Rgba)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let turn = (p.y - origin.y).atan2(p.x - origin.x).to_degrees().rem_euclid(360.0) / 360.0;
            let color = surround.get(i).or(surround.last()).copied().unwrap_or(Rgba::TRANSPARENT);
            (turn, color)
        })
        .collect();
    entries.sort_by(|a, b| a.0.total_cmp(&b.0));

    let (Some(&(first_pos, first)), Some(&(last_pos, last))) = (entries.first(), entries.last()) else {
        return (Vec::new(), Vec::new());
    };
    let gap = (first_pos + 1.0 - last_pos).max(f32::EPSILON);
    let seam = last.lerp(first, (1.0 - last_pos) / gap);

    let mut stops = Vec::with_capacity(entries.len() + 2);
    let mut colors = Vec::with_capacity(entries.len() + 2);
    stops.push(0.0);
    colors.push(seam);
    for (pos, color) in entries {
        stops.push(pos);
        colors.push(color);
    }
    stops.push(1.0);
    colors.push(seam);
    (stops, colors)
}
