// File: crates/piece-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (points, rects, rings, splines).

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: PointF) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }
    /// Square of side `side` centered on `c`.
    pub fn centered_square(c: PointF, side: f32) -> Self {
        Self::from_ltwh(c.x - side * 0.5, c.y - side * 0.5, side, side)
    }
    pub fn right(&self) -> f32 { self.left + self.width }
    pub fn bottom(&self) -> f32 { self.top + self.height }
    pub fn center(&self) -> PointF {
        PointF::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Smallest rect containing every point; `None` for an empty slice.
    pub fn bounding(points: &[PointF]) -> Option<Self> {
        let first = points.first()?;
        let (mut l, mut t, mut r, mut b) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            l = l.min(p.x);
            t = t.min(p.y);
            r = r.max(p.x);
            b = b.max(p.y);
        }
        Some(Self::from_ltwh(l, t, r - l, b - t))
    }
}

/// Maps recipe offsets (authored at the reference size) onto a concrete canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub center: PointF,
    pub scale: f32,
}

impl Layout {
    /// Center uses floor division of `size / 2`.
    pub fn new(size: u32, reference: u32) -> Self {
        let c = (size / 2) as f32;
        Self { center: PointF::new(c, c), scale: size as f32 / reference as f32 }
    }

    #[inline]
    pub fn point(&self, p: PointF) -> PointF {
        PointF::new(self.center.x + p.x * self.scale, self.center.y + p.y * self.scale)
    }

    #[inline]
    pub fn rect(&self, r: RectF) -> RectF {
        let tl = self.point(PointF::new(r.left, r.top));
        RectF::from_ltwh(tl.x, tl.y, r.width * self.scale, r.height * self.scale)
    }

    #[inline]
    pub fn length(&self, v: f32) -> f32 {
        v * self.scale
    }
}

/// Points evenly spaced on a ring, starting straight up and going clockwise
/// in screen space: angle_i = i * 360/n - 90 degrees.
pub fn ring_points(center: PointF, radius: f32, n: usize) -> Vec<PointF> {
    let step = 360.0 / n as f64;
    (0..n)
        .map(|i| {
            let rad = (i as f64 * step - 90.0).to_radians();
            PointF::new(
                center.x + (radius as f64 * rad.cos()) as f32,
                center.y + (radius as f64 * rad.sin()) as f32,
            )
        })
        .collect()
}

/// One cubic Bézier segment: start, two controls, end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub from: PointF,
    pub c1: PointF,
    pub c2: PointF,
    pub to: PointF,
}

/// Closed cardinal spline through `points` as cubic Bézier segments.
/// Tension 0 yields straight edges; 0.5 is the usual smooth curve.
pub fn closed_cardinal_spline(points: &[PointF], tension: f32) -> Vec<CubicSegment> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    let k = tension / 3.0;
    let at = |i: usize| points[i % n];
    (0..n)
        .map(|i| {
            let p0 = at(i + n - 1);
            let p1 = at(i);
            let p2 = at(i + 1);
            let p3 = at(i + 2);
            CubicSegment {
                from: p1,
                c1: PointF::new(p1.x + k * (p2.x - p0.x), p1.y + k * (p2.y - p0.y)),
                c2: PointF::new(p2.x - k * (p3.x - p1.x), p2.y - k * (p3.y - p1.y)),
                to: p2,
            }
        })
        .collect()
}

/// Arithmetic mean of the vertices.
pub fn centroid(points: &[PointF]) -> Option<PointF> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f32;
    let (sx, sy) = points.iter().fold((0.0, 0.0), |(x, y), p| (x + p.x, y + p.y));
    Some(PointF::new(sx / n, sy / n))
}
