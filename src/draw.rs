use image::{Rgba, RgbaImage};
use std::ops::RangeInclusive;

/// An inclusive bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Bounds {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box expressed as fractions of a square canvas edge.
    pub fn scaled(size: u32, x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        let s = size as f32;
        Self::new(s * x0, s * y0, s * x1, s * y1)
    }

    /// Square of side `2 * radius` around a centre point.
    pub fn around(cx: f32, cy: f32, radius: f32) -> Self {
        Self::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }

    fn center(&self) -> (f32, f32) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Semi-axes, widened by half a pixel so the end pixels are covered.
    fn semi_axes(&self) -> (f32, f32) {
        ((self.x1 - self.x0) / 2.0 + 0.5, (self.y1 - self.y0) / 2.0 + 0.5)
    }
}

/// Raster primitive in pixel coordinates, with pixel centres on integer
/// positions. Painting clips to the canvas and blends source-over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled ellipse inscribed in the bounds.
    Ellipse { bounds: Bounds, fill: Rgba<u8> },
    /// Filled axis-aligned rectangle.
    Rectangle { bounds: Bounds, fill: Rgba<u8> },
    /// Ellipse outline `width` pixels thick, drawn inwards from the bounds.
    Ring {
        bounds: Bounds,
        width: f32,
        outline: Rgba<u8>,
    },
    /// Segment with round caps.
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        fill: Rgba<u8>,
    },
}

impl Shape {
    pub fn paint(&self, canvas: &mut RgbaImage) {
        match *self {
            Shape::Ellipse { bounds, fill } => {
                let (cx, cy) = bounds.center();
                let (rx, ry) = bounds.semi_axes();
                fill_where(canvas, bounds, fill, |x, y| inside_ellipse(x - cx, y - cy, rx, ry));
            }
            Shape::Rectangle { bounds, fill } => {
                fill_where(canvas, bounds, fill, |_, _| true);
            }
            Shape::Ring {
                bounds,
                width,
                outline,
            } => {
                let (cx, cy) = bounds.center();
                let (rx, ry) = bounds.semi_axes();
                let (ix, iy) = (rx - width, ry - width);
                fill_where(canvas, bounds, outline, |x, y| {
                    let (dx, dy) = (x - cx, y - cy);
                    let in_hole = ix > 0.0 && iy > 0.0 && inside_ellipse(dx, dy, ix, iy);
                    inside_ellipse(dx, dy, rx, ry) && !in_hole
                });
            }
            Shape::Line {
                from,
                to,
                width,
                fill,
            } => {
                let half = width / 2.0;
                let bounds = Bounds::new(
                    from.0.min(to.0) - half,
                    from.1.min(to.1) - half,
                    from.0.max(to.0) + half,
                    from.1.max(to.1) + half,
                );
                fill_where(canvas, bounds, fill, |x, y| {
                    distance_to_segment((x, y), from, to) <= half
                });
            }
        }
    }
}

fn inside_ellipse(dx: f32, dy: f32, rx: f32, ry: f32) -> bool {
    (dx * dx) / (rx * rx) + (dy * dy) / (ry * ry) <= 1.0
}

fn distance_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (abx, aby) = (b.0 - a.0, b.1 - a.1);
    let (apx, apy) = (p.0 - a.0, p.1 - a.1);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0)
    };
    let (dx, dy) = (apx - t * abx, apy - t * aby);
    (dx * dx + dy * dy).sqrt()
}

/// Source-over compositing in integer arithmetic, so that ink over an
/// opaque pixel always stays exactly opaque.
fn blend_over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = src[3] as u32;
    if sa == 0 {
        return;
    }
    let da = dst[3] as u32;
    // both terms carry an extra factor of 255
    let src_weight = sa * 255;
    let dst_weight = da * (255 - sa);
    let total = src_weight + dst_weight;

    for c in 0..3 {
        let value = src[c] as u32 * src_weight + dst[c] as u32 * dst_weight;
        dst[c] = ((value + total / 2) / total) as u8;
    }
    dst[3] = ((total + 127) / 255) as u8;
}

/// Pixel indices whose centres fall inside `[lo, hi]`, clipped to `[0, limit)`.
fn pixel_span(lo: f32, hi: f32, limit: u32) -> Option<RangeInclusive<u32>> {
    let first = lo.ceil().max(0.0);
    let last = hi.floor().min(limit as f32 - 1.0);
    if limit == 0 || first > last {
        return None;
    }
    Some(first as u32..=last as u32)
}

fn fill_where<F>(canvas: &mut RgbaImage, bounds: Bounds, ink: Rgba<u8>, covers: F)
where
    F: Fn(f32, f32) -> bool,
{
    let (width, height) = canvas.dimensions();
    let (Some(xs), Some(ys)) = (
        pixel_span(bounds.x0, bounds.x1, width),
        pixel_span(bounds.y0, bounds.y1, height),
    ) else {
        return;
    };

    for y in ys {
        for x in xs.clone() {
            if covers(x as f32, y as f32) {
                blend_over(canvas.get_pixel_mut(x, y), ink);
            }
        }
    }
}
