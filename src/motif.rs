use crate::draw::{Bounds, Shape};
use image::{Rgba, RgbaImage};

const HEMISPHERE: Rgba<u8> = Rgba([255, 255, 255, 240]);
const BRIDGE: Rgba<u8> = Rgba([255, 255, 255, 230]);
const MEMORY_NODE: Rgba<u8> = Rgba([255, 255, 255, 200]);
const MAGNIFIER: Rgba<u8> = Rgba([255, 255, 255, 230]);

/// Smallest edge length that gets the full emblem.
pub const FULL_DETAIL_MIN: u32 = 128;
/// Smallest edge length that still gets memory nodes.
pub const REDUCED_DETAIL_MIN: u32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    /// Hemispheres and a small lens.
    Minimal,
    /// Hemispheres, bridge, two rows of memory nodes, thin magnifier.
    Reduced,
    /// Hemispheres, bridge, three rows of memory nodes, magnifier.
    Full,
}

impl Detail {
    pub fn for_size(size: u32) -> Self {
        if size >= FULL_DETAIL_MIN {
            Detail::Full
        } else if size >= REDUCED_DETAIL_MIN {
            Detail::Reduced
        } else {
            Detail::Minimal
        }
    }
}

/// Which part of the emblem a primitive belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Hemisphere,
    Bridge,
    MemoryNode,
    Lens,
    Handle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub element: Element,
    pub shape: Shape,
}

impl Stroke {
    fn new(element: Element, shape: Shape) -> Self {
        Self { element, shape }
    }
}

/// Primitives making up the emblem at `size`, in painting order.
pub fn motif(size: u32) -> Vec<Stroke> {
    let s = size as f32;
    let mut strokes = Vec::new();

    match Detail::for_size(size) {
        Detail::Minimal => {
            strokes.extend(hemispheres(size, 0.3, 0.75));
            strokes.push(Stroke::new(
                Element::Lens,
                Shape::Ring {
                    bounds: Bounds::scaled(size, 0.68, 0.68, 0.82, 0.82),
                    width: 2.0,
                    outline: MAGNIFIER,
                },
            ));
        }
        detail => {
            let (node_rows, node_radius, stroke_width): (&[f32], f32, f32) =
                if detail == Detail::Full {
                    (&[0.4, 0.53, 0.66], 4.0, 3.0)
                } else {
                    (&[0.45, 0.62], 3.0, 2.0)
                };

            strokes.extend(hemispheres(size, 0.35, 0.72));
            strokes.push(Stroke::new(
                Element::Bridge,
                Shape::Rectangle {
                    bounds: Bounds::scaled(size, 0.47, 0.45, 0.53, 0.62),
                    fill: BRIDGE,
                },
            ));

            for &row in node_rows {
                for column in [0.36, 0.64] {
                    strokes.push(Stroke::new(
                        Element::MemoryNode,
                        Shape::Ellipse {
                            bounds: Bounds::around(s * column, s * row, node_radius),
                            fill: MEMORY_NODE,
                        },
                    ));
                }
            }

            strokes.push(Stroke::new(
                Element::Lens,
                Shape::Ring {
                    bounds: Bounds::scaled(size, 0.72, 0.72, 0.82, 0.82),
                    width: stroke_width,
                    outline: MAGNIFIER,
                },
            ));
            strokes.push(Stroke::new(
                Element::Handle,
                Shape::Line {
                    from: (s * 0.81, s * 0.81),
                    to: (s * 0.88, s * 0.88),
                    width: stroke_width,
                    fill: MAGNIFIER,
                },
            ));
        }
    }

    strokes
}

fn hemispheres(size: u32, top: f32, bottom: f32) -> [Stroke; 2] {
    [(0.25, 0.48), (0.52, 0.75)].map(|(left, right)| {
        Stroke::new(
            Element::Hemisphere,
            Shape::Ellipse {
                bounds: Bounds::scaled(size, left, top, right, bottom),
                fill: HEMISPHERE,
            },
        )
    })
}

/// Paint the emblem for `size` onto `canvas`.
pub fn draw_motif(canvas: &mut RgbaImage, size: u32) {
    for stroke in motif(size) {
        stroke.shape.paint(canvas);
    }
}
