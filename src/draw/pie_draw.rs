// src/draw/pie_draw.rs
//
// Geometry and drawing of a single pie glyph.
//
// A glyph is two quadrants. Each one is pushed out to a side of the
// window, turned half a revolution, and drawn as either a flat line
// (nothing filled yet) or a wedge whose sweep grows with the node scale.
// Angles follow the y-down, clockwise convention of the glyph design and
// are converted to Nannou's y-up space in `to_screen`.

use nannou::lyon::tessellation::LineCap;
use nannou::prelude::*;

use std::f32::consts::PI;

use super::{GlyphStyle, GlyphTransform};

// Points used for a full half-disc; shorter arcs use proportionally fewer
const ARC_RESOLUTION: usize = 32;

/// Vertical placement of the chain inside the window.
#[derive(Debug, Clone, Copy)]
pub struct ChainLayout {
    pub rect: Rect,
    pub count: usize,
}

impl ChainLayout {
    pub fn new(rect: Rect, count: usize) -> Self {
        Self { rect, count }
    }

    /// Distance between slot centres; the chain leaves one gap of margin.
    pub fn gap(&self) -> f32 {
        self.rect.h() / (self.count + 1) as f32
    }

    pub fn radius(&self) -> f32 {
        self.gap() / 4.0
    }

    /// Centre of slot `index`, counted from the top of the window.
    pub fn slot_center(&self, index: usize) -> Point2 {
        let gap = self.gap();
        pt2(self.rect.x(), self.rect.top() - gap * (index + 1) as f32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadrantShape {
    Line,
    /// Angles in degrees, clockwise.
    Wedge { start: f32, sweep: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrant {
    /// +1.0 for the right-hand quadrant, -1.0 for the left-hand one.
    pub side: f32,
    pub shape: QuadrantShape,
}

/// The two quadrants of a glyph at `scale`.
/// The first fills while scale goes 0.0..0.25, the second over 0.5..0.75.
pub fn quadrants(scale: f32) -> [Quadrant; 2] {
    [quadrant(0, scale), quadrant(1, scale)]
}

fn quadrant(j: usize, scale: f32) -> Quadrant {
    let j_f = j as f32;
    let side = 1.0 - 2.0 * j_f;
    let progress = (scale - j_f * 0.5).clamp(0.0, 0.5) * 2.0;
    let fill = progress.min(0.5) * 2.0;

    let shape = if fill == 0.0 {
        QuadrantShape::Line
    } else {
        QuadrantShape::Wedge {
            start: 180.0 * j_f - 90.0 * fill,
            sweep: 180.0 * fill,
        }
    };
    Quadrant { side, shape }
}

/// Where a quadrant sits relative to its slot centre.
pub fn quadrant_transform(layout: &ChainLayout, index: usize, side: f32) -> GlyphTransform {
    let center = layout.slot_center(index);
    GlyphTransform {
        translation: pt2(center.x + layout.rect.w() / 2.0 * side, center.y),
        rotation: PI,
    }
}

// Rotate in the y-down glyph space, flip into y-up, then translate
fn to_screen(local: Vec2, transform: &GlyphTransform) -> Point2 {
    let (sin_rot, cos_rot) = transform.rotation.sin_cos();
    let rotated_x = local.x * cos_rot - local.y * sin_rot;
    let rotated_y = local.x * sin_rot + local.y * cos_rot;

    pt2(
        transform.translation.x + rotated_x,
        transform.translation.y - rotated_y,
    )
}

/// End points of a flat quadrant.
pub fn line_points(radius: f32, transform: &GlyphTransform) -> (Point2, Point2) {
    (
        to_screen(Vec2::ZERO, transform),
        to_screen(vec2(radius, 0.0), transform),
    )
}

/// Outline of a filled wedge, starting and ending at its centre.
pub fn wedge_points(start: f32, sweep: f32, radius: f32, transform: &GlyphTransform) -> Vec<Point2> {
    let segments = ((ARC_RESOLUTION as f32 * sweep / 180.0).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(segments + 2);

    points.push(to_screen(Vec2::ZERO, transform));
    for i in 0..=segments {
        let angle = deg_to_rad(start + sweep * i as f32 / segments as f32);
        let local = vec2(radius * angle.cos(), radius * angle.sin());
        points.push(to_screen(local, transform));
    }
    points
}

pub fn draw_pie_node(draw: &Draw, layout: &ChainLayout, index: usize, scale: f32, style: &GlyphStyle) {
    let radius = layout.radius();

    for quadrant in quadrants(scale) {
        let transform = quadrant_transform(layout, index, quadrant.side);
        match quadrant.shape {
            QuadrantShape::Line => {
                let (start, end) = line_points(radius, &transform);
                draw.line()
                    .points(start, end)
                    .color(style.color)
                    .stroke_weight(style.stroke_weight)
                    .caps(LineCap::Round);
            }
            QuadrantShape::Wedge { start, sweep } => {
                let points = wedge_points(start, sweep, radius, &transform);
                draw.polygon().color(style.color).points(points);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn test_layout() -> ChainLayout {
        ChainLayout::new(Rect::from_w_h(400.0, 600.0), 5)
    }

    #[test]
    fn test_layout_slots() {
        let layout = test_layout();
        assert_eq!(layout.gap(), 100.0);
        assert_eq!(layout.radius(), 25.0);

        let tests = vec![(0, 200.0), (2, 0.0), (4, -200.0)];
        for (index, expected_y) in tests {
            let center = layout.slot_center(index);
            assert!((center.x - 0.0).abs() < EPS);
            assert!(
                (center.y - expected_y).abs() < EPS,
                "slot {} at {}, expected {}",
                index,
                center.y,
                expected_y
            );
        }
    }

    #[test]
    fn test_empty_glyph_is_two_lines() {
        let [right, left] = quadrants(0.0);
        assert_eq!(right, Quadrant { side: 1.0, shape: QuadrantShape::Line });
        assert_eq!(left, Quadrant { side: -1.0, shape: QuadrantShape::Line });
    }

    #[test]
    fn test_first_quadrant_grows_first() {
        let [right, left] = quadrants(0.125);
        assert_eq!(right.shape, QuadrantShape::Wedge { start: -45.0, sweep: 90.0 });
        assert_eq!(left.shape, QuadrantShape::Line);

        let [right, left] = quadrants(0.5);
        assert_eq!(right.shape, QuadrantShape::Wedge { start: -90.0, sweep: 180.0 });
        assert_eq!(left.shape, QuadrantShape::Line);
    }

    #[test]
    fn test_full_glyph_is_two_half_discs() {
        let [right, left] = quadrants(1.0);
        assert_eq!(right.shape, QuadrantShape::Wedge { start: -90.0, sweep: 180.0 });
        assert_eq!(left.shape, QuadrantShape::Wedge { start: 90.0, sweep: 180.0 });
    }

    #[test]
    fn test_overshoot_is_clamped() {
        assert_eq!(quadrants(1.05), quadrants(1.0));
        assert_eq!(quadrants(-0.05), quadrants(0.0));
    }

    #[test]
    fn test_quadrants_sit_on_window_edges() {
        let layout = test_layout();
        let right = quadrant_transform(&layout, 1, 1.0);
        let left = quadrant_transform(&layout, 1, -1.0);
        assert!((right.translation.x - 200.0).abs() < EPS);
        assert!((left.translation.x + 200.0).abs() < EPS);
        assert!((right.translation.y - 100.0).abs() < EPS);
    }

    #[test]
    fn test_line_points_inward_from_right_edge() {
        let layout = test_layout();
        let transform = quadrant_transform(&layout, 0, 1.0);
        let (start, end) = line_points(layout.radius(), &transform);
        assert!((start.x - 200.0).abs() < EPS);
        assert!((end.x - 175.0).abs() < EPS, "end at {:?}", end);
        assert!((end.y - start.y).abs() < EPS);
    }

    #[test]
    fn test_filled_wedges_face_into_the_window() {
        let layout = test_layout();
        let radius = layout.radius();

        for quadrant in quadrants(1.0) {
            let transform = quadrant_transform(&layout, 2, quadrant.side);
            let QuadrantShape::Wedge { start, sweep } = quadrant.shape else {
                panic!("expected a wedge for side {}", quadrant.side);
            };
            let points = wedge_points(start, sweep, radius, &transform);
            let edge = transform.translation.x;

            assert!((points[0].x - edge).abs() < EPS, "wedge starts at its centre");
            for point in &points {
                // every point lies on the window side of the edge
                assert!((point.x - edge) * quadrant.side <= EPS, "{:?} outside", point);
                assert!(point.distance(transform.translation) <= radius + EPS);
            }
        }
    }

    #[test]
    fn test_draw_every_glyph_stage() {
        let draw = Draw::new();
        let layout = test_layout();
        let style = GlyphStyle {
            color: rgb(1.0, 0.65, 0.15),
            stroke_weight: 4.0,
        };
        for (index, scale) in [(0, 0.0), (1, 0.125), (2, 0.5), (3, 0.6), (4, 1.0)] {
            draw_pie_node(&draw, &layout, index, scale, &style);
        }
    }
}
