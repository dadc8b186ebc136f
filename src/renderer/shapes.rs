//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::scene::DrawCommand;
use super::vertex::Vertex;
use crate::sim::Rect;

/// Segments used for circles and rounded corners
const CIRCLE_SEGMENTS: u32 = 24;
const CORNER_SEGMENTS: u32 = 6;

/// Two triangles covering `rect`
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Filled rect with rounded corners (cross of two rects plus four corner fans)
pub fn rounded_rect(r: &Rect, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let radius = radius.min(r.w / 2.0).min(r.h / 2.0).max(0.0);
    if radius == 0.0 {
        return rect(r, color);
    }

    let mut vertices = Vec::with_capacity(12 + (4 * CORNER_SEGMENTS * 3) as usize);
    vertices.extend(rect(&Rect::new(r.x + radius, r.y, r.w - 2.0 * radius, r.h), color));
    vertices.extend(rect(&Rect::new(r.x, r.y + radius, radius, r.h - 2.0 * radius), color));
    vertices.extend(rect(
        &Rect::new(r.right() - radius, r.y + radius, radius, r.h - 2.0 * radius),
        color,
    ));

    let corners = [
        (Vec2::new(r.right() - radius, r.bottom() - radius), 0.0),
        (Vec2::new(r.left() + radius, r.bottom() - radius), PI / 2.0),
        (Vec2::new(r.left() + radius, r.top() + radius), PI),
        (Vec2::new(r.right() - radius, r.top() + radius), 1.5 * PI),
    ];
    for (center, start) in corners {
        vertices.extend(fan(center, radius, start, PI / 2.0, CORNER_SEGMENTS, color));
    }
    vertices
}

/// Outline of `rect` as four thin quads
pub fn rect_outline(r: &Rect, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(r.w / 2.0).min(r.h / 2.0);
    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(&Rect::new(r.x, r.y, r.w, t), color));
    vertices.extend(rect(&Rect::new(r.x, r.bottom() - t, r.w, t), color));
    vertices.extend(rect(&Rect::new(r.x, r.y + t, t, r.h - 2.0 * t), color));
    vertices.extend(rect(&Rect::new(r.right() - t, r.y + t, t, r.h - 2.0 * t), color));
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    fan(center, radius, 0.0, 2.0 * PI, segments, color)
}

/// Triangle fan over an angular span
fn fan(center: Vec2, radius: f32, start: f32, span: f32, segments: u32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = start + (i as f32 / segments as f32) * span;
        let theta2 = start + ((i + 1) as f32 / segments as f32) * span;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Tessellate every primitive command. Sprite commands are left to the
/// textured pass of whatever backend draws them.
pub fn tessellate(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in commands {
        match command {
            DrawCommand::Fill { rect: r, color } => vertices.extend(rect(r, *color)),
            DrawCommand::RoundedFill {
                rect: r,
                radius,
                color,
            } => vertices.extend(rounded_rect(r, *radius, *color)),
            DrawCommand::Outline {
                rect: r,
                thickness,
                color,
            } => vertices.extend(rect_outline(r, *thickness, *color)),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => vertices.extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS)),
            DrawCommand::Sprite { .. } => {}
        }
    }
    vertices
}
