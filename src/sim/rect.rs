//! Axis-aligned rectangle geometry for lanes, obstacles and hitboxes
//!
//! Screen space: origin at the top-left, y grows downward.
//! A rect is stored as its top-left corner plus size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect of the given size centered on `center`
    pub fn from_center(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    /// Grow (positive) or shrink (negative) by a total delta per axis,
    /// keeping the center fixed. Sizes never go below zero.
    pub fn inflate(&self, dw: f32, dh: f32) -> Self {
        let w = (self.w + dw).max(0.0);
        let h = (self.h + dh).max(0.0);
        Self::from_center(self.center(), w, h)
    }

    /// Strict overlap test: rects that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True if `other` lies entirely inside this rect
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// Clamp a point into this rect shrunk by `margin` on every side.
    /// If the margin swallows an axis, the point snaps to that axis' middle.
    pub fn clamp_point(&self, p: Vec2, margin: f32) -> Vec2 {
        let clamp_axis = |v: f32, lo: f32, hi: f32| {
            if lo > hi { (lo + hi) / 2.0 } else { v.clamp(lo, hi) }
        };
        Vec2::new(
            clamp_axis(p.x, self.left() + margin, self.right() - margin),
            clamp_axis(p.y, self.top() + margin, self.bottom() - margin),
        )
    }

    /// Shift horizontally
    pub fn translate_x(&mut self, dx: f32) {
        self.x += dx;
    }
}
