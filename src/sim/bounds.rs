//! Integer axis-aligned bounding boxes
//!
//! Entities keep sub-pixel positions; their boxes truncate the position
//! toward zero and keep a fixed size.

use glam::{IVec2, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Box for an entity at `pos` with `size`
    pub fn at(pos: Vec2, size: IVec2) -> Self {
        Self::new(pos.x as i32, pos.y as i32, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    #[inline]
    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    /// Exact center, keeping the half pixel of odd sizes
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }

    /// Interiors intersect; touching edges do not count
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Point lies inside or on the edge
    pub fn contains_inclusive(&self, p: Vec2) -> bool {
        p.x >= self.left() as f32
            && p.x <= self.right() as f32
            && p.y >= self.top() as f32
            && p.y <= self.bottom() as f32
    }
}
