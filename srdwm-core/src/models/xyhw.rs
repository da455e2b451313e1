//! Window and monitor rectangles.
#![allow(clippy::module_name_repetitions)]
use serde::{Deserialize, Serialize};

/// Axis aligned rectangle. x,y from top left.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Copy)]
pub struct Xyhw {
    x: i32,
    y: i32,
    h: i32,
    w: i32,
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, h, w }
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
    #[must_use]
    pub const fn h(&self) -> i32 {
        self.h
    }
    #[must_use]
    pub const fn w(&self) -> i32 {
        self.w
    }

    pub fn set_x(&mut self, value: i32) {
        self.x = value;
    }
    pub fn set_y(&mut self, value: i32) {
        self.y = value;
    }
    pub fn set_h(&mut self, value: i32) {
        self.h = value;
    }
    pub fn set_w(&mut self, value: i32) {
        self.w = value;
    }

    /// Half-open containment: the right and bottom edges are outside.
    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        let max_x = self.x + self.w;
        let max_y = self.y + self.h;
        (self.x <= x && x < max_x) && (self.y <= y && y < max_y)
    }

    /// True if `other` lies fully inside this rectangle, edges included.
    #[must_use]
    pub const fn contains_xyhw(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.w <= self.x + self.w
            && other.y + other.h <= self.y + self.h
    }

    /// Axis aligned bounding box intersection. Touching edges do not overlap.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        !(self.x + self.w <= other.x
            || other.x + other.w <= self.x
            || self.y + self.h <= other.y
            || other.y + other.h <= self.y)
    }

    /// A rectangle of half the size, offset a quarter into this one.
    #[must_use]
    pub const fn center_halfed(&self) -> Self {
        Self {
            x: self.x + self.w / 4,
            y: self.y + self.h / 4,
            h: self.h / 2,
            w: self.w / 2,
        }
    }

    #[must_use]
    pub const fn center(&self) -> (i32, i32) {
        let x = self.x + (self.w / 2);
        let y = self.y + (self.h / 2);
        (x, y)
    }
}
