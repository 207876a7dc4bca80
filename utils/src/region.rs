// Region tracking helpers
//
// Austin Shafer - 2020

use serde::{Deserialize, Serialize};

use crate::{partial_max, partial_min};
use std::cmp::PartialOrd;
use std::ops::Add;

/// A 2D offset of unspecified units from some basis.
///
/// Used for translations: workspace animation offsets, floating
/// offsets, monitor origins.
pub type Vector2D = cgmath::Vector2<f64>;

/// A rectangular region
///
/// This can be used to track input regions,
/// damage boxes, etc. It is determinined by
/// the corders of a rectangle:
///   r_pos:  the upper left corner's position on the desktop
///   r_size: the distance from the left to the lower right
#[derive(Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Rect<T: PartialOrd + Copy + Add + Add<Output = T>> {
    pub r_pos: (T, T),
    pub r_size: (T, T),
}

impl<T: PartialOrd + Copy + Add + Add<Output = T>> Rect<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Rect<T> {
        Rect {
            r_pos: (x, y),
            r_size: (width, height),
        }
    }

    /// Checks if the point (x,y) is contained within this
    /// Rectangle.
    pub fn intersects(&self, x: T, y: T) -> bool {
        x > self.r_pos.0
            && y > self.r_pos.1
            && x < self.r_pos.0 + self.r_size.0
            && y < self.r_pos.1 + self.r_size.1
    }
}

/// Geometry operations used by the decoration transforms.
///
/// These consume and return the rect so that transforms can be
/// chained: `rect.translate(&off).expand(-2.0).scale(1.5).round()`
impl Rect<f64> {
    pub fn from_pos_size(pos: Vector2D, size: Vector2D) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn pos(&self) -> Vector2D {
        Vector2D::new(self.r_pos.0, self.r_pos.1)
    }

    pub fn size(&self) -> Vector2D {
        Vector2D::new(self.r_size.0, self.r_size.1)
    }

    pub fn right(&self) -> f64 {
        self.r_pos.0 + self.r_size.0
    }

    pub fn bottom(&self) -> f64 {
        self.r_pos.1 + self.r_size.1
    }

    pub fn translate(mut self, offset: &Vector2D) -> Self {
        self.r_pos.0 += offset.x;
        self.r_pos.1 += offset.y;
        self
    }

    /// Grow every edge outwards by `amount`. A negative amount
    /// insets the rect, which may leave it with a negative size.
    pub fn expand(mut self, amount: f64) -> Self {
        self.r_pos.0 -= amount;
        self.r_pos.1 -= amount;
        self.r_size.0 += amount * 2.0;
        self.r_size.1 += amount * 2.0;
        self
    }

    /// Scale position and size, i.e. scale about the origin
    pub fn scale(mut self, factor: f64) -> Self {
        self.r_pos.0 *= factor;
        self.r_pos.1 *= factor;
        self.r_size.0 *= factor;
        self.r_size.1 *= factor;
        self
    }

    /// Scale the size while keeping the center fixed
    pub fn scale_from_center(mut self, factor: f64) -> Self {
        let old_size = self.r_size;
        self.r_size.0 *= factor;
        self.r_size.1 *= factor;
        self.r_pos.0 -= (self.r_size.0 - old_size.0) / 2.0;
        self.r_pos.1 -= (self.r_size.1 - old_size.1) / 2.0;
        self
    }

    /// Shrink the longer side to match the shorter one, keeping
    /// the result centered on the original rect.
    pub fn square(mut self) -> Self {
        let (w, h) = self.r_size;
        if w > h {
            self.r_pos.0 += 0.5 * (w - h);
            self.r_size.0 = h;
        } else {
            self.r_pos.1 += 0.5 * (h - w);
            self.r_size.1 = w;
        }
        self
    }

    /// Snap both edges of each axis to the nearest whole unit
    ///
    /// Rounding the far edge instead of the size keeps neighboring
    /// rects that share an edge from overlapping or gapping.
    pub fn round(mut self) -> Self {
        let right = self.right().round();
        let bottom = self.bottom().round();
        self.r_pos.0 = self.r_pos.0.round();
        self.r_pos.1 = self.r_pos.1.round();
        self.r_size.0 = right - self.r_pos.0;
        self.r_size.1 = bottom - self.r_pos.1;
        self
    }

    /// Does this rect cover no area at all?
    pub fn is_empty(&self) -> bool {
        self.r_size.0 <= 0.0 || self.r_size.1 <= 0.0
    }

    /// Is this rect too small to draw a single device unit?
    pub fn is_degenerate(&self) -> bool {
        self.r_size.0 < 1.0 || self.r_size.1 < 1.0
    }

    pub fn area(&self) -> f64 {
        match self.is_empty() {
            true => 0.0,
            false => self.r_size.0 * self.r_size.1,
        }
    }

    /// Do these two rects share a region with positive area?
    pub fn overlaps(&self, other: &Rect<f64>) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.r_pos.0 < other.right()
            && other.r_pos.0 < self.right()
            && self.r_pos.1 < other.bottom()
            && other.r_pos.1 < self.bottom()
    }

    /// Is `other` entirely inside of this rect?
    pub fn contains_rect(&self, other: &Rect<f64>) -> bool {
        other.r_pos.0 >= self.r_pos.0
            && other.r_pos.1 >= self.r_pos.1
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn intersection(&self, other: &Rect<f64>) -> Option<Rect<f64>> {
        if !self.overlaps(other) {
            return None;
        }

        let x = partial_max(self.r_pos.0, other.r_pos.0);
        let y = partial_max(self.r_pos.1, other.r_pos.1);
        let right = partial_min(self.right(), other.right());
        let bottom = partial_min(self.bottom(), other.bottom());

        Some(Rect::new(x, y, right - x, bottom - y))
    }

    /// Split this rect into the pieces not covered by `hole`
    ///
    /// Produces up to four disjoint rects: full width bands above
    /// and below the hole, and the left and right pieces level
    /// with it.
    fn cut(&self, hole: &Rect<f64>, out: &mut Vec<Rect<f64>>) {
        if !self.overlaps(hole) {
            out.push(*self);
            return;
        }

        if self.r_pos.1 < hole.r_pos.1 {
            out.push(Rect::new(
                self.r_pos.0,
                self.r_pos.1,
                self.r_size.0,
                hole.r_pos.1 - self.r_pos.1,
            ));
        }
        if hole.bottom() < self.bottom() {
            out.push(Rect::new(
                self.r_pos.0,
                hole.bottom(),
                self.r_size.0,
                self.bottom() - hole.bottom(),
            ));
        }

        let band_top = partial_max(self.r_pos.1, hole.r_pos.1);
        let band_bottom = partial_min(self.bottom(), hole.bottom());
        let band_height = band_bottom - band_top;

        if self.r_pos.0 < hole.r_pos.0 {
            out.push(Rect::new(
                self.r_pos.0,
                band_top,
                hole.r_pos.0 - self.r_pos.0,
                band_height,
            ));
        }
        if hole.right() < self.right() {
            out.push(Rect::new(
                hole.right(),
                band_top,
                self.right() - hole.right(),
                band_height,
            ));
        }
    }
}

/// An arbitrary area made up of rectangles
///
/// The rectangles are kept disjoint, so the area of the region is
/// the sum of the area of its rects. Rects with no area are never
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    r_rects: Vec<Rect<f64>>,
}

impl Region {
    pub fn new() -> Self {
        Self {
            r_rects: Vec::new(),
        }
    }

    pub fn from_rect(rect: Rect<f64>) -> Self {
        let mut ret = Self::new();
        if !rect.is_empty() {
            ret.r_rects.push(rect);
        }
        ret
    }

    /// The disjoint rects making up this region
    pub fn rects(&self) -> &[Rect<f64>] {
        self.r_rects.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.r_rects.is_empty()
    }

    /// Add the area of `rect` to this region
    ///
    /// Only the parts of `rect` not already covered are stored.
    pub fn add(&mut self, rect: Rect<f64>) -> &mut Self {
        let mut fresh = Region::from_rect(rect);
        fresh.subtract_region(self);
        self.r_rects.extend(fresh.r_rects);
        self
    }

    /// Remove the area of `rect` from this region
    pub fn subtract(&mut self, rect: &Rect<f64>) -> &mut Self {
        if rect.is_empty() || self.r_rects.is_empty() {
            return self;
        }

        let mut remaining = Vec::with_capacity(self.r_rects.len());
        for r in self.r_rects.iter() {
            r.cut(rect, &mut remaining);
        }
        self.r_rects = remaining;
        self
    }

    pub fn subtract_region(&mut self, other: &Region) -> &mut Self {
        for r in other.r_rects.iter() {
            self.subtract(r);
        }
        self
    }

    pub fn translate(&mut self, offset: &Vector2D) -> &mut Self {
        for r in self.r_rects.iter_mut() {
            *r = r.translate(offset);
        }
        self
    }

    /// Total area covered
    pub fn area(&self) -> f64 {
        self.r_rects.iter().map(|r| r.area()).sum()
    }

    /// Is the point (x, y) covered by this region?
    ///
    /// Rects are treated as half open so that a point on an edge
    /// shared by two rects belongs to exactly one of them.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.r_rects
            .iter()
            .any(|r| x >= r.r_pos.0 && y >= r.r_pos.1 && x < r.right() && y < r.bottom())
    }

    /// The smallest rect enclosing every rect in this region
    pub fn bounding_box(&self) -> Option<Rect<f64>> {
        let mut iter = self.r_rects.iter();
        let first = *iter.next()?;

        let (mut x, mut y) = first.r_pos;
        let (mut right, mut bottom) = (first.right(), first.bottom());
        for r in iter {
            x = partial_min(x, r.r_pos.0);
            y = partial_min(y, r.r_pos.1);
            right = partial_max(right, r.right());
            bottom = partial_max(bottom, r.bottom());
        }

        Some(Rect::new(x, y, right - x, bottom - y))
    }
}

impl From<Rect<f64>> for Region {
    fn from(rect: Rect<f64>) -> Self {
        Region::from_rect(rect)
    }
}
