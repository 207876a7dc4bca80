// Window edges that a decoration can be attached to
use crate::{Rect, Vector2D};

bitflags::bitflags! {
    pub struct EdgeSet: u32 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl EdgeSet {
    /// The point of `window_box` defined by this set of edges.
    ///
    /// An edge set containing both edges of an axis (or neither) is
    /// anchored to the top/left of that axis, so `EdgeSet::all()` is the
    /// window's origin. Compositors that have their own idea of edge
    /// anchors are free to ignore this and answer
    /// `Compositor::edge_defined_point` themselves.
    pub fn anchor_point(&self, window_box: &Rect<f64>) -> Vector2D {
        let mut point = window_box.pos();

        if self.contains(EdgeSet::RIGHT) && !self.contains(EdgeSet::LEFT) {
            point.x += window_box.r_size.0;
        }
        if self.contains(EdgeSet::BOTTOM) && !self.contains(EdgeSet::TOP) {
            point.y += window_box.r_size.1;
        }

        point
    }
}
