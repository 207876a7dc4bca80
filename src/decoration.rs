// The interface every window decoration implements
//
// The compositor drives decorations through these hooks: it asks
// where they want to sit (positioning_info), tells them where they
// ended up (on_positioning_reply), and then calls draw, damage_entire
// and update_window as the window changes.
use crate::compositor::{Compositor, Monitor};
use crate::{EdgeSet, Rect, Result, Vector2D};

#[derive(Copy, Clone, PartialEq, Debug, Eq, Hash)]
pub enum DecorationType {
    Border,
    Shadow,
    GroupBar,
    Custom,
}

/// Where the decoration is drawn relative to the window contents
#[derive(Copy, Clone, PartialEq, Debug, Eq)]
pub enum DecorationLayer {
    Bottom,
    Under,
    Over,
    Overlay,
}

bitflags::bitflags! {
    pub struct DecorationFlags: u64 {
        /// Input events over the decoration go to it
        const ALLOWS_INPUT = 1 << 0;
        /// The decoration is treated as part of the window itself
        const PART_OF_MAIN_WINDOW = 1 << 1;
        /// The decoration is not fully opaque
        const NON_SOLID = 1 << 2;
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Eq)]
pub enum PositionPolicy {
    /// Placed at an absolute offset, overlapping the window
    Absolute,
    /// Stuck to the window edges, in priority order
    Sticky,
}

/// Space a decoration needs around the window
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Extents {
    pub e_top_left: Vector2D,
    pub e_bottom_right: Vector2D,
}

impl Default for Extents {
    fn default() -> Self {
        Self {
            e_top_left: Vector2D::new(0.0, 0.0),
            e_bottom_right: Vector2D::new(0.0, 0.0),
        }
    }
}

impl Extents {
    /// Is `assigned` big enough to hold these extents?
    ///
    /// Geometry smaller than the top left extent plus one unit cannot
    /// hold the decoration and it will not be drawn.
    pub fn fit_in(&self, assigned: &Rect<f64>) -> bool {
        assigned.r_size.0 >= self.e_top_left.x + 1.0 && assigned.r_size.1 >= self.e_top_left.y + 1.0
    }
}

/// The request a decoration makes to the positioner
#[derive(Debug, Clone, PartialEq)]
pub struct PositioningInfo {
    pub pi_policy: PositionPolicy,
    pub pi_edges: EdgeSet,
    /// Higher priorities are placed closer to the window
    pub pi_priority: u32,
    pub pi_desired_extents: Extents,
    /// Should the extents be subtracted from the window's content area?
    pub pi_reserved: bool,
}

impl Default for PositioningInfo {
    fn default() -> Self {
        Self {
            pi_policy: PositionPolicy::Absolute,
            pi_edges: EdgeSet::empty(),
            pi_priority: 10,
            pi_desired_extents: Extents::default(),
            pi_reserved: false,
        }
    }
}

/// The positioner's answer to a `PositioningInfo`
#[derive(Debug, Clone, PartialEq)]
pub struct PositioningReply {
    /// Geometry relative to the edge defined point of the window
    pub pr_assigned_geometry: Rect<f64>,
    /// Set if this geometry is only valid for the current frame
    pub pr_ephemeral: bool,
}

pub trait Decoration {
    fn positioning_info(&mut self) -> PositioningInfo;

    fn on_positioning_reply(&mut self, reply: &PositioningReply);

    /// Queue this decoration's primitives for `monitor`
    ///
    /// `alpha` is the opacity the window itself is being drawn with.
    fn draw(&mut self, host: &mut dyn Compositor, monitor: &Monitor, alpha: f32) -> Result<()>;

    /// Damage everything this decoration could have drawn
    fn damage_entire(&mut self, host: &mut dyn Compositor) -> Result<()>;

    /// Called whenever the window's state changes
    fn update_window(&mut self, host: &mut dyn Compositor) -> Result<()>;

    fn decoration_type(&self) -> DecorationType;

    fn decoration_layer(&self) -> DecorationLayer;

    fn decoration_flags(&self, host: &dyn Compositor) -> DecorationFlags;

    fn display_name(&self) -> &'static str;
}
