// The compositor side of the decorations
//
// Decorations never own compositor objects. They keep a WindowId
// and ask the compositor for a fresh snapshot of the window every
// time they draw or damage.
use crate::decoration::DecorationType;
use crate::pass::{Gradient, PassElement, TextRequest, TextureId};
use crate::{DecoError, EdgeSet, Rect, Region, Result, Vector2D};

/// Compositor handle for a window
#[derive(Copy, Clone, PartialEq, Debug, Eq, Hash)]
pub struct WindowId(pub u64);

/// Compositor handle for a monitor
#[derive(Copy, Clone, PartialEq, Debug, Eq, Hash)]
pub struct MonitorId(pub u64);

/// One output, in global layout coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Monitor {
    pub m_id: MonitorId,
    /// Top left corner in the global layout
    pub m_position: Vector2D,
    /// Size in layout units, not pixels
    pub m_size: Vector2D,
    /// Layout units to device pixels
    pub m_scale: f64,
}

impl Monitor {
    pub fn new(id: u64, position: Vector2D, size: Vector2D, scale: f64) -> Self {
        Self {
            m_id: MonitorId(id),
            m_position: position,
            m_size: size,
            m_scale: scale,
        }
    }

    /// The full area of this monitor in the global layout
    pub fn rect(&self) -> Rect<f64> {
        Rect::from_pos_size(self.m_position, self.m_size)
    }
}

/// The workspace a window lives on
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceState {
    /// Current render offset, this slides while switching workspaces
    pub ws_render_offset: Vector2D,
    /// Is the render offset currently being animated?
    pub ws_animating: bool,
}

/// Snapshot of everything the decorations need from a window
#[derive(Debug, Clone, PartialEq)]
pub struct WindowState {
    /// Only mapped windows are damaged
    pub w_mapped: bool,
    /// The box of the window's main surface in global coordinates
    pub w_surface_box: Rect<f64>,
    /// Offset applied while the window is floating, zero otherwise
    pub w_floating_offset: Vector2D,
    /// Pinned windows are shown on every workspace and ignore the
    /// workspace offset
    pub w_pinned: bool,
    pub w_workspace: Option<WorkspaceState>,
    /// Border thickness in layout units
    pub w_border_size: i32,
    /// Corner radius in layout units
    pub w_rounding: f64,
    pub w_rounding_power: f64,
    /// The border colour for the window's current (selection) state
    pub w_border_gradient: Gradient,
    /// The border colour being faded away from
    pub w_border_gradient_previous: Gradient,
    /// Progress of the border colour fade, `Some` only while animating
    pub w_border_fade: Option<f32>,
    /// Progress of the border angle animation, `Some` if it is enabled
    pub w_border_angle: Option<f32>,
    /// Window rule disabling the border
    pub w_no_border: bool,
    /// X11 clients may ask for no decorations
    pub w_x11_no_border: bool,
}

impl WindowState {
    /// A mapped, unpinned window with no workspace and no border
    pub fn new(surface_box: Rect<f64>) -> Self {
        Self {
            w_mapped: true,
            w_surface_box: surface_box,
            w_floating_offset: Vector2D::new(0.0, 0.0),
            w_pinned: false,
            w_workspace: None,
            w_border_size: 0,
            w_rounding: 0.0,
            w_rounding_power: 2.0,
            w_border_gradient: Gradient::default(),
            w_border_gradient_previous: Gradient::default(),
            w_border_fade: None,
            w_border_angle: None,
            w_no_border: false,
            w_x11_no_border: false,
        }
    }

    /// Should no border be drawn around this window at all?
    pub fn doesnt_want_borders(&self) -> bool {
        self.w_no_border || self.w_x11_no_border || self.w_border_size == 0
    }

    /// The workspace render offset that applies to this window
    ///
    /// Windows without a workspace and pinned windows do not move
    /// with the workspace.
    pub fn workspace_offset(&self) -> Vector2D {
        match self.w_workspace.as_ref() {
            Some(ws) if !self.w_pinned => ws.ws_render_offset,
            _ => Vector2D::new(0.0, 0.0),
        }
    }

    /// The workspace render offset, but only while it is animating
    pub fn animating_workspace_offset(&self) -> Vector2D {
        match self.w_workspace.as_ref() {
            Some(ws) if ws.ws_animating && !self.w_pinned => ws.ws_render_offset,
            _ => Vector2D::new(0.0, 0.0),
        }
    }
}

/// Everything the decorations need from the compositor
///
/// All calls happen on the compositor's main thread, in between frames
/// or while building the render pass for a frame.
pub trait Compositor {
    /// Get the current state of a window. Returns None if the window
    /// has been destroyed.
    fn window(&self, id: WindowId) -> Option<&WindowState>;

    /// The list of active monitors
    fn monitors(&self) -> &[Monitor];

    /// The point of the window's box that decorations on `edges`
    /// are positioned relative to.
    fn edge_defined_point(&self, edges: EdgeSet, window: WindowId) -> Vector2D;

    /// Will `window` be drawn on `monitor` this frame?
    fn should_render_window(&self, window: WindowId, monitor: &Monitor) -> bool;

    /// Add an area, in global coordinates, to the damage tracker
    fn damage_region(&mut self, region: Region);

    /// Queue a primitive on the current render pass
    fn add_pass_element(&mut self, element: PassElement);

    /// Ask the positioner to recompute the extents reserved by a
    /// decoration
    fn reposition_decoration(&mut self, window: WindowId, ty: DecorationType);

    /// Rasterize a text label. The returned texture is owned by the
    /// compositor.
    fn render_text(&mut self, request: &TextRequest) -> Option<TextureId>;
}

/// Look up a window, turning a missing window into an error
pub(crate) fn get_window(host: &dyn Compositor, id: WindowId) -> Result<&WindowState> {
    host.window(id).ok_or(DecoError::UnknownWindow(id))
}
