// Turning a decoration's assigned box into something drawable
//
// The positioner hands decorations a box relative to the window's
// edge anchor. To draw it we need the box in device coordinates for
// one particular monitor.
use crate::compositor::Monitor;
use crate::{Rect, Vector2D};
use utils::{log, partial_max, partial_min};

/// The label scale is clamped to this range
pub const MIN_LABEL_SCALE: f64 = 0.1;
pub const MAX_LABEL_SCALE: f64 = 1.0;

/// Clamp a configured label scale to something that will be visible
/// and still fit inside the window.
pub fn clamp_label_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return MAX_LABEL_SCALE;
    }
    partial_min(partial_max(scale, MIN_LABEL_SCALE), MAX_LABEL_SCALE)
}

/// The steps to move a box from decoration space into device space
///
/// Transforms are applied in this order:
///  1. translate by the edge anchor of the window
///  2. (labels only) square the box and scale it about its center
///  3. translate by the workspace offset
///  4. translate by the floating offset
///  5. subtract the monitor's origin
///  6. expand by `bt_expand` (negative values inset)
///  7. multiply by the monitor's scale
///  8. round to whole device pixels
#[derive(Debug, Clone, PartialEq)]
pub struct BoxTransform {
    pub bt_anchor: Vector2D,
    /// If set the box is squared and then scaled by this amount
    pub bt_label_scale: Option<f64>,
    pub bt_workspace_offset: Vector2D,
    pub bt_floating_offset: Vector2D,
    pub bt_expand: f64,
}

impl BoxTransform {
    pub fn new(anchor: Vector2D) -> Self {
        Self {
            bt_anchor: anchor,
            bt_label_scale: None,
            bt_workspace_offset: Vector2D::new(0.0, 0.0),
            bt_floating_offset: Vector2D::new(0.0, 0.0),
            bt_expand: 0.0,
        }
    }

    /// Square the box and scale it about its center. The scale is
    /// clamped to [0.1, 1.0]
    pub fn label_scale(mut self, scale: f64) -> Self {
        self.bt_label_scale = Some(clamp_label_scale(scale));
        self
    }

    pub fn workspace_offset(mut self, offset: Vector2D) -> Self {
        self.bt_workspace_offset = offset;
        self
    }

    pub fn floating_offset(mut self, offset: Vector2D) -> Self {
        self.bt_floating_offset = offset;
        self
    }

    pub fn expand(mut self, amount: f64) -> Self {
        self.bt_expand = amount;
        self
    }

    /// The box in global layout coordinates (steps 1-4)
    pub fn global_box(&self, assigned: &Rect<f64>) -> Rect<f64> {
        let mut rect = assigned.translate(&self.bt_anchor);

        if let Some(scale) = self.bt_label_scale {
            rect = rect.square().scale_from_center(scale);
        }

        rect.translate(&self.bt_workspace_offset)
            .translate(&self.bt_floating_offset)
    }

    /// The box in device coordinates on `monitor`
    ///
    /// Returns None if the result is smaller than a single pixel in
    /// either direction, in which case there is nothing to draw.
    pub fn device_box(&self, assigned: &Rect<f64>, monitor: &Monitor) -> Option<Rect<f64>> {
        let rect = self
            .global_box(assigned)
            .translate(&-monitor.m_position)
            .expand(self.bt_expand)
            .scale(monitor.m_scale)
            .round();

        if rect.is_degenerate() {
            log::verbose!("Skipping degenerate decoration box {:?}", rect);
            return None;
        }

        Some(rect)
    }
}
