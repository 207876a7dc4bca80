// Selection borders
//
// Drawn over the window's own border so that the border colour can
// follow the scrolling layout's selection instead of keyboard focus.
use crate::compositor::{get_window, Compositor, Monitor};
use crate::decoration::{
    Decoration, DecorationFlags, DecorationLayer, DecorationType, Extents, PositionPolicy,
    PositioningInfo, PositioningReply,
};
use crate::pass::{BorderPassElement, PassElement};
use crate::{BoxTransform, EdgeSet, Rect, Result, WindowId};
use utils::log;

/// Tracks the last border size a decoration was positioned with
///
/// Repositioning is expensive, so it is only requested when the border
/// size actually changes. Going between two sizes that both mean "no
/// border" does not count as a change.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderSizeWatch {
    bw_last: i32,
}

impl Default for BorderSizeWatch {
    fn default() -> Self {
        Self { bw_last: -1 }
    }
}

impl BorderSizeWatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> i32 {
        self.bw_last
    }

    /// Record `current`, returning true if a reposition is needed
    pub fn check(&mut self, current: i32) -> bool {
        if current == self.bw_last {
            return false;
        }

        if current <= 0 && self.bw_last <= 0 {
            return false;
        }

        self.bw_last = current;
        true
    }
}

/// A border around a window in its selection colour
pub struct SelectionBorders {
    sb_window: WindowId,
    /// Geometry from the last positioning reply
    sb_assigned: Rect<f64>,
    sb_extents: Extents,
    sb_reported_extents: Extents,
    sb_border_watch: BorderSizeWatch,
}

impl SelectionBorders {
    pub fn new(window: WindowId) -> Self {
        Self {
            sb_window: window,
            sb_assigned: Rect::default(),
            sb_extents: Extents::default(),
            sb_reported_extents: Extents::default(),
            sb_border_watch: BorderSizeWatch::new(),
        }
    }

    pub fn window(&self) -> WindowId {
        self.sb_window
    }

    pub fn assigned_geometry(&self) -> &Rect<f64> {
        &self.sb_assigned
    }

    /// The extents we last told the positioner about
    pub fn reported_extents(&self) -> &Extents {
        &self.sb_reported_extents
    }

    /// Build the border primitive for `monitor`, None if there is
    /// nothing to draw.
    fn border_element(
        &self,
        host: &dyn Compositor,
        monitor: &Monitor,
        alpha: f32,
    ) -> Result<Option<BorderPassElement>> {
        let window = get_window(host, self.sb_window)?;

        if window.doesnt_want_borders() {
            return Ok(None);
        }

        if !self.sb_extents.fit_in(&self.sb_assigned) {
            return Ok(None);
        }

        // Inset by the border size, the border is drawn inwards from
        // the edge of the box we hand the renderer.
        let anchor = host.edge_defined_point(EdgeSet::all(), self.sb_window);
        let rect = match BoxTransform::new(anchor)
            .workspace_offset(window.workspace_offset())
            .floating_offset(window.w_floating_offset)
            .expand(-(window.w_border_size as f64))
            .device_box(&self.sb_assigned, monitor)
        {
            Some(r) => r,
            None => return Ok(None),
        };

        let mut grad = window.w_border_gradient.clone();
        if let Some(progress) = window.w_border_angle {
            grad.rotate_turns(progress as f64);
        }

        let mut element = BorderPassElement {
            b_box: rect,
            b_grad1: grad,
            b_grad2: None,
            b_lerp: 0.0,
            b_round: window.w_rounding * monitor.m_scale,
            b_rounding_power: window.w_rounding_power,
            b_alpha: alpha,
            b_border_size: window.w_border_size,
        };

        // While fading we go from the previous colour to the new one
        if let Some(progress) = window.w_border_fade {
            let current = std::mem::replace(
                &mut element.b_grad1,
                window.w_border_gradient_previous.clone(),
            );
            element.b_grad2 = Some(current);
            element.b_lerp = progress;
        }

        Ok(Some(element))
    }
}

impl Decoration for SelectionBorders {
    fn positioning_info(&mut self) -> PositioningInfo {
        // We draw over the existing border, so don't reserve any space
        // for a second one
        self.sb_extents = Extents::default();
        self.sb_reported_extents = self.sb_extents;

        PositioningInfo {
            pi_policy: PositionPolicy::Sticky,
            pi_edges: EdgeSet::all(),
            pi_priority: 10000,
            pi_desired_extents: self.sb_extents,
            pi_reserved: true,
        }
    }

    fn on_positioning_reply(&mut self, reply: &PositioningReply) {
        self.sb_assigned = reply.pr_assigned_geometry;
    }

    fn draw(&mut self, host: &mut dyn Compositor, monitor: &Monitor, alpha: f32) -> Result<()> {
        if let Some(element) = self.border_element(host, monitor, alpha)? {
            host.add_pass_element(PassElement::Border(element));
        }
        Ok(())
    }

    fn damage_entire(&mut self, host: &mut dyn Compositor) -> Result<()> {
        let region = {
            let window = get_window(host, self.sb_window)?;
            if !window.w_mapped {
                log::debug!("Not damaging borders of unmapped window {:?}", self.sb_window);
                return Ok(());
            }

            crate::damage::border_damage(window, host.monitors(), |mon| {
                host.should_render_window(self.sb_window, mon)
            })
        };

        host.damage_region(region);
        Ok(())
    }

    fn update_window(&mut self, host: &mut dyn Compositor) -> Result<()> {
        let border_size = get_window(host, self.sb_window)?.w_border_size;

        if self.sb_border_watch.check(border_size) {
            log::debug!(
                "Border size of {:?} changed to {}, repositioning",
                self.sb_window,
                border_size
            );
            host.reposition_decoration(self.sb_window, self.decoration_type());
        }

        Ok(())
    }

    fn decoration_type(&self) -> DecorationType {
        DecorationType::Border
    }

    fn decoration_layer(&self) -> DecorationLayer {
        DecorationLayer::Over
    }

    fn decoration_flags(&self, host: &dyn Compositor) -> DecorationFlags {
        match host.window(self.sb_window) {
            Some(window) if !window.doesnt_want_borders() => DecorationFlags::PART_OF_MAIN_WINDOW,
            _ => DecorationFlags::empty(),
        }
    }

    fn display_name(&self) -> &'static str {
        "Border"
    }
}
