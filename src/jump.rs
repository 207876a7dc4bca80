// Jump labels
//
// While jumping, every window gets a square label in its center showing
// the keys that select it.
use crate::compositor::{get_window, Compositor, Monitor};
use crate::decoration::{
    Decoration, DecorationFlags, DecorationLayer, DecorationType, PositionPolicy, PositioningInfo,
    PositioningReply,
};
use crate::pass::{Color, PassElement, TextRequest, TexturePassElement, TextureId};
use crate::{BoxTransform, DecorationConfig, EdgeSet, Rect, Result, WindowId};
use utils::log;

pub struct JumpDecoration {
    jd_window: WindowId,
    jd_label: String,
    jd_config: DecorationConfig,
    jd_assigned: Rect<f64>,
    /// The rendered label. This is sized for the first frame it was
    /// drawn in and reused afterwards.
    jd_texture: Option<TextureId>,
}

impl JumpDecoration {
    pub fn new(window: WindowId, label: &str, config: DecorationConfig) -> Self {
        Self {
            jd_window: window,
            jd_label: label.to_string(),
            jd_config: config,
            jd_assigned: Rect::default(),
            jd_texture: None,
        }
    }

    pub fn window(&self) -> WindowId {
        self.jd_window
    }

    pub fn label(&self) -> &str {
        self.jd_label.as_str()
    }

    pub fn texture(&self) -> Option<TextureId> {
        self.jd_texture
    }

    /// The text request for a label drawn into `rect`
    ///
    /// The font size spreads the label over the width of the box.
    fn text_request(&self, rect: &Rect<f64>) -> TextRequest {
        let len = self.jd_label.chars().count() as f64;

        TextRequest {
            tr_text: self.jd_label.clone(),
            tr_color: Color::from_argb(self.jd_config.jump_labels_color),
            tr_font_size: rect.r_size.0 / len,
            tr_font_family: self.jd_config.label_font().to_string(),
            tr_max_width: rect.r_size.0,
        }
    }
}

impl Decoration for JumpDecoration {
    fn positioning_info(&mut self) -> PositioningInfo {
        PositioningInfo {
            pi_policy: PositionPolicy::Sticky,
            pi_edges: EdgeSet::all(),
            ..PositioningInfo::default()
        }
    }

    fn on_positioning_reply(&mut self, reply: &PositioningReply) {
        self.jd_assigned = reply.pr_assigned_geometry;
    }

    fn draw(&mut self, host: &mut dyn Compositor, monitor: &Monitor, _alpha: f32) -> Result<()> {
        if self.jd_label.is_empty() {
            return Ok(());
        }

        let rect = {
            let window = get_window(host, self.jd_window)?;
            let anchor = host.edge_defined_point(EdgeSet::all(), self.jd_window);

            match BoxTransform::new(anchor)
                .label_scale(self.jd_config.jump_labels_scale)
                .workspace_offset(window.workspace_offset())
                .device_box(&self.jd_assigned, monitor)
            {
                Some(r) => r,
                None => return Ok(()),
            }
        };

        let texture = match self.jd_texture {
            Some(tex) => tex,
            None => {
                let request = self.text_request(&rect);
                match host.render_text(&request) {
                    Some(tex) => {
                        log::debug!(
                            "Rendered jump label {:?} for {:?} at size {}",
                            self.jd_label,
                            self.jd_window,
                            request.tr_font_size
                        );
                        self.jd_texture = Some(tex);
                        tex
                    }
                    None => {
                        // Try again next frame
                        log::error!("Could not render jump label {:?}", self.jd_label);
                        return Ok(());
                    }
                }
            }
        };

        host.add_pass_element(PassElement::Texture(TexturePassElement {
            t_texture: texture,
            t_box: rect,
        }));
        Ok(())
    }

    /// Labels are redrawn along with their window
    fn damage_entire(&mut self, _host: &mut dyn Compositor) -> Result<()> {
        Ok(())
    }

    fn update_window(&mut self, _host: &mut dyn Compositor) -> Result<()> {
        Ok(())
    }

    fn decoration_type(&self) -> DecorationType {
        DecorationType::Custom
    }

    fn decoration_layer(&self) -> DecorationLayer {
        DecorationLayer::Over
    }

    fn decoration_flags(&self, _host: &dyn Compositor) -> DecorationFlags {
        DecorationFlags::PART_OF_MAIN_WINDOW
    }

    fn display_name(&self) -> &'static str {
        "Overview"
    }
}
