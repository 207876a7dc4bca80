// Primitives handed to the compositor's render pass
use crate::Rect;
use serde::{Deserialize, Serialize};

use std::f64::consts::TAU;

/// A straight RGBA colour, each channel in [0, 1]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xAARRGGBB` colour, the format used in config files
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| ((argb >> shift) & 0xff) as f32 / 255.0;
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
            a: channel(24),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
}

/// A linear gradient of colours along `angle` radians
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub g_colors: Vec<Color>,
    pub g_angle: f64,
}

impl Gradient {
    pub fn new(colors: Vec<Color>, angle: f64) -> Self {
        Self {
            g_colors: colors,
            g_angle: angle,
        }
    }

    /// Rotate by `progress` of a full turn, keeping the angle in [0, 2pi)
    pub fn rotate_turns(&mut self, progress: f64) {
        self.g_angle = (self.g_angle + progress * TAU).rem_euclid(TAU);
    }
}

/// A border drawn around `box` in device coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct BorderPassElement {
    pub b_box: Rect<f64>,
    pub b_grad1: Gradient,
    /// Second gradient to lerp towards, only while fading
    pub b_grad2: Option<Gradient>,
    /// Progress from grad1 to grad2
    pub b_lerp: f32,
    /// Corner radius in device pixels
    pub b_round: f64,
    pub b_rounding_power: f64,
    pub b_alpha: f32,
    /// Thickness in layout units, the renderer scales it
    pub b_border_size: i32,
}

/// Texture handle owned by the compositor
#[derive(Copy, Clone, PartialEq, Debug, Eq, Hash)]
pub struct TextureId(pub u64);

/// A texture stretched over `box` in device coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct TexturePassElement {
    pub t_texture: TextureId,
    pub t_box: Rect<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PassElement {
    Border(BorderPassElement),
    Texture(TexturePassElement),
}

/// Parameters for rasterizing a text label
#[derive(Debug, Clone, PartialEq)]
pub struct TextRequest {
    pub tr_text: String,
    pub tr_color: Color,
    pub tr_font_size: f64,
    pub tr_font_family: String,
    /// Text wider than this is clipped
    pub tr_max_width: f64,
}
