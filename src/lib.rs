//! # Scroller window decorations
//!
//! Two decorations drawn by the compositor on top of scrolling-layout
//! windows:
//! * `SelectionBorders` - a border drawn over the window's own border,
//! coloured by the window's selection state and animated with it.
//! * `JumpDecoration` - a square text label centered on a window, used
//! by the jump/overview mode to pick a window from the keyboard.
//!
//! Neither decoration owns anything on the compositor side. Every call
//! receives a `Compositor` which answers geometry questions (monitors,
//! workspace offsets, edge anchors) and accepts the outputs: draw
//! primitives for the render pass and damage regions.
//!
//! ## Geometry
//!
//! Drawing goes through a `BoxTransform`: the box assigned by the
//! decoration positioner is anchored to the window, offset by the
//! workspace and floating offsets, made monitor relative, expanded or
//! inset, scaled to device pixels and rounded.
//!
//! Damage goes through `damage::border_damage`: only the band between
//! the border's outer edge and the inner edge of the rounded corners
//! is damaged, minus any monitor the window is not shown on.
//!
//! ```
//! use scroller_decorations::{damage, Rect};
//!
//! let surface = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let band = damage::border_band(&surface, 2.0, 10.0);
//! assert!(!band.contains(50.0, 50.0));
//! assert!(band.contains(-2.0, 50.0));
//! ```

extern crate utils;
pub use utils::region::{Rect, Region, Vector2D};

pub mod border;
pub mod compositor;
pub mod config;
pub mod damage;
pub mod decoration;
pub mod edges;
pub mod geometry;
pub mod jump;
pub mod pass;


pub use border::{BorderSizeWatch, SelectionBorders};
pub use compositor::{Compositor, Monitor, WindowId, WindowState, WorkspaceState};
pub use config::DecorationConfig;
pub use decoration::{
    Decoration, DecorationFlags, DecorationLayer, DecorationType, Extents, PositionPolicy,
    PositioningInfo, PositioningReply,
};
pub use edges::EdgeSet;
pub use geometry::BoxTransform;
pub use jump::JumpDecoration;
pub use pass::{
    BorderPassElement, Color, Gradient, PassElement, TextRequest, TexturePassElement, TextureId,
};

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DecoError {
    /// The compositor has no state for this window. Callers must only
    /// hand decorations windows that are still alive.
    #[error("The compositor has no state for window {0:?}")]
    UnknownWindow(WindowId),
    #[error("Invalid value {value:?} for config option {key}: {reason}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DecoError>;
