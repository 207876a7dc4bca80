// Damage tracking for bordered windows
//
// A border only covers a thin band around the window, so there is no
// point in damaging the whole window when it changes colour. We damage
// the band from the outside of the border to the inside of the rounded
// corners instead.
use crate::compositor::{Monitor, WindowState};
use crate::{Rect, Region};
use utils::log;

use std::f64::consts::SQRT_2;

/// Extra distance added to the corner correction to cover
/// anti-aliasing on the inner edge of the arc.
pub const ROUNDING_SLACK: f64 = 2.0;

/// How far a rounded corner's arc reaches into its bounding box
///
/// This is `r - r/sqrt(2)`, the distance between the corner of a
/// square and the arc of radius `r` along the diagonal, plus
/// `ROUNDING_SLACK`.
pub fn rounding_correction(rounding: f64) -> f64 {
    rounding - rounding / SQRT_2 + ROUNDING_SLACK
}

/// The band covered by a border of `border_size` around `surface`
/// with corners rounded by `rounding`.
///
/// The outer edge is one unit past the border, the inner edge is inset
/// by `rounding_correction`. If the inset swallows the whole surface
/// the band is simply the expanded box.
pub fn border_band(surface: &Rect<f64>, border_size: f64, rounding: f64) -> Region {
    let expanded = surface.expand(border_size + 1.0);
    let shrunk = surface.expand(-rounding_correction(rounding));

    let mut region = Region::from_rect(expanded);
    region.subtract(&shrunk);
    region
}

/// The surface box a window's border damage is computed from
///
/// The workspace offset is only applied while it is animating, once
/// the animation settles the surface box is already in place.
pub fn damage_surface_box(window: &WindowState) -> Rect<f64> {
    window
        .w_surface_box
        .translate(&window.animating_workspace_offset())
        .translate(&window.w_floating_offset)
}

/// Compute the border damage for `window`
///
/// Monitors for which `renders_on` returns false are cut out of the
/// region, they will not composite this window so there is nothing to
/// repaint there.
pub fn border_damage<F>(window: &WindowState, monitors: &[Monitor], renders_on: F) -> Region
where
    F: Fn(&Monitor) -> bool,
{
    let surface = damage_surface_box(window);
    let mut region = border_band(
        &surface,
        window.w_border_size as f64,
        window.w_rounding,
    );

    for mon in monitors.iter().filter(|m| !renders_on(m)) {
        log::verbose!("Excluding monitor {:?} from border damage", mon.m_id);
        region.subtract(&mon.rect());
    }

    region
}
