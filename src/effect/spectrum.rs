//! Spectrum effect
//!
//! The whole strip shows one color whose hue walks the color wheel.

use crate::color::{HUE_MAX, Rgb, hsb_to_rgb};
use crate::state::UnderglowState;

pub(super) fn render(state: &mut UnderglowState, pixels: &mut [Rgb]) {
    let hue = state.animation_step % HUE_MAX;
    let rgb = hsb_to_rgb(state.color.with_hue(hue));

    for px in pixels.iter_mut() {
        *px = rgb;
    }

    state.animation_step = (hue + u16::from(state.animation_speed)) % HUE_MAX;
}
