//! Swirl effect
//!
//! Spreads the hue wheel across the strip and rotates it, so colors appear
//! to travel along the LEDs. Saturation and brightness come from the base
//! color.

use crate::color::{HUE_MAX, Rgb, hsb_to_rgb};
use crate::state::UnderglowState;

#[allow(clippy::cast_possible_truncation)]
pub(super) fn render(state: &mut UnderglowState, pixels: &mut [Rgb]) {
    if pixels.is_empty() {
        return;
    }

    let spread = HUE_MAX / pixels.len() as u16;
    let step = state.animation_step % HUE_MAX;

    for (idx, px) in pixels.iter_mut().enumerate() {
        let hue = (spread * idx as u16 + step) % HUE_MAX;
        *px = hsb_to_rgb(state.color.with_hue(hue));
    }

    state.animation_step = (step + u16::from(state.animation_speed) * 2) % HUE_MAX;
}
