//! Solid color effect
//!
//! Fills every pixel with the configured base color. No animation.

use crate::color::{Rgb, hsb_to_rgb};
use crate::state::UnderglowState;

pub(super) fn render(state: &UnderglowState, pixels: &mut [Rgb]) {
    let rgb = hsb_to_rgb(state.color);

    for px in pixels {
        *px = rgb;
    }
}
