//! Breathing effect
//!
//! Triangle-wave brightness pulse: full brightness at both ends of the
//! cycle, trough in the middle. Saturation and hue come from the base color.

use crate::color::{Rgb, hsb_to_rgb};
use crate::state::UnderglowState;

/// Step value at which the cycle wraps back to zero.
const CYCLE_END: u16 = 2400;
/// Step value of the brightness trough.
const TROUGH: u16 = 1200;

#[allow(clippy::cast_possible_truncation)]
pub(super) fn render(state: &mut UnderglowState, pixels: &mut [Rgb]) {
    // |step - 1200| / 12 maps the cycle onto brightness 100..0..100.
    let step = state.animation_step.min(CYCLE_END);
    let brightness = (step.abs_diff(TROUGH) / 12) as u8;
    let rgb = hsb_to_rgb(state.color.with_brightness(brightness));

    for px in pixels.iter_mut() {
        *px = rgb;
    }

    let next = step + u16::from(state.animation_speed) * 10;
    state.animation_step = if next > CYCLE_END { 0 } else { next };
}
