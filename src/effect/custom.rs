//! Fixed decorative pattern
//!
//! A static two-tone layout for the 27-LED board: the outer switch cluster
//! in azure, the underglow strip and inner cluster in rose. The index tables
//! are board positions, not geometry; only the configured brightness varies.

use crate::color::{Hsb, Rgb, SAT_MAX, hsb_to_rgb};
use crate::state::UnderglowState;

/// Azure accent on the outer cluster.
const OUTER_CLUSTER_HUE: u16 = 230;
/// Rose base on the underglow strip and inner cluster.
const UNDERGLOW_HUE: u16 = 345;

const OUTER_CLUSTER: [usize; 12] = [10, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26];
const UNDERGLOW_STRIP: [usize; 6] = [0, 1, 2, 3, 4, 5];
const INNER_CLUSTER: [usize; 9] = [6, 7, 8, 9, 11, 12, 13, 14, 15];

pub(super) fn render(state: &UnderglowState, pixels: &mut [Rgb]) {
    let accent = hsb_to_rgb(Hsb::new(OUTER_CLUSTER_HUE, SAT_MAX, state.color.b));
    let base = hsb_to_rgb(Hsb::new(UNDERGLOW_HUE, SAT_MAX, state.color.b));

    for &idx in &OUTER_CLUSTER {
        if let Some(px) = pixels.get_mut(idx) {
            *px = accent;
        }
    }

    for &idx in UNDERGLOW_STRIP.iter().chain(&INNER_CLUSTER) {
        if let Some(px) = pixels.get_mut(idx) {
            *px = base;
        }
    }
}
