//! Mutable underglow state and start-up configuration.

use embassy_time::Duration;

use crate::color::{BRT_MAX, HUE_MAX, Hsb, SAT_MAX};
use crate::effect::EffectKind;

/// Slowest animation speed.
pub const SPEED_MIN: u8 = 1;
/// Fastest animation speed.
pub const SPEED_MAX: u8 = 5;

/// Start values and adjustment steps for the underglow.
#[derive(Debug, Clone)]
pub struct UnderglowConfig {
    /// Base color at first boot.
    pub color_start: Hsb,
    /// Animation speed at first boot (`1..=5`).
    pub speed_start: u8,
    /// Effect selected at first boot.
    pub effect_start: EffectKind,
    /// Whether the strip powers up animating.
    pub on_start: bool,
    /// Hue change per [`adjust_hue`](crate::UnderglowController::adjust_hue) call.
    pub hue_step: u16,
    /// Saturation change per adjust call.
    pub sat_step: u8,
    /// Brightness change per adjust call.
    pub brt_step: u8,
    /// Delay between the last settings change and the persisted write.
    pub save_debounce: Duration,
}

impl Default for UnderglowConfig {
    fn default() -> Self {
        Self {
            color_start: Hsb::new(0, SAT_MAX, BRT_MAX),
            speed_start: 3,
            effect_start: EffectKind::Custom,
            on_start: true,
            hue_step: 10,
            sat_step: 10,
            brt_step: 10,
            save_debounce: Duration::from_secs(60),
        }
    }
}

/// The single mutable aggregate of the underglow subsystem.
///
/// Created once at startup from [`UnderglowConfig`], optionally overwritten
/// by a persisted snapshot, then owned by the controller for the rest of the
/// process lifetime. The controller hands out shared references only; all
/// mutation goes through its operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnderglowState {
    /// Current base color.
    pub color: Hsb,
    /// Step multiplier per tick (`1..=5`).
    pub animation_speed: u8,
    /// Currently selected effect.
    pub current_effect: EffectKind,
    /// Effect-local phase accumulator; range and wrap point are
    /// effect-specific, and switching effects resets it to zero.
    pub animation_step: u16,
    /// Last known highest active keymap layer.
    pub active_layer: u16,
    /// Whether the strip is powered and animating.
    pub on: bool,
}

impl UnderglowState {
    /// Build the compiled-in default state from a configuration.
    pub fn from_config(config: &UnderglowConfig) -> Self {
        let color = config.color_start;
        Self {
            color: Hsb::new(
                color.h % HUE_MAX,
                color.s.min(SAT_MAX),
                color.b.min(BRT_MAX),
            ),
            animation_speed: config.speed_start.clamp(SPEED_MIN, SPEED_MAX),
            current_effect: config.effect_start,
            animation_step: 0,
            active_layer: 0,
            on: config.on_start,
        }
    }
}
