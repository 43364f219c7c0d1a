//! Effect system with compile-time known effect variants
//!
//! Effects are a closed enum; each variant renders one tick into the pixel
//! buffer and owns its own interpretation of `animation_step`.

mod breathe;
mod custom;
mod solid;
mod spectrum;
mod swirl;

use crate::color::Rgb;
use crate::state::UnderglowState;

const EFFECT_NAME_CUSTOM: &str = "custom";
const EFFECT_NAME_SOLID: &str = "solid";
const EFFECT_NAME_BREATHE: &str = "breathe";
const EFFECT_NAME_SPECTRUM: &str = "spectrum";
const EFFECT_NAME_SWIRL: &str = "swirl";

const EFFECT_ID_CUSTOM: u8 = 0;
const EFFECT_ID_SOLID: u8 = 1;
const EFFECT_ID_BREATHE: u8 = 2;
const EFFECT_ID_SPECTRUM: u8 = 3;
const EFFECT_ID_SWIRL: u8 = 4;

/// Selectable underglow effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectKind {
    /// Fixed decorative palette for the board layout.
    Custom = EFFECT_ID_CUSTOM,
    /// Every pixel shows the configured base color.
    Solid = EFFECT_ID_SOLID,
    /// Triangle-wave brightness pulse on the base color.
    Breathe = EFFECT_ID_BREATHE,
    /// All pixels cycle through the hue wheel together.
    Spectrum = EFFECT_ID_SPECTRUM,
    /// A hue gradient rotating along the strip.
    Swirl = EFFECT_ID_SWIRL,
}

impl EffectKind {
    /// Number of selectable effects.
    pub const COUNT: u8 = 5;

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_CUSTOM => Self::Custom,
            EFFECT_ID_SOLID => Self::Solid,
            EFFECT_ID_BREATHE => Self::Breathe,
            EFFECT_ID_SPECTRUM => Self::Spectrum,
            EFFECT_ID_SWIRL => Self::Swirl,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Custom => EFFECT_NAME_CUSTOM,
            Self::Solid => EFFECT_NAME_SOLID,
            Self::Breathe => EFFECT_NAME_BREATHE,
            Self::Spectrum => EFFECT_NAME_SPECTRUM,
            Self::Swirl => EFFECT_NAME_SWIRL,
        }
    }

    /// The neighboring effect in cycle order.
    ///
    /// `direction` is `+1` or `-1`; the ordinal wraps at both ends.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cycled(self, direction: i16) -> Self {
        let ordinal =
            (i16::from(self.as_raw()) + direction).rem_euclid(i16::from(Self::COUNT));
        match Self::from_raw(ordinal as u8) {
            Some(effect) => effect,
            None => self,
        }
    }

    /// Render one tick of the current effect.
    ///
    /// Writes the frame into `pixels` and advances `state.animation_step`
    /// where the effect animates.
    pub fn render(self, state: &mut UnderglowState, pixels: &mut [Rgb]) {
        match self {
            Self::Custom => custom::render(state, pixels),
            Self::Solid => solid::render(state, pixels),
            Self::Breathe => breathe::render(state, pixels),
            Self::Spectrum => spectrum::render(state, pixels),
            Self::Swirl => swirl::render(state, pixels),
        }
    }
}
