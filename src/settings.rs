//! Persisted snapshot layout and settings-store access.
//!
//! The full [`UnderglowState`] is stored as a single fixed-layout record.
//! There is no versioning or migration: a stored payload whose size does not
//! match the current layout is rejected and the compiled-in defaults stay in
//! effect.

use bytemuck::{Pod, Zeroable};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BRT_MAX, HUE_MAX, Hsb, SAT_MAX};
use crate::effect::EffectKind;
use crate::state::{SPEED_MAX, SPEED_MIN, UnderglowState};
use crate::{SettingsStore, UnderglowError};

/// Key of the persisted underglow record.
pub const SETTINGS_KEY: &str = "rgb/underglow/state";

/// Byte size of a stored snapshot.
pub const SNAPSHOT_SIZE: usize = core::mem::size_of::<Snapshot>();

/// Wire layout of a persisted [`UnderglowState`].
///
/// Padding is explicit so the layout is stable and fully initialized.
#[derive(Debug, Clone, Copy, Zeroable, Pod)]
#[repr(C)]
pub struct Snapshot {
    pub hue: u16,
    pub animation_step: u16,
    pub active_layer: u16,
    pub saturation: u8,
    pub brightness: u8,
    pub animation_speed: u8,
    pub effect: u8,
    pub on: u8,
    _padding: u8,
}

impl Snapshot {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<UnderglowState> for Snapshot {
    fn from(state: UnderglowState) -> Self {
        Self {
            hue: state.color.h,
            animation_step: state.animation_step,
            active_layer: state.active_layer,
            saturation: state.color.s,
            brightness: state.color.b,
            animation_speed: state.animation_speed,
            effect: state.current_effect.as_raw(),
            on: u8::from(state.on),
            _padding: 0,
        }
    }
}

impl From<Snapshot> for UnderglowState {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            color: Hsb::new(
                snapshot.hue % HUE_MAX,
                snapshot.saturation.min(SAT_MAX),
                snapshot.brightness.min(BRT_MAX),
            ),
            animation_speed: snapshot.animation_speed.clamp(SPEED_MIN, SPEED_MAX),
            current_effect: EffectKind::from_raw(snapshot.effect)
                .unwrap_or(EffectKind::Custom),
            animation_step: snapshot.animation_step,
            active_layer: snapshot.active_layer,
            on: snapshot.on != 0,
        }
    }
}

/// Load the persisted state, if any.
///
/// Returns `Ok(None)` when no record exists and `Err(SizeMismatch)` when the
/// stored payload does not match the snapshot layout.
pub(crate) fn load(
    store: &mut impl SettingsStore,
) -> Result<Option<UnderglowState>, UnderglowError> {
    let mut buf = [0u8; SNAPSHOT_SIZE];
    let Some(len) = store.get(SETTINGS_KEY, &mut buf) else {
        return Ok(None);
    };
    if len != SNAPSHOT_SIZE {
        return Err(UnderglowError::SizeMismatch);
    }

    let snapshot: Snapshot = bytemuck::pod_read_unaligned(&buf);
    Ok(Some(snapshot.into()))
}

/// Write the current state; a failed write is logged and otherwise dropped.
pub(crate) fn save(store: &mut impl SettingsStore, state: &UnderglowState) {
    let snapshot = Snapshot::from(*state);

    let _ = store.put(SETTINGS_KEY, snapshot.as_bytes()).map_err(|_e| {
        #[cfg(feature = "esp32-log")]
        println!("underglow: error persisting state: {:?}", _e);
    });
}
