#![no_std]

pub mod channel;
pub mod color;
pub mod controller;
pub mod debounce;
pub mod effect;
pub mod scheduler;
pub mod settings;
pub mod state;

pub use channel::{LayerEventChannel, LayerEventReceiver, LayerEventSender};
pub use color::{Hsb, Rgb, hsb_to_rgb};
pub use controller::UnderglowController;
pub use debounce::SaveDebouncer;
pub use effect::EffectKind;
pub use scheduler::{TICK_PERIOD, TickScheduler};
pub use settings::{SETTINGS_KEY, Snapshot};
pub use state::{UnderglowConfig, UnderglowState};

pub use embassy_time::{Duration, Instant};

/// Status values returned by controller operations.
///
/// Every error is reported to the caller; none of them escalate to
/// termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnderglowError {
    /// The LED strip driver has not been bound yet.
    NotReady,
    /// An HSB channel was outside its valid range.
    OutOfRange,
    /// A persisted snapshot did not match the expected size.
    SizeMismatch,
    /// The LED strip driver refused the frame.
    StripWrite,
}

/// Error returned by [`LedStrip::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripWriteError;

/// Error returned by [`PowerRail`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerRailError;

/// Error returned by [`SettingsStore::put`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsWriteError;

/// Abstract LED strip driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait LedStrip {
    /// Write a full frame to the strip.
    ///
    /// A failed write is not retried; the next tick renders a fresh frame
    /// anyway.
    fn write(&mut self, pixels: &[Rgb]) -> Result<(), StripWriteError>;
}

/// Optional external power rail feeding the strip.
///
/// Rail failures are logged by the controller and never abort the operation
/// in progress.
pub trait PowerRail {
    fn enable(&mut self) -> Result<(), PowerRailError>;
    fn disable(&mut self) -> Result<(), PowerRailError>;
}

/// Key-value settings backend used to persist the underglow state.
pub trait SettingsStore {
    /// Read the record stored under `key` into `buf`.
    ///
    /// Returns the full length of the stored record (which may exceed
    /// `buf.len()`; only the part that fits is copied), or `None` when no
    /// record exists.
    fn get(&mut self, key: &str, buf: &mut [u8]) -> Option<usize>;

    /// Store `value` under `key`, replacing any previous record.
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), SettingsWriteError>;
}
