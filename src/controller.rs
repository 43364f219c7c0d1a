//! Underglow controller - the main orchestrator
//!
//! Owns the mutable [`UnderglowState`], the pixel buffer, the tick schedule
//! and the save debouncer. All state mutation goes through the operations
//! here; the rest of the system only ever sees shared references.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::LayerEventReceiver;
use crate::color::{BRT_MAX, HUE_MAX, Hsb, Rgb, SAT_MAX};
use crate::debounce::SaveDebouncer;
use crate::scheduler::TickScheduler;
use crate::settings;
use crate::state::{SPEED_MAX, SPEED_MIN, UnderglowConfig, UnderglowState};
use crate::{LedStrip, PowerRail, SettingsStore, UnderglowError};

/// Drives a strip of `LEDS` addressable LEDs.
///
/// The strip and power-rail drivers are bound late (device discovery happens
/// outside this crate); every mutating operation fails with
/// [`UnderglowError::NotReady`] until the strip is bound. `EVENTS` sizes the
/// layer-notification queue.
pub struct UnderglowController<'a, S, P, K, const LEDS: usize, const EVENTS: usize>
where
    S: LedStrip,
    P: PowerRail,
    K: SettingsStore,
{
    // External dependencies and configuration
    strip: Option<S>,
    power: Option<P>,
    store: K,
    layer_events: LayerEventReceiver<'a, EVENTS>,
    config: UnderglowConfig,

    // Internal state
    state: UnderglowState,
    pixels: [Rgb; LEDS],
    scheduler: TickScheduler,
    debouncer: SaveDebouncer,
}

impl<'a, S, P, K, const LEDS: usize, const EVENTS: usize>
    UnderglowController<'a, S, P, K, LEDS, EVENTS>
where
    S: LedStrip,
    P: PowerRail,
    K: SettingsStore,
{
    /// Create a controller with compiled-in defaults.
    pub fn new(
        store: K,
        layer_events: LayerEventReceiver<'a, EVENTS>,
        config: UnderglowConfig,
    ) -> Self {
        Self {
            strip: None,
            power: None,
            store,
            layer_events,
            state: UnderglowState::from_config(&config),
            pixels: [Rgb::default(); LEDS],
            scheduler: TickScheduler::default(),
            debouncer: SaveDebouncer::new(config.save_debounce),
            config,
        }
    }

    /// Bind the LED strip driver.
    pub fn bind_strip(&mut self, strip: S) {
        self.strip = Some(strip);
        #[cfg(feature = "esp32-log")]
        println!("underglow: LED strip bound");
    }

    /// Bind the external power rail.
    pub fn bind_power(&mut self, power: P) {
        self.power = Some(power);
    }

    /// Replace the in-memory state with the persisted snapshot, if one
    /// exists.
    ///
    /// Returns `Ok(true)` when a snapshot was restored, `Ok(false)` when no
    /// record exists. A payload of the wrong size is rejected with
    /// [`UnderglowError::SizeMismatch`] and the defaults stay in effect.
    pub fn load_saved_state(&mut self) -> Result<bool, UnderglowError> {
        match settings::load(&mut self.store)? {
            Some(saved) => {
                self.state = saved;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Arm the tick schedule at bootstrap.
    ///
    /// Ticks are only acted on while the state is on; an armed schedule with
    /// the strip off just discards them.
    pub fn start(&mut self, now: Instant) {
        self.scheduler.start(now);
    }

    /// Run everything that is due at `now`: drain pending layer events, run
    /// at most one animation tick, and flush a debounced save whose window
    /// has elapsed.
    pub fn service(&mut self, now: Instant) -> Result<(), UnderglowError> {
        self.drain_layer_events();

        let mut result = Ok(());
        if self.scheduler.poll(now) && self.state.on {
            result = self.render_tick();
        }

        if self.debouncer.poll(now) {
            settings::save(&mut self.store, &self.state);
        }

        result
    }

    /// Power the strip on and restart the animation from phase zero.
    pub fn turn_on(&mut self, now: Instant) -> Result<(), UnderglowError> {
        self.ensure_bound()?;

        if let Some(power) = self.power.as_mut() {
            let _ = power.enable().map_err(|_e| {
                #[cfg(feature = "esp32-log")]
                println!("underglow: unable to enable external power: {:?}", _e);
            });
        }

        self.state.on = true;
        self.state.animation_step = 0;
        self.scheduler.start(now);
        self.debouncer.request(now);

        Ok(())
    }

    /// Blank the strip and stop the animation.
    pub fn turn_off(&mut self, now: Instant) -> Result<(), UnderglowError> {
        self.ensure_bound()?;

        if let Some(power) = self.power.as_mut() {
            let _ = power.disable().map_err(|_e| {
                #[cfg(feature = "esp32-log")]
                println!("underglow: unable to disable external power: {:?}", _e);
            });
        }

        self.pixels = [Rgb::default(); LEDS];
        let result = self.push_pixels();

        self.scheduler.stop();
        self.state.on = false;
        self.debouncer.request(now);

        result
    }

    pub fn toggle(&mut self, now: Instant) -> Result<(), UnderglowError> {
        if self.state.on {
            self.turn_off(now)
        } else {
            self.turn_on(now)
        }
    }

    /// Select the neighboring effect (`direction` is `+1` or `-1`).
    ///
    /// Always resets the animation phase so no effect inherits another's
    /// step value.
    pub fn cycle_effect(
        &mut self,
        direction: i16,
        now: Instant,
    ) -> Result<(), UnderglowError> {
        self.ensure_bound()?;

        self.state.current_effect = self.state.current_effect.cycled(direction);
        self.state.animation_step = 0;
        self.debouncer.request(now);

        #[cfg(feature = "esp32-log")]
        println!("underglow: effect set to {}", self.state.current_effect.as_str());

        Ok(())
    }

    /// Replace the base color.
    ///
    /// Does not request persistence on its own; callers that want the color
    /// saved follow up with [`request_save`](Self::request_save).
    pub fn set_color(&mut self, color: Hsb) -> Result<(), UnderglowError> {
        self.ensure_bound()?;

        if !color.is_valid() {
            return Err(UnderglowError::OutOfRange);
        }
        self.state.color = color;

        Ok(())
    }

    /// Rotate the hue by the configured step; wraps at 360.
    pub fn adjust_hue(
        &mut self,
        direction: i16,
        now: Instant,
    ) -> Result<(), UnderglowError> {
        self.ensure_bound()?;

        let step = i32::from(direction) * i32::from(self.config.hue_step);
        let hue = (i32::from(self.state.color.h) + step).rem_euclid(i32::from(HUE_MAX));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.state.color.h = hue as u16;
        }
        self.debouncer.request(now);

        Ok(())
    }

    /// Move the saturation by the configured step; clamps to `0..=100`.
    pub fn adjust_saturation(
        &mut self,
        direction: i16,
        now: Instant,
    ) -> Result<(), UnderglowError> {
        self.ensure_bound()?;

        self.state.color.s = stepped(self.state.color.s, direction, self.config.sat_step, SAT_MAX);
        self.debouncer.request(now);

        Ok(())
    }

    /// Move the brightness by the configured step; clamps to `0..=100`.
    pub fn adjust_brightness(
        &mut self,
        direction: i16,
        now: Instant,
    ) -> Result<(), UnderglowError> {
        self.ensure_bound()?;

        self.state.color.b = stepped(self.state.color.b, direction, self.config.brt_step, BRT_MAX);
        self.debouncer.request(now);

        Ok(())
    }

    /// Move the animation speed by one; clamps to `1..=5`.
    ///
    /// Pushing outward at a boundary is a success no-op.
    pub fn adjust_speed(
        &mut self,
        direction: i16,
        now: Instant,
    ) -> Result<(), UnderglowError> {
        self.ensure_bound()?;

        if self.state.animation_speed == SPEED_MIN && direction < 0 {
            return Ok(());
        }

        let speed = i32::from(self.state.animation_speed) + i32::from(direction);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.state.animation_speed =
                speed.clamp(i32::from(SPEED_MIN), i32::from(SPEED_MAX)) as u8;
        }
        self.debouncer.request(now);

        Ok(())
    }

    /// Current power state.
    pub fn is_on(&self) -> Result<bool, UnderglowError> {
        self.ensure_bound()?;
        Ok(self.state.on)
    }

    /// Schedule a debounced write of the current state.
    pub fn request_save(&mut self, now: Instant) {
        self.debouncer.request(now);
    }

    /// Read-only view of the current state.
    pub const fn state(&self) -> &UnderglowState {
        &self.state
    }

    fn ensure_bound(&self) -> Result<(), UnderglowError> {
        if self.strip.is_some() {
            Ok(())
        } else {
            Err(UnderglowError::NotReady)
        }
    }

    fn drain_layer_events(&mut self) {
        while let Some(layer) = self.layer_events.take() {
            if self.state.on {
                self.state.active_layer = u16::from(layer);
            }
        }
    }

    fn render_tick(&mut self) -> Result<(), UnderglowError> {
        let effect = self.state.current_effect;
        effect.render(&mut self.state, &mut self.pixels);
        self.push_pixels()
    }

    fn push_pixels(&mut self) -> Result<(), UnderglowError> {
        let strip = self.strip.as_mut().ok_or(UnderglowError::NotReady)?;
        strip
            .write(&self.pixels)
            .map_err(|_| UnderglowError::StripWrite)
    }
}

/// Apply a signed step to a channel value and clamp it to `0..=max`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn stepped(value: u8, direction: i16, step: u8, max: u8) -> u8 {
    let next = i32::from(value) + i32::from(direction) * i32::from(step);
    next.clamp(0, i32::from(max)) as u8
}
