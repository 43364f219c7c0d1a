//! Layer-change notification channel.
//!
//! A bounded queue carrying "highest active keymap layer" updates from the
//! host event bus into the controller. Built on `critical-section` and
//! `heapless::Deque`, so publishing is safe from interrupt context. When the
//! queue is full the oldest pending notification is dropped; only the latest
//! layer value matters.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Bounded queue of layer-change notifications.
pub struct LayerEventChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<u8, SIZE>>>,
}

impl<const SIZE: usize> LayerEventChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a publisher handle for the host event bus.
    pub const fn sender(&self) -> LayerEventSender<'_, SIZE> {
        LayerEventSender { channel: self }
    }

    /// Get the receiver handle for the controller.
    pub const fn receiver(&self) -> LayerEventReceiver<'_, SIZE> {
        LayerEventReceiver { channel: self }
    }

    fn publish(&self, layer: u8) {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            if queue.is_full() {
                queue.pop_front();
            }
            let _ = queue.push_back(layer);
        });
    }

    fn take(&self) -> Option<u8> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for LayerEventChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Publisher handle for a [`LayerEventChannel`].
#[derive(Clone, Copy)]
pub struct LayerEventSender<'a, const SIZE: usize> {
    channel: &'a LayerEventChannel<SIZE>,
}

impl<const SIZE: usize> LayerEventSender<'_, SIZE> {
    /// Announce the current highest active layer.
    pub fn publish(&self, layer: u8) {
        self.channel.publish(layer);
    }
}

/// Receiver handle for a [`LayerEventChannel`].
#[derive(Clone, Copy)]
pub struct LayerEventReceiver<'a, const SIZE: usize> {
    channel: &'a LayerEventChannel<SIZE>,
}

impl<const SIZE: usize> LayerEventReceiver<'_, SIZE> {
    /// Take the next pending notification, if any.
    pub fn take(&self) -> Option<u8> {
        self.channel.take()
    }
}
