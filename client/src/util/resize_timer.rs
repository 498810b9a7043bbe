//! Single-slot timer for the debounced window-resize re-measure.
//!
//! Scheduling replaces the armed `Timeout`, and dropping a `Timeout` clears
//! it, so at most one timer is ever live. The slot belongs to the component's
//! reactive owner; when the owner is disposed the slot is dropped and any armed
//! timer is cleared with it.

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ResizeTimer {
    #[cfg(feature = "hydrate")]
    slot: StoredValue<Option<Timeout>, LocalStorage>,
}

impl ResizeTimer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            slot: StoredValue::new_local(None),
        }
    }

    /// Arm the timer, clearing any timer already armed.
    pub fn schedule(self, delay_ms: u32, on_elapsed: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let timeout = Timeout::new(delay_ms, on_elapsed);
            self.slot.try_update_value(|slot| *slot = Some(timeout));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, on_elapsed);
        }
    }

    pub fn cancel(self) {
        #[cfg(feature = "hydrate")]
        {
            self.slot.try_update_value(|slot| slot.take());
        }
    }
}

impl Default for ResizeTimer {
    fn default() -> Self {
        Self::new()
    }
}
