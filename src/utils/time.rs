use std::cell::Cell;
use std::rc::Rc;

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
use web_time::Instant;

/// A monotonic source of "seconds since some epoch".
///
/// [`TimedLerp`](crate::TimedLerp) never advances time on its own; every bit of
/// progress comes from the difference between two readings of its time source.
/// Readings must never decrease.
pub trait TimeSource {
    /// Current reading in seconds.
    ///
    /// Readings are absolute, so they are kept in `f64`; only the difference
    /// between two readings is narrowed to `f32`.
    fn now(&self) -> f64;
}

impl<C: TimeSource + ?Sized> TimeSource for &C {
    #[inline]
    fn now(&self) -> f64 {
        (**self).now()
    }
}

impl<C: TimeSource + ?Sized> TimeSource for Rc<C> {
    #[inline]
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Wall-clock time source measuring seconds since its creation.
///
/// Copies share the same epoch, so lerps built from one `SystemClock` agree on
/// what "now" is.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    /// Creates a new clock starting from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl TimeSource for SystemClock {
    #[inline]
    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

/// Externally driven time source.
///
/// The host advances it explicitly, typically once per frame with the frame's
/// delta time. Clones share the same reading, so one clock can drive many lerps.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Creates a clock reading 0 seconds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock with an initial reading.
    #[must_use]
    pub fn starting_at(seconds: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(seconds)),
        }
    }

    /// Moves the clock forward by `dt` seconds.
    ///
    /// Negative deltas are ignored, readings never decrease.
    pub fn advance(&self, dt: f64) {
        if dt < 0.0 {
            log::warn!("ManualClock: ignoring negative time step {dt}");
            return;
        }
        self.now.set(self.now.get() + dt);
    }

    /// Jumps the clock to an absolute reading, if it is not in the past.
    pub fn set(&self, seconds: f64) {
        if seconds < self.now.get() {
            log::warn!(
                "ManualClock: refusing to move backwards ({} -> {seconds})",
                self.now.get()
            );
            return;
        }
        self.now.set(seconds);
    }
}

impl TimeSource for ManualClock {
    #[inline]
    fn now(&self) -> f64 {
        self.now.get()
    }
}
