use glam::{EulerRot, Quat};

use crate::errors::{LerpError, Result};
use crate::lerp::values::Interpolatable;
use crate::utils::time::{SystemClock, TimeSource};

/// Lifecycle of a [`TimedLerp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LerpState {
    /// Created but never started. The value is the start value.
    #[default]
    Ready,
    /// Accumulating time on every [`TimedLerp::get_value`] call.
    Running,
    /// Time is frozen until [`TimedLerp::resume`].
    Paused,
    /// Duration reached. The value is the end value.
    Done,
}

/// Interpolates from a start value to an end value over a fixed duration.
///
/// The lerp is poll-driven: it only moves when [`get_value`](Self::get_value) is
/// called, using the difference between the current reading of its
/// [`TimeSource`] and the previous one. Calling `get_value` several times without
/// the clock moving returns the same value every time.
///
/// Time spent paused never counts toward the duration.
#[derive(Debug, Clone)]
pub struct TimedLerp<T: Interpolatable, C: TimeSource = SystemClock> {
    start_value: T,
    end_value: T,
    duration: f32,

    elapsed: f32,
    current_value: T,
    state: LerpState,
    last_sample_time: f64,

    clock: C,
}

pub type FloatLerp<C = SystemClock> = TimedLerp<f32, C>;
pub type Vector2Lerp<C = SystemClock> = TimedLerp<glam::Vec2, C>;
pub type Vector3Lerp<C = SystemClock> = TimedLerp<glam::Vec3, C>;
pub type QuaternionLerp<C = SystemClock> = TimedLerp<Quat, C>;
pub type ColorLerp<C = SystemClock> = TimedLerp<crate::lerp::color::Color, C>;
pub type Color32Lerp<C = SystemClock> = TimedLerp<crate::lerp::color::Color32, C>;

impl<T: Interpolatable> TimedLerp<T, SystemClock> {
    /// Creates a lerp driven by wall-clock time.
    ///
    /// No validation is performed: a zero or negative `duration` completes on the
    /// first sample after [`start`](Self::start).
    #[must_use]
    pub fn new(start_value: T, end_value: T, duration: f32) -> Self {
        Self::with_clock(start_value, end_value, duration, SystemClock::new())
    }

    /// Like [`new`](Self::new), but rejects NaN and infinite durations.
    pub fn try_new(start_value: T, end_value: T, duration: f32) -> Result<Self> {
        Self::try_with_clock(start_value, end_value, duration, SystemClock::new())
    }
}

impl<T: Interpolatable, C: TimeSource> TimedLerp<T, C> {
    /// Creates a lerp driven by `clock`, in the [`LerpState::Ready`] state.
    #[must_use]
    pub fn with_clock(start_value: T, end_value: T, duration: f32, clock: C) -> Self {
        Self {
            start_value,
            end_value,
            duration,
            elapsed: 0.0,
            current_value: start_value,
            state: LerpState::Ready,
            last_sample_time: 0.0,
            clock,
        }
    }

    /// Like [`with_clock`](Self::with_clock), but rejects NaN and infinite durations.
    pub fn try_with_clock(start_value: T, end_value: T, duration: f32, clock: C) -> Result<Self> {
        if !duration.is_finite() {
            return Err(LerpError::InvalidDuration(duration));
        }
        Ok(Self::with_clock(start_value, end_value, duration, clock))
    }

    /// Starts (or restarts) the lerp from the start value.
    ///
    /// Callable from any state. Time is measured from the clock's current reading.
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.current_value = self.start_value;
        self.last_sample_time = self.clock.now();
        log::trace!(
            "TimedLerp: {:?} -> Running (duration {}s)",
            self.state,
            self.duration
        );
        self.state = LerpState::Running;
    }

    /// Pauses a running lerp. No-op in any other state.
    pub fn pause(&mut self) {
        if self.state == LerpState::Running {
            self.state = LerpState::Paused;
            log::trace!("TimedLerp: paused at {}s", self.elapsed);
        }
    }

    /// Resumes a paused lerp. No-op in any other state.
    pub fn resume(&mut self) {
        if self.state == LerpState::Paused {
            self.state = LerpState::Running;
            // Paused interval must not count as elapsed time.
            self.last_sample_time = self.clock.now();
            log::trace!("TimedLerp: resumed at {}s", self.elapsed);
        }
    }

    /// Pauses if running, resumes if paused.
    pub fn toggle_pause(&mut self) {
        match self.state {
            LerpState::Running => self.pause(),
            LerpState::Paused => self.resume(),
            LerpState::Ready | LerpState::Done => {}
        }
    }

    /// Advances the lerp by the time elapsed since the previous sample and returns
    /// the current value.
    ///
    /// Outside [`LerpState::Running`] this returns the cached value without touching
    /// the clock. Once the accumulated time reaches the duration the lerp becomes
    /// [`LerpState::Done`] and the exact end value is returned from then on.
    pub fn get_value(&mut self) -> T {
        if self.state != LerpState::Running {
            return self.current_value;
        }

        let now = self.clock.now();
        self.elapsed += (now - self.last_sample_time) as f32;
        self.last_sample_time = now;

        if self.elapsed >= self.duration {
            self.state = LerpState::Done;
            self.current_value = self.end_value;
            log::debug!("TimedLerp: done after {}s", self.elapsed);
            return self.current_value;
        }

        let ratio = self.elapsed / self.duration;
        self.current_value = T::interpolate_linear(self.start_value, self.end_value, ratio);
        self.current_value
    }

    /// Last computed value, without sampling the clock.
    #[must_use]
    pub fn value(&self) -> T {
        self.current_value
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == LerpState::Done
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state == LerpState::Paused
    }

    /// Raw `elapsed / duration`.
    ///
    /// Not clamped: it only reflects time accounted for by `get_value`, and a zero
    /// duration yields NaN or infinity.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.elapsed / self.duration
    }

    #[must_use]
    pub fn state(&self) -> LerpState {
        self.state
    }

    /// Seconds accumulated while running since the last [`start`](Self::start).
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[must_use]
    pub fn start_value(&self) -> T {
        self.start_value
    }

    #[must_use]
    pub fn end_value(&self) -> T {
        self.end_value
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: TimeSource> TimedLerp<Quat, C> {
    /// Rotation lerp between two Euler orientations given in degrees.
    ///
    /// Each orientation rotates around Z, then X, then Y.
    #[must_use]
    pub fn from_euler_degrees(
        start: glam::Vec3,
        end: glam::Vec3,
        duration: f32,
        clock: C,
    ) -> Self {
        let to_quat = |deg: glam::Vec3| {
            Quat::from_euler(
                EulerRot::YXZ,
                deg.y.to_radians(),
                deg.x.to_radians(),
                deg.z.to_radians(),
            )
        };
        Self::with_clock(to_quat(start), to_quat(end), duration, clock)
    }

    /// Like [`from_euler_degrees`](Self::from_euler_degrees), but rejects NaN and
    /// infinite durations.
    pub fn try_from_euler_degrees(
        start: glam::Vec3,
        end: glam::Vec3,
        duration: f32,
        clock: C,
    ) -> Result<Self> {
        if !duration.is_finite() {
            return Err(LerpError::InvalidDuration(duration));
        }
        Ok(Self::from_euler_degrees(start, end, duration, clock))
    }
}
