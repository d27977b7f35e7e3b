// Copyright 2026 the Kamchatka Salmon Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Converts host frame timestamps into normalized step lengths.
///
/// A step of `1.0` is one nominal frame. Steps are clamped to
/// `[0, max_delta_time]`, so a stalled tab resumes with a bounded jump and a
/// clock running backwards yields a zero step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    nominal_frame_ms: f64,
    max_delta_time: f64,
    last: Option<f64>,
}

impl FrameClock {
    /// Creates a clock with no previous frame.
    #[must_use]
    pub fn new(nominal_frame_ms: f64, max_delta_time: f64) -> Self {
        Self {
            nominal_frame_ms,
            max_delta_time,
            last: None,
        }
    }

    /// Records a frame at `now_ms` and returns its step length.
    ///
    /// The first frame after construction or [`FrameClock::reset`] has no
    /// predecessor and counts as one nominal frame.
    ///
    /// A `NaN` timestamp is ignored and yields a zero step.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if now_ms.is_nan() {
            return 0.0;
        }
        let step = match self.last {
            Some(last) => ((now_ms - last) / self.nominal_frame_ms).clamp(0.0, self.max_delta_time),
            None => 1.0_f64.min(self.max_delta_time),
        };
        self.last = Some(now_ms);
        step
    }

    /// Forgets the previous frame.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Timestamp of the previous frame, if any.
    #[must_use]
    pub fn last_frame(&self) -> Option<f64> {
        self.last
    }
}
