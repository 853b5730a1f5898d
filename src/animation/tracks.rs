use std::fmt;

use crate::animation::values::Interpolate;

/// Which of a bone's three tracks a keyframe belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    Translation,
    Rotation,
    Scale,
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackKind::Translation => f.write_str("translation"),
            TrackKind::Rotation => f.write_str("rotation"),
            TrackKind::Scale => f.write_str("scale"),
        }
    }
}

/// A single timestamped keyframe, as handed over by the asset importer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeySample<T> {
    /// Sample time in clip ticks.
    pub time: f32,
    pub value: T,
}

/// An ordered sequence of keyframes for one bone property.
///
/// Samples are stored as parallel time/value arrays, ascending by time.
/// Typical tracks hold tens of samples; a single-sample track holds its
/// value for the whole clip.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolate> {
    times: Vec<f32>,
    values: Vec<T>,
}

impl<T: Interpolate> KeyframeTrack<T> {
    /// Builds a track from parallel arrays. Times must be ascending.
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>) -> Self {
        debug_assert_eq!(times.len(), values.len(), "time/value length mismatch");
        debug_assert!(times.is_sorted(), "keyframe times must be ascending");
        Self { times, values }
    }

    /// Builds a track from importer-facing `(time, value)` pairs.
    pub fn from_samples(samples: impl IntoIterator<Item = KeySample<T>>) -> Self {
        let (times, values) = samples
            .into_iter()
            .map(|sample| (sample.time, sample.value))
            .unzip();
        Self::new(times, values)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Sample times in clip ticks, ascending.
    #[inline]
    #[must_use]
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    /// Interpolated value at `time`.
    ///
    /// Times outside the keyframe range clamp to the boundary values: before
    /// the first keyframe the first value is returned, at or past the last
    /// keyframe the last value. Within the range, the bracketing pair is
    /// blended with the factor `(time - t0) / (t1 - t0)`.
    #[must_use]
    pub fn sample(&self, time: f32) -> T {
        assert!(!self.times.is_empty(), "track has no keyframes");

        let len = self.times.len();
        if len == 1 {
            return self.values[0];
        }

        // partition_point yields the first index with t > time, i.e. the
        // next keyframe; 0 and len are the clamped boundary cases.
        let next = self.times.partition_point(|&t| t <= time);
        if next == 0 {
            return self.values[0];
        }
        if next >= len {
            return self.values[len - 1];
        }
        let index = next - 1;

        let t0 = self.times[index];
        let t1 = self.times[next];
        let dt = t1 - t0;
        // Coincident timestamps would divide by zero; hold the left value.
        let factor = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };

        T::interpolate(self.values[index], self.values[next], factor.clamp(0.0, 1.0))
    }
}
