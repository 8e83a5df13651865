use crate::animation::values::Interpolatable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpolationMode {
    Linear,
    Step,
    CubicSpline,
}

/// How far a cursor scans forward before falling back to a binary search.
const MAX_SCAN_OFFSET: usize = 3;

/// Remembers the last keyframe interval so sequential sampling stays O(1).
#[derive(Debug, Clone, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

/// Source keyframes of one animated property.
///
/// For [`InterpolationMode::CubicSpline`] `values` holds
/// `(in_tangent, value, out_tangent)` triples, so its length is
/// `times.len() * 3`.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        Self { times, values, interpolation }
    }

    /// Time of the last keyframe, `0.0` for an empty track.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty() || self.values.is_empty()
    }

    /// Number of values the keyframe times call for.
    #[must_use]
    pub fn expected_value_count(&self) -> usize {
        match self.interpolation {
            InterpolationMode::CubicSpline => self.times.len() * 3,
            _ => self.times.len(),
        }
    }

    /// Non-empty, with exactly [`expected_value_count`](Self::expected_value_count) values.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.is_empty() && self.values.len() == self.expected_value_count()
    }

    /// Samples the track at `time`, clamping outside the keyframe range.
    ///
    /// Returns `None` for an empty track or one whose value count does not
    /// match its keyframe times.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<T> {
        if !self.is_valid() {
            return None;
        }
        let index = self.times.partition_point(|&t| t <= time).saturating_sub(1);
        Some(self.sample_interval(index, time))
    }

    /// Like [`sample`](Self::sample), resuming the interval search at `cursor`.
    ///
    /// Monotonic sampling only scans a few keyframes ahead; any jump beyond
    /// that falls back to a binary search.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> Option<T> {
        if !self.is_valid() {
            return None;
        }

        let len = self.times.len();
        let start = cursor.last_index.min(len - 1);

        let mut found = None;
        if time >= self.times[start] {
            for idx in start..(start + MAX_SCAN_OFFSET + 1).min(len) {
                if idx == len - 1 || time < self.times[idx + 1] {
                    found = Some(idx);
                    break;
                }
            }
        }

        let index = found
            .unwrap_or_else(|| self.times.partition_point(|&t| t <= time).saturating_sub(1));
        cursor.last_index = index;

        Some(self.sample_interval(index, time))
    }

    fn value_at(&self, index: usize) -> T {
        match self.interpolation {
            InterpolationMode::CubicSpline => self.values[index * 3 + 1],
            _ => self.values[index],
        }
    }

    fn sample_interval(&self, index: usize, time: f32) -> T {
        let len = self.times.len();
        if index >= len - 1 {
            return self.value_at(len - 1);
        }

        let next = index + 1;
        let t0 = self.times[index];
        let t1 = self.times[next];
        let dt = t1 - t0;

        let t = if dt > 1e-6 { ((time - t0) / dt).clamp(0.0, 1.0) } else { 0.0 };

        match self.interpolation {
            InterpolationMode::Step => self.value_at(index),
            InterpolationMode::Linear => {
                T::interpolate_linear(self.value_at(index), self.value_at(next), t)
            }
            InterpolationMode::CubicSpline => {
                let prev = index * 3;
                let next = next * 3;
                T::interpolate_cubic(
                    self.values[prev + 1],
                    self.values[prev + 2],
                    self.values[next],
                    self.values[next + 1],
                    t,
                    dt,
                )
            }
        }
    }
}
