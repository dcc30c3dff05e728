use crate::common::{Int, NonZeroUInt};
use rand::RngCore;

/// The number of distinct values a raw sample can take.
pub const MAX_RANGE: u64 = 1 << 32;

/// How many times a sample is redrawn before settling for the last one.
pub const MAX_ITERATIONS: usize = 100;

/// Turns uniform 32-bit samples into die results without modulo bias.
pub trait Roller {
    fn next_sample(&mut self) -> u32;

    /// Rolls a value in `min..=max`.
    ///
    /// Samples at or above the largest multiple of the range are redrawn. If
    /// every redraw misses, the last sample is used anyway and a warning is
    /// logged.
    fn roll_between(&mut self, min: Int, max: Int) -> Int {
        if max <= min {
            return min;
        }
        let range = max.abs_diff(min).saturating_add(1);
        if range >= MAX_RANGE {
            return min.saturating_add(i64::from(self.next_sample()));
        }

        let limit = MAX_RANGE / range * range;
        let mut sample = u64::from(self.next_sample());
        let mut iterations = 0;
        while sample >= limit {
            if iterations >= MAX_ITERATIONS {
                tracing::warn!(min, max, "gave up on unbiased sampling after {} attempts", MAX_ITERATIONS);
                break;
            }
            sample = u64::from(self.next_sample());
            iterations += 1;
        }

        // `sample % range` is below `range`, which fits in an `Int` here.
        min + (sample % range) as Int
    }

    /// Rolls a die numbered from `min` up to its number of sides. A `min`
    /// above the last face is lowered to it.
    fn roll(&mut self, min: Int, sides: NonZeroUInt) -> Int {
        let max = Int::from(sides.get());
        self.roll_between(min.min(max), max)
    }
}

impl<R: RngCore + ?Sized> Roller for R {
    fn next_sample(&mut self) -> u32 {
        self.next_u32()
    }
}
