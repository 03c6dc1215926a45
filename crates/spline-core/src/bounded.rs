/// A scalar that normalizes itself into `[min, max]` on every write.
///
/// Used for the tunables a host may poke at every frame (sample counts,
/// line widths) so that downstream code never sees an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounded<T> {
    value: T,
    min: T,
    max: T,
}

impl<T: PartialOrd + Copy> Bounded<T> {
    /// Create a bounded scalar, clamping `raw` into range.
    pub fn new(raw: T, min: T, max: T) -> Self {
        debug_assert!(min <= max, "Bounded requires min <= max");
        Self {
            value: Self::clamp(raw, min, max),
            min,
            max,
        }
    }

    /// Clamp `raw` into `[min, max]`. Unordered input (NaN) maps to `min`.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn clamp(raw: T, min: T, max: T) -> T {
        if !(raw >= min) {
            min
        } else if raw > max {
            max
        } else {
            raw
        }
    }

    /// Write a new raw value and return what was actually stored.
    pub fn set(&mut self, raw: T) -> T {
        self.value = Self::clamp(raw, self.min, self.max);
        self.value
    }

    pub fn get(&self) -> T {
        self.value
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }
}
