/// A parametric range along a ray.
///
/// Hit tests treat the interval as half-open, `[min, max)`: a root exactly at
/// `min` counts, a root exactly at `max` does not. An infinite root never
/// passes, which is how "no intersection" falls out of the comparisons.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Interval from `min` to positive infinity.
    pub fn from_min(min: f32) -> Self {
        Self::new(min, f32::INFINITY)
    }

    /// Returns true if x is within `[min, max)`.
    #[inline]
    pub fn admits(&self, x: f32) -> bool {
        self.min <= x && x < self.max
    }
}
