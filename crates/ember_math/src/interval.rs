/// A range of ray parameters.
///
/// The tracer accepts hits whose distance `surrounds` the interval, i.e.
/// strictly inside `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// The open range `(epsilon, +inf)` of valid hit distances.
    pub fn beyond(epsilon: f32) -> Self {
        Self::new(epsilon, f32::INFINITY)
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Same lower bound, upper bound pulled in to `max`.
    ///
    /// Used while scanning for the nearest hit.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));
        assert!(interval.surrounds(5.0));
        assert!(!interval.surrounds(-0.1));
    }

    #[test]
    fn test_beyond_epsilon() {
        let range = Interval::beyond(0.001);

        assert!(!range.surrounds(0.0));
        assert!(!range.surrounds(0.001));
        assert!(range.surrounds(0.0011));
        assert!(range.surrounds(1e30));
        assert!(!range.surrounds(f32::INFINITY));
    }

    #[test]
    fn test_with_max() {
        let range = Interval::beyond(0.001).with_max(4.0);
        assert_eq!(range.min, 0.001);
        assert!(range.surrounds(3.9));
        assert!(!range.surrounds(4.0));
    }
}
