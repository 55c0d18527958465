/// Current and maximum health. All arithmetic clamps into
/// `[0, max]` so callers can never over-heal or drive health negative.
#[derive(Copy, Clone, Debug)]
pub struct Health(pub i64, pub i64);

impl Health {
    pub fn new_full(max: i64) -> Self {
        Self(max, max)
    }

    pub fn max(&self) -> i64 {
        self.1
    }

    pub fn current(&self) -> i64 {
        self.0
    }

    pub fn is_depleted(&self) -> bool {
        self.0 <= 0
    }

    pub fn fraction(&self) -> f32 {
        (self.0 as f64 / self.1 as f64) as f32
    }

    /// Replaces the maximum, clamping the current value into the new
    /// range.
    pub fn with_max(self, max: i64) -> Self {
        Self(self.0.clamp(0, max), max)
    }

    /// Overwrites the current value, clamped. Used when restoring a
    /// persisted health value at battle start.
    pub fn with_current(self, current: i64) -> Self {
        Self(current.clamp(0, self.1), self.1)
    }
}

impl std::fmt::Display for Health {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Health ({}/{})", self.current(), self.max())
    }
}

impl std::ops::Add<i64> for Health {
    type Output = Self;

    fn add(self, other: i64) -> Self::Output {
        Self((self.0 + other).clamp(0, self.1), self.1)
    }
}

impl std::ops::Sub<i64> for Health {
    type Output = Self;

    fn sub(self, other: i64) -> Self::Output {
        Self((self.0 - other).clamp(0, self.1), self.1)
    }
}

impl std::ops::AddAssign<i64> for Health {
    fn add_assign(&mut self, other: i64) {
        self.0 = (self.0 + other).clamp(0, self.1);
    }
}

impl std::ops::SubAssign<i64> for Health {
    fn sub_assign(&mut self, other: i64) {
        self.0 = (self.0 - other).clamp(0, self.1);
    }
}
