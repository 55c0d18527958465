use serde::Deserialize;

#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Deserialize)]
pub struct Percentage(pub f32);

impl Percentage {
    pub fn from_percentage_value(value: f32) -> Self {
        Self(value / 100.0)
    }

    pub fn from_fraction(value: f32) -> Self {
        Self(value)
    }

    pub fn as_fraction(&self) -> f32 {
        self.0
    }

    pub fn as_percentage(&self) -> f32 {
        self.0 * 100.0
    }
}

impl std::ops::Mul<f32> for Percentage {
    type Output = f32;

    fn mul(self, rhs: f32) -> Self::Output {
        self.0 * rhs
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}
