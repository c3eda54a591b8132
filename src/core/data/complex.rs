use std::ops::Add;

// hand-rolled rather than num-complex: the recurrences only need square and add
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self { real: 0.0, imag: 0.0 };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// `z²` expanded as `(x² - y²) + 2xy·i`.
    #[must_use]
    pub fn square(self) -> Self {
        Self {
            real: self.real * self.real - self.imag * self.imag,
            imag: 2.0 * self.real * self.imag,
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}
