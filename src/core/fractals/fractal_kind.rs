use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised fractal kind \"{input}\", expected one of Mandelbrot, Julia, BurningShip")]
pub struct FractalKindParseError {
    pub input: String,
}

/// Selects the escape-time recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia, Self::BurningShip];

    /// The name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "BurningShip",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "Burning Ship",
        }
    }
}

impl FromStr for FractalKind {
    type Err = FractalKindParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == input)
            .ok_or_else(|| FractalKindParseError {
                input: input.to_owned(),
            })
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
