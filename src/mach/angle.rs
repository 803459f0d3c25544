use std::f64::consts::PI;

/// How trigonometric functions interpret their argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleMode {
    Deg,
    Rad,
    Grad,
}

impl Default for AngleMode {
    fn default() -> AngleMode {
        AngleMode::Deg
    }
}

impl AngleMode {
    /// DEG → RAD → GRAD → DEG
    pub fn next(self) -> AngleMode {
        use AngleMode::*;
        match self {
            Deg => Rad,
            Rad => Grad,
            Grad => Deg,
        }
    }

    pub fn to_radians(self, angle: f64) -> f64 {
        use AngleMode::*;
        match self {
            Deg => angle * PI / 180.0,
            Grad => angle * PI / 200.0,
            Rad => angle,
        }
    }
}

impl std::fmt::Display for AngleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use AngleMode::*;
        match self {
            Deg => write!(f, "DEG"),
            Rad => write!(f, "RAD"),
            Grad => write!(f, "GRAD"),
        }
    }
}

impl std::str::FromStr for AngleMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEG" => Ok(AngleMode::Deg),
            "RAD" => Ok(AngleMode::Rad),
            "GRAD" => Ok(AngleMode::Grad),
            _ => Err(format!("unknown angle mode '{}', expected deg, rad or grad", s)),
        }
    }
}
