//! Angles in degrees and radians.

use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

/// Represents an angle in some unit.
pub trait Angle: Copy {
    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> f32 {
        self.as_degrees().0
    }

    /// Returns the value of the angle in radians.
    fn radians(self) -> f32 {
        self.as_radians().0
    }
}

/// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Degrees(pub f32);

/// An angle in radians.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Radians(pub f32);

impl Degrees {
    /// Returns the equivalent angle in the half-open range (-180, 180].
    pub fn wrapped(self) -> Self {
        let mut value = self.0 % 360.0;
        if value > 180.0 {
            value -= 360.0;
        } else if value <= -180.0 {
            value += 360.0;
        }
        Self(value)
    }
}

impl Angle for Degrees {
    fn as_degrees(self) -> Degrees {
        self
    }

    fn as_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }
}

impl Angle for Radians {
    fn as_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }

    fn as_radians(self) -> Radians {
        self
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        rad.as_degrees()
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        deg.as_radians()
    }
}

macro_rules! impl_angle_arithmetic {
    ($t:ty) => {
        impl Add for $t {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $t {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f32> for $t {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Neg for $t {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }
    };
}

impl_angle_arithmetic!(Degrees);
impl_angle_arithmetic!(Radians);

impl_approx_eq_for_fields!(Degrees, [0]);
impl_approx_eq_for_fields!(Radians, [0]);

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn converting_between_degrees_and_radians_works() {
        assert_abs_diff_eq!(Radians::from(Degrees(180.0)), Radians(PI));
        assert_abs_diff_eq!(Degrees::from(Radians(FRAC_PI_2)), Degrees(90.0));
        assert_abs_diff_eq!(Degrees(45.0).radians(), PI / 4.0);
        assert_abs_diff_eq!(Radians(PI).degrees(), 180.0, epsilon = 1e-4);
    }

    #[test]
    fn wrapping_degrees_gives_half_open_range() {
        assert_abs_diff_eq!(Degrees(270.0).wrapped(), Degrees(-90.0));
        assert_abs_diff_eq!(Degrees(-180.0).wrapped(), Degrees(180.0));
        assert_abs_diff_eq!(Degrees(180.0).wrapped(), Degrees(180.0));
        assert_abs_diff_eq!(Degrees(725.0).wrapped(), Degrees(5.0), epsilon = 1e-4);
        assert_abs_diff_eq!(Degrees(-30.0).wrapped(), Degrees(-30.0));
    }

    #[test]
    fn angle_arithmetic_works() {
        assert_eq!(Degrees(30.0) + Degrees(15.0), Degrees(45.0));
        assert_eq!(Degrees(30.0) - Degrees(15.0), Degrees(15.0));
        assert_eq!(Radians(1.0) * 2.0, Radians(2.0));
        assert_eq!(-Degrees(10.0), Degrees(-10.0));
    }
}
