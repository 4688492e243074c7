// Copyright (c) 2020-2024 Via Technology Ltd. All Rights Reserved.

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The trig module contains types and functions for performing trigonometric
//! calculations.
//!
//! Angles are `Degrees` at the library boundary and `Radians` internally.
//! Every value passed to `asin` or `acos` is first clamped into a
//! `UnitNegRange`, so that floating point overshoot cannot produce a NaN.

#![allow(clippy::float_cmp)]

use super::{clamp, Validate};
use contracts::{debug_ensures, debug_invariant};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// The Degrees newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Degrees(pub f64);

/// The Radians newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Radians(pub f64);

impl Degrees {
    /// Test whether a value is a valid latitude.
    /// I.e. whether it lies in the range: -90.0 <= value <= 90.0
    #[must_use]
    pub fn is_latitude(value: f64) -> bool {
        (-90.0..=90.0).contains(&value)
    }

    /// Test whether a value is a valid longitude.
    /// I.e. whether it lies in the range: -180.0 <= value <= 180.0
    #[must_use]
    pub fn is_longitude(value: f64) -> bool {
        (-180.0..=180.0).contains(&value)
    }

    /// Test whether a value is a valid bearing.
    /// I.e. whether it lies in the range: 0.0 <= value <= 360.0
    #[must_use]
    pub fn is_bearing(value: f64) -> bool {
        (0.0..=360.0).contains(&value)
    }

    /// Normalise a Degrees value into the range: -180.0 < value <= 180.0
    /// # Examples
    /// ```
    /// use nav_sphere::trig::Degrees;
    ///
    /// assert_eq!(0.0, Degrees(-360.0).normalise().0);
    /// assert_eq!(180.0, Degrees(-180.0).normalise().0);
    /// assert_eq!(180.0, Degrees(180.0).normalise().0);
    /// assert_eq!(0.0, Degrees(360.0).normalise().0);
    /// assert_eq!(-170.0, Degrees(550.0).normalise().0);
    /// ```
    #[debug_ensures(ret.is_valid())]
    #[must_use]
    pub fn normalise(self) -> Self {
        let value = libm::remainder(self.0, 360.0);
        if value <= -180.0 {
            Self(value + 360.0)
        } else {
            Self(value)
        }
    }

    /// Normalise a Degrees value into a bearing: 0.0 <= value < 360.0
    /// # Examples
    /// ```
    /// use nav_sphere::trig::Degrees;
    ///
    /// assert_eq!(270.0, Degrees(-90.0).to_bearing().0);
    /// assert_eq!(0.0, Degrees(360.0).to_bearing().0);
    /// assert_eq!(180.0, Degrees(180.0).to_bearing().0);
    /// ```
    #[debug_ensures((0.0..360.0).contains(&ret.0))]
    #[must_use]
    pub fn to_bearing(self) -> Self {
        let value = libm::remainder(self.0, 360.0);
        if value < 0.0 {
            let bearing = value + 360.0;
            Self(if bearing < 360.0 { bearing } else { 0.0 })
        } else {
            Self(value + 0.0)
        }
    }

    /// Test whether a Degrees value is a valid latitude.
    /// I.e. whether it lies in the range: -90.0 <= value <= 90.0
    /// # Examples
    /// ```
    /// use nav_sphere::trig::Degrees;
    ///
    /// assert!(!Degrees(-90.0 * (1.0 + std::f64::EPSILON)).is_valid_latitude());
    /// assert!(Degrees(-90.0).is_valid_latitude());
    /// assert!(Degrees(90.0).is_valid_latitude());
    /// assert!(!(Degrees(90.0 * (1.0 + std::f64::EPSILON)).is_valid_latitude()));
    /// ```
    #[must_use]
    pub fn is_valid_latitude(&self) -> bool {
        Self::is_latitude(self.0)
    }
}

impl Validate for Degrees {
    /// Test whether a Degrees is valid.
    /// I.e. whether it lies in the range: -180.0 <= value <= 180.0
    fn is_valid(&self) -> bool {
        Self::is_longitude(self.0)
    }
}

impl From<Radians> for Degrees {
    /// Construct an angle in Degrees from an angle in Radians.
    /// # Examples
    /// ```
    /// use nav_sphere::trig::{Degrees, Radians};
    ///
    /// let arg = Radians(std::f64::consts::FRAC_PI_2);
    /// let answer = Degrees::from(arg);
    /// assert_eq!(90.0, answer.0);
    /// ```
    fn from(a: Radians) -> Self {
        Self(a.0.to_degrees())
    }
}

impl Neg for Degrees {
    type Output = Self;

    /// An implementation of Neg for Degrees, i.e. -angle.
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Add for Degrees {
    type Output = Self;

    /// Add two angles in Degrees, automatically wraps around +/- 180 degrees.
    /// # Examples
    /// ```
    /// use nav_sphere::trig::Degrees;
    ///
    /// let angle_120 = Degrees(120.0);
    /// let result = angle_120 + angle_120;
    /// assert_eq!(Degrees(-120.0), result);
    /// ```
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0).normalise()
    }
}

impl Sub for Degrees {
    type Output = Self;

    /// Subtract two angles in Degrees, automatically wraps around.
    /// # Examples
    /// ```
    /// use nav_sphere::trig::Degrees;
    ///
    /// let angle_m120 = Degrees(-120.0);
    /// let angle_120 = Degrees(120.0);
    /// let result = angle_m120 - angle_120;
    /// assert_eq!(angle_120, result);
    /// ```
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0).normalise()
    }
}

impl Radians {
    /// Normalise a Radians into the range:
    /// -std::f64::consts::PI < value <= std::f64::consts::PI
    /// # Examples
    /// ```
    /// use nav_sphere::trig::Radians;
    ///
    /// assert_eq!(0.0, Radians(-2.0 * std::f64::consts::PI).normalise().0);
    /// assert_eq!(std::f64::consts::PI, Radians(-std::f64::consts::PI).normalise().0);
    /// assert_eq!(std::f64::consts::PI, Radians(std::f64::consts::PI).normalise().0);
    /// assert_eq!(0.0, Radians(2.0 * std::f64::consts::PI).normalise().0);
    /// ```
    #[debug_ensures(ret.is_valid())]
    #[must_use]
    pub fn normalise(self) -> Self {
        let value = libm::remainder(self.0, std::f64::consts::TAU);
        if value <= -std::f64::consts::PI {
            Self(value + std::f64::consts::TAU)
        } else {
            Self(value)
        }
    }

    /// Normalise a Radians into a bearing: 0 <= value < 2 * PI
    /// # Examples
    /// ```
    /// use nav_sphere::trig::Radians;
    ///
    /// let west = Radians(-std::f64::consts::FRAC_PI_2).to_bearing();
    /// assert_eq!(3.0 * std::f64::consts::FRAC_PI_2, west.0);
    /// assert_eq!(0.0, Radians(-1.0e-20).to_bearing().0);
    /// ```
    #[debug_ensures((0.0..std::f64::consts::TAU).contains(&ret.0))]
    #[must_use]
    pub fn to_bearing(self) -> Self {
        let value = libm::remainder(self.0, std::f64::consts::TAU);
        if value < 0.0 {
            // a tiny negative value rounds up to TAU
            let bearing = value + std::f64::consts::TAU;
            Self(if bearing < std::f64::consts::TAU {
                bearing
            } else {
                0.0
            })
        } else {
            Self(value + 0.0)
        }
    }

    /// Test whether a Radians value is a valid latitude.
    /// I.e. whether it lies in the range: -PI/2 <= value <= PI/2
    #[must_use]
    pub fn is_valid_latitude(&self) -> bool {
        (-std::f64::consts::FRAC_PI_2..=std::f64::consts::FRAC_PI_2).contains(&self.0)
    }

    /// The sine of the angle.
    #[must_use]
    pub fn sin(self) -> f64 {
        libm::sin(self.0)
    }

    /// The cosine of the angle.
    #[must_use]
    pub fn cos(self) -> f64 {
        libm::cos(self.0)
    }

    /// The absolute value of the angle.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(libm::fabs(self.0))
    }
}

impl Validate for Radians {
    /// Test whether a Radians is valid.
    /// I.e. whether it lies in the range: -PI <= value <= PI
    /// # Examples
    /// ```
    /// use nav_sphere::trig::Radians;
    /// use nav_sphere::Validate;
    ///
    /// assert!(!Radians(-std::f64::consts::PI * (1.0 + std::f64::EPSILON)).is_valid());
    /// assert!(Radians(-std::f64::consts::PI).is_valid());
    /// assert!(Radians(std::f64::consts::PI).is_valid());
    /// assert!(!(Radians(std::f64::consts::PI * (1.0 + std::f64::EPSILON)).is_valid()));
    /// ```
    fn is_valid(&self) -> bool {
        (-std::f64::consts::PI..=std::f64::consts::PI).contains(&self.0)
    }
}

impl From<Degrees> for Radians {
    /// Construct an angle in Radians from an angle in Degrees.
    /// # Examples
    /// ```
    /// use nav_sphere::trig::{Degrees, Radians};
    ///
    /// let arg = Degrees(-90.0);
    /// let answer = Radians::from(arg);
    /// assert_eq!(-std::f64::consts::FRAC_PI_2, answer.0);
    /// ```
    fn from(a: Degrees) -> Self {
        Self(a.0.to_radians())
    }
}

impl Neg for Radians {
    type Output = Self;

    /// An implementation of Neg for Radians, i.e. -angle.
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Add for Radians {
    type Output = Self;

    /// Add a pair of angles in Radians, wraps around +/-PI.
    /// # Examples
    /// ```
    /// use nav_sphere::trig::Radians;
    ///
    /// let angle_120 = Radians(2.0 * std::f64::consts::FRAC_PI_3);
    /// let result = angle_120 + angle_120;
    /// // Note: wrapping is not precise...
    /// let delta_angle = libm::fabs(-2.0 * std::f64::consts::FRAC_PI_3 - result.0);
    /// assert!(delta_angle <= 4.0 * std::f64::EPSILON);
    /// ```
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0).normalise()
    }
}

impl Sub for Radians {
    type Output = Self;

    /// Subtract a pair of angles in Radians, wraps around +/-PI.
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0).normalise()
    }
}

/// The `UnitNegRange` newtype an f64.
/// A valid `UnitNegRange` value lies between -1.0 and +1.0 inclusive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct UnitNegRange(pub f64);

impl Validate for UnitNegRange {
    /// Test whether a `UnitNegRange` is valid.
    /// I.e. whether it lies in the range: -1.0 <= value <= 1.0
    /// # Examples
    /// ```
    /// use nav_sphere::trig::UnitNegRange;
    /// use nav_sphere::Validate;
    ///
    /// assert!(!UnitNegRange(-1.0 - std::f64::EPSILON).is_valid());
    /// assert!(UnitNegRange(-1.0).is_valid());
    /// assert!(UnitNegRange(1.0).is_valid());
    /// assert!(!(UnitNegRange(1.0 + std::f64::EPSILON).is_valid()));
    /// ```
    fn is_valid(&self) -> bool {
        (-1.0..=1.0).contains(&self.0)
    }
}

#[debug_invariant(self.is_valid())]
impl UnitNegRange {
    /// Clamp value into the valid range: -1.0 to +1.0 inclusive.
    /// # Examples
    /// ```
    /// use nav_sphere::trig::UnitNegRange;
    ///
    /// assert_eq!(-1.0, UnitNegRange::clamp(-1.0 - std::f64::EPSILON).0);
    /// assert_eq!(-1.0, UnitNegRange::clamp(-1.0).0);
    /// assert_eq!(-0.5, UnitNegRange::clamp(-0.5).0);
    /// assert_eq!(1.0, UnitNegRange::clamp(1.0).0);
    /// assert_eq!(1.0, UnitNegRange::clamp(1.0 + std::f64::EPSILON).0);
    /// ```
    #[must_use]
    pub fn clamp(value: f64) -> Self {
        Self(clamp(value, -1.0, 1.0))
    }

    /// The arc sine of the value, in the range: -PI/2 <= value <= PI/2
    #[must_use]
    pub fn asin(self) -> Radians {
        Radians(libm::asin(self.0))
    }
}

/// Calculate the square of the sine of half an angle, the haversine.
/// * `a` the angle.
#[debug_ensures((0.0..=1.0).contains(&ret))]
#[must_use]
pub fn haversine(a: Radians) -> f64 {
    let sin_half = libm::sin(0.5 * a.0);
    clamp(sin_half * sin_half, 0.0, 1.0)
}
